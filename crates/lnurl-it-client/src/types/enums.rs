/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Lifecycle label of a withdrawal as reported by the service
///
/// The client never drives transitions itself, except setting `Ready` right
/// after a successful create. The service encodes the field either as the
/// lowercase label or as a numeric code (0 = ready, 1 = scanned,
/// 2 = callback); anything unrecognized becomes `Unknown` instead of a
/// decode failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalState {
    /// Just created, no wallet has acted on it
    Ready,
    /// A wallet has retrieved the withdrawal parameters
    Scanned,
    /// The payout callback has been invoked
    Callback,
    /// Any state label this client does not recognize
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for WithdrawalState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Ok(match &value {
            Value::String(label) => match label.as_str() {
                "ready" => WithdrawalState::Ready,
                "scanned" => WithdrawalState::Scanned,
                "callback" => WithdrawalState::Callback,
                _ => WithdrawalState::Unknown,
            },
            Value::Number(code) => match code.as_u64() {
                Some(0) => WithdrawalState::Ready,
                Some(1) => WithdrawalState::Scanned,
                Some(2) => WithdrawalState::Callback,
                _ => WithdrawalState::Unknown,
            },
            _ => WithdrawalState::Unknown,
        })
    }
}

impl fmt::Display for WithdrawalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WithdrawalState::Ready => "ready",
            WithdrawalState::Scanned => "scanned",
            WithdrawalState::Callback => "callback",
            WithdrawalState::Unknown => "unknown",
        };
        f.write_str(label)
    }
}
