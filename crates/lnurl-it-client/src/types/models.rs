/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::WithdrawalState;

/// A server-side claimable payout record
///
/// Every field defaults when absent from a response body, mirroring how the
/// service omits fields it considers implied (the create response carries no
/// state, the get response carries no ID).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Canonical-UUID identifier of the record
    #[serde(rename = "ID", default)]
    pub id: String,
    /// Lifecycle label, reported by the service
    #[serde(rename = "state", alias = "State", default)]
    pub state: WithdrawalState,
    /// Encoded claim URI handed to the end-user wallet; opaque
    #[serde(rename = "LNURL", default)]
    pub lnurl: String,
}
