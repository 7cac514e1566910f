/*
[INPUT]:  Caller-supplied identifiers and secrets
[OUTPUT]: Pass/fail verdicts before any network I/O
[POS]:    Validation layer - identifier format checks
[UPDATE]: When identifier formats change
*/

use uuid::Uuid;

use crate::http::{LnurlError, Result};

/// Length of the canonical hyphenated UUID textual form
const CANONICAL_UUID_LEN: usize = 36;

/// Check whether a string is in the canonical UUID textual form
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (hex digits, case-insensitive).
///
/// The length guard rejects the simple, braced, and URN forms that
/// `Uuid::try_parse` would otherwise accept.
pub fn is_canonical_uuid(value: &str) -> bool {
    value.len() == CANONICAL_UUID_LEN && Uuid::try_parse(value).is_ok()
}

/// Require a non-empty, canonical-form identifier, naming the offending
/// field in the error message.
pub(crate) fn require_canonical_uuid(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LnurlError::validation(format!("{field} cannot be empty")));
    }

    if !is_canonical_uuid(value) {
        return Err(LnurlError::validation(format!(
            "{field} is invalid: must be in format of xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
        )));
    }

    Ok(())
}
