/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public lnurl.it client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;
pub mod validate;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    LnurlClient,
    LnurlError,
    Result,
};

// Re-export all types
pub use types::*;

// Re-export the identifier predicate
pub use validate::is_canonical_uuid;
