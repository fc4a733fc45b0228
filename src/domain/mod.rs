//! Domain types shared across PrivGuard.
//!
//! - **Error types** ([`PrivGuardError`])
//! - **Result type alias** ([`Result`])

pub mod errors;
pub mod result;

pub use errors::PrivGuardError;
pub use result::Result;
