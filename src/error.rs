//! Error types for the fallible parts of the crate.
//!
//! The predicates themselves are total; only parsing a parity label can fail.

use thiserror::Error;

/// Errors that can occur when working with parity values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParityError {
    /// The string is not a known parity label
    #[error("Unknown parity label '{label}' (expected 'odd' or 'even')")]
    UnknownLabel { label: String },
}

pub type Result<T> = std::result::Result<T, ParityError>;
