//! Integer parity predicates.
//!
//! [`is_odd`] is the single source of truth for the parity rule;
//! [`is_even`] is its negation and never computes parity on its own.
//!
//! ```
//! use parity_check::{is_even, is_odd, Parity};
//!
//! assert!(is_odd(-3));
//! assert!(is_even(0u8));
//! assert_eq!(Parity::of(7_i64), Parity::Odd);
//! ```

pub mod error;
pub mod logging;
pub mod parity;

pub use error::{ParityError, Result};
pub use parity::{is_even, is_odd, Parity, ParityCheck, ParityChecker};
