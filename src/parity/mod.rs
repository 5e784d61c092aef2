//! Parity classification for the primitive integer types.
//!
//! `is_odd` is the only place the parity rule lives. Every "even" answer in
//! this module is the negation of an "odd" answer, so the two predicates can
//! never disagree.

mod checker;
mod value;

pub use checker::{is_even, is_odd, ParityCheck, ParityChecker};
pub use value::Parity;
