use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParityCheck;
use crate::error::{ParityError, Result};

/// The parity of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify `n`.
    pub fn of<T: ParityCheck>(n: T) -> Self {
        n.parity()
    }

    pub fn is_odd(&self) -> bool {
        matches!(self, Parity::Odd)
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Canonical lowercase label, also used by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }
}

/// `true` means odd, matching the result of `is_odd`.
impl From<bool> for Parity {
    fn from(odd: bool) -> Self {
        if odd {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parity {
    type Err = ParityError;

    /// Parse a parity label. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("odd") {
            Ok(Parity::Odd)
        } else if label.eq_ignore_ascii_case("even") {
            Ok(Parity::Even)
        } else {
            tracing::debug!(label = %s, "Rejected unknown parity label");
            Err(ParityError::UnknownLabel {
                label: s.to_string(),
            })
        }
    }
}
