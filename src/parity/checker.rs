use std::num::Wrapping;

use super::Parity;

/// Integer types whose parity can be checked.
///
/// Implementors supply [`is_odd`](ParityCheck::is_odd) only. Leave
/// [`is_even`](ParityCheck::is_even) and [`parity`](ParityCheck::parity) as
/// provided so they stay derived from `is_odd`.
pub trait ParityCheck: Sized {
    /// Returns true if `self` has a nonzero remainder when divided by 2.
    fn is_odd(self) -> bool;

    /// Returns the negation of [`is_odd`](ParityCheck::is_odd).
    #[inline]
    fn is_even(self) -> bool {
        !self.is_odd()
    }

    /// Classifies `self` as [`Parity::Odd`] or [`Parity::Even`].
    #[inline]
    fn parity(self) -> Parity {
        Parity::from(self.is_odd())
    }
}

// `%` truncates toward zero, so the remainder takes the dividend's sign:
// -3 % 2 == -1. Comparing against zero covers both signs. `MIN % 2` cannot
// overflow; only `MIN % -1` does.
macro_rules! impl_parity_check {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParityCheck for $ty {
                #[inline]
                fn is_odd(self) -> bool {
                    self % 2 != 0
                }
            }

            impl ParityCheck for Wrapping<$ty> {
                #[inline]
                fn is_odd(self) -> bool {
                    self.0.is_odd()
                }
            }
        )*
    };
}

impl_parity_check!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: ParityCheck + Copy> ParityCheck for &T {
    #[inline]
    fn is_odd(self) -> bool {
        (*self).is_odd()
    }
}

/// Returns true if `n` is odd.
///
/// Negative odd numbers are odd: `is_odd(-3)` is true.
#[inline]
pub fn is_odd<T: ParityCheck>(n: T) -> bool {
    n.is_odd()
}

/// Returns true if `n` is even. Always exactly `!is_odd(n)`.
#[inline]
pub fn is_even<T: ParityCheck>(n: T) -> bool {
    !is_odd(n)
}

/// Stateless parity checker.
///
/// A zero-sized handle over [`is_odd`] and [`is_even`] for code that wants
/// to hold or inject a checker value rather than call free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParityChecker;

impl ParityChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    pub fn is_odd<T: ParityCheck>(&self, n: T) -> bool {
        is_odd(n)
    }

    pub fn is_even<T: ParityCheck>(&self, n: T) -> bool {
        !self.is_odd(n)
    }

    /// Classify `n` as odd or even.
    pub fn classify<T: ParityCheck>(&self, n: T) -> Parity {
        Parity::from(self.is_odd(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_even() {
        assert!(!is_odd(0));
        assert!(is_even(0));
    }

    #[test]
    fn small_values() {
        assert!(is_odd(1));
        assert!(!is_odd(2));
        assert!(is_odd(-3));
        assert!(is_even(-4));
    }

    #[test]
    fn negative_odd_uses_truncating_remainder() {
        assert_eq!(-3_i32 % 2, -1);
        assert!(is_odd(-3_i32));
        assert!(is_odd(-1_i64));
        assert!(is_odd(i8::MIN + 1));
    }

    #[test]
    fn extremes_do_not_panic() {
        assert!(is_even(i8::MIN));
        assert!(is_even(i16::MIN));
        assert!(is_even(i32::MIN));
        assert!(is_even(i64::MIN));
        assert!(is_even(i128::MIN));
        assert!(is_even(isize::MIN));

        assert!(is_odd(i8::MAX));
        assert!(is_odd(i32::MAX));
        assert!(is_odd(i128::MAX));
        assert!(is_odd(u8::MAX));
        assert!(is_odd(u16::MAX));
        assert!(is_odd(u32::MAX));
        assert!(is_odd(u64::MAX));
        assert!(is_odd(u128::MAX));
        assert!(is_odd(usize::MAX));
    }

    #[test]
    fn wrapping_and_references() {
        assert!(is_odd(Wrapping(7_u32)));
        assert!(is_even(Wrapping(-8_i16)));

        let n = 11_i64;
        assert!(is_odd(&n));
        assert_eq!((&n).parity(), Parity::Odd);
    }

    #[test]
    fn trait_methods_agree_with_free_functions() {
        for n in -50_i32..=50 {
            assert_eq!(n.is_odd(), is_odd(n));
            assert_eq!(n.is_even(), is_even(n));
            assert_eq!(n.parity().is_odd(), is_odd(n));
        }
    }

    #[test]
    fn checker_delegates() {
        let checker = ParityChecker::new();
        assert!(checker.is_odd(9_u8));
        assert!(checker.is_even(10_u8));
        assert_eq!(checker.classify(-5_i32), Parity::Odd);
        assert_eq!(checker.classify(0_usize), Parity::Even);
        assert_eq!(checker, ParityChecker::default());
    }
}
