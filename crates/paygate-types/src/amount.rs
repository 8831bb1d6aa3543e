//! Token amounts in base units.
//!
//! Amounts are unsigned integers — never floats, never decimals. Every fee
//! split must reconstruct the original amount exactly, so all arithmetic here
//! is integer arithmetic.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// A fungible-token amount in base units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> u128 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked subtraction. `None` on underflow.
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for TokenAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for TokenAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for TokenAmount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for TokenAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero() {
        assert!(TokenAmount::ZERO.is_zero());
        assert!(!TokenAmount::new(1).is_zero());
    }

    #[test]
    fn arithmetic() {
        let a = TokenAmount::new(100);
        let b = TokenAmount::new(30);
        assert_eq!(a + b, TokenAmount::new(130));
        assert_eq!(a - b, TokenAmount::new(70));

        let mut c = a;
        c += b;
        assert_eq!(c, TokenAmount::new(130));
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn checked_sub_underflow() {
        let a = TokenAmount::new(10);
        let b = TokenAmount::new(20);
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(TokenAmount::new(10)));
    }

    #[test]
    fn sum_over_iterator() {
        let total: TokenAmount = [1u128, 2, 3].into_iter().map(TokenAmount::new).sum();
        assert_eq!(total, TokenAmount::new(6));
    }

    #[test]
    fn serde_roundtrip() {
        let amount = TokenAmount::new(123_456_789);
        let json = serde_json::to_string(&amount).unwrap();
        let back: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, back);
    }
}
