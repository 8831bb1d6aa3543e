//! Fee policy: proportional fee split in basis points.
//!
//! Only variant-A deployments carry a fee policy. The rate is bounded by
//! [`constants::MAX_FEE_BASIS_POINTS`] (inclusive) and the recipient must be
//! a non-zero account. Truncation from integer division always belongs to
//! the fee, never the net: `fee + net == amount` exactly.

use serde::{Deserialize, Serialize};

use crate::{constants, AccountId, GatewayError, Result, TokenAmount};

/// The outcome of splitting a settlement amount into fee and net parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// The fee portion, forwarded to the fee recipient.
    pub fee: TokenAmount,
    /// The net portion, forwarded to the payment recipient.
    pub net: TokenAmount,
}

/// Fee configuration for a variant-A deployment.
///
/// Mutable only through the owner-gated setters on the gateway. Both setters
/// re-validate, so an in-range rate and a non-zero recipient hold at all
/// times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePolicy {
    basis_points: u16,
    recipient: AccountId,
}

impl FeePolicy {
    /// Create a fee policy.
    ///
    /// # Errors
    /// - [`GatewayError::InvalidFee`] if `basis_points > 1000`
    /// - [`GatewayError::InvalidRecipient`] if `recipient` is the zero account
    pub fn new(basis_points: u16, recipient: AccountId) -> Result<Self> {
        Self::check_rate(basis_points)?;
        Self::check_recipient(recipient)?;
        Ok(Self {
            basis_points,
            recipient,
        })
    }

    /// Current fee rate in basis points.
    #[must_use]
    pub fn basis_points(&self) -> u16 {
        self.basis_points
    }

    /// Current fee recipient.
    #[must_use]
    pub fn recipient(&self) -> AccountId {
        self.recipient
    }

    /// Update the fee rate.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidFee`] if `basis_points > 1000`.
    pub fn set_basis_points(&mut self, basis_points: u16) -> Result<()> {
        Self::check_rate(basis_points)?;
        self.basis_points = basis_points;
        Ok(())
    }

    /// Update the fee recipient.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidRecipient`] if `recipient` is zero.
    pub fn set_recipient(&mut self, recipient: AccountId) -> Result<()> {
        Self::check_recipient(recipient)?;
        self.recipient = recipient;
        Ok(())
    }

    /// Split `amount` into `fee = floor(amount * basis_points / 10000)` and
    /// `net = amount - fee`.
    ///
    /// Computed as `q*b + (r*b)/10000` with `amount = q*10000 + r`, which is
    /// the exact floor without intermediate overflow for any `u128` amount.
    #[must_use]
    pub fn split(&self, amount: TokenAmount) -> FeeSplit {
        let a = amount.value();
        let b = u128::from(self.basis_points);
        let scale = constants::BASIS_POINT_SCALE;
        let fee = (a / scale) * b + (a % scale) * b / scale;
        FeeSplit {
            fee: TokenAmount::new(fee),
            net: TokenAmount::new(a - fee),
        }
    }

    fn check_rate(basis_points: u16) -> Result<()> {
        if basis_points > constants::MAX_FEE_BASIS_POINTS {
            return Err(GatewayError::InvalidFee { basis_points });
        }
        Ok(())
    }

    fn check_recipient(recipient: AccountId) -> Result<()> {
        if recipient.is_zero() {
            return Err(GatewayError::InvalidRecipient);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(bps: u16) -> FeePolicy {
        FeePolicy::new(bps, AccountId::new()).unwrap()
    }

    #[test]
    fn one_percent_of_100() {
        let split = policy(100).split(TokenAmount::new(100));
        assert_eq!(split.fee, TokenAmount::new(1));
        assert_eq!(split.net, TokenAmount::new(99));
    }

    #[test]
    fn truncation_belongs_to_fee() {
        // 1% of 99 = 0.99, floors to 0; net keeps the remainder.
        let split = policy(100).split(TokenAmount::new(99));
        assert_eq!(split.fee, TokenAmount::ZERO);
        assert_eq!(split.net, TokenAmount::new(99));
    }

    #[test]
    fn zero_rate_takes_nothing() {
        let split = policy(0).split(TokenAmount::new(12_345));
        assert_eq!(split.fee, TokenAmount::ZERO);
        assert_eq!(split.net, TokenAmount::new(12_345));
    }

    #[test]
    fn max_rate_boundary_inclusive() {
        assert!(FeePolicy::new(1000, AccountId::new()).is_ok());
        let err = FeePolicy::new(1001, AccountId::new()).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::InvalidFee { basis_points: 1001 }
        ));
    }

    #[test]
    fn zero_recipient_rejected() {
        let err = FeePolicy::new(100, AccountId::ZERO).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRecipient));

        let mut policy = policy(100);
        let err = policy.set_recipient(AccountId::ZERO).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRecipient));
    }

    #[test]
    fn setters_validate() {
        let mut policy = policy(100);
        assert!(policy.set_basis_points(1000).is_ok());
        assert_eq!(policy.basis_points(), 1000);
        assert!(policy.set_basis_points(1001).is_err());
        assert_eq!(policy.basis_points(), 1000, "failed update must not apply");
    }

    #[test]
    fn split_reconstructs_amount_exactly() {
        // fee + net == amount for every rate and a spread of awkward amounts.
        let amounts = [
            0u128,
            1,
            7,
            99,
            100,
            9_999,
            10_000,
            10_001,
            123_456_789,
            u128::MAX / 10_000,
            u128::MAX,
        ];
        for bps in 0..=1000u16 {
            let policy = policy(bps);
            for &a in &amounts {
                let amount = TokenAmount::new(a);
                let split = policy.split(amount);
                assert_eq!(
                    split.fee + split.net,
                    amount,
                    "bps={bps} amount={a}: fee {} + net {} != amount",
                    split.fee,
                    split.net
                );
            }
        }
    }

    #[test]
    fn split_matches_naive_formula_when_no_overflow() {
        for bps in [0u16, 1, 37, 100, 250, 999, 1000] {
            let policy = policy(bps);
            for a in [1u128, 10, 99, 100, 12_345, 1_000_000] {
                let split = policy.split(TokenAmount::new(a));
                let naive = a * u128::from(bps) / 10_000;
                assert_eq!(split.fee.value(), naive, "bps={bps} amount={a}");
            }
        }
    }

    #[test]
    fn serde_roundtrip() {
        let policy = policy(250);
        let json = serde_json::to_string(&policy).unwrap();
        let back: FeePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }
}
