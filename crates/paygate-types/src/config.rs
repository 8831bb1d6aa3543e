//! Configuration for a PayGate deployment.

use serde::{Deserialize, Serialize};

use crate::{AccountId, FeePolicy, GatewayError, Result};

/// Configuration for a single gateway deployment.
///
/// `fee` selects the deployment variant: `Some` stores a fee policy whose
/// recipient receives the fee cut of every settlement (variant A); `None`
/// forwards the full amount to the per-request recipient (variant B).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// The processor's own ledger account. Funds pass through it within a
    /// single settlement call and never rest there.
    pub gateway_account: AccountId,
    /// The administrative owner, fixed for the lifetime of the deployment.
    pub owner: AccountId,
    /// Optional fee policy (variant A). `None` means variant B.
    pub fee: Option<FeePolicy>,
}

impl GatewayConfig {
    /// Variant-B configuration: no stored fee.
    #[must_use]
    pub fn new(gateway_account: AccountId, owner: AccountId) -> Self {
        Self {
            gateway_account,
            owner,
            fee: None,
        }
    }

    /// Variant-A configuration: fee split on every settlement.
    #[must_use]
    pub fn with_fee(gateway_account: AccountId, owner: AccountId, fee: FeePolicy) -> Self {
        Self {
            gateway_account,
            owner,
            fee: Some(fee),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`GatewayError::ZeroAddress`] if the gateway account or the
    /// owner is the zero account, and [`GatewayError::InvalidRecipient`] if
    /// the fee policy pays fees into the gateway account itself. A present
    /// fee policy is otherwise valid by construction.
    pub fn validate(&self) -> Result<()> {
        if self.gateway_account.is_zero() {
            return Err(GatewayError::ZeroAddress {
                field: "gateway_account".into(),
            });
        }
        if self.owner.is_zero() {
            return Err(GatewayError::ZeroAddress {
                field: "owner".into(),
            });
        }
        // Fees routed back to the processor would rest in its custody.
        if let Some(fee) = &self.fee {
            if fee.recipient() == self.gateway_account {
                return Err(GatewayError::InvalidRecipient);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = GatewayConfig::new(AccountId::new(), AccountId::new());
        config.validate().unwrap();
        assert!(config.fee.is_none());
    }

    #[test]
    fn with_fee_selects_variant_a() {
        let fee = FeePolicy::new(100, AccountId::new()).unwrap();
        let config = GatewayConfig::with_fee(AccountId::new(), AccountId::new(), fee);
        config.validate().unwrap();
        assert_eq!(config.fee.unwrap().basis_points(), 100);
    }

    #[test]
    fn zero_accounts_rejected() {
        let config = GatewayConfig::new(AccountId::ZERO, AccountId::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GatewayError::ZeroAddress { field } if field == "gateway_account"));

        let config = GatewayConfig::new(AccountId::new(), AccountId::ZERO);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GatewayError::ZeroAddress { field } if field == "owner"));
    }

    #[test]
    fn fee_recipient_must_differ_from_gateway_account() {
        let gateway_account = AccountId::new();
        let fee = FeePolicy::new(100, gateway_account).unwrap();
        let config = GatewayConfig::with_fee(gateway_account, AccountId::new(), fee);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRecipient));
    }

    #[test]
    fn serde_roundtrip() {
        let fee = FeePolicy::new(250, AccountId::new()).unwrap();
        let config = GatewayConfig::with_fee(AccountId::new(), AccountId::new(), fee);
        let json = serde_json::to_string(&config).unwrap();
        let back: GatewayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.gateway_account, back.gateway_account);
        assert_eq!(config.owner, back.owner);
        assert_eq!(config.fee, back.fee);
    }
}
