//! Error types for the PayGate settlement processor.
//!
//! All errors use the `PG_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Payment request errors
//! - 2xx: Fee policy errors
//! - 3xx: Permit errors
//! - 4xx: Ledger / transfer errors
//! - 5xx: Admin errors
//! - 9xx: General / configuration errors
//!
//! Every failure mode is a rejected request, not a corrupted-state condition:
//! callers can branch on the variant (retry with a fresh permit on
//! [`GatewayError::PermitExpired`], abandon on
//! [`GatewayError::AlreadyProcessed`], and so on).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{OrderId, TokenAmount};

/// Central error enum for all PayGate operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    // =================================================================
    // Payment Request Errors (1xx)
    // =================================================================
    /// The settlement amount was zero.
    #[error("PG_ERR_100: Zero settlement amount")]
    ZeroAmount,

    /// The payment (or fee) recipient was the zero account.
    #[error("PG_ERR_101: Invalid recipient: zero account")]
    InvalidRecipient,

    /// The order was already settled (at-most-once guard).
    #[error("PG_ERR_102: Order already processed: {0}")]
    AlreadyProcessed(OrderId),

    /// A required account was the zero account.
    #[error("PG_ERR_103: Zero address for {field}")]
    ZeroAddress { field: String },

    // =================================================================
    // Fee Policy Errors (2xx)
    // =================================================================
    /// The fee rate exceeds the maximum (1000 basis points).
    #[error("PG_ERR_200: Invalid fee: {basis_points} basis points exceeds maximum")]
    InvalidFee { basis_points: u16 },

    /// Fee administration was attempted on a deployment without a fee policy.
    #[error("PG_ERR_201: No fee policy configured for this deployment")]
    FeePolicyDisabled,

    // =================================================================
    // Permit Errors (3xx)
    // =================================================================
    /// The permit deadline has passed.
    #[error("PG_ERR_300: Permit expired at {deadline}")]
    PermitExpired { deadline: DateTime<Utc> },

    /// The permit signature did not verify for the owner's key and the
    /// ledger's current nonce.
    #[error("PG_ERR_301: Permit signature verification failed")]
    InvalidSignature,

    // =================================================================
    // Ledger / Transfer Errors (4xx)
    // =================================================================
    /// Not enough balance on the ledger to perform the transfer.
    #[error("PG_ERR_400: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        needed: TokenAmount,
        available: TokenAmount,
    },

    /// Not enough allowance granted to the spender.
    #[error("PG_ERR_401: Insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance {
        needed: TokenAmount,
        available: TokenAmount,
    },

    /// The underlying ledger rejected a fund movement. Wraps the ledger's
    /// own failure so settlement callers see a single transfer-failure kind.
    #[error("PG_ERR_402: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // =================================================================
    // Admin Errors (5xx)
    // =================================================================
    /// The caller is not the administrative owner.
    #[error("PG_ERR_500: Caller is not the owner")]
    NotOwner,

    // =================================================================
    // General / Configuration (9xx)
    // =================================================================
    /// Configuration error (invalid gateway config, bad construction args).
    #[error("PG_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

impl GatewayError {
    /// Wrap a ledger failure into the transfer-failure kind surfaced by the
    /// settlement engine.
    #[must_use]
    pub fn transfer_failed(source: &GatewayError) -> Self {
        Self::TransferFailed {
            reason: source.to_string(),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GatewayError::AlreadyProcessed(OrderId::from_label("x"));
        let msg = format!("{err}");
        assert!(msg.starts_with("PG_ERR_102"), "Got: {msg}");
    }

    #[test]
    fn insufficient_balance_display() {
        let err = GatewayError::InsufficientBalance {
            needed: TokenAmount::new(100),
            available: TokenAmount::new(50),
        };
        let msg = format!("{err}");
        assert!(msg.contains("PG_ERR_400"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn transfer_failed_wraps_ledger_error() {
        let ledger_err = GatewayError::InsufficientAllowance {
            needed: TokenAmount::new(10),
            available: TokenAmount::ZERO,
        };
        let wrapped = GatewayError::transfer_failed(&ledger_err);
        let msg = format!("{wrapped}");
        assert!(msg.starts_with("PG_ERR_402"), "Got: {msg}");
        assert!(msg.contains("PG_ERR_401"), "Got: {msg}");
    }

    #[test]
    fn all_errors_have_pg_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GatewayError::ZeroAmount),
            Box::new(GatewayError::InvalidRecipient),
            Box::new(GatewayError::NotOwner),
            Box::new(GatewayError::FeePolicyDisabled),
            Box::new(GatewayError::InvalidSignature),
            Box::new(GatewayError::Configuration("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("PG_ERR_"),
                "Error missing PG_ERR_ prefix: {msg}"
            );
        }
    }
}
