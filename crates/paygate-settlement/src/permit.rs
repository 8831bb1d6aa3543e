//! Permit adapter — establishes an allowance immediately before settlement.
//!
//! A thin forwarding layer over the token ledger's permit primitive: no
//! domain logic lives here, and ledger failures (`PermitExpired`,
//! `InvalidSignature`) propagate verbatim. The engine calls it right before
//! the transfer step, so the allowance just granted is exactly what that one
//! settlement consumes. A permit whose `value` or `spender` doesn't match
//! the settlement is a caller error; it surfaces at the transfer step's
//! allowance check, not here.

use paygate_ledger::TokenLedger;
use paygate_types::{PermitAuthorization, Result};

/// Convert a signed authorization into a spendable allowance on the ledger.
pub fn apply<L: TokenLedger>(ledger: &mut L, authorization: &PermitAuthorization) -> Result<()> {
    ledger.permit(authorization)?;
    tracing::debug!(
        owner = %authorization.owner,
        value = %authorization.value,
        "allowance established via permit"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use paygate_ledger::InMemoryToken;
    use paygate_types::{AccountId, GatewayError, TokenAmount};

    use super::*;

    #[test]
    fn apply_grants_allowance() {
        let mut token = InMemoryToken::new();
        let (owner, key) = token.funded_keypair(TokenAmount::new(100));
        let spender = AccountId::new();

        let permit = PermitAuthorization::sign(
            &key,
            owner,
            spender,
            TokenAmount::new(100),
            token.nonce_of(owner),
            Utc::now() + Duration::hours(1),
        );

        apply(&mut token, &permit).unwrap();
        assert_eq!(token.allowance(owner, spender), TokenAmount::new(100));
    }

    #[test]
    fn ledger_failures_propagate_verbatim() {
        let mut token = InMemoryToken::new();
        let (owner, key) = token.funded_keypair(TokenAmount::new(100));

        let expired = PermitAuthorization::sign(
            &key,
            owner,
            AccountId::new(),
            TokenAmount::new(100),
            0,
            Utc::now() - Duration::seconds(1),
        );
        let err = apply(&mut token, &expired).unwrap_err();
        assert!(matches!(err, GatewayError::PermitExpired { .. }));
    }
}
