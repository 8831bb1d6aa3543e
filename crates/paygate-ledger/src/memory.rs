//! In-memory reference implementation of [`TokenLedger`].
//!
//! Accounts that intend to redeem permits register an ed25519 verifying key;
//! `permit` checks the deadline, verifies the signature over the canonical
//! payload with the owner's **current** nonce, then grants the allowance and
//! advances the nonce. A consumed permit can never verify again: the nonce
//! baked into its payload is stale.

use std::collections::HashMap;

use chrono::Utc;
use ed25519_dalek::{Signature, VerifyingKey};
use paygate_types::{
    AccountId, GatewayError, PermitAuthorization, Result, TokenAmount,
};

use crate::token::TokenLedger;

/// An in-memory fungible-token ledger with the permit extension.
#[derive(Debug, Default)]
pub struct InMemoryToken {
    /// Per-account balances.
    balances: HashMap<AccountId, TokenAmount>,
    /// Allowances keyed by `(owner, spender)`.
    allowances: HashMap<(AccountId, AccountId), TokenAmount>,
    /// Per-owner permit nonces.
    nonces: HashMap<AccountId, u64>,
    /// Registered verifying keys for permit owners.
    keys: HashMap<AccountId, VerifyingKey>,
}

impl InMemoryToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account` out of thin air.
    pub fn mint(&mut self, account: AccountId, amount: TokenAmount) {
        *self.balances.entry(account).or_insert(TokenAmount::ZERO) += amount;
    }

    /// Register the verifying key that `account`'s permits are checked
    /// against. Overwrites any previous key.
    pub fn register_key(&mut self, account: AccountId, key: VerifyingKey) {
        self.keys.insert(account, key);
    }

    /// Grant an allowance directly (the approval path, no signature).
    pub fn approve(&mut self, owner: AccountId, spender: AccountId, value: TokenAmount) {
        self.allowances.insert((owner, spender), value);
    }

    fn debit(&mut self, account: AccountId, value: TokenAmount) -> Result<()> {
        let balance = self.balance_of(account);
        let remaining = balance
            .checked_sub(value)
            .ok_or(GatewayError::InsufficientBalance {
                needed: value,
                available: balance,
            })?;
        self.balances.insert(account, remaining);
        Ok(())
    }

    fn credit(&mut self, account: AccountId, value: TokenAmount) {
        *self.balances.entry(account).or_insert(TokenAmount::ZERO) += value;
    }
}

impl TokenLedger for InMemoryToken {
    fn balance_of(&self, account: AccountId) -> TokenAmount {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: AccountId, spender: AccountId) -> TokenAmount {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn nonce_of(&self, owner: AccountId) -> u64 {
        self.nonces.get(&owner).copied().unwrap_or_default()
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, value: TokenAmount) -> Result<()> {
        self.debit(from, value)?;
        self.credit(to, value);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        value: TokenAmount,
    ) -> Result<()> {
        let allowed = self.allowance(owner, spender);
        let remaining = allowed
            .checked_sub(value)
            .ok_or(GatewayError::InsufficientAllowance {
                needed: value,
                available: allowed,
            })?;

        self.debit(owner, value)?;
        self.allowances.insert((owner, spender), remaining);
        self.credit(to, value);
        Ok(())
    }

    fn permit(&mut self, authorization: &PermitAuthorization) -> Result<()> {
        if authorization.is_expired_at(Utc::now()) {
            return Err(GatewayError::PermitExpired {
                deadline: authorization.deadline,
            });
        }

        // The signature must cover the owner's *current* nonce; a stale or
        // future nonce makes the payload unverifiable.
        if authorization.nonce != self.nonce_of(authorization.owner) {
            return Err(GatewayError::InvalidSignature);
        }

        let key = self
            .keys
            .get(&authorization.owner)
            .ok_or(GatewayError::InvalidSignature)?;
        let signature = Signature::from_slice(&authorization.signature)
            .map_err(|_| GatewayError::InvalidSignature)?;
        key.verify_strict(&authorization.signing_payload(), &signature)
            .map_err(|_| GatewayError::InvalidSignature)?;

        *self.nonces.entry(authorization.owner).or_insert(0) += 1;
        self.allowances.insert(
            (authorization.owner, authorization.spender),
            authorization.value,
        );
        tracing::debug!(
            owner = %authorization.owner,
            spender = %authorization.spender,
            value = %authorization.value,
            "permit consumed"
        );
        Ok(())
    }
}

/// Test helpers. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl InMemoryToken {
    /// Create a funded account with a registered signing key.
    pub fn funded_keypair(
        &mut self,
        amount: TokenAmount,
    ) -> (AccountId, ed25519_dalek::SigningKey) {
        use rand::rngs::OsRng;
        let key = ed25519_dalek::SigningKey::generate(&mut OsRng);
        let account = AccountId::new();
        self.register_key(account, key.verifying_key());
        self.mint(account, amount);
        (account, key)
    }
}
