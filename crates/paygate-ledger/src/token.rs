//! The token ledger contract consumed by the settlement engine.
//!
//! The ledger is an external collaborator: the engine depends on it through
//! this trait only, so the real fungible-token backend can be substituted
//! without touching settlement logic. The permit primitive is the
//! "authorize-then-transfer" capability — signature recovery and nonce
//! bookkeeping live behind it, not in the engine.

use paygate_types::{AccountId, PermitAuthorization, Result, TokenAmount};

/// A fungible-token ledger: balances, allowances, transfers, and the
/// one-shot permit extension.
pub trait TokenLedger {
    /// Balance held by `account`.
    fn balance_of(&self, account: AccountId) -> TokenAmount;

    /// Remaining allowance granted by `owner` to `spender`.
    fn allowance(&self, owner: AccountId, spender: AccountId) -> TokenAmount;

    /// The owner's current permit nonce. Monotonically increasing; each
    /// consumed permit advances it by one.
    fn nonce_of(&self, owner: AccountId) -> u64;

    /// Push `value` tokens from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`paygate_types::GatewayError::InsufficientBalance`] if `from`
    /// holds less than `value`.
    fn transfer(&mut self, from: AccountId, to: AccountId, value: TokenAmount) -> Result<()>;

    /// Pull `value` tokens from `owner` to `to`, consuming allowance that
    /// `owner` previously granted to `spender`.
    ///
    /// # Errors
    /// - [`paygate_types::GatewayError::InsufficientAllowance`] if the
    ///   allowance is less than `value`
    /// - [`paygate_types::GatewayError::InsufficientBalance`] if `owner`
    ///   holds less than `value`
    fn transfer_from(
        &mut self,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        value: TokenAmount,
    ) -> Result<()>;

    /// Convert a signed authorization into an allowance grant, consuming the
    /// owner's current nonce.
    ///
    /// # Errors
    /// - [`paygate_types::GatewayError::PermitExpired`] if the deadline has
    ///   passed
    /// - [`paygate_types::GatewayError::InvalidSignature`] if the signature
    ///   does not verify for the owner's key over the
    ///   `(owner, spender, value, nonce, deadline)` tuple with the ledger's
    ///   current nonce
    fn permit(&mut self, authorization: &PermitAuthorization) -> Result<()>;
}
