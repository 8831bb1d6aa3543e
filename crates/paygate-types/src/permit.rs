//! Permit authorization: a signed, off-chain message granting a spending
//! allowance, redeemable exactly once.
//!
//! The signature covers the `(owner, spender, value, nonce, deadline)` tuple.
//! The token ledger's per-owner monotonic nonce invalidates the message after
//! consumption; the settlement engine does not separately track permit
//! replay — it relies on the ledger's nonce check plus its own order record.

use chrono::{DateTime, Utc};
use ed25519_dalek::{Signer, SigningKey};
use serde::{Deserialize, Serialize};

use crate::{AccountId, TokenAmount};

/// A self-contained, signed authorization for a one-shot allowance grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermitAuthorization {
    /// The account granting the allowance (the payer).
    pub owner: AccountId,
    /// The account being authorized to spend (the processor).
    pub spender: AccountId,
    /// The allowance to grant.
    pub value: TokenAmount,
    /// The owner's ledger nonce at signing time. Must equal the ledger's
    /// current nonce when redeemed.
    pub nonce: u64,
    /// Point in time after which the permit is no longer redeemable.
    pub deadline: DateTime<Utc>,
    /// Ed25519 signature over [`PermitAuthorization::signing_payload`].
    pub signature: Vec<u8>,
}

impl PermitAuthorization {
    /// Build and sign a permit with the owner's key.
    #[must_use]
    pub fn sign(
        key: &SigningKey,
        owner: AccountId,
        spender: AccountId,
        value: TokenAmount,
        nonce: u64,
        deadline: DateTime<Utc>,
    ) -> Self {
        let mut permit = Self {
            owner,
            spender,
            value,
            nonce,
            deadline,
            signature: Vec::new(),
        };
        permit.signature = key.sign(&permit.signing_payload()).to_vec();
        permit
    }

    /// Canonical signing payload for ed25519 verification.
    ///
    /// Format: `"paygate:permit:v1:" || owner || spender || value || nonce || deadline`
    #[must_use]
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(80);
        payload.extend_from_slice(b"paygate:permit:v1:");
        payload.extend_from_slice(self.owner.0.as_bytes());
        payload.extend_from_slice(self.spender.0.as_bytes());
        payload.extend_from_slice(&self.value.value().to_le_bytes());
        payload.extend_from_slice(&self.nonce.to_le_bytes());
        payload.extend_from_slice(&self.deadline.timestamp().to_le_bytes());
        payload
    }

    /// Whether the permit has expired as of `now`.
    ///
    /// The deadline is a point-in-time comparison against the evaluation
    /// clock, not a scheduled timeout.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.deadline
    }

    /// Whether the permit has expired as of the current wall clock.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
