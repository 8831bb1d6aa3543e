//! # paygate-ledger
//!
//! The token-ledger boundary of the PayGate workspace.
//!
//! The settlement engine never touches balances directly — it consumes the
//! [`TokenLedger`] trait: allowance-based pulls, direct pushes, and the
//! one-shot permit primitive that converts a signed authorization into an
//! allowance. [`InMemoryToken`] is the reference implementation, with
//! ed25519 permit verification and per-owner monotonic nonces.

pub mod memory;
pub mod token;

pub use memory::InMemoryToken;
pub use token::TokenLedger;
