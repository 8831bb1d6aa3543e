//! # paygate-settlement
//!
//! The settlement core of the PayGate workspace: the invariant-preserving
//! logic that decides whether a payment request may proceed, computes the
//! fee split, executes the fund movement, and records the outcome so no
//! order can be replayed.
//!
//! ## Architecture
//!
//! - [`OrderLedger`] — at-most-once settlement guard, one permanent record
//!   per order identifier
//! - [`permit`] — adapter converting a signed authorization into an
//!   allowance immediately before the transfer step
//! - [`PaymentGateway`] — the settlement engine plus the owner-gated admin
//!   surface (fee administration, manual refund, emergency sweep)
//!
//! The engine is one serialized execution domain: no internal parallelism,
//! no suspension points. Each operation runs to full commit or full abort.

pub mod gateway;
pub mod order_ledger;
pub mod permit;

pub use gateway::PaymentGateway;
pub use order_ledger::OrderLedger;
