//! # paygate-types
//!
//! Shared types, errors, and configuration for the **PayGate** settlement
//! processor.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`OrderId`]
//! - **Amounts**: [`TokenAmount`] (integer base units)
//! - **Request model**: [`PaymentRequest`]
//! - **Permit model**: [`PermitAuthorization`]
//! - **Fee model**: [`FeePolicy`], [`FeeSplit`]
//! - **Event model**: [`GatewayEvent`]
//! - **Configuration**: [`GatewayConfig`]
//! - **Errors**: [`GatewayError`] with `PG_ERR_` prefix codes
//! - **Constants**: fee bounds and basis-point scale

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod fee;
pub mod ids;
pub mod permit;
pub mod request;

// Re-export all primary types at crate root for ergonomic imports:
//   use paygate_types::{AccountId, PaymentRequest, FeePolicy, ...};

pub use amount::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use fee::*;
pub use ids::*;
pub use permit::*;
pub use request::*;

// Constants are accessed via `paygate_types::constants::FOO`
// (not re-exported to avoid name collisions).
