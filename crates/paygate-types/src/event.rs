//! Events emitted by the settlement engine.
//!
//! The gateway appends to an in-process event log; an observer that sees a
//! [`GatewayEvent::PaymentDone`] can rely on the order already being marked
//! settled.

use serde::{Deserialize, Serialize};

use crate::{AccountId, OrderId, TokenAmount};

/// An event recorded by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayEvent {
    /// A settlement completed (both the allowance and the permit path).
    PaymentDone {
        order_id: OrderId,
        payer: AccountId,
        amount: TokenAmount,
    },
    /// The fee rate was updated (variant A only).
    FeeUpdated { basis_points: u16 },
    /// The fee recipient was updated (variant A only).
    FeeRecipientUpdated { recipient: AccountId },
}

impl std::fmt::Display for GatewayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PaymentDone {
                order_id,
                payer,
                amount,
            } => write!(f, "PAYMENT_DONE {order_id} payer={payer} amount={amount}"),
            Self::FeeUpdated { basis_points } => write!(f, "FEE_UPDATED {basis_points}bps"),
            Self::FeeRecipientUpdated { recipient } => {
                write!(f, "FEE_RECIPIENT_UPDATED {recipient}")
            }
        }
    }
}
