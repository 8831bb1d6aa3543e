//! The payment request model.

use serde::{Deserialize, Serialize};

use crate::{AccountId, OrderId, TokenAmount};

/// A request to settle one order: move `amount` from `payer` to `recipient`.
///
/// Transient — exists only for the duration of one settlement call. The
/// engine validates it (non-zero amount, non-zero recipient, unsettled
/// order) before touching the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// The order being settled. At most one settlement ever succeeds per id.
    pub order_id: OrderId,
    /// The amount to move, in token base units. Must be positive.
    pub amount: TokenAmount,
    /// The account funds are pulled from.
    pub payer: AccountId,
    /// The account the (net) funds are forwarded to. Must be non-zero.
    pub recipient: AccountId,
}

impl PaymentRequest {
    #[must_use]
    pub fn new(
        order_id: OrderId,
        amount: TokenAmount,
        payer: AccountId,
        recipient: AccountId,
    ) -> Self {
        Self {
            order_id,
            amount,
            payer,
            recipient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let request = PaymentRequest::new(
            OrderId::from_label("order-789"),
            TokenAmount::new(500),
            AccountId::new(),
            AccountId::new(),
        );
        let json = serde_json::to_string(&request).unwrap();
        let back: PaymentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
