//! Order ledger — the at-most-once settlement guard.
//!
//! Each order identifier settles exactly once. Attempting to mark the same
//! `OrderId` a second time returns [`GatewayError::AlreadyProcessed`].
//!
//! Records are contractual state, not a cache: the unset → settled
//! transition is permanent, with no eviction and no un-settling. An order
//! record materializes implicitly on first settlement — membership in the
//! set *is* the record.

use std::collections::HashSet;

use paygate_types::{GatewayError, OrderId, Result};

/// Tracks which orders have already settled.
#[derive(Debug, Default)]
pub struct OrderLedger {
    /// Order IDs that have settled. Monotonic: entries are never removed.
    settled: HashSet<OrderId>,
}

impl OrderLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an order as settled.
    ///
    /// # Errors
    /// Returns [`GatewayError::AlreadyProcessed`] if `order_id` has already
    /// settled.
    pub fn mark_settled(&mut self, order_id: OrderId) -> Result<()> {
        if self.settled.contains(&order_id) {
            return Err(GatewayError::AlreadyProcessed(order_id));
        }
        self.settled.insert(order_id);
        Ok(())
    }

    /// Check whether an order has already settled.
    #[must_use]
    pub fn is_settled(&self, order_id: &OrderId) -> bool {
        self.settled.contains(order_id)
    }

    /// Number of settled orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    /// Whether no order has settled yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}
