//! The settlement engine and admin control surface.
//!
//! One [`PaymentGateway`] per deployment. Every operation is a single
//! synchronous unit of work against the shared state (order ledger, fee
//! policy, the processor's token balance): it either fully applies or fully
//! aborts with a typed error and no partial effects.
//!
//! Settlement pipeline (both entry points converge here):
//! 1. Reject zero amounts, invalid recipients (the zero account or the
//!    processor itself), and already-settled orders
//! 2. (Permit path) establish the allowance via the permit adapter
//! 3. Pull the amount from the payer into the processor's custody
//! 4. Forward fee + net (variant A) or the full amount (variant B)
//! 5. Mark the order settled
//! 6. Append the `PaymentDone` event
//!
//! Transfers complete before the order mark commits, and the mark commits
//! before the event is observable: anyone who sees the event can rely on
//! `is_settled == true`. Once the pull in step 3 succeeds, the forwards in
//! step 4 spend the processor's just-credited balance and cannot fail, so
//! no failure path leaves funds in custody.

use paygate_ledger::TokenLedger;
use paygate_types::{
    AccountId, FeePolicy, GatewayConfig, GatewayError, GatewayEvent, OrderId, PaymentRequest,
    PermitAuthorization, Result, TokenAmount,
};

use crate::order_ledger::OrderLedger;
use crate::permit;

/// The payment settlement processor.
///
/// Holds the order ledger, the optional fee policy, and the identities of
/// the processor account and the administrative owner. The token ledger is
/// an external collaborator, passed into each operation.
#[derive(Debug)]
pub struct PaymentGateway {
    /// The processor's own ledger account. Funds pass through it within a
    /// single call and never rest there (invariant: zero residual balance
    /// after every successful settlement).
    gateway_account: AccountId,
    /// The administrative owner, fixed at construction.
    owner: AccountId,
    /// Fee policy — present on variant-A deployments only.
    fee: Option<FeePolicy>,
    /// At-most-once settlement guard.
    orders: OrderLedger,
    /// Append-only event log.
    events: Vec<GatewayEvent>,
}

impl PaymentGateway {
    /// Build a gateway from a validated configuration.
    ///
    /// # Errors
    /// Returns [`GatewayError::ZeroAddress`] for a zero gateway account or
    /// owner, and [`GatewayError::InvalidRecipient`] if the fee policy names
    /// the processor's own account as its recipient.
    pub fn from_config(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            gateway_account: config.gateway_account,
            owner: config.owner,
            fee: config.fee,
            orders: OrderLedger::new(),
            events: Vec::new(),
        })
    }

    /// Variant-B gateway: no stored fee, full amount to the per-request
    /// recipient.
    pub fn new(gateway_account: AccountId, owner: AccountId) -> Result<Self> {
        Self::from_config(GatewayConfig::new(gateway_account, owner))
    }

    /// Variant-A gateway: fee split on every settlement.
    pub fn with_fee(gateway_account: AccountId, owner: AccountId, fee: FeePolicy) -> Result<Self> {
        Self::from_config(GatewayConfig::with_fee(gateway_account, owner, fee))
    }

    // =====================================================================
    // Settlement
    // =====================================================================

    /// Settle an order through the allowance path: the payer has already
    /// granted the processor a spending allowance on the token ledger.
    ///
    /// # Errors
    /// - [`GatewayError::ZeroAmount`], [`GatewayError::InvalidRecipient`],
    ///   [`GatewayError::AlreadyProcessed`] on request validation
    /// - [`GatewayError::TransferFailed`] if the ledger rejects the pull
    ///   (insufficient allowance or balance)
    pub fn pay<L: TokenLedger>(&mut self, ledger: &mut L, request: &PaymentRequest) -> Result<()> {
        self.validate(request)?;
        self.execute(ledger, request)
    }

    /// Settle an order through the permit path: the signed authorization is
    /// converted into an allowance immediately before the pull, and consumed
    /// by it.
    ///
    /// # Errors
    /// In addition to the [`PaymentGateway::pay`] failures,
    /// [`GatewayError::PermitExpired`] and [`GatewayError::InvalidSignature`]
    /// propagate verbatim from the permit adapter.
    pub fn pay_with_permit<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        request: &PaymentRequest,
        authorization: &PermitAuthorization,
    ) -> Result<()> {
        self.validate(request)?;
        permit::apply(ledger, authorization)?;
        self.execute(ledger, request)
    }

    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        if request.amount.is_zero() {
            return Err(GatewayError::ZeroAmount);
        }
        // The processor's own account is not a valid destination: forwarding
        // to it would leave settled funds in custody.
        if request.recipient.is_zero() || request.recipient == self.gateway_account {
            return Err(GatewayError::InvalidRecipient);
        }
        if self.orders.is_settled(&request.order_id) {
            return Err(GatewayError::AlreadyProcessed(request.order_id));
        }
        Ok(())
    }

    fn execute<L: TokenLedger>(&mut self, ledger: &mut L, request: &PaymentRequest) -> Result<()> {
        let balance_before = ledger.balance_of(self.gateway_account);

        ledger
            .transfer_from(
                self.gateway_account,
                request.payer,
                self.gateway_account,
                request.amount,
            )
            .map_err(|e| GatewayError::transfer_failed(&e))?;

        // The fee rate is read here, atomically within this call; admin
        // updates only affect settlements initiated afterwards.
        match self.fee {
            Some(policy) => {
                let split = policy.split(request.amount);
                if !split.fee.is_zero() {
                    ledger
                        .transfer(self.gateway_account, policy.recipient(), split.fee)
                        .map_err(|e| GatewayError::transfer_failed(&e))?;
                }
                ledger
                    .transfer(self.gateway_account, request.recipient, split.net)
                    .map_err(|e| GatewayError::transfer_failed(&e))?;
            }
            None => {
                ledger
                    .transfer(self.gateway_account, request.recipient, request.amount)
                    .map_err(|e| GatewayError::transfer_failed(&e))?;
            }
        }

        // fee + net == amount exactly, so custody returns to its prior level.
        debug_assert_eq!(ledger.balance_of(self.gateway_account), balance_before);

        self.orders.mark_settled(request.order_id)?;
        self.events.push(GatewayEvent::PaymentDone {
            order_id: request.order_id,
            payer: request.payer,
            amount: request.amount,
        });
        tracing::info!(
            order = %request.order_id,
            payer = %request.payer,
            amount = %request.amount,
            "settlement complete"
        );
        Ok(())
    }

    // =====================================================================
    // Admin control surface (owner-gated)
    // =====================================================================

    /// Update the fee rate (variant A only).
    ///
    /// # Errors
    /// - [`GatewayError::NotOwner`] if `caller` is not the owner
    /// - [`GatewayError::FeePolicyDisabled`] on a variant-B deployment
    /// - [`GatewayError::InvalidFee`] if `basis_points > 1000`
    pub fn update_fee(&mut self, caller: AccountId, basis_points: u16) -> Result<()> {
        self.require_owner(caller)?;
        let policy = self.fee.as_mut().ok_or(GatewayError::FeePolicyDisabled)?;
        policy.set_basis_points(basis_points)?;
        self.events.push(GatewayEvent::FeeUpdated { basis_points });
        Ok(())
    }

    /// Redirect the fee recipient (variant A only).
    ///
    /// # Errors
    /// - [`GatewayError::NotOwner`] if `caller` is not the owner
    /// - [`GatewayError::FeePolicyDisabled`] on a variant-B deployment
    /// - [`GatewayError::InvalidRecipient`] if `recipient` is the zero
    ///   account or the processor's own account
    pub fn update_fee_recipient(&mut self, caller: AccountId, recipient: AccountId) -> Result<()> {
        self.require_owner(caller)?;
        if recipient == self.gateway_account {
            return Err(GatewayError::InvalidRecipient);
        }
        let policy = self.fee.as_mut().ok_or(GatewayError::FeePolicyDisabled)?;
        policy.set_recipient(recipient)?;
        self.events
            .push(GatewayEvent::FeeRecipientUpdated { recipient });
        Ok(())
    }

    /// Push `amount` from the processor's balance back to `payer`.
    ///
    /// An administrative override, not a reversal: the order stays settled,
    /// and neither the order id nor the amount is checked against the
    /// original payment.
    ///
    /// # Errors
    /// - [`GatewayError::NotOwner`] if `caller` is not the owner
    /// - [`GatewayError::TransferFailed`] if the processor's balance is
    ///   insufficient
    pub fn refund<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        order_id: OrderId,
        payer: AccountId,
        amount: TokenAmount,
    ) -> Result<()> {
        self.require_owner(caller)?;
        ledger
            .transfer(self.gateway_account, payer, amount)
            .map_err(|e| GatewayError::transfer_failed(&e))?;
        tracing::warn!(
            order = %order_id,
            payer = %payer,
            amount = %amount,
            "manual refund issued"
        );
        Ok(())
    }

    /// Sweep `amount` of residual balance to the owner. Normal settlement
    /// never custodies funds, so anything here is stuck by accident.
    ///
    /// # Errors
    /// - [`GatewayError::NotOwner`] if `caller` is not the owner
    /// - [`GatewayError::TransferFailed`] if the processor's balance is
    ///   insufficient
    pub fn emergency_withdraw<L: TokenLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        amount: TokenAmount,
    ) -> Result<()> {
        self.require_owner(caller)?;
        ledger
            .transfer(self.gateway_account, self.owner, amount)
            .map_err(|e| GatewayError::transfer_failed(&e))?;
        tracing::warn!(amount = %amount, "emergency withdrawal");
        Ok(())
    }

    fn require_owner(&self, caller: AccountId) -> Result<()> {
        if caller != self.owner {
            return Err(GatewayError::NotOwner);
        }
        Ok(())
    }

    // =====================================================================
    // Views
    // =====================================================================

    /// The processor's current token balance.
    #[must_use]
    pub fn balance<L: TokenLedger>(&self, ledger: &L) -> TokenAmount {
        ledger.balance_of(self.gateway_account)
    }

    /// Whether an order has already settled.
    #[must_use]
    pub fn is_settled(&self, order_id: &OrderId) -> bool {
        self.orders.is_settled(order_id)
    }

    /// The processor's own ledger account.
    #[must_use]
    pub fn gateway_account(&self) -> AccountId {
        self.gateway_account
    }

    /// The administrative owner.
    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// The current fee policy, if this deployment stores one.
    #[must_use]
    pub fn fee_policy(&self) -> Option<&FeePolicy> {
        self.fee.as_ref()
    }

    /// All events emitted so far, in commit order.
    #[must_use]
    pub fn events(&self) -> &[GatewayEvent] {
        &self.events
    }
}
