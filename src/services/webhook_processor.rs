use {
    crate::adapters::paylike::{GATEWAY_NAME, GatewayAdapter},
    crate::domain::{
        error::WebhookError,
        order::Order,
        payment::NewPayment,
        ports::{NotificationLog, OrderStore, PaymentStore},
        transaction::Transaction,
        webhook::{EventType, NotificationEntry, WebhookEvent},
    },
    std::sync::Arc,
};

/// A notification that has passed every verification gate. Retains the
/// transaction snapshot so dispatch captures exactly what was authorized.
#[derive(Debug)]
pub struct VerifiedNotification {
    pub event: WebhookEvent,
    pub transaction: Transaction,
    pub order: Order,
}

impl VerifiedNotification {
    /// Audit row for the notification log. The payload keeps both the raw
    /// query data and the fetched transaction.
    fn audit_entry(&self) -> NotificationEntry {
        NotificationEntry::new(
            self.transaction.id.clone(),
            self.event.order_id.clone(),
            &self.event.event_type,
            serde_json::json!({
                "query": self.event.raw_payload,
                "transaction": self.transaction,
            }),
        )
    }

    fn payment(&self) -> NewPayment {
        NewPayment {
            reference: self.transaction.id.clone(),
            order_id: self.event.order_id.clone(),
            amount: self.transaction.amount,
            currency: self.transaction.currency,
            gateway: GATEWAY_NAME.to_string(),
            method: GATEWAY_NAME.to_string(),
            comment: format!("Webhook {}", self.transaction.id),
        }
    }
}

/// Terminal result of a dispatched notification.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Payment recorded and order completed; buyer goes to the thank-you
    /// page.
    Completed,
    /// Capture failed, the payment was already recorded, or completion
    /// failed; buyer goes back with a payment error.
    PaymentError(WebhookError),
}

/// Runs one inbound notification through Received → Verified → Dispatched.
/// Every gate failure is terminal; redelivery is the provider's job.
pub struct WebhookProcessor {
    gateway: Arc<GatewayAdapter>,
    orders: Arc<dyn OrderStore>,
    payments: Arc<dyn PaymentStore>,
    notifications: Arc<dyn NotificationLog>,
}

impl WebhookProcessor {
    pub fn new(
        gateway: Arc<GatewayAdapter>,
        orders: Arc<dyn OrderStore>,
        payments: Arc<dyn PaymentStore>,
        notifications: Arc<dyn NotificationLog>,
    ) -> Self {
        Self {
            gateway,
            orders,
            payments,
            notifications,
        }
    }

    /// Verification gates, short-circuit:
    /// empty id → duplicate guard (skipped for test notifications) →
    /// live transaction fetch → order lookup → sufficient amount.
    pub async fn verify(
        &self,
        event: WebhookEvent,
    ) -> Result<VerifiedNotification, WebhookError> {
        if event.transaction_id.is_empty() {
            tracing::error!("{GATEWAY_NAME} webhook: txn_id is empty");
            return Err(WebhookError::EmptyTransactionId);
        }

        if !event.test_mode && self.notifications.seen(&event.transaction_id).await {
            tracing::error!(
                txn_id = %event.transaction_id,
                "{GATEWAY_NAME} webhook: duplicate notification"
            );
            return Err(WebhookError::DuplicateNotification(event.transaction_id));
        }

        let transaction = match self.gateway.fetch_transaction(&event.transaction_id).await {
            Ok(txn) => txn,
            Err(source) => {
                tracing::error!(
                    txn_id = %event.transaction_id,
                    error = %source,
                    "{GATEWAY_NAME} webhook: transaction id is invalid"
                );
                return Err(WebhookError::TransactionFetchFailed {
                    id: event.transaction_id,
                    source,
                });
            }
        };

        let Some(order) = self.orders.get(&event.order_id).await else {
            tracing::error!(
                order_id = %event.order_id,
                "order not found during {GATEWAY_NAME} verification"
            );
            return Err(WebhookError::OrderNotFound(event.order_id));
        };

        if transaction.amount < order.balance_due {
            tracing::error!(
                txn_id = %transaction.id,
                order_id = %order.id,
                paid = %transaction.amount,
                due = %order.balance_due,
                "{GATEWAY_NAME} webhook: payment amount is insufficient"
            );
            return Err(WebhookError::InsufficientPayment {
                order_id: order.id,
                paid: transaction.amount,
                due: order.balance_due,
            });
        }

        Ok(VerifiedNotification {
            event,
            transaction,
            order,
        })
    }

    /// Records the notification, captures the authorized amount, and
    /// persists the payment at most once per transaction id.
    pub async fn dispatch(
        &self,
        verified: VerifiedNotification,
    ) -> Result<DispatchOutcome, WebhookError> {
        // Audit first, whatever happens next.
        self.notifications.record(verified.audit_entry()).await;

        if let EventType::Unknown(kind) = &verified.event.event_type {
            tracing::warn!(
                txn_id = %verified.transaction.id,
                event_type = %kind,
                "{GATEWAY_NAME} webhook: unsupported event type"
            );
            return Err(WebhookError::UnsupportedEventType(kind.clone()));
        }

        if !self.capture(&verified).await {
            return Ok(DispatchOutcome::PaymentError(WebhookError::CaptureFailed(
                verified.transaction.id.clone(),
            )));
        }

        let reference = verified.transaction.id.clone();
        let order_id = verified.order.id.clone();
        match self.payments.insert_unique(verified.payment()).await {
            Some(record) => {
                if self.orders.mark_paid(&order_id).await {
                    tracing::info!(
                        payment_id = %record.id(),
                        reference = %reference,
                        order_id = %order_id,
                        amount = %record.amount(),
                        "payment recorded, order completed"
                    );
                    Ok(DispatchOutcome::Completed)
                } else {
                    tracing::error!(
                        order_id = %order_id,
                        "order disappeared before purchase completion"
                    );
                    Ok(DispatchOutcome::PaymentError(WebhookError::OrderNotFound(
                        order_id,
                    )))
                }
            }
            None => {
                tracing::warn!(
                    reference = %reference,
                    "payment already recorded for reference, skipping"
                );
                Ok(DispatchOutcome::PaymentError(
                    WebhookError::DuplicateNotification(reference),
                ))
            }
        }
    }

    /// Captures the pending amount off the retained snapshot. Provider
    /// failures are logged and become `false`, never propagated.
    async fn capture(&self, verified: &VerifiedNotification) -> bool {
        let txn = &verified.transaction;
        match self
            .gateway
            .capture_transaction(&txn.id, txn.pending_amount, txn.currency)
            .await
        {
            Ok(true) => true,
            Ok(false) => {
                tracing::error!(
                    txn_id = %txn.id,
                    requested = %txn.pending_amount,
                    "{GATEWAY_NAME} capture: provider reported a different captured amount"
                );
                false
            }
            Err(e) => {
                tracing::error!(
                    txn_id = %txn.id,
                    error = %e,
                    "{GATEWAY_NAME} capture failed"
                );
                false
            }
        }
    }
}
