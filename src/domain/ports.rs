use {
    super::id::{OrderId, TransactionId},
    super::order::Order,
    super::payment::{NewPayment, PaymentRecord},
    super::webhook::NotificationEntry,
    async_trait::async_trait,
};

/// Order lookup and completion, supplied by the host platform.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn get(&self, id: &OrderId) -> Option<Order>;

    /// Marks the order paid and runs purchase completion. Returns false if
    /// the order no longer exists.
    async fn mark_paid(&self, id: &OrderId) -> bool;
}

/// Payment persistence, supplied by the host platform.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Lookup for callers outside the dispatch path (reports, storefront
    /// order pages). Dispatch itself never does a separate pre-insert
    /// lookup; it relies on `insert_unique` so the existence check and
    /// the insert cannot be split by a concurrent delivery.
    async fn get_by_reference(&self, reference: &TransactionId) -> Option<PaymentRecord>;

    /// Creates a payment record only if none exists for the reference.
    /// Returns `None` when a record is already present. Implementations
    /// must make the check-then-insert atomic (unique constraint or lock);
    /// this is the guard against duplicate deliveries racing each other.
    async fn insert_unique(&self, payment: NewPayment) -> Option<PaymentRecord>;
}

/// Append-only log of received notifications, consulted by the
/// duplicate-delivery guard during verification.
#[async_trait]
pub trait NotificationLog: Send + Sync {
    async fn seen(&self, reference: &TransactionId) -> bool;

    async fn record(&self, entry: NotificationEntry);
}
