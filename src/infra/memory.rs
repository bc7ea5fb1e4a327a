//! In-memory reference implementations of the platform ports. Good enough
//! for tests and single-process deployments; a real storefront backs these
//! with its own database (with a unique constraint standing in for the
//! payment-store mutex).

use {
    crate::domain::{
        id::{OrderId, TransactionId},
        order::{Order, OrderStatus},
        payment::{NewPayment, PaymentRecord},
        ports::{NotificationLog, OrderStore, PaymentStore},
        webhook::NotificationEntry,
    },
    async_trait::async_trait,
    std::collections::{HashMap, HashSet},
    tokio::sync::{Mutex, RwLock},
};

#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, order: Order) {
        self.orders.write().await.insert(order.id.clone(), order);
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().await.get(id).cloned()
    }

    async fn mark_paid(&self, id: &OrderId) -> bool {
        match self.orders.write().await.get_mut(id) {
            Some(order) => {
                order.status = OrderStatus::Paid;
                true
            }
            None => false,
        }
    }
}

#[derive(Default)]
pub struct MemoryPaymentStore {
    by_reference: Mutex<HashMap<TransactionId, PaymentRecord>>,
}

impl MemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.by_reference.lock().await.len()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn get_by_reference(&self, reference: &TransactionId) -> Option<PaymentRecord> {
        self.by_reference.lock().await.get(reference).cloned()
    }

    // The mutex is held across check and insert, so concurrent deliveries
    // of the same reference cannot both create a record.
    async fn insert_unique(&self, payment: NewPayment) -> Option<PaymentRecord> {
        let mut by_reference = self.by_reference.lock().await;
        if by_reference.contains_key(&payment.reference) {
            return None;
        }
        let record = PaymentRecord::from_new(payment);
        by_reference.insert(record.reference().clone(), record.clone());
        Some(record)
    }
}

#[derive(Default)]
struct LogInner {
    seen: HashSet<TransactionId>,
    entries: Vec<NotificationEntry>,
}

#[derive(Default)]
pub struct MemoryNotificationLog {
    inner: Mutex<LogInner>,
}

impl MemoryNotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<NotificationEntry> {
        self.inner.lock().await.entries.clone()
    }
}

#[async_trait]
impl NotificationLog for MemoryNotificationLog {
    async fn seen(&self, reference: &TransactionId) -> bool {
        self.inner.lock().await.seen.contains(reference)
    }

    async fn record(&self, entry: NotificationEntry) {
        let mut inner = self.inner.lock().await;
        inner.seen.insert(entry.reference.clone());
        inner.entries.push(entry);
    }
}
