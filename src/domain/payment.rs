use {
    super::id::{OrderId, TransactionId},
    super::money::{Currency, MoneyAmount},
    chrono::{DateTime, Utc},
    serde::Serialize,
    uuid::Uuid,
};

/// Payment record to be persisted. `reference` is the provider transaction
/// id; at most one record may ever exist per reference.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub reference: TransactionId,
    pub order_id: OrderId,
    pub amount: MoneyAmount,
    pub currency: Currency,
    pub gateway: String,
    pub method: String,
    pub comment: String,
}

/// Persisted payment row (for reads).
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecord {
    id: Uuid,
    reference: TransactionId,
    order_id: OrderId,
    amount: MoneyAmount,
    currency: Currency,
    gateway: String,
    method: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl PaymentRecord {
    pub fn from_new(payment: NewPayment) -> Self {
        Self {
            id: Uuid::now_v7(),
            reference: payment.reference,
            order_id: payment.order_id,
            amount: payment.amount,
            currency: payment.currency,
            gateway: payment.gateway,
            method: payment.method,
            comment: payment.comment,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn reference(&self) -> &TransactionId {
        &self.reference
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn amount(&self) -> MoneyAmount {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
