use {
    super::id::{OrderId, TransactionId},
    super::money::MoneyAmount,
    thiserror::Error,
};

/// Failures at the provider boundary (adapter and HTTP client).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transaction id is empty")]
    EmptyTransactionId,

    #[error("capture amount must be at least one minor unit")]
    AmountTooSmall,

    #[error("amount cannot be negative, got: {0}")]
    InvalidAmount(i64),

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("transaction {0} not found")]
    NotFound(TransactionId),

    #[error("gateway is disabled for this store")]
    Disabled,

    #[error("provider: {0}")]
    Provider(String),
}

/// Everything that can stop a webhook notification between receipt and
/// completion. Handled locally by logging and returning the variant;
/// nothing here propagates as a panic.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("txn_id is empty")]
    EmptyTransactionId,

    #[error("duplicate notification for transaction {0}")]
    DuplicateNotification(TransactionId),

    #[error("transaction {id} is invalid: {source}")]
    TransactionFetchFailed {
        id: TransactionId,
        #[source]
        source: GatewayError,
    },

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("payment {paid} is insufficient for order {order_id} (balance due {due})")]
    InsufficientPayment {
        order_id: OrderId,
        paid: MoneyAmount,
        due: MoneyAmount,
    },

    #[error("capture failed for transaction {0}")]
    CaptureFailed(TransactionId),

    #[error("unsupported event type: {0}")]
    UnsupportedEventType(String),
}
