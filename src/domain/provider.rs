use {
    super::error::GatewayError,
    super::id::TransactionId,
    super::money::{Currency, MoneyAmount},
    super::transaction::Transaction,
    async_trait::async_trait,
};

/// The slice of the provider API the gateway needs. Concrete network access
/// lives in `adapters::paylike_client`; tests substitute a scripted client.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, GatewayError>;

    /// Requests capture of `amount` and returns the updated transaction
    /// snapshot. The caller decides whether the reported `captured_amount`
    /// is acceptable.
    async fn capture(
        &self,
        id: &TransactionId,
        amount: MoneyAmount,
        currency: Currency,
    ) -> Result<Transaction, GatewayError>;
}
