use {
    super::id::TransactionId,
    super::money::{Currency, MoneyAmount},
    serde::{Deserialize, Serialize},
};

/// Immutable snapshot of a provider transaction, as returned by the
/// fetch and capture endpoints. All amounts are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: MoneyAmount,
    #[serde(default = "MoneyAmount::zero")]
    pub pending_amount: MoneyAmount,
    #[serde(default = "MoneyAmount::zero")]
    pub captured_amount: MoneyAmount,
    pub currency: Currency,
}
