use {
    super::id::OrderId,
    super::money::MoneyAmount,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
}

/// Read view of a platform order. The full order lives in the host
/// platform; the gateway only needs the balance and completion state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub balance_due: MoneyAmount,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId, balance_due: MoneyAmount) -> Self {
        Self {
            id,
            balance_due,
            status: OrderStatus::Pending,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}
