use {
    super::id::{OrderId, TransactionId},
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// Event kinds the provider delivers. Only `authorized` triggers a capture;
/// anything else is logged and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Authorized,
    #[serde(untagged)]
    Unknown(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Authorized => "authorized",
            Self::Unknown(other) => other,
        }
    }
}

/// Typed form of an inbound notification, built at the HTTP boundary from
/// the raw query parameters. Nothing downstream touches the raw map.
#[derive(Debug, Clone)]
pub struct WebhookEvent {
    pub transaction_id: TransactionId,
    pub order_id: OrderId,
    pub event_type: EventType,
    /// Set when the request carries the `shop_test_ipn` flag; bypasses the
    /// duplicate-delivery guard so test notifications can be replayed.
    pub test_mode: bool,
    pub raw_payload: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl WebhookEvent {
    /// The provider's callback has no event-type field of its own; every
    /// delivery represents an authorization hold.
    pub fn authorized(
        transaction_id: TransactionId,
        order_id: OrderId,
        test_mode: bool,
        raw_payload: serde_json::Value,
    ) -> Self {
        Self {
            transaction_id,
            order_id,
            event_type: EventType::Authorized,
            test_mode,
            raw_payload,
            received_at: Utc::now(),
        }
    }
}

/// Audit row written for every dispatched notification, whatever the
/// outcome. Also backs the duplicate-delivery guard.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEntry {
    pub id: Uuid,
    pub reference: TransactionId,
    pub order_id: OrderId,
    pub event_type: String,
    pub payload: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl NotificationEntry {
    pub fn new(
        reference: TransactionId,
        order_id: OrderId,
        event_type: &EventType,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            reference,
            order_id,
            event_type: event_type.as_str().to_string(),
            payload,
            received_at: Utc::now(),
        }
    }
}
