#![allow(dead_code)]

use async_trait::async_trait;
use paylike_gateway::adapters::paylike::GatewayAdapter;
use paylike_gateway::config::{GatewayConfig, KeyPair};
use paylike_gateway::domain::error::GatewayError;
use paylike_gateway::domain::id::{OrderId, TransactionId};
use paylike_gateway::domain::money::{Currency, MoneyAmount};
use paylike_gateway::domain::order::Order;
use paylike_gateway::domain::provider::ProviderClient;
use paylike_gateway::domain::transaction::Transaction;
use paylike_gateway::domain::webhook::WebhookEvent;
use paylike_gateway::infra::memory::{
    MemoryNotificationLog, MemoryOrderStore, MemoryPaymentStore,
};
use paylike_gateway::services::webhook_processor::WebhookProcessor;
use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted provider client. Serves transactions from a fixed map and
/// counts calls so tests can assert the provider was (not) reached.
pub struct MockClient {
    transactions: HashMap<String, Transaction>,
    /// Captured amount the provider reports back; defaults to the request.
    captured_override: Option<i64>,
    fail_capture: bool,
    pub fetch_calls: AtomicUsize,
    pub capture_calls: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            transactions: HashMap::new(),
            captured_override: None,
            fail_capture: false,
            fetch_calls: AtomicUsize::new(0),
            capture_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_transaction(mut self, txn: Transaction) -> Self {
        self.transactions.insert(txn.id.as_str().to_string(), txn);
        self
    }

    /// Makes capture report this amount instead of the requested one.
    pub fn with_captured_amount(mut self, minor: i64) -> Self {
        self.captured_override = Some(minor);
        self
    }

    pub fn failing_capture(mut self) -> Self {
        self.fail_capture = true;
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::Relaxed)
    }

    pub fn captures(&self) -> usize {
        self.capture_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProviderClient for MockClient {
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, GatewayError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);
        self.transactions
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.clone()))
    }

    async fn capture(
        &self,
        id: &TransactionId,
        amount: MoneyAmount,
        _currency: Currency,
    ) -> Result<Transaction, GatewayError> {
        self.capture_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_capture {
            return Err(GatewayError::Provider("capture rejected".into()));
        }
        let mut txn = self
            .transactions
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.clone()))?;
        let captured = self.captured_override.unwrap_or(amount.minor());
        txn.captured_amount = MoneyAmount::new(captured).unwrap();
        txn.pending_amount = MoneyAmount::new((txn.pending_amount.minor() - captured).max(0)).unwrap();
        Ok(txn)
    }
}

pub fn test_config() -> GatewayConfig {
    config_with_currency("USD")
}

pub fn config_with_currency(code: &str) -> GatewayConfig {
    GatewayConfig {
        store_url: "https://shop.example.com".to_string(),
        currency_code: code.to_string(),
        test_mode: true,
        prod_keys: KeyPair {
            public_key: "pub-live".to_string(),
            secret_key: SecretString::new("sec-live".to_string()),
        },
        test_keys: KeyPair {
            public_key: "pub-test".to_string(),
            secret_key: SecretString::new("sec-test".to_string()),
        },
    }
}

pub struct Harness {
    pub processor: WebhookProcessor,
    pub adapter: Arc<GatewayAdapter>,
    pub client: Arc<MockClient>,
    pub orders: Arc<MemoryOrderStore>,
    pub payments: Arc<MemoryPaymentStore>,
    pub notifications: Arc<MemoryNotificationLog>,
}

pub fn harness(client: MockClient) -> Harness {
    let client = Arc::new(client);
    let adapter = Arc::new(GatewayAdapter::with_client(test_config(), client.clone()));
    let orders = Arc::new(MemoryOrderStore::new());
    let payments = Arc::new(MemoryPaymentStore::new());
    let notifications = Arc::new(MemoryNotificationLog::new());
    let processor = WebhookProcessor::new(
        adapter.clone(),
        orders.clone(),
        payments.clone(),
        notifications.clone(),
    );
    Harness {
        processor,
        adapter,
        client,
        orders,
        payments,
        notifications,
    }
}

/// Transaction with amount fully pending and nothing captured yet —
/// the state an authorization hold arrives in.
pub fn authorized_txn(id: &str, amount: i64) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        amount: MoneyAmount::new(amount).unwrap(),
        pending_amount: MoneyAmount::new(amount).unwrap(),
        captured_amount: MoneyAmount::zero(),
        currency: Currency::Usd,
    }
}

pub fn make_order(id: &str, balance_due: i64) -> Order {
    Order::new(OrderId::new(id), MoneyAmount::new(balance_due).unwrap())
}

pub fn make_event(txn_id: &str, order_id: &str) -> WebhookEvent {
    WebhookEvent::authorized(
        TransactionId::new(txn_id),
        OrderId::new(order_id),
        false,
        serde_json::json!({"txn_id": txn_id, "order_id": order_id}),
    )
}

/// Event carrying the `shop_test_ipn` flag — bypasses the duplicate guard.
pub fn make_test_event(txn_id: &str, order_id: &str) -> WebhookEvent {
    WebhookEvent::authorized(
        TransactionId::new(txn_id),
        OrderId::new(order_id),
        true,
        serde_json::json!({"txn_id": txn_id, "order_id": order_id, "shop_test_ipn": "1"}),
    )
}
