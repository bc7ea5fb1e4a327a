use {
    crate::adapters::paylike_client::PaylikeClient,
    crate::config::GatewayConfig,
    crate::domain::{
        error::GatewayError,
        id::{OrderId, TransactionId},
        money::{Currency, MoneyAmount},
        order::Order,
        provider::ProviderClient,
        transaction::Transaction,
    },
    serde::Serialize,
    std::sync::Arc,
    tokio::sync::OnceCell,
};

pub const GATEWAY_NAME: &str = "paylike";
pub const SDK_SCRIPT_URL: &str = "https://sdk.paylike.io/3.js";

/// Parameters the hosted checkout widget needs, handed to the storefront
/// template as-is. `order_total` is in minor units, per the provider API.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutParams {
    pub public_key: String,
    pub webhook_url: String,
    pub currency_code: Currency,
    pub order_total: MoneyAmount,
    pub order_id: OrderId,
}

/// Tracks whether the provider SDK `<script>` tag was already emitted for
/// the current render. One context per request; no process-wide flag.
#[derive(Debug, Default)]
pub struct CheckoutContext {
    sdk_injected: bool,
}

impl CheckoutContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the SDK script URL on the first call only.
    pub fn sdk_script(&mut self) -> Option<&'static str> {
        if self.sdk_injected {
            return None;
        }
        self.sdk_injected = true;
        Some(SDK_SCRIPT_URL)
    }
}

/// Thin adapter over the Paylike API: checkout-button parameters on the way
/// out, transaction fetch/capture for the webhook processor on the way in.
pub struct GatewayAdapter {
    config: GatewayConfig,
    /// `None` when the store currency is outside the supported set; the
    /// gateway stays constructed but refuses checkout.
    currency: Option<Currency>,
    /// One provider client per adapter lifetime, built on first use.
    client: OnceCell<Arc<dyn ProviderClient>>,
}

impl GatewayAdapter {
    pub fn new(config: GatewayConfig) -> Self {
        let currency = Currency::try_from(config.currency_code.as_str()).ok();
        if currency.is_none() {
            tracing::warn!(
                currency = %config.currency_code,
                "store currency not supported by {GATEWAY_NAME}, gateway disabled"
            );
        }
        Self {
            config,
            currency,
            client: OnceCell::new(),
        }
    }

    /// Construction with an injected client, for tests and alternative
    /// transports.
    pub fn with_client(config: GatewayConfig, client: Arc<dyn ProviderClient>) -> Self {
        let mut adapter = Self::new(config);
        adapter.client = OnceCell::new_with(Some(client));
        adapter
    }

    pub fn enabled(&self) -> bool {
        self.currency.is_some() && self.has_valid_config()
    }

    /// Both keys of the active pair must be configured.
    pub fn has_valid_config(&self) -> bool {
        self.config.keys().is_complete()
    }

    async fn client(&self) -> Result<&Arc<dyn ProviderClient>, GatewayError> {
        self.client
            .get_or_try_init(|| async {
                let client = PaylikeClient::new(self.config.keys().secret_key.clone())?;
                Ok(Arc::new(client) as Arc<dyn ProviderClient>)
            })
            .await
    }

    /// Fetches the live transaction record. Rejects empty ids before any
    /// network traffic.
    pub async fn fetch_transaction(
        &self,
        id: &TransactionId,
    ) -> Result<Transaction, GatewayError> {
        if id.is_empty() {
            return Err(GatewayError::EmptyTransactionId);
        }
        self.client().await?.fetch_transaction(id).await
    }

    /// Captures exactly `amount`. Succeeds only when the provider reports
    /// `captured_amount` equal to the request; anything else (including a
    /// partial capture) is a failure.
    pub async fn capture_transaction(
        &self,
        id: &TransactionId,
        amount: MoneyAmount,
        currency: Currency,
    ) -> Result<bool, GatewayError> {
        if id.is_empty() {
            return Err(GatewayError::EmptyTransactionId);
        }
        if amount.minor() < 1 {
            return Err(GatewayError::AmountTooSmall);
        }
        let txn = self.client().await?.capture(id, amount, currency).await?;
        Ok(txn.captured_amount == amount)
    }

    /// Builds the checkout-button payload for an open order.
    pub fn checkout_params(
        &self,
        order: &Order,
        webhook_url: &str,
    ) -> Result<CheckoutParams, GatewayError> {
        let currency = self.currency.ok_or(GatewayError::Disabled)?;
        if !self.has_valid_config() {
            return Err(GatewayError::Disabled);
        }
        Ok(CheckoutParams {
            public_key: self.config.keys().public_key.clone(),
            webhook_url: webhook_url.to_string(),
            currency_code: currency,
            order_total: order.balance_due,
            order_id: order.id.clone(),
        })
    }

    /// Onclick snippet attached to the checkout button; invokes the widget
    /// function the storefront template defines per order.
    pub fn checkout_js(&self, order_id: &OrderId) -> String {
        format!("paylike_checkout_{order_id}(); return false;")
    }
}
