use {
    crate::AppState,
    crate::domain::{
        id::{OrderId, TransactionId},
        webhook::WebhookEvent,
    },
    crate::services::webhook_processor::DispatchOutcome,
    axum::{
        extract::{Query, State},
        response::Redirect,
    },
    serde::{Deserialize, Serialize},
};

use super::paylike::GATEWAY_NAME;

/// Raw query parameters of the provider callback. Everything defaults to
/// empty so a malformed request still reaches the verification gates and
/// gets logged there instead of dying in deserialization.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookParams {
    #[serde(default)]
    pub txn_id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub shop_test_ipn: Option<String>,
}

/// Inbound notification endpoint. The buyer's browser lands here after the
/// hosted checkout completes, so every path out is a redirect back to the
/// storefront.
#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(txn_id = %params.txn_id, order_id = %params.order_id)
)]
pub async fn paylike_webhook_handler(
    State(state): State<AppState>,
    Query(params): Query<WebhookParams>,
) -> Redirect {
    let raw_payload = serde_json::to_value(&params).unwrap_or(serde_json::Value::Null);
    let event = WebhookEvent::authorized(
        TransactionId::new(params.txn_id),
        OrderId::new(params.order_id),
        params.shop_test_ipn.is_some(),
        raw_payload,
    );

    // Gate failures are logged inside the processor; here we only steer
    // the buyer.
    let verified = match state.processor.verify(event).await {
        Ok(verified) => verified,
        Err(_) => return Redirect::to(&state.config.error_url()),
    };

    match state.processor.dispatch(verified).await {
        Ok(DispatchOutcome::Completed) => {
            Redirect::to(&state.config.thanks_url(GATEWAY_NAME))
        }
        Ok(DispatchOutcome::PaymentError(_)) | Err(_) => {
            Redirect::to(&state.config.error_url())
        }
    }
}
