use {
    crate::AppState,
    crate::adapters::api_errors::ApiError,
    crate::adapters::paylike::{CheckoutContext, CheckoutParams},
    crate::domain::{error::WebhookError, id::OrderId, ports::OrderStore},
    axum::{
        Json,
        extract::{Path, State},
    },
    serde::Serialize,
};

/// Everything the storefront template needs to render the purchase button:
/// the SDK script (once per render), the onclick hook, and the widget
/// parameters.
#[derive(Debug, Serialize)]
pub struct CheckoutButton {
    pub sdk_script: Option<&'static str>,
    pub onclick: String,
    pub params: CheckoutParams,
}

pub async fn checkout_button_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<CheckoutButton>, ApiError> {
    let order_id = OrderId::new(order_id);
    let order = state
        .orders
        .get(&order_id)
        .await
        .ok_or_else(|| WebhookError::OrderNotFound(order_id.clone()))?;

    let webhook_url = state.config.webhook_url(&order.id);
    let params = state.gateway.checkout_params(&order, &webhook_url)?;

    let mut ctx = CheckoutContext::new();
    Ok(Json(CheckoutButton {
        sdk_script: ctx.sdk_script(),
        onclick: state.gateway.checkout_js(&order.id),
        params,
    }))
}
