use {
    crate::domain::error::{GatewayError, WebhookError},
    axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
};

/// HTTP rendering of domain errors for the JSON endpoints (checkout).
/// The webhook endpoint never uses this; it always answers with a redirect.
pub enum ApiError {
    Gateway(GatewayError),
    Webhook(WebhookError),
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self::Gateway(err)
    }
}

impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        Self::Webhook(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::Gateway(GatewayError::Disabled) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "gateway_disabled",
                "payment gateway is not available for this store".to_string(),
            ),
            ApiError::Gateway(GatewayError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("transaction {id} not found"),
            ),
            ApiError::Webhook(WebhookError::OrderNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("order {id} not found"),
            ),
            ApiError::Gateway(GatewayError::Provider(err)) => {
                tracing::error!("provider error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "provider_error",
                    "provider request failed".to_string(),
                )
            }
            ApiError::Gateway(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                err.to_string(),
            ),
            ApiError::Webhook(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                err.to_string(),
            ),
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
