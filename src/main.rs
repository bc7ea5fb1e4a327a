use {
    axum::{Router, extract::DefaultBodyLimit, routing::get},
    paylike_gateway::{
        AppState,
        adapters::{
            checkout::checkout_button_handler, paylike::GatewayAdapter,
            webhook::paylike_webhook_handler,
        },
        config::GatewayConfig,
        infra::memory::{MemoryNotificationLog, MemoryOrderStore, MemoryPaymentStore},
        services::webhook_processor::WebhookProcessor,
    },
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = GatewayConfig::from_env();

    let gateway = Arc::new(GatewayAdapter::new(config.clone()));
    if !gateway.enabled() {
        tracing::warn!("gateway is disabled (unsupported currency or missing keys)");
    }

    let orders = Arc::new(MemoryOrderStore::new());
    let payments = Arc::new(MemoryPaymentStore::new());
    let notifications = Arc::new(MemoryNotificationLog::new());
    let processor = Arc::new(WebhookProcessor::new(
        gateway.clone(),
        orders.clone(),
        payments,
        notifications,
    ));

    let state = AppState {
        config,
        gateway,
        orders,
        processor,
    };

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/webhook/paylike", get(paylike_webhook_handler))
        .route("/checkout/{order_id}", get(checkout_button_handler))
        .layer(DefaultBodyLimit::max(16 * 1024)) // notifications are tiny query strings
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on 0.0.0.0:3000");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
