use email_writer::{config, gemini::GeminiClient, service::ReplyService};

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded email writer config");
    tracing::info!("Configured generation API: {:?}", cfg.gemini);

    // Setup service
    let client = GeminiClient::new(cfg.gemini).unwrap_or_else(|e| {
        tracing::error!("Failed to create HTTP client: {e}");
        panic!("failed to create HTTP client: {e}");
    });
    let service = Arc::new(ReplyService::new(client));

    // Setup router
    let router = email_writer::app(service);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to read local address");

    tracing::info!("Email writer starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
