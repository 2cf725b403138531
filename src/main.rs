use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use api_shared::CounselService;
use heartguide_responder::{timeout_from_env_value, GeminiConfig, GeminiResponder};

/// Main entry point for the HeartGuide backend
///
/// Resolves configuration once, then serves the REST API until interrupted.
///
/// # Environment Variables
/// - `HEARTGUIDE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `GEMINI_API_KEY`: hosted model key; when unset every analysis uses the offline fallback
/// - `GEMINI_MODEL`: model id (default: "gemini-3-flash-preview")
/// - `GEMINI_API_BASE`: API base URL (default: the public v1beta endpoint)
/// - `HEARTGUIDE_REMOTE_TIMEOUT_SECS`: seconds to wait for the hosted model (default: 30)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("heartguide=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("api_shared=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HEARTGUIDE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let gemini_cfg = GeminiConfig::new(
        std::env::var("GEMINI_API_KEY").ok(),
        std::env::var("GEMINI_MODEL").ok(),
        std::env::var("GEMINI_API_BASE").ok(),
    )?;
    let remote_timeout =
        timeout_from_env_value(std::env::var("HEARTGUIDE_REMOTE_TIMEOUT_SECS").ok())?;

    if gemini_cfg.api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; analyses will use the offline fallback");
    }
    tracing::info!(
        model = gemini_cfg.model(),
        timeout_secs = remote_timeout.as_secs(),
        "++ Starting HeartGuide REST on {}",
        addr
    );

    let responder = Arc::new(GeminiResponder::new(gemini_cfg));
    let app = api_rest::router(AppState {
        counsel: CounselService::new(responder, remote_timeout),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HeartGuide REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
