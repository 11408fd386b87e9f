use crate::config::AppConfig;
use crate::core::{ConfigProvider, QuoteAck, QuoteRequest, QuoteSink};
use crate::domain::model::HealthStatus;
use crate::utils::error::{ConfiguratorError, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

pub const SUBMIT_QUOTE_PATH: &str = "/api/submit-quote";
pub const HEALTH_PATH: &str = "/api/health";
pub const ACK_MESSAGE: &str = "Orçamento recebido com sucesso!";
/// Larger submit bodies are refused with `413 Payload Too Large`.
pub const MAX_QUOTE_BODY_BYTES: usize = 100 * 1024;

/// Shared, read-only state of the quote backend.
#[derive(Clone)]
pub struct AppState {
    sink: Arc<dyn QuoteSink>,
    ack_message: Arc<str>,
}

impl AppState {
    pub fn new(sink: Arc<dyn QuoteSink>) -> Self {
        Self {
            sink,
            ack_message: Arc::from(ACK_MESSAGE),
        }
    }
}

pub fn router(state: AppState, static_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route(SUBMIT_QUOTE_PATH, post(submit_quote))
        .route(HEALTH_PATH, get(health))
        .layer(DefaultBodyLimit::max(MAX_QUOTE_BODY_BYTES))
        .with_state(state);

    match static_dir {
        Some(dir) => {
            tracing::info!("📂 Serving static files from: {}", dir);
            api.fallback_service(ServeDir::new(dir))
        }
        None => api,
    }
}

/// 上限內的任何 body 都接受：空的、不是 JSON 的、欄位缺少的都一樣回成功
fn parse_quote(body: &[u8]) -> QuoteRequest {
    if body.iter().all(u8::is_ascii_whitespace) {
        return QuoteRequest::default();
    }

    match serde_json::from_slice::<QuoteRequest>(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(
                "⚠️ Unparsable quote payload ({}): {}",
                e,
                String::from_utf8_lossy(body)
            );
            QuoteRequest::default()
        }
    }
}

async fn submit_quote(State(state): State<AppState>, body: Bytes) -> Json<QuoteAck> {
    let request = parse_quote(&body);

    if let Err(e) = state.sink.record(request).await {
        tracing::error!("❌ Failed to record quote: {}", e);
    }

    Json(QuoteAck {
        success: true,
        message: state.ack_message.to_string(),
    })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ConfiguratorError::ServerError {
            message: e.to_string(),
        })
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn run<F>(config: &AppConfig, sink: Arc<dyn QuoteSink>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("🚀 Server running on http://{}", address);

    let app = router(AppState::new(sink), config.static_dir());
    serve(listener, app, shutdown).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown requested");
}
