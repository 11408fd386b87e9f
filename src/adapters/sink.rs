use crate::core::{QuoteRequest, QuoteSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;

/// Writes every received quote to the log and nothing else.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

#[async_trait]
impl QuoteSink for LogSink {
    async fn record(&self, request: QuoteRequest) -> Result<()> {
        tracing::info!(
            received_at = %Utc::now().to_rfc3339(),
            "📥 Received quote request"
        );
        tracing::info!("👤 Contact: {}", request.contact_info);
        tracing::info!("📦 Items: {}", request.items);
        Ok(())
    }
}
