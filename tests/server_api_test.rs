use anyhow::Result;
use async_trait::async_trait;
use casa_configurator::adapters::http::{router, serve, AppState, MAX_QUOTE_BODY_BYTES};
use casa_configurator::core::{QuoteRequest, QuoteSink};
use casa_configurator::{Catalog, QuoteClient, SelectionStore};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// 記錄收到的請求，方便驗證
#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<QuoteRequest>>,
}

#[async_trait]
impl QuoteSink for RecordingSink {
    async fn record(&self, request: QuoteRequest) -> casa_configurator::Result<()> {
        self.received.lock().unwrap().push(request);
        Ok(())
    }
}

struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn start_server(sink: Arc<dyn QuoteSink>, static_dir: Option<&str>) -> Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let app = router(AppState::new(sink), static_dir);
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let _ = serve(listener, app, async {
            let _ = rx.await;
        })
        .await;
    });

    Ok(TestServer {
        base_url: format!("http://{}", address),
        shutdown: Some(tx),
    })
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let server = start_server(Arc::new(RecordingSink::default()), None).await?;

    let response = reqwest::get(format!("{}/api/health", server.base_url)).await?;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_empty_object_still_succeeds() -> Result<()> {
    let sink = Arc::new(RecordingSink::default());
    let server = start_server(sink.clone(), None).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/submit-quote", server.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Orçamento recebido com sucesso!");

    let received = sink.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].items.is_null());
    Ok(())
}

#[tokio::test]
async fn test_malformed_and_missing_bodies_succeed() -> Result<()> {
    let sink = Arc::new(RecordingSink::default());
    let server = start_server(sink.clone(), None).await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/submit-quote", server.base_url);

    let no_body = client.post(&url).send().await?;
    assert_eq!(no_body.status(), 200);

    let not_json = client
        .post(&url)
        .header("Content-Type", "text/plain")
        .body("olá, quero um orçamento")
        .send()
        .await?;
    assert_eq!(not_json.status(), 200);
    let body: serde_json::Value = not_json.json().await?;
    assert_eq!(body["success"], true);

    assert_eq!(sink.received.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_refused() -> Result<()> {
    let sink = Arc::new(RecordingSink::default());
    let server = start_server(sink.clone(), None).await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/submit-quote", server.base_url);

    let notes = "x".repeat(MAX_QUOTE_BODY_BYTES);
    let oversized = client
        .post(&url)
        .json(&serde_json::json!({"items": [], "contactInfo": {"notes": notes}}))
        .send()
        .await?;
    assert_eq!(oversized.status(), 413);
    assert!(sink.received.lock().unwrap().is_empty());

    let notes = "x".repeat(MAX_QUOTE_BODY_BYTES / 2);
    let within_limit = client
        .post(&url)
        .json(&serde_json::json!({"items": [], "contactInfo": {"notes": notes}}))
        .send()
        .await?;
    assert_eq!(within_limit.status(), 200);
    assert_eq!(sink.received.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_client_submits_selection() -> Result<()> {
    let sink = Arc::new(RecordingSink::default());
    let server = start_server(sink.clone(), None).await?;

    let mut selection = SelectionStore::new(Catalog::builtin());
    selection.increment("smart_lock")?;
    selection.increment("camera_outdoor")?;
    selection.increment("camera_outdoor")?;
    selection.contact_mut().name = "Marta".to_string();

    let client = QuoteClient::new(&server.base_url)?;
    assert_eq!(client.health().await?.status, "ok");

    let ack = client.submit(&selection.to_quote_request()).await?;
    assert!(ack.success);

    let received = sink.received.lock().unwrap();
    assert_eq!(received[0].contact_info["name"], "Marta");
    let items = received[0].items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "camera_outdoor");
    assert_eq!(items[0]["quantity"], 2);
    Ok(())
}

#[tokio::test]
async fn test_static_fallback() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("index.html"), "<h1>Casa</h1>").await?;
    let dir = temp_dir.path().to_str().unwrap().to_string();

    let server = start_server(Arc::new(RecordingSink::default()), Some(&dir)).await?;

    let page = reqwest::get(format!("{}/index.html", server.base_url)).await?;
    assert_eq!(page.status(), 200);
    assert_eq!(page.text().await?, "<h1>Casa</h1>");

    // API 路由優先於靜態檔案
    let health = reqwest::get(format!("{}/api/health", server.base_url)).await?;
    assert_eq!(health.status(), 200);
    Ok(())
}
