use crate::domain::model::QuoteRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 收到的報價請求要送去哪裡
#[async_trait]
pub trait QuoteSink: Send + Sync {
    async fn record(&self, request: QuoteRequest) -> Result<()>;
}

/// Opens a generated link. Whether the link actually reaches a mail client
/// or WhatsApp is not observable from here.
pub trait Navigator {
    fn open(&mut self, link: &str, new_context: bool) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn static_dir(&self) -> Option<&str>;
    fn email_recipient(&self) -> &str;
    fn email_subject(&self) -> &str;
    fn whatsapp_base_url(&self) -> &str;
    fn whatsapp_number(&self) -> &str;
}
