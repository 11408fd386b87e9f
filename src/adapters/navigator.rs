use crate::core::Navigator;
use crate::utils::error::{ConfiguratorError, Result};
use std::io::Write;

/// 交給作業系統預設的處理程式（郵件客戶端、瀏覽器）
#[derive(Debug, Clone, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&mut self, link: &str, new_context: bool) -> Result<()> {
        tracing::debug!("🌐 Opening link (new context: {})", new_context);
        open::that(link).map_err(|e| ConfiguratorError::NavigationError {
            message: e.to_string(),
        })
    }
}

/// Prints the link instead of opening it, for headless terminals.
pub struct PrintNavigator<W: Write> {
    out: W,
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn open(&mut self, link: &str, _new_context: bool) -> Result<()> {
        writeln!(self.out, "🔗 {}", link)?;
        Ok(())
    }
}
