#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::links::ContactTargets;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email_address, validate_non_empty_string, validate_path, validate_phone_digits,
    validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Effective settings after merging the TOML file and command line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<String>,
    pub json_logs: bool,
    pub contact: ContactTargets,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            json_logs: false,
            contact: ContactTargets::default(),
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        if let Some(dir) = &self.static_dir {
            validate_path("server.static_dir", dir)?;
        }

        validate_email_address("contact.email_recipient", &self.contact.email_recipient)?;
        validate_non_empty_string("contact.email_subject", &self.contact.email_subject)?;
        validate_url("contact.whatsapp_base_url", &self.contact.whatsapp_base_url)?;
        validate_phone_digits("contact.whatsapp_number", &self.contact.whatsapp_number)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn static_dir(&self) -> Option<&str> {
        self.static_dir.as_deref()
    }

    fn email_recipient(&self) -> &str {
        &self.contact.email_recipient
    }

    fn email_subject(&self) -> &str {
        &self.contact.email_subject
    }

    fn whatsapp_base_url(&self) -> &str {
        &self.contact.whatsapp_base_url
    }

    fn whatsapp_number(&self) -> &str {
        &self.contact.whatsapp_number
    }
}
