use crate::config::{AppConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "casa-configurator")]
#[command(about = "Quote backend for the smart-home configurator")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with the built front-end, served for any non-API path
    #[arg(long)]
    pub static_dir: Option<String>,

    #[arg(long)]
    pub email_recipient: Option<String>,

    #[arg(long)]
    pub whatsapp_number: Option<String>,

    #[arg(long, help = "Log in JSON format")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Where the base settings come from, for the startup log.
    pub fn config_source(&self) -> String {
        match &self.config {
            Some(path) => format!("file {}", path),
            None => "built-in defaults".to_string(),
        }
    }

    /// 先讀設定檔，再套用命令列覆蓋
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_app_config(),
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = Some(dir.clone());
        }
        if let Some(recipient) = &self.email_recipient {
            config.contact.email_recipient = recipient.clone();
        }
        if let Some(number) = &self.whatsapp_number {
            config.contact.whatsapp_number = number.clone();
        }
        if self.json_logs {
            config.json_logs = true;
        }

        Ok(config)
    }
}
