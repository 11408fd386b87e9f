use crate::config::AppConfig;
use crate::core::links::ContactTargets;
use crate::utils::error::{ConfiguratorError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 設定檔結構；每個區段與欄位都可省略，省略時使用預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub contact: ContactSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSection {
    pub email_recipient: Option<String>,
    pub email_subject: Option<String>,
    pub whatsapp_base_url: Option<String>,
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfiguratorError::MissingConfigError {
                path: path.as_ref().display().to_string(),
            },
            _ => ConfiguratorError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConfiguratorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WHATSAPP_NUMBER})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_app_config(self) -> AppConfig {
        let defaults = AppConfig::default();
        let default_contact = ContactTargets::default();

        AppConfig {
            host: self.server.host.unwrap_or(defaults.host),
            port: self.server.port.unwrap_or(defaults.port),
            static_dir: self.server.static_dir,
            json_logs: self.logging.json.unwrap_or(defaults.json_logs),
            contact: ContactTargets {
                email_recipient: self
                    .contact
                    .email_recipient
                    .unwrap_or(default_contact.email_recipient),
                email_subject: self
                    .contact
                    .email_subject
                    .unwrap_or(default_contact.email_subject),
                whatsapp_base_url: self
                    .contact
                    .whatsapp_base_url
                    .unwrap_or(default_contact.whatsapp_base_url),
                whatsapp_number: self
                    .contact
                    .whatsapp_number
                    .unwrap_or(default_contact.whatsapp_number),
            },
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_app_config().validate()
    }
}
