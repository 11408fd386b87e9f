use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("Unknown device id: {id}")]
    UnknownDevice { id: String },

    #[error("Cannot submit an empty selection")]
    EmptySelection,

    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition { action: String, state: String },

    #[error("Failed to open link: {message}")]
    NavigationError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {path}")]
    MissingConfigError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Flow,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConfiguratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDevice { .. } => ErrorCategory::Selection,
            Self::EmptySelection | Self::InvalidTransition { .. } => ErrorCategory::Flow,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::NavigationError { .. } | Self::HttpError(_) => ErrorCategory::Network,
            Self::IoError(_) | Self::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者操作層級的錯誤，流程可以繼續
            Self::EmptySelection | Self::InvalidTransition { .. } | Self::NavigationError { .. } => {
                ErrorSeverity::Low
            }
            Self::UnknownDevice { .. } | Self::HttpError(_) => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::ServerError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UnknownDevice { .. } => "Use `list` to see the valid device ids",
            Self::EmptySelection => "Add at least one device before submitting",
            Self::InvalidTransition { .. } => "Check the current view and use the matching action",
            Self::NavigationError { .. } => "Copy the printed link and open it manually",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            Self::MissingConfigError { .. } => {
                "Check the --config path or drop the flag to use the defaults"
            }
            Self::IoError(_) => "Check file paths, permissions and that the port is free",
            Self::HttpError(_) => "Check that the backend is running and reachable",
            Self::ServerError { .. } => "Check the server logs and restart the service",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnknownDevice { id } => format!("'{}' is not a device in the catalog", id),
            Self::EmptySelection => "Ainda não selecionou nenhum equipamento.".to_string(),
            Self::InvalidTransition { action, .. } => {
                format!("'{}' is not available right now", action)
            }
            Self::HttpError(e) => format!("Could not reach the quote backend: {}", e),
            other => other.to_string(),
        }
    }

    pub(crate) fn invalid_transition(action: &str, state: impl std::fmt::Debug) -> Self {
        Self::InvalidTransition {
            action: action.to_string(),
            state: format!("{:?}", state),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;
