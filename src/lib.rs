pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{client::QuoteClient, sink::LogSink};
pub use crate::config::AppConfig;
pub use crate::core::{
    flow::{ConfiguratorSession, SubmitChannel, View},
    links::{ContactTargets, LinkGenerator},
    selection::SelectionStore,
    Catalog,
};
pub use crate::utils::error::{ConfiguratorError, Result};
