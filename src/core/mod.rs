pub mod flow;
pub mod links;
pub mod selection;

pub use crate::domain::catalog::Catalog;
pub use crate::domain::model::{Category, ContactDraft, Device, QuoteAck, QuoteRequest};
pub use crate::domain::ports::{ConfigProvider, Navigator, QuoteSink};
pub use crate::utils::error::Result;
