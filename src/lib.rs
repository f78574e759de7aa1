pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::NewsApp;
pub use config::{LogFormat, ServerSettings};
pub use crate::core::mediator::Mediator;
pub use crate::core::requests::{AddNewsCommand, ListNewsQuery, NewsRequest, NewsResponse, RequestKind};
pub use crate::core::store::NewsStore;
pub use domain::model::NewsItem;
pub use utils::error::{NewsError, Result};
