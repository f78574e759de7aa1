pub mod handlers;
pub mod mediator;
pub mod requests;
pub mod store;

pub use crate::domain::model::NewsItem;
pub use crate::domain::ports::NewsRepository;
pub use crate::utils::error::Result;
