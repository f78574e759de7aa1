use crate::domain::model::NewsItem;

/// Storage port shared by every handler.
///
/// Implementations are append-only: items are never updated or removed.
pub trait NewsRepository: Send + Sync {
    fn add_news(&self, title: &str, content: &str) -> NewsItem;

    /// Snapshot of every item in insertion order.
    fn all_news(&self) -> Vec<NewsItem>;
}
