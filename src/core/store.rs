use crate::domain::model::NewsItem;
use crate::domain::ports::NewsRepository;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const DEFAULT_NEWS_TITLE: &str = "News 1";
pub const DEFAULT_NEWS_CONTENT: &str = "This is News 1";

/// In-memory, append-only news store.
///
/// One `RwLock` guards the sequence. It is held only while pushing or
/// copying, never across a handler call.
#[derive(Debug, Default)]
pub struct NewsStore {
    news: RwLock<Vec<NewsItem>>,
}

impl NewsStore {
    /// 空的儲存區
    pub fn new() -> Self {
        Self::default()
    }

    /// 啟動時使用：預先放入一筆預設新聞
    pub fn seeded() -> Self {
        let store = Self::new();
        store.append(DEFAULT_NEWS_TITLE, DEFAULT_NEWS_CONTENT);
        store
    }

    pub fn append(&self, title: &str, content: &str) -> NewsItem {
        let item = NewsItem::new(title, content);
        self.write().push(item.clone());
        tracing::debug!("Appended news item '{}'", item.title);
        item
    }

    /// Returns a copy; callers cannot reach the internal vector.
    pub fn list_all(&self) -> Vec<NewsItem> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // push 不會留下半寫入的狀態，中毒的鎖可以直接沿用
    fn read(&self) -> RwLockReadGuard<'_, Vec<NewsItem>> {
        self.news.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<NewsItem>> {
        self.news.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NewsRepository for NewsStore {
    fn add_news(&self, title: &str, content: &str) -> NewsItem {
        self.append(title, content)
    }

    fn all_news(&self) -> Vec<NewsItem> {
        self.list_all()
    }
}
