use crate::core::requests::{AddNewsCommand, ListNewsQuery, Request};
use crate::domain::model::NewsItem;
use crate::domain::ports::NewsRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Logic bound to exactly one request type.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R) -> Result<R::Response>;
}

pub struct AddNewsHandler<N: NewsRepository> {
    repository: Arc<N>,
}

impl<N: NewsRepository> AddNewsHandler<N> {
    pub fn new(repository: Arc<N>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<N: NewsRepository + 'static> RequestHandler<AddNewsCommand> for AddNewsHandler<N> {
    async fn handle(&self, request: AddNewsCommand) -> Result<NewsItem> {
        Ok(self.repository.add_news(&request.title, &request.content))
    }
}

pub struct ListNewsHandler<N: NewsRepository> {
    repository: Arc<N>,
}

impl<N: NewsRepository> ListNewsHandler<N> {
    pub fn new(repository: Arc<N>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<N: NewsRepository + 'static> RequestHandler<ListNewsQuery> for ListNewsHandler<N> {
    async fn handle(&self, _request: ListNewsQuery) -> Result<Vec<NewsItem>> {
        Ok(self.repository.all_news())
    }
}
