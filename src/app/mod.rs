use crate::core::handlers::{AddNewsHandler, ListNewsHandler};
use crate::core::mediator::Mediator;
use crate::core::requests::{AddNewsCommand, ListNewsQuery};
use crate::core::store::NewsStore;
use crate::utils::error::Result;
use std::sync::Arc;

/// 已組裝完成的服務：儲存區 + 分派器
pub struct NewsApp {
    store: Arc<NewsStore>,
    mediator: Arc<Mediator>,
}

impl NewsApp {
    /// Startup wiring with the seeded store.
    pub fn bootstrap() -> Result<Self> {
        Self::with_store(Arc::new(NewsStore::seeded()))
    }

    /// Registers one handler per request kind and fails fast if the
    /// dispatch table is incomplete or has duplicates.
    pub fn with_store(store: Arc<NewsStore>) -> Result<Self> {
        let mut mediator = Mediator::new();
        mediator.register::<ListNewsQuery, _>(ListNewsHandler::new(Arc::clone(&store)))?;
        mediator.register::<AddNewsCommand, _>(AddNewsHandler::new(Arc::clone(&store)))?;
        mediator.ensure_complete()?;

        tracing::info!(
            "Mediator ready with {} handlers, store holds {} items",
            mediator.registered_kinds().len(),
            store.len()
        );

        Ok(Self {
            store,
            mediator: Arc::new(mediator),
        })
    }

    pub fn mediator(&self) -> Arc<Mediator> {
        Arc::clone(&self.mediator)
    }

    pub fn store(&self) -> &Arc<NewsStore> {
        &self.store
    }
}
