use crate::core::handlers::RequestHandler;
use crate::core::requests::{NewsRequest, NewsResponse, Request, RequestKind};
use crate::utils::error::{NewsError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Object-safe view of a typed handler, keyed by [`RequestKind`].
#[async_trait]
trait DispatchHandler: Send + Sync {
    async fn dispatch(&self, request: NewsRequest) -> Result<NewsResponse>;
}

struct TypedHandler<R, H> {
    handler: H,
    _request: PhantomData<fn(R)>,
}

#[async_trait]
impl<R, H> DispatchHandler for TypedHandler<R, H>
where
    R: Request,
    H: RequestHandler<R> + 'static,
{
    async fn dispatch(&self, request: NewsRequest) -> Result<NewsResponse> {
        let kind = request.kind();
        let typed = R::from_request(request).ok_or(NewsError::HandlerMismatch { kind })?;
        let response = self.handler.handle(typed).await?;
        Ok(R::into_response(response))
    }
}

/// Routes each request to the single handler registered for its kind.
///
/// The table is filled once at startup; after [`Mediator::ensure_complete`]
/// succeeds every [`RequestKind`] has exactly one handler.
#[derive(Default)]
pub struct Mediator {
    handlers: HashMap<RequestKind, Box<dyn DispatchHandler>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R, H>(&mut self, handler: H) -> Result<()>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        if self.handlers.contains_key(&R::KIND) {
            return Err(NewsError::DuplicateHandler { kind: R::KIND });
        }

        self.handlers.insert(
            R::KIND,
            Box::new(TypedHandler {
                handler,
                _request: PhantomData,
            }),
        );
        tracing::debug!("Registered handler for {}", R::KIND);
        Ok(())
    }

    pub fn is_registered(&self, kind: RequestKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn registered_kinds(&self) -> Vec<RequestKind> {
        let mut kinds: Vec<RequestKind> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// 啟動時檢查：每一種請求都必須有處理器
    pub fn ensure_complete(&self) -> Result<()> {
        match RequestKind::ALL.iter().find(|kind| !self.is_registered(**kind)) {
            Some(kind) => Err(NewsError::HandlerNotRegistered { kind: *kind }),
            None => Ok(()),
        }
    }

    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response> {
        let response = self.dispatch(request.into_request()).await?;
        R::from_response(response)
    }

    pub async fn dispatch(&self, request: NewsRequest) -> Result<NewsResponse> {
        let kind = request.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(NewsError::HandlerNotRegistered { kind })?;

        tracing::debug!("Dispatching {}", kind);
        handler.dispatch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handlers::{AddNewsHandler, ListNewsHandler};
    use crate::core::requests::{AddNewsCommand, ListNewsQuery};
    use crate::core::store::NewsStore;
    use crate::domain::model::NewsItem;
    use std::sync::Arc;

    fn full_mediator(store: Arc<NewsStore>) -> Mediator {
        let mut mediator = Mediator::new();
        mediator
            .register::<ListNewsQuery, _>(ListNewsHandler::new(Arc::clone(&store)))
            .unwrap();
        mediator
            .register::<AddNewsCommand, _>(AddNewsHandler::new(store))
            .unwrap();
        mediator
    }

    struct FixedListHandler;

    #[async_trait]
    impl RequestHandler<ListNewsQuery> for FixedListHandler {
        async fn handle(&self, _request: ListNewsQuery) -> Result<Vec<NewsItem>> {
            Ok(vec![NewsItem::new("fixed", "list")])
        }
    }

    #[tokio::test]
    async fn test_send_routes_to_matching_handler() {
        let mediator = full_mediator(Arc::new(NewsStore::seeded()));

        let created = mediator.send(AddNewsCommand::new("T1", "C1")).await.unwrap();
        assert_eq!(created, NewsItem::new("T1", "C1"));

        let all = mediator.send(ListNewsQuery).await.unwrap();
        assert_eq!(
            all,
            vec![
                NewsItem::new("News 1", "This is News 1"),
                NewsItem::new("T1", "C1"),
            ]
        );
    }

    #[tokio::test]
    async fn test_dispatch_with_sum_type() {
        let mediator = full_mediator(Arc::new(NewsStore::new()));

        let response = mediator
            .dispatch(NewsRequest::AddNews(AddNewsCommand::new("A", "B")))
            .await
            .unwrap();
        assert_eq!(response, NewsResponse::News(NewsItem::new("A", "B")));

        let response = mediator
            .dispatch(NewsRequest::ListNews(ListNewsQuery))
            .await
            .unwrap();
        assert_eq!(
            response,
            NewsResponse::NewsList(vec![NewsItem::new("A", "B")])
        );
    }

    #[tokio::test]
    async fn test_unregistered_request_fails() {
        let mut mediator = Mediator::new();
        mediator
            .register::<ListNewsQuery, _>(ListNewsHandler::new(Arc::new(NewsStore::new())))
            .unwrap();

        let result = mediator.send(AddNewsCommand::new("T", "C")).await;
        assert!(matches!(
            result,
            Err(NewsError::HandlerNotRegistered {
                kind: RequestKind::AddNews
            })
        ));
    }

    #[tokio::test]
    async fn test_empty_mediator_fails_every_request() {
        let mediator = Mediator::new();
        assert!(mediator.send(ListNewsQuery).await.is_err());
        assert!(mediator.send(AddNewsCommand::new("T", "C")).await.is_err());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let store = Arc::new(NewsStore::new());
        let mut mediator = full_mediator(Arc::clone(&store));

        let result = mediator.register::<AddNewsCommand, _>(AddNewsHandler::new(store));
        assert!(matches!(
            result,
            Err(NewsError::DuplicateHandler {
                kind: RequestKind::AddNews
            })
        ));
    }

    #[test]
    fn test_ensure_complete() {
        let mut mediator = Mediator::new();
        assert!(matches!(
            mediator.ensure_complete(),
            Err(NewsError::HandlerNotRegistered {
                kind: RequestKind::ListNews
            })
        ));

        mediator.register::<ListNewsQuery, _>(FixedListHandler).unwrap();
        assert!(matches!(
            mediator.ensure_complete(),
            Err(NewsError::HandlerNotRegistered {
                kind: RequestKind::AddNews
            })
        ));

        let full = full_mediator(Arc::new(NewsStore::new()));
        assert!(full.ensure_complete().is_ok());
        assert_eq!(full.registered_kinds(), RequestKind::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_mis_keyed_handler_reports_mismatch() {
        let handler: Box<dyn DispatchHandler> = Box::new(TypedHandler::<ListNewsQuery, _> {
            handler: FixedListHandler,
            _request: PhantomData,
        });

        let result = handler
            .dispatch(NewsRequest::AddNews(AddNewsCommand::new("T", "C")))
            .await;

        match result {
            Err(err @ NewsError::HandlerMismatch { kind: RequestKind::AddNews }) => {
                assert_eq!(err.exit_code(), 3);
            }
            other => panic!("expected handler mismatch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_handler_is_used() {
        let mut mediator = Mediator::new();
        mediator.register::<ListNewsQuery, _>(FixedListHandler).unwrap();

        let items = mediator.send(ListNewsQuery).await.unwrap();
        assert_eq!(items, vec![NewsItem::new("fixed", "list")]);
    }
}
