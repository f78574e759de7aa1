use crate::domain::model::NewsItem;
use crate::utils::error::{NewsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of every request the mediator can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestKind {
    ListNews,
    AddNews,
}

impl RequestKind {
    pub const ALL: [RequestKind; 2] = [RequestKind::ListNews, RequestKind::AddNews];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::ListNews => "ListNewsQuery",
            RequestKind::AddNews => "AddNewsCommand",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 查詢：取得全部新聞
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListNewsQuery;

/// 命令：新增一筆新聞
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddNewsCommand {
    pub title: String,
    pub content: String,
}

impl AddNewsCommand {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsRequest {
    ListNews(ListNewsQuery),
    AddNews(AddNewsCommand),
}

impl NewsRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            NewsRequest::ListNews(_) => RequestKind::ListNews,
            NewsRequest::AddNews(_) => RequestKind::AddNews,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsResponse {
    NewsList(Vec<NewsItem>),
    News(NewsItem),
}

/// A typed request bound to one [`RequestKind`] and one response type.
///
/// `into_request` and `from_response` move values in and out of the
/// closed [`NewsRequest`]/[`NewsResponse`] sum types the mediator routes.
pub trait Request: Send + Sized + 'static {
    type Response: Send + 'static;

    const KIND: RequestKind;

    fn into_request(self) -> NewsRequest;

    fn from_request(request: NewsRequest) -> Option<Self>;

    fn into_response(response: Self::Response) -> NewsResponse;

    fn from_response(response: NewsResponse) -> Result<Self::Response>;
}

impl Request for ListNewsQuery {
    type Response = Vec<NewsItem>;

    const KIND: RequestKind = RequestKind::ListNews;

    fn into_request(self) -> NewsRequest {
        NewsRequest::ListNews(self)
    }

    fn from_request(request: NewsRequest) -> Option<Self> {
        match request {
            NewsRequest::ListNews(query) => Some(query),
            _ => None,
        }
    }

    fn into_response(response: Self::Response) -> NewsResponse {
        NewsResponse::NewsList(response)
    }

    fn from_response(response: NewsResponse) -> Result<Self::Response> {
        match response {
            NewsResponse::NewsList(items) => Ok(items),
            _ => Err(NewsError::UnexpectedResponse { kind: Self::KIND }),
        }
    }
}

impl Request for AddNewsCommand {
    type Response = NewsItem;

    const KIND: RequestKind = RequestKind::AddNews;

    fn into_request(self) -> NewsRequest {
        NewsRequest::AddNews(self)
    }

    fn from_request(request: NewsRequest) -> Option<Self> {
        match request {
            NewsRequest::AddNews(command) => Some(command),
            _ => None,
        }
    }

    fn into_response(response: Self::Response) -> NewsResponse {
        NewsResponse::News(response)
    }

    fn from_response(response: NewsResponse) -> Result<Self::Response> {
        match response {
            NewsResponse::News(item) => Ok(item),
            _ => Err(NewsError::UnexpectedResponse { kind: Self::KIND }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_kinds() {
        assert_eq!(ListNewsQuery.into_request().kind(), RequestKind::ListNews);
        assert_eq!(
            AddNewsCommand::new("T", "C").into_request().kind(),
            RequestKind::AddNews
        );
        assert_eq!(ListNewsQuery::KIND, RequestKind::ListNews);
        assert_eq!(AddNewsCommand::KIND, RequestKind::AddNews);
    }

    #[test]
    fn test_from_request_rejects_other_variant() {
        assert!(AddNewsCommand::from_request(NewsRequest::ListNews(ListNewsQuery)).is_none());
        assert!(ListNewsQuery::from_request(NewsRequest::AddNews(AddNewsCommand::new("a", "b"))).is_none());
    }

    #[test]
    fn test_mismatched_response_is_an_error() {
        let result = AddNewsCommand::from_response(NewsResponse::NewsList(vec![]));
        assert!(matches!(
            result,
            Err(NewsError::UnexpectedResponse {
                kind: RequestKind::AddNews
            })
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RequestKind::ListNews.to_string(), "ListNewsQuery");
        assert_eq!(RequestKind::AddNews.to_string(), "AddNewsCommand");
    }
}
