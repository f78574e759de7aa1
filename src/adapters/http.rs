//! HTTP endpoint adapter.
//!
//! ```text
//! GET  /api/news   → ListNewsQuery
//! POST /api/news   → AddNewsCommand
//! ```
//!
//! Handlers only translate between JSON and typed requests; every call goes
//! through the [`Mediator`].

use crate::core::mediator::Mediator;
use crate::core::requests::{AddNewsCommand, ListNewsQuery};
use crate::utils::error::{NewsError, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Router state; cheap to clone.
#[derive(Clone)]
pub struct ApiState {
    pub mediator: Arc<Mediator>,
}

#[derive(Debug, Deserialize)]
pub struct AddNewsRequest {
    pub title: String,
    pub content: String,
}

impl From<AddNewsRequest> for AddNewsCommand {
    fn from(req: AddNewsRequest) -> Self {
        AddNewsCommand::new(req.title, req.content)
    }
}

fn json_error(status: StatusCode, code: &str, msg: impl std::fmt::Display) -> Response {
    (status, Json(json!({ "error": code, "message": format!("{msg}") }))).into_response()
}

pub fn build_router(mediator: Arc<Mediator>) -> Router {
    Router::new()
        .route("/api/news", get(list_news).post(add_news))
        .with_state(ApiState { mediator })
}

/// GET /api/news
async fn list_news(State(state): State<ApiState>) -> Response {
    match state.mediator.send(ListNewsQuery).await {
        Ok(items) => {
            debug!("GET /api/news -> {} items", items.len());
            Json(items).into_response()
        }
        Err(e) => {
            error!("❌ List news failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e)
        }
    }
}

/// POST /api/news
async fn add_news(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<AddNewsRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("POST /api/news rejected: {}", rejection.body_text());
            return json_error(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text());
        }
    };

    match state.mediator.send(AddNewsCommand::from(req)).await {
        Ok(item) => {
            debug!("POST /api/news -> created '{}'", item.title);
            Json(item).into_response()
        }
        Err(e) => {
            error!("❌ Add news failed: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e)
        }
    }
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| NewsError::ServerError {
            message: format!("bind failed on {}: {}", addr, e),
        })
}

/// Serves until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("🚀 Listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| NewsError::ServerError {
            message: format!("server error: {}", e),
        })?;

    info!("HTTP server shut down");
    Ok(())
}

/// 等待 Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
