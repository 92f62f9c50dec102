//! Preview content API
//!
//! A read-only HTTP surface over the content tree, for previewing exactly
//! what the site build will consume. Content is fixed at build time, so
//! every route is a GET; there is nothing to create, update, or delete.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::content::schema::{Newsletter, Person, SiteContent, SocialLink};
use crate::content::site::{Page, PageSummary, find_page, page_slugs, site, suggest_page};
use crate::error::ServerError;

/// Default bind address for the preview server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

type SharedContent = Arc<SiteContent>;

// ============================================================================
// Server
// ============================================================================

/// Serves the content API until Ctrl+C.
///
/// # Errors
///
/// Returns a [`ServerError`] if the listener cannot bind or the server
/// loop fails.
pub async fn serve(addr: SocketAddr) -> Result<(), ServerError> {
    let content: SharedContent = Arc::new(site().clone());
    let router = build_router(content);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::BindFailed { addr, source })?;
    let bound_addr = listener.local_addr().map_err(ServerError::Serve)?;
    info!(%bound_addr, "preview server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    debug!("preview server shut down");
    Ok(())
}

/// Resolves the shutdown future on Ctrl+C.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

// ============================================================================
// Axum Router
// ============================================================================

/// Builds the axum router over a content tree.
fn build_router(content: SharedContent) -> Router {
    Router::new()
        .route("/healthz", get(handle_health))
        .route("/api/content", get(handle_content))
        .route("/api/content/person", get(handle_person))
        .route("/api/content/social", get(handle_social))
        .route("/api/content/newsletter", get(handle_newsletter))
        .route("/api/content/pages", get(handle_pages))
        .route("/api/content/pages/{slug}", get(handle_page))
        .with_state(content)
}

/// `GET /healthz` handler.
async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/content` handler: the full tree.
async fn handle_content(State(content): State<SharedContent>) -> Json<SiteContent> {
    Json((*content).clone())
}

/// `GET /api/content/person` handler.
async fn handle_person(State(content): State<SharedContent>) -> Json<Person> {
    Json(content.person.clone())
}

/// `GET /api/content/social` handler.
async fn handle_social(State(content): State<SharedContent>) -> Json<Vec<SocialLink>> {
    Json(content.social.clone())
}

/// `GET /api/content/newsletter` handler.
async fn handle_newsletter(State(content): State<SharedContent>) -> Json<Newsletter> {
    Json(content.newsletter.clone())
}

/// `GET /api/content/pages` handler: listing rows for every page.
async fn handle_pages(State(content): State<SharedContent>) -> Json<Vec<PageSummary>> {
    Json(Page::all().iter().map(|p| content.summary(*p)).collect())
}

/// `GET /api/content/pages/{slug}` handler.
///
/// Unknown slugs get a 404 with the valid slugs and, when the input looks
/// like a typo, a `didYouMean` suggestion.
async fn handle_page(
    State(content): State<SharedContent>,
    Path(slug): Path<String>,
) -> Response {
    let Some(page) = find_page(&slug) else {
        let mut body = json!({
            "error": format!("unknown page '{slug}'"),
            "validSlugs": page_slugs(),
        });
        if let Some(suggestion) = suggest_page(&slug) {
            body["didYouMean"] = serde_json::Value::String(suggestion);
        }
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    };

    match content.page_value(page) {
        Ok(value) => Json(value).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parses a bind address string into a socket address.
///
/// Accepts:
/// - `:3000` → `127.0.0.1:3000`
/// - `3000` → `127.0.0.1:3000`
/// - `1.2.3.4:3000` → as-is
///
/// # Errors
///
/// Returns [`ServerError::InvalidBindAddr`] if the result cannot be parsed
/// as a socket address.
pub fn parse_bind_addr(input: &str) -> Result<SocketAddr, ServerError> {
    let addr = if input.starts_with(':') {
        format!("127.0.0.1{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("127.0.0.1:{input}")
    } else {
        input.to_string()
    };
    addr.parse().map_err(|e: std::net::AddrParseError| {
        ServerError::InvalidBindAddr {
            addr: input.to_string(),
            message: e.to_string(),
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
