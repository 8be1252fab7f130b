use spin_sdk::{
    http::{IntoResponse, Request, Response},
    http_component,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

pub mod config;
pub mod core;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod selection_deck;
pub mod static_server;
pub mod templates;

use crate::config::Settings;
use crate::core::errors::ApiError;

/// Dispatch a request to its handler. Shared by the Spin component and the
/// native server.
pub fn route(req: &Request, settings: &Settings) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().to_string();
    let path = req.path().to_string();
    let span = tracing::info_span!("request", %request_id, %method, %path);
    let _guard = span.enter();

    let result = match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("GET", "/catalog") => handlers::catalog_page(req, settings),
        ("GET", "/api/catalog/normalize") => handlers::normalize_query(req, settings),
        ("GET", "/health") => handlers::health(),
        ("GET", p) if p.starts_with(static_server::STATIC_PREFIX) => static_server::serve_static(p),
        _ => Ok(ApiError::NotFound("No route found".to_string()).into()),
    };

    let response = result.unwrap_or_else(|err| ApiError::from(err).into());
    tracing::info!(status = *response.status(), "handled");
    response
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `catalog=info,info`).
/// Later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("catalog=info,info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// === Component entrypoint ===
#[http_component]
fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
    init_logging();
    let settings = Settings::from_env();
    Ok(route(&req, &settings))
}
