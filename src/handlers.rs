use spin_sdk::http::{Request, Response};

use crate::config::Settings;
use crate::core::helpers::{html_response, json_response, now_iso, redirect, with_query};
use crate::core::query_params::QueryParams;
use crate::models::models::NormalizeResponse;
use crate::normalizer::normalize;
use crate::templates::render_catalog_page;

/// Serve the catalog page, redirecting first when the query needs normalizing.
pub fn catalog_page(req: &Request, settings: &Settings) -> anyhow::Result<Response> {
    let current = req.query().trim_start_matches('?');
    let normalized = normalize(current, &settings.flags, &settings.catalog);

    if normalized != current {
        let location = with_query(req.path(), &normalized);
        tracing::debug!(from = %current, to = %normalized, "redirecting to normalized catalog query");
        return Ok(redirect(&location));
    }

    let params = QueryParams::parse(&normalized);
    let html = render_catalog_page(&settings.catalog, req.path(), &params)?;
    Ok(html_response(html))
}

pub fn normalize_query(req: &Request, settings: &Settings) -> anyhow::Result<Response> {
    let current = req.query().trim_start_matches('?');
    let normalized = normalize(current, &settings.flags, &settings.catalog);

    let body = NormalizeResponse {
        changed: normalized != current,
        params: QueryParams::parse(&normalized).to_map(),
        search: normalized,
    };
    Ok(json_response(200, &body))
}

pub fn health() -> anyhow::Result<Response> {
    Ok(json_response(
        200,
        &serde_json::json!({ "status": "ok", "time": now_iso() }),
    ))
}
