use serde::Serialize;
use spin_sdk::http::Response;

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn json_response<T: Serialize>(status: u16, body: &T) -> Response {
    let bytes = serde_json::to_vec(body).unwrap_or_default();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(bytes)
        .build()
}

pub fn html_response(html: String) -> Response {
    Response::builder()
        .status(http::StatusCode::OK.as_u16())
        .header("Content-Type", "text/html; charset=utf-8")
        .body(html.into_bytes())
        .build()
}

pub fn redirect(location: &str) -> Response {
    Response::builder()
        .status(http::StatusCode::FOUND.as_u16())
        .header("Location", location)
        .body(Vec::new())
        .build()
}

/// `path` plus `?query` when the query is non-empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
