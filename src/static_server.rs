use mime_guess::from_path;
use rust_embed::RustEmbed;
use spin_sdk::http::Response;

use crate::core::errors::ApiError;

#[derive(RustEmbed)]
#[folder = "static"]
#[exclude = "*.html"]
struct Assets;

pub const STATIC_PREFIX: &str = "/static/";

pub fn serve_static(path: &str) -> anyhow::Result<Response> {
    let file_path = path.trim_start_matches(STATIC_PREFIX);

    let file = match Assets::get(file_path) {
        Some(file) => file,
        None => return Ok(ApiError::NotFound("File not found".to_string()).into()),
    };

    let mime = from_path(file_path).first_or_octet_stream();

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", mime.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(file.data.to_vec())
        .build())
}
