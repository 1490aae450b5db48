//! Request handlers for the expand API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::ExpandError;
use crate::expand::{validate_url_format, Expander};

/// Query parameters accepted by `/api/expand`.
#[derive(Debug, Deserialize)]
pub struct ExpandQuery {
    /// The URL to expand.
    pub url: Option<String>,
}

/// CORS headers attached to every response, including errors and the
/// OPTIONS preflight.
fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, cors_headers(), Json(json!({ "error": message }))).into_response()
}

/// Handles `GET /api/expand?url=...`.
///
/// The body is always well-formed JSON: either the expansion result or an
/// `{"error": ...}` object. Hop and fetch failures never surface here; they
/// are encoded into the result structure by the expander.
pub async fn expand_handler(
    State(expander): State<Arc<Expander>>,
    Query(query): Query<ExpandQuery>,
) -> Response {
    let url = match validate_url_format(query.url.as_deref()) {
        Ok(url) => url.to_string(),
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match expander.expand(&url).await {
        Ok(result) => (StatusCode::OK, cors_headers(), Json(result)).into_response(),
        Err(ExpandError::InvalidInput(msg)) => error_response(StatusCode::BAD_REQUEST, &msg),
        Err(e) => {
            log::error!("Error expanding URL {}: {}", url, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error expanding URL: {}", e),
            )
        }
    }
}

/// Handles the CORS preflight: success, headers only, no body.
pub async fn preflight_handler() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}
