//! Eager JSON body parsing.
//!
//! Requests carrying `Content-Type: application/json` and a non-empty body are
//! buffered and parsed before they reach any handler. The parsed value is put
//! into request extensions as [`JsonBody`], and the original bytes are handed
//! back as the body so downstream extractors still see them.
//!
//! Rejections:
//! - body larger than [`BODY_LIMIT`] => 413
//! - malformed JSON, or a top-level value that is not an object/array => 400

use axum::{
    Router,
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::Response,
};
use http_body_util::LengthLimitError;
use serde_json::Value;

use crate::error::AppError;

/// 100 KiB.
pub const BODY_LIMIT: usize = 100 * 1024;

/// Parsed request body, available to handlers via `Extension<JsonBody>`.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonBody(pub Value);

pub fn apply(router: Router) -> Router {
    router.layer(middleware::from_fn(json_body_middleware))
}

async fn json_body_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    if !is_json(req.headers()) {
        return Ok(next.run(req).await);
    }

    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|err| {
            let err = err.into_inner();
            if err.is::<LengthLimitError>() {
                AppError::PayloadTooLarge
            } else {
                tracing::warn!(error = %err, "failed to read request body");
                AppError::bad_request("BODY_READ_FAILED", "failed to read request body")
            }
        })?;

    if bytes.is_empty() {
        return Ok(next.run(Request::from_parts(parts, Body::empty())).await);
    }

    let value = parse_strict(&bytes)?;

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(JsonBody(value));

    Ok(next.run(req).await)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

fn parse_strict(bytes: &Bytes) -> Result<Value, AppError> {
    let first = bytes
        .iter()
        .copied()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'));

    if !matches!(first, Some(b'{') | Some(b'[')) {
        return Err(AppError::bad_request(
            "INVALID_JSON",
            "request body must be a JSON object or array",
        ));
    }

    serde_json::from_slice(bytes).map_err(|err| {
        tracing::debug!(error = %err, "rejecting malformed JSON body");
        AppError::bad_request("INVALID_JSON", err.to_string())
    })
}
