/*
 * Responsibility
 * - Define the URL structure
 * - Anything not listed here falls through to axum's default 404
 */
use axum::{Router, routing::get};

use crate::api::handlers::health::healthz;

pub fn routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}
