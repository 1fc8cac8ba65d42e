/*
 * Responsibility
 * - GET /healthz (liveness probe for external monitoring)
 * - Never reads the request body
 */
use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the backend API";

#[derive(Debug, Serialize)]
pub struct HealthzResponse {
    pub message: &'static str,
}

pub async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse {
        message: WELCOME_MESSAGE,
    })
}
