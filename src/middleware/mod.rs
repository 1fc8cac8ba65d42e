/*
 * Responsibility
 * - Public interface of the middleware stack
 * - Each module exposes `apply(Router) -> Router` with a single concern
 */
pub mod cors;
pub mod http;
pub mod json_body;
