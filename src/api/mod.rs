/*
 * Responsibility
 * - Public interface of the HTTP surface (routes() re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
