/*
 * Responsibility
 * - api の公開ポイント (routes() の re-export)
 */
pub mod handlers;
mod routes;

pub use routes::routes;
