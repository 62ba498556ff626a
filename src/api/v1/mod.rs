/*
 * Responsibility
 * - v1 の公開ポイント (routes() の re-export など)
 */
mod dto;
mod handlers;
mod routes;

pub use handlers::health::health;
pub use routes::routes;
