/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /whoami, /roles/{role}, /admin
 * - auth context middleware は app 側で v1 全体に掛ける
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::whoami::{admin, has_role, whoami};

pub fn routes() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/roles/{role}", get(has_role))
        .route("/admin", get(admin))
}
