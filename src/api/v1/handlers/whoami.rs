/*
 * Responsibility
 * - 呼び出し元の auth context をそのまま返す (疎通・デバッグ用)
 * - role の membership 確認
 *
 * Notes
 * - admin の 403 は handler 側の policy の例。portcullis 自体は has_role (membership) しか提供しない
 */
use axum::{Json, extract::Path};
use portcullis::AuthContext;

use crate::{
    api::v1::dto::whoami::{AdminResponse, RoleResponse, WhoAmIResponse},
    error::AppError,
};

const ADMIN_ROLE: &str = "admin";

pub async fn whoami(auth: AuthContext) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse::from(auth))
}

pub async fn has_role(auth: AuthContext, Path(role): Path<String>) -> Json<RoleResponse> {
    let granted = auth.has_role(&role);
    Json(RoleResponse { role, granted })
}

pub async fn admin(auth: AuthContext) -> Result<Json<AdminResponse>, AppError> {
    if !auth.has_role(ADMIN_ROLE) {
        tracing::info!(user_id = %auth.user_id, "admin role missing");
        return Err(AppError::forbidden(ADMIN_ROLE));
    }

    Ok(Json(AdminResponse {
        user_id: auth.user_id,
        project_id: auth.project_id,
    }))
}
