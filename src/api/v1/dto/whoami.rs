/*
 * Responsibility
 * - whoami / roles / admin の response DTO
 */
use portcullis::AuthContext;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    #[serde(flatten)]
    pub auth: AuthContext,
    pub global_app_id: String,
}

impl From<AuthContext> for WhoAmIResponse {
    fn from(auth: AuthContext) -> Self {
        Self {
            global_app_id: auth.global_app_id(),
            auth,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: String,
    pub granted: bool,
}

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub user_id: String,
    pub project_id: String,
}
