/*
 * Responsibility
 * - The auth context type seen by handlers
 * - Filled from call metadata by core; read-only afterwards
 *
 * Notes
 * - No Option fields: every field has a zero value ("" / empty Vec)
 * - Role checks here are membership only; policy lives with the caller
 */

use serde::Serialize;

/// Auth and tenancy claims attached to one inbound call.
///
/// - `project_id` is the owning project (tenant)
/// - `user_id` / `username` identify the authenticated user
/// - `app_id` / `app_vendor` identify the calling application
/// - `roles` keeps the order supplied by the caller, duplicates included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    pub project_id: String,
    pub user_id: String,
    pub username: String,
    pub app_id: String,
    pub app_vendor: String,
    pub roles: Vec<String>,
}

impl AuthContext {
    /// `"{app_vendor}/{app_id}"`. Renders as `"/"` when both are empty.
    pub fn global_app_id(&self) -> String {
        format!("{}/{}", self.app_vendor, self.app_id)
    }

    /// Exact, case-sensitive membership test against `roles`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// True when no claim was found at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_roles(roles: &[&str]) -> AuthContext {
        AuthContext {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn global_app_id_joins_vendor_and_app() {
        let ctx = AuthContext {
            app_id: "test-app-id".into(),
            app_vendor: "test-vendor".into(),
            ..Default::default()
        };
        assert_eq!(ctx.global_app_id(), "test-vendor/test-app-id");
    }

    #[test]
    fn global_app_id_of_empty_context_is_slash() {
        assert_eq!(AuthContext::default().global_app_id(), "/");
    }

    #[test]
    fn global_app_id_with_one_side_missing() {
        let vendor_only = AuthContext {
            app_vendor: "v".into(),
            ..Default::default()
        };
        let app_only = AuthContext {
            app_id: "a".into(),
            ..Default::default()
        };
        assert_eq!(vendor_only.global_app_id(), "v/");
        assert_eq!(app_only.global_app_id(), "/a");
    }

    #[test]
    fn has_role_is_exact() {
        let ctx = with_roles(&["admin", "viewer"]);

        assert!(ctx.has_role("admin"));
        assert!(ctx.has_role("viewer"));
        assert!(!ctx.has_role("Admin"));
        assert!(!ctx.has_role(" admin"));
        assert!(!ctx.has_role("admin "));
        assert!(!ctx.has_role("adm"));
        assert!(!ctx.has_role(""));
    }

    #[test]
    fn has_role_on_empty_roles() {
        assert!(!AuthContext::default().has_role("admin"));
    }

    #[test]
    fn is_empty_tracks_every_field() {
        assert!(AuthContext::default().is_empty());
        assert!(!with_roles(&["r"]).is_empty());
        assert!(
            !AuthContext {
                username: "u".into(),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let ctx = AuthContext {
            project_id: "p".into(),
            roles: vec!["b".into(), "a".into()],
            ..Default::default()
        };

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["project_id"], "p");
        assert_eq!(json["user_id"], "");
        assert_eq!(json["roles"], serde_json::json!(["b", "a"]));
    }
}
