//! axum integration.
//!
//! - [`layer`] extracts the auth context from request headers once per
//!   request and stores it in the request extensions
//! - handlers take [`AuthContext`] as an extractor; it never rejects
//!
//! ```ignore
//! let app = portcullis::http::layer(Router::new().route("/me", get(me)));
//!
//! async fn me(auth: AuthContext) -> String {
//!     auth.username
//! }
//! ```

use std::convert::Infallible;

use axum::{
    Router,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::{self, Next},
    response::Response,
};

use crate::AuthContext;

/// Apply the auth context middleware to every route of `router`.
pub fn layer<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(auth_context_middleware))
}

async fn auth_context_middleware(mut req: Request, next: Next) -> Response {
    let auth = AuthContext::from_context(&req);

    tracing::debug!(
        project_id = %auth.project_id,
        user_id = %auth.user_id,
        app = %auth.global_app_id(),
        "http request auth context"
    );

    // handed to the AuthContext extractor below
    req.extensions_mut().insert(auth);

    next.run(req).await
}

/// Uses the value stored by [`layer`] when present, otherwise extracts from
/// the request headers directly.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = match parts.extensions.get::<AuthContext>() {
            Some(auth) => auth.clone(),
            None => AuthContext::from_context(&*parts),
        };
        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::keys;

    async fn echo(auth: AuthContext) -> Json<AuthContext> {
        Json(auth)
    }

    async fn call(app: Router, req: Request<Body>) -> Value {
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn request() -> axum::http::request::Builder {
        Request::builder().uri("/echo")
    }

    #[tokio::test]
    async fn extractor_without_middleware_reads_headers() {
        let app = Router::new().route("/echo", get(echo));
        let req = request()
            .header(keys::USERNAME, "alice")
            .header(keys::ROLES, "role2")
            .header(keys::ROLES, "role1")
            .body(Body::empty())
            .unwrap();

        let json = call(app, req).await;
        assert_eq!(json["username"], "alice");
        assert_eq!(json["project_id"], "");
        assert_eq!(json["roles"], serde_json::json!(["role2", "role1"]));
    }

    #[tokio::test]
    async fn extractor_uses_middleware_value() {
        let app = layer(Router::new().route("/echo", get(echo)));
        let req = request()
            .header(keys::PROJECT, "p1")
            .header(keys::APP_ID, "app")
            .header(keys::APP_VENDOR, "vendor")
            .body(Body::empty())
            .unwrap();

        let json = call(app, req).await;
        assert_eq!(json["project_id"], "p1");
        assert_eq!(json["app_id"], "app");
        assert_eq!(json["app_vendor"], "vendor");
    }

    #[tokio::test]
    async fn extension_set_upstream_is_preferred() {
        let app = Router::new().route("/echo", get(echo));
        let mut req = request()
            .header(keys::PROJECT, "from-header")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut().insert(AuthContext {
            project_id: "from-extension".into(),
            ..Default::default()
        });

        let json = call(app, req).await;
        assert_eq!(json["project_id"], "from-extension");
    }

    #[tokio::test]
    async fn request_without_claims_is_not_rejected() {
        let app = layer(Router::new().route("/echo", get(echo)));
        let req = request().body(Body::empty()).unwrap();

        let json = call(app, req).await;
        assert_eq!(json["user_id"], "");
        assert_eq!(json["roles"], serde_json::json!([]));
    }
}
