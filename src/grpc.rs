//! tonic integration.
//!
//! Install [`intercept`] on a service to extract the auth context once per
//! call; service methods then read it with [`RequestAuthExt::auth_context`].
//!
//! ```ignore
//! let svc = MyServiceServer::with_interceptor(MyService::default(), portcullis::grpc::intercept);
//! ```

use tonic::{Request, Status};

use crate::AuthContext;

/// Server interceptor: extract the auth context from the incoming metadata
/// and store it in the request extensions.
///
/// Never rejects a call. Missing claims are a normal case.
pub fn intercept(mut req: Request<()>) -> Result<Request<()>, Status> {
    let auth = AuthContext::from_context(&req);

    tracing::debug!(
        project_id = %auth.project_id,
        user_id = %auth.user_id,
        app = %auth.global_app_id(),
        "grpc call auth context"
    );

    req.extensions_mut().insert(auth);
    Ok(req)
}

/// Read access to the auth context from inside a service method.
pub trait RequestAuthExt {
    /// The context stored by [`intercept`], or a fresh extraction from the
    /// request metadata when the interceptor is not installed.
    fn auth_context(&self) -> AuthContext;
}

impl<T> RequestAuthExt for Request<T> {
    fn auth_context(&self) -> AuthContext {
        match self.extensions().get::<AuthContext>() {
            Some(auth) => auth.clone(),
            None => AuthContext::from_context(self),
        }
    }
}
