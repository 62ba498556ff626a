/*
 * Responsibility
 * - Build an AuthContext from a call context / metadata collection
 *
 * Notes
 * - Scalar claims are single-valued on the wire: the first value wins
 * - Roles are multi-valued: the whole sequence is copied in order
 * - Never fails. Missing metadata or keys leave fields at their zero value
 */

use crate::keys;

use super::{AuthContext, CallContext, MetadataReader};

impl AuthContext {
    /// Extract the auth context attached to `ctx`.
    ///
    /// A context without metadata yields `AuthContext::default()`.
    pub fn from_context<C>(ctx: &C) -> Self
    where
        C: CallContext + ?Sized,
    {
        match ctx.incoming_metadata() {
            Some(md) => Self::from_metadata(md),
            None => {
                tracing::trace!("no incoming metadata on call context");
                Self::default()
            }
        }
    }

    /// Extract from a metadata collection already in hand.
    pub fn from_metadata<M>(md: &M) -> Self
    where
        M: MetadataReader + ?Sized,
    {
        let scalar = |key: &str| md.first_value(key).unwrap_or_default();

        let ctx = Self {
            project_id: scalar(keys::PROJECT),
            user_id: scalar(keys::USER_ID),
            username: scalar(keys::USERNAME),
            app_id: scalar(keys::APP_ID),
            app_vendor: scalar(keys::APP_VENDOR),
            roles: md.all_values(keys::ROLES),
        };

        tracing::trace!(
            project_id = %ctx.project_id,
            user_id = %ctx.user_id,
            app = %ctx.global_app_id(),
            roles = ctx.roles.len(),
            "auth context extracted"
        );

        ctx
    }
}
