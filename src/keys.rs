/*
 * Responsibility
 * - Metadata key names used to carry each auth field on the wire
 * - Shared by whatever attaches the metadata and by the extractor
 *
 * Notes
 * - These literals are an external contract; do not rename
 * - Lower-case only (gRPC metadata / HTTP header names are normalized to lower-case)
 */

/// Owning project id.
pub const PROJECT: &str = "project";

/// Authenticated user id.
pub const USER_ID: &str = "user-id";

/// Human-readable username.
pub const USERNAME: &str = "username";

/// Calling application id.
pub const APP_ID: &str = "app-id";

/// Vendor/publisher of the calling application.
pub const APP_VENDOR: &str = "app-vendor";

/// Role names. Multi-valued: one metadata value per role.
pub const ROLES: &str = "roles";

/// Every recognized key.
pub const ALL: [&str; 6] = [PROJECT, USER_ID, USERNAME, APP_ID, APP_VENDOR, ROLES];
