//! Auth/tenancy context carried as call metadata.
//!
//! Callers (gateways, sidecars, upstream services) attach already-validated
//! claims to each call as metadata entries named in [`keys`]. Handlers read
//! them back as an [`AuthContext`]:
//!
//! ```
//! use portcullis::{AuthContext, Metadata, keys};
//!
//! let mut md = Metadata::new();
//! md.insert(keys::PROJECT, "acme");
//! md.append(keys::ROLES, "viewer");
//!
//! let auth = AuthContext::from_context(&md);
//! assert_eq!(auth.project_id, "acme");
//! assert!(auth.has_role("viewer"));
//! assert_eq!(auth.global_app_id(), "/");
//! ```
//!
//! Extraction never fails. Missing metadata, or missing keys, leave the
//! corresponding fields at their zero value.

pub mod context;
pub mod grpc;
pub mod http;
pub mod keys;

pub use context::{AuthContext, CallContext, Metadata, MetadataReader};
