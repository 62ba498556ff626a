/*!
 * Authentication context extraction
 *
 * Responsibility:
 * - Per-call auth snapshot (AuthContext) handed to handlers
 * - Host-agnostic metadata lookup (MetadataReader / CallContext)
 *
 * Public API:
 * - AuthContext
 * - CallContext
 * - Metadata
 * - MetadataReader
 */

mod core;
mod metadata;
mod source;
mod types;

pub use metadata::Metadata;
pub use source::{CallContext, MetadataReader};
pub use types::AuthContext;
