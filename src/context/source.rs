/*
 * Responsibility
 * - Lookup capability over a host framework's metadata (MetadataReader)
 * - "Does this call carry metadata at all?" (CallContext)
 *
 * Notes
 * - tonic MetadataMap / http HeaderMap already lower-case key names; lookups here are exact
 * - Values are decoded from their raw bytes as UTF-8 (lossy); nothing is skipped,
 *   so positions line up with what the caller attached
 */

use axum::http::{HeaderMap, Request, request::Parts};
use tonic::metadata::MetadataMap;

/// Read access to a string-keyed, multi-valued metadata collection.
pub trait MetadataReader {
    /// Every value stored under `key`, in the order it was attached.
    fn all_values(&self, key: &str) -> Vec<String>;

    /// The value at position 0 under `key`.
    fn first_value(&self, key: &str) -> Option<String> {
        self.all_values(key).into_iter().next()
    }
}

/// A per-call context that may or may not carry incoming metadata.
pub trait CallContext {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader>;
}

fn decode(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

impl MetadataReader for MetadataMap {
    fn all_values(&self, key: &str) -> Vec<String> {
        self.get_all(key)
            .iter()
            .map(|v| decode(v.as_encoded_bytes()))
            .collect()
    }

    fn first_value(&self, key: &str) -> Option<String> {
        self.get_all(key)
            .iter()
            .next()
            .map(|v| decode(v.as_encoded_bytes()))
    }
}

impl MetadataReader for HeaderMap {
    fn all_values(&self, key: &str) -> Vec<String> {
        self.get_all(key)
            .iter()
            .map(|v| decode(v.as_bytes()))
            .collect()
    }

    fn first_value(&self, key: &str) -> Option<String> {
        self.get_all(key).iter().next().map(|v| decode(v.as_bytes()))
    }
}

/// Background context: no metadata attached.
impl CallContext for () {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        None
    }
}

impl CallContext for MetadataMap {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(self)
    }
}

impl CallContext for HeaderMap {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(self)
    }
}

impl<T> CallContext for tonic::Request<T> {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(self.metadata())
    }
}

impl<B> CallContext for Request<B> {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(self.headers())
    }
}

impl CallContext for Parts {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(&self.headers)
    }
}

impl<C: CallContext> CallContext for Option<C> {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        self.as_ref().and_then(CallContext::incoming_metadata)
    }
}

impl<C: CallContext + ?Sized> CallContext for &C {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        (**self).incoming_metadata()
    }
}
