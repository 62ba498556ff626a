/*
 * Responsibility
 * - Owned metadata collection for callers without a host framework map
 *   (tests, custom transports, background jobs)
 *
 * Notes
 * - Keys are lower-cased on insert, same as gRPC metadata / HTTP header names
 * - Lookups are exact
 */

use std::collections::HashMap;

use super::source::{CallContext, MetadataReader};

/// String-keyed, multi-valued metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, Vec<String>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value under `key` with `value`.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(normalize(key.as_ref()), vec![value.into()]);
    }

    /// Add `value` after any existing values under `key`.
    pub fn append(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(normalize(key.as_ref()))
            .or_default()
            .push(value.into());
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

fn normalize(key: &str) -> String {
    key.to_ascii_lowercase()
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut md = Self::new();
        md.extend(iter);
        md
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

impl MetadataReader for Metadata {
    fn all_values(&self, key: &str) -> Vec<String> {
        self.get(key).to_vec()
    }

    fn first_value(&self, key: &str) -> Option<String> {
        self.get(key).first().cloned()
    }
}

impl CallContext for Metadata {
    fn incoming_metadata(&self) -> Option<&dyn MetadataReader> {
        Some(self)
    }
}
