//! Caller-owned cache of fetched schema snapshots.
//!
//! Deliberately not process-global: each session (or test) owns its own
//! cache, so independent sessions cannot leak snapshots into each other.
//! Values are shared immutably; a re-fetch supersedes the snapshot wholesale
//! rather than mutating it.

use ontoform_schema::node::SchemaDefinition;
use std::{collections::HashMap, sync::Arc};

///
/// TemplateCache
///

#[derive(Clone, Debug, Default)]
pub struct TemplateCache {
    schemas: HashMap<String, Arc<SchemaDefinition>>,
}

impl TemplateCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a fetched snapshot under its own schema URI, returning the
    /// shared handle. Replaces any previous snapshot for that URI.
    pub fn insert(&mut self, definition: SchemaDefinition) -> Arc<SchemaDefinition> {
        let shared = Arc::new(definition);
        self.schemas
            .insert(shared.schema_uri.clone(), Arc::clone(&shared));

        shared
    }

    /// Shared handle for a cached schema, if present.
    #[must_use]
    pub fn get(&self, schema_uri: &str) -> Option<Arc<SchemaDefinition>> {
        self.schemas.get(schema_uri).map(Arc::clone)
    }

    #[must_use]
    pub fn contains(&self, schema_uri: &str) -> bool {
        self.schemas.contains_key(schema_uri)
    }

    /// Drop one cached snapshot, returning it if it was present.
    pub fn remove(&mut self, schema_uri: &str) -> Option<Arc<SchemaDefinition>> {
        self.schemas.remove(schema_uri)
    }

    /// Drop every cached snapshot.
    pub fn clear(&mut self) {
        self.schemas.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(uri: &str) -> SchemaDefinition {
        SchemaDefinition {
            schema_uri: uri.to_string(),
            ..SchemaDefinition::default()
        }
    }

    #[test]
    fn test_insert_get_remove() {
        let mut cache = TemplateCache::new();
        assert!(cache.is_empty());

        let handle = cache.insert(definition("bat:Primary"));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("bat:Primary"));

        let fetched = cache.get("bat:Primary").unwrap();
        assert!(Arc::ptr_eq(&handle, &fetched));
        assert!(cache.get("bat:Other").is_none());

        cache.remove("bat:Primary");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_refetch_supersedes_wholesale() {
        let mut cache = TemplateCache::new();

        let old = cache.insert(definition("bat:Primary"));
        let new = cache.insert(definition("bat:Primary"));
        assert_eq!(cache.len(), 1);

        let fetched = cache.get("bat:Primary").unwrap();
        assert!(Arc::ptr_eq(&new, &fetched));
        assert!(!Arc::ptr_eq(&old, &fetched));
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut session_a = TemplateCache::new();
        let session_b = TemplateCache::new();

        session_a.insert(definition("bat:Primary"));
        assert!(session_b.is_empty());
    }
}
