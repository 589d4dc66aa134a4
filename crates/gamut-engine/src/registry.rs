// Descriptor store and conversion surface
//
// Process-wide shared state in the host's hands: the registry is an
// explicit value the composition root builds and passes around, not an
// ambient global. Registration and unregistration are rare exclusive
// writes; convert calls are read-mostly and safe from many threads.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, trace};

use gamut_error::{ConversionError, GamutError, NotFoundError, RegistrationError};
use gamut_types::{schema, BoxedSpace, Descriptor, DescriptorSummary, Space, SpaceId};

use crate::executor;
use crate::graph::ConversionGraph;
use crate::path::{self, ConversionPath, PathCache};

/// Registry of representation spaces and the engine built on top of it.
///
/// Owns the descriptor store, the conversion graph kept in lockstep with
/// it, and the path cache. Outlives any individual conversion; typically
/// held in an `Arc` and shared across callers.
#[derive(Debug, Default)]
pub struct SpaceRegistry {
    descriptors: RwLock<HashMap<SpaceId, Descriptor>>,
    graph: RwLock<ConversionGraph>,
    cache: RwLock<PathCache>,
    cold_searches: AtomicU64,
}

impl SpaceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    //-------------------------------------------------------------------------
    // Descriptor store operations
    //-------------------------------------------------------------------------

    /// Admit a descriptor to the store.
    ///
    /// Validates the record and rejects duplicates before mutating any
    /// state; on success the space is visible to all subsequent
    /// operations. Direct targets naming unregistered spaces are legal
    /// here and fail lazily at execution time.
    pub fn register(&self, descriptor: Descriptor) -> Result<(), RegistrationError> {
        schema::validate(&descriptor)?;

        let mut descriptors = self.descriptors.write();
        if descriptors.contains_key(&descriptor.name) {
            return Err(RegistrationError::DuplicateName(
                descriptor.name.as_str().to_string(),
            ));
        }

        debug!(
            space = %descriptor.name,
            targets = descriptor.direct_targets.len(),
            hook = descriptor.convert_hook.is_some(),
            "registered representation space"
        );
        self.graph
            .write()
            .insert_node(descriptor.name.clone(), descriptor.direct_targets.clone());
        descriptors.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Remove a space from the store.
    ///
    /// The path cache is deliberately left untouched; stale entries are
    /// surfaced by the executor's per-hop revalidation.
    pub fn unregister(&self, name: &SpaceId) -> Result<Descriptor, NotFoundError> {
        let mut descriptors = self.descriptors.write();
        let descriptor = descriptors
            .remove(name)
            .ok_or_else(|| NotFoundError(name.as_str().to_string()))?;
        self.graph.write().remove_node(name);
        debug!(space = %name, "unregistered representation space");
        Ok(descriptor)
    }

    /// Retrieve the stored descriptor for a space.
    ///
    /// Fails if the space was never registered or if the stored record no
    /// longer passes schema validation (defense against corrupted state).
    pub fn metadata(&self, name: &SpaceId) -> Result<Descriptor, GamutError> {
        let descriptors = self.descriptors.read();
        let descriptor = descriptors
            .get(name)
            .ok_or_else(|| NotFoundError(name.as_str().to_string()))?;
        schema::validate(descriptor)?;
        Ok(descriptor.clone())
    }

    /// Snapshot copies of every current descriptor. Mutating the result
    /// cannot affect the store.
    pub fn all_metadata(&self) -> Vec<Descriptor> {
        self.descriptors.read().values().cloned().collect()
    }

    /// Serializable summaries of every current descriptor, sorted by name
    pub fn summaries(&self) -> Vec<DescriptorSummary> {
        let mut summaries: Vec<DescriptorSummary> = self
            .descriptors
            .read()
            .values()
            .map(Descriptor::summary)
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Whether a space is currently registered
    pub fn is_registered(&self, name: &SpaceId) -> bool {
        self.descriptors.read().contains_key(name)
    }

    /// Number of registered spaces
    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }

    //-------------------------------------------------------------------------
    // Administrative resets (test isolation)
    //-------------------------------------------------------------------------

    /// Drop every registration. Does not clear the path cache.
    pub fn clear(&self) {
        self.descriptors.write().clear();
        self.graph.write().clear();
        debug!("cleared space registry");
    }

    /// Drop every memoized path
    pub fn clear_cache(&self) {
        self.cache.write().clear();
        debug!("cleared path cache");
    }

    //-------------------------------------------------------------------------
    // Path resolution
    //-------------------------------------------------------------------------

    /// Resolve the shortest conversion path between two names.
    ///
    /// Checks the cache for the exact ordered pair first; a cold search
    /// runs breadth-first over the current graph and memoizes its result.
    pub fn resolve_path(
        &self,
        source: &SpaceId,
        destination: &SpaceId,
    ) -> Result<Arc<ConversionPath>, ConversionError> {
        if let Some(path) = self.cache.read().get(source, destination) {
            trace!(from = %source, to = %destination, "path cache hit");
            return Ok(path);
        }

        self.cold_searches.fetch_add(1, Ordering::Relaxed);
        let found = {
            let graph = self.graph.read();
            path::shortest_path(&graph, source, destination)
        };
        let found = found.ok_or_else(|| ConversionError::NoPath {
            from: source.as_str().to_string(),
            to: destination.as_str().to_string(),
        })?;

        trace!(
            from = %source,
            to = %destination,
            hops = found.hops(),
            "resolved conversion path"
        );
        let found = Arc::new(found);
        self.cache.write().insert(Arc::clone(&found));
        Ok(found)
    }

    /// Number of cold breadth-first searches run so far.
    ///
    /// Warm cache hits do not increment this; it is the observable
    /// search-cost probe.
    pub fn cold_searches(&self) -> u64 {
        self.cold_searches.load(Ordering::Relaxed)
    }

    //-------------------------------------------------------------------------
    // Conversion surface
    //-------------------------------------------------------------------------

    /// Convert an instance into the destination space.
    ///
    /// Identity conversions take a fast path that bypasses the store and
    /// resolver entirely and always yields a distinct object. Otherwise
    /// the resolved path is executed hop by hop, preferring each
    /// destination's conversion hook over the positional constructor
    /// fallback.
    pub fn convert(
        &self,
        value: &dyn Space,
        destination: &SpaceId,
    ) -> Result<BoxedSpace, ConversionError> {
        executor::convert(self, value, destination)
    }

    /// Non-throwing twin of path resolution: whether a conversion from
    /// `source` to `destination` would resolve right now. Runs the same
    /// logic and swallows the error; a cold check warms the cache.
    pub fn can_convert(&self, source: &SpaceId, destination: &SpaceId) -> bool {
        if source == destination {
            return true;
        }
        if !self.is_registered(source) || !self.is_registered(destination) {
            return false;
        }
        self.resolve_path(source, destination).is_ok()
    }

    /// Clone of the stored descriptor without the defensive re-check,
    /// for executor-internal hop resolution.
    pub(crate) fn descriptor(&self, name: &SpaceId) -> Option<Descriptor> {
        self.descriptors.read().get(name).cloned()
    }

    /// Number of memoized paths
    pub fn cached_paths(&self) -> usize {
        self.cache.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_error::SchemaError;

    #[derive(Debug, Clone)]
    struct Blob(Vec<f64>);

    impl Space for Blob {
        fn space_id(&self) -> SpaceId {
            SpaceId::new("blob")
        }

        fn components(&self) -> Vec<f64> {
            self.0.clone()
        }

        fn rebuild(&self) -> BoxedSpace {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn construct_blob(components: &[f64]) -> Result<BoxedSpace, ConversionError> {
        Ok(Box::new(Blob(components.to_vec())))
    }

    fn blob_descriptor(name: &str, targets: &[&str]) -> Descriptor {
        Descriptor::new(name, "test blob space", construct_blob)
            .with_targets(targets.iter().copied())
    }

    #[test]
    fn register_then_query() {
        let registry = SpaceRegistry::new();
        registry
            .register(blob_descriptor("blob", &["other"]))
            .expect("registers");

        assert!(registry.is_registered(&SpaceId::new("blob")));
        assert_eq!(registry.len(), 1);

        let descriptor = registry.metadata(&SpaceId::new("blob")).expect("found");
        assert_eq!(descriptor.name, SpaceId::new("blob"));
        assert_eq!(descriptor.direct_targets, vec![SpaceId::new("other")]);
    }

    #[test]
    fn duplicate_registration_rejected_before_mutation() {
        let registry = SpaceRegistry::new();
        registry
            .register(blob_descriptor("blob", &["a"]))
            .expect("first registration");

        let err = registry
            .register(blob_descriptor("blob", &["b"]))
            .expect_err("duplicate rejected");
        assert_eq!(err, RegistrationError::DuplicateName("blob".to_string()));

        // Existing registration intact and queryable
        let descriptor = registry.metadata(&SpaceId::new("blob")).expect("still there");
        assert_eq!(descriptor.direct_targets, vec![SpaceId::new("a")]);
    }

    #[test]
    fn malformed_descriptor_rejected() {
        let registry = SpaceRegistry::new();
        let err = registry
            .register(blob_descriptor("", &[]))
            .expect_err("blank name rejected");
        assert_eq!(err, RegistrationError::Malformed(SchemaError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn unregister_removes_from_snapshots() {
        let registry = SpaceRegistry::new();
        registry.register(blob_descriptor("blob", &[])).expect("registers");
        registry
            .unregister(&SpaceId::new("blob"))
            .expect("unregisters");

        assert!(registry.all_metadata().is_empty());
        assert!(registry.metadata(&SpaceId::new("blob")).is_err());

        let err = registry
            .unregister(&SpaceId::new("blob"))
            .expect_err("second unregister fails");
        assert_eq!(err, NotFoundError("blob".to_string()));
    }

    #[test]
    fn snapshot_mutation_does_not_affect_store() {
        let registry = SpaceRegistry::new();
        registry.register(blob_descriptor("blob", &["a"])).expect("registers");

        let mut snapshot = registry.all_metadata();
        snapshot[0].direct_targets.push(SpaceId::new("injected"));

        let descriptor = registry.metadata(&SpaceId::new("blob")).expect("found");
        assert_eq!(descriptor.direct_targets, vec![SpaceId::new("a")]);
    }

    #[test]
    fn summaries_sorted_by_name() {
        let registry = SpaceRegistry::new();
        registry.register(blob_descriptor("zeta", &[])).expect("registers");
        registry.register(blob_descriptor("alpha", &[])).expect("registers");

        let names: Vec<String> = registry
            .summaries()
            .into_iter()
            .map(|s| s.name.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    }
}
