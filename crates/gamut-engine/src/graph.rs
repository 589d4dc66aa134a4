// Directed conversion graph implied by the descriptor store
//
// Nodes are registered space names; edges are each descriptor's declared
// direct targets, in declaration order. The adjacency map is mutated in
// lockstep with the store on register/unregister rather than being
// re-materialized for every cold search. Edges may point at names with no
// adjacency row of their own (never-registered targets); such names have
// no outgoing edges and any hop into them fails at execution time.

use std::collections::HashMap;

use gamut_types::{Descriptor, SpaceId};

/// Adjacency view of the declared one-hop conversions.
///
/// Directed and not necessarily symmetric.
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    edges: HashMap<SpaceId, Vec<SpaceId>>,
}

impl ConversionGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a set of descriptors
    pub fn from_descriptors<'a, I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'a Descriptor>,
    {
        let mut graph = Self::new();
        for descriptor in descriptors {
            graph.insert_node(descriptor.name.clone(), descriptor.direct_targets.clone());
        }
        graph
    }

    /// Insert or replace the adjacency row for `name`
    pub fn insert_node(&mut self, name: SpaceId, targets: Vec<SpaceId>) {
        self.edges.insert(name, targets);
    }

    /// Remove the adjacency row for `name`.
    ///
    /// In-edges from other nodes are left in place; they now point at a
    /// node with no row, which dead-ends during search and fails during
    /// execution.
    pub fn remove_node(&mut self, name: &SpaceId) {
        self.edges.remove(name);
    }

    /// Outgoing edges of `name`, in declaration order. Empty for names
    /// without an adjacency row.
    pub fn neighbors(&self, name: &SpaceId) -> &[SpaceId] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` has an adjacency row
    pub fn contains(&self, name: &SpaceId) -> bool {
        self.edges.contains_key(name)
    }

    /// Number of nodes with adjacency rows
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Drop every node and edge
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}
