// Shortest-path resolution over the conversion graph
//
// Standard unweighted breadth-first search: first-discovered node wins,
// with discovery order fixed by each descriptor's direct-target ordering.
// Resolved paths are memoized per ordered (source, destination) pair; the
// cache is never invalidated by later registry mutation (a documented
// limitation, defended per hop by the step executor).

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use gamut_types::SpaceId;

use crate::graph::ConversionGraph;

/// Ordered sequence of space names from source to destination, inclusive.
///
/// Adjacent names formed valid edges in the graph that existed during the
/// search; the executor re-validates each hop against live metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPath {
    steps: Vec<SpaceId>,
}

impl ConversionPath {
    pub(crate) fn new(steps: Vec<SpaceId>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    /// All steps, source and destination inclusive
    pub fn steps(&self) -> &[SpaceId] {
        &self.steps
    }

    /// Source name
    pub fn source(&self) -> &SpaceId {
        &self.steps[0]
    }

    /// Destination name
    pub fn destination(&self) -> &SpaceId {
        &self.steps[self.steps.len() - 1]
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.steps.len() - 1
    }
}

/// Breadth-first search for the shortest hop-sequence from `source` to
/// `destination`. Returns `None` when the destination is unreachable.
pub(crate) fn shortest_path(
    graph: &ConversionGraph,
    source: &SpaceId,
    destination: &SpaceId,
) -> Option<ConversionPath> {
    if source == destination {
        return Some(ConversionPath::new(vec![source.clone()]));
    }

    let mut visited: HashSet<SpaceId> = HashSet::new();
    let mut predecessor: HashMap<SpaceId, SpaceId> = HashMap::new();
    let mut frontier: VecDeque<SpaceId> = VecDeque::new();

    visited.insert(source.clone());
    frontier.push_back(source.clone());

    while let Some(current) = frontier.pop_front() {
        for next in graph.neighbors(&current) {
            if !visited.insert(next.clone()) {
                continue;
            }
            predecessor.insert(next.clone(), current.clone());
            if next == destination {
                return Some(reconstruct(&predecessor, source, destination));
            }
            frontier.push_back(next.clone());
        }
    }

    None
}

/// Walk the predecessor map back from the destination to the source
fn reconstruct(
    predecessor: &HashMap<SpaceId, SpaceId>,
    source: &SpaceId,
    destination: &SpaceId,
) -> ConversionPath {
    let mut steps = vec![destination.clone()];
    let mut current = destination;
    while current != source {
        // Every non-source entry was inserted with a predecessor
        let prev = &predecessor[current];
        steps.push(prev.clone());
        current = prev;
    }
    steps.reverse();
    ConversionPath::new(steps)
}

/// Memoization table keyed by the ordered (source, destination) pair.
///
/// (A, B) and (B, A) are cached independently. Entries are created lazily
/// on first resolution and cleared only by an explicit administrative
/// reset.
#[derive(Debug, Default)]
pub(crate) struct PathCache {
    entries: HashMap<(SpaceId, SpaceId), Arc<ConversionPath>>,
}

impl PathCache {
    pub(crate) fn get(&self, source: &SpaceId, destination: &SpaceId) -> Option<Arc<ConversionPath>> {
        self.entries
            .get(&(source.clone(), destination.clone()))
            .cloned()
    }

    pub(crate) fn insert(&mut self, path: Arc<ConversionPath>) {
        let key = (path.source().clone(), path.destination().clone());
        self.entries.insert(key, path);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
