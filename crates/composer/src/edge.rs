//! Deduplicated parent -> child edges

use std::collections::HashSet;

use crate::layout::LayoutEdge;

/// Collects edges, keeping at most one per ordered (source, target) pair
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<LayoutEdge>,
    seen: HashSet<(String, String)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical id of the edge from `source` to `target`
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("e_{source}_{target}")
    }

    /// Request an edge from `source` to `target`
    ///
    /// Returns false if the edge already exists or would be a self-loop.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }

        if !self.seen.insert((source.to_string(), target.to_string())) {
            return false;
        }

        self.edges.push(LayoutEdge {
            id: Self::edge_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in the order they were first requested
    pub fn into_vec(self) -> Vec<LayoutEdge> {
        self.edges
    }
}
