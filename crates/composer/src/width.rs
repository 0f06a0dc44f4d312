//! Subtree widths
//!
//! Every node reserves a horizontal span wide enough for itself and its whole
//! subtree. Widths are computed once per node, bottom-up, and remembered
//! together with the gap chosen for the node's children so placement can
//! reuse both.

use std::collections::HashMap;

use crate::gap::GapPolicy;
use crate::node::{NodeTable, NormalizedNode};

/// Memoized subtree widths and child gaps for one composition
#[derive(Debug, Clone)]
pub struct SubtreeWidths {
    node_size: f64,
    widths: HashMap<String, f64>,
    gaps: HashMap<String, f64>,
}

impl SubtreeWidths {
    /// Compute the width of every node in `table`
    ///
    /// Nodes are visited in reverse pre-order, so every child is finished
    /// before its parent and no node is visited twice.
    pub fn compute(table: &NodeTable, policy: &GapPolicy<'_>, node_size: f64) -> Self {
        let mut widths = HashMap::with_capacity(table.len());
        let mut gaps = HashMap::new();

        for node in table.pre_order().into_iter().rev() {
            if widths.contains_key(&node.id) {
                continue;
            }

            if node.is_leaf() {
                widths.insert(node.id.clone(), node_size);
                continue;
            }

            let gap = policy.gap_for(table, node);
            let children: f64 = node
                .child_ids
                .iter()
                .map(|id| widths.get(id).copied().unwrap_or(node_size))
                .sum();
            let span = children + gap * (node.child_ids.len() - 1) as f64;

            widths.insert(node.id.clone(), span.max(node_size));
            gaps.insert(node.id.clone(), gap);
        }

        Self {
            node_size,
            widths,
            gaps,
        }
    }

    /// The reserved width of a node's subtree
    pub fn width(&self, id: &str) -> f64 {
        self.widths.get(id).copied().unwrap_or(self.node_size)
    }

    /// The gap between the children of a node (zero for leaves)
    pub fn gap(&self, id: &str) -> f64 {
        self.gaps.get(id).copied().unwrap_or(0.0)
    }

    /// Total width of a node's children laid side by side, gaps included
    pub fn children_span(&self, node: &NormalizedNode) -> f64 {
        if node.child_ids.is_empty() {
            return 0.0;
        }

        let children: f64 = node.child_ids.iter().map(|id| self.width(id)).sum();
        children + self.gap(&node.id) * (node.child_ids.len() - 1) as f64
    }
}
