//! Top-down placement
//!
//! Each node is centred in its reserved span. Its children's cluster is
//! centred inside the same span and laid out left to right. Rows depend on
//! depth alone.

use crate::layout::Position;
use crate::node::{NodeTable, NormalizedNode};
use crate::options::Spacing;
use crate::width::SubtreeWidths;

/// A node with its final position
#[derive(Debug, Clone, Copy)]
pub struct PlacedNode<'a> {
    pub node: &'a NormalizedNode,
    pub position: Position,
}

/// Assign a position to every node reachable from the root
///
/// The root is centred on `spacing.root_position`. Nodes are returned in
/// pre-order: parents before children, siblings left to right.
pub fn place<'a>(
    table: &'a NodeTable,
    widths: &SubtreeWidths,
    spacing: &Spacing,
) -> Vec<PlacedNode<'a>> {
    let Some(root) = table.root() else {
        return Vec::new();
    };

    let mut placed = Vec::with_capacity(table.len());
    let root_left = spacing.root_position.x - widths.width(&root.id) / 2.0;
    let mut stack: Vec<(&NormalizedNode, f64)> = vec![(root, root_left)];

    while let Some((node, left)) = stack.pop() {
        let width = widths.width(&node.id);
        placed.push(PlacedNode {
            node,
            position: Position::new(left + width / 2.0, spacing.row_y(node.depth)),
        });

        let gap = widths.gap(&node.id);
        let mut cursor = left + (width - widths.children_span(node)) / 2.0;
        let mut children = Vec::with_capacity(node.child_ids.len());

        for child in table.children(node) {
            children.push((child, cursor));
            cursor += widths.width(&child.id) + gap;
        }

        // Reverse so the leftmost child is placed first
        stack.extend(children.into_iter().rev());
    }

    placed
}
