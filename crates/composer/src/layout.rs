//! Output of a composition: positioned nodes, edges and warnings

use serde::{Deserialize, Serialize};

use crate::node::{NodeKind, NormalizedNode, RenderVariant};
use crate::warning::ComposeWarning;

/// A point in layout units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Metadata carried alongside each positioned node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A positioned node
///
/// `position` is the centre of the node's reserved slot on its row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub id: String,
    pub render_variant: RenderVariant,
    pub position: Position,
    pub data: NodeData,
}

impl LayoutNode {
    pub(crate) fn from_normalized(node: &NormalizedNode, position: Position) -> Self {
        Self {
            id: node.id.clone(),
            render_variant: node.render_variant,
            position,
            data: NodeData {
                name: node.name.clone(),
                kind: node.kind,
                depth: node.depth,
                parent_id: node.parent_id.clone(),
                purpose: node.purpose.clone(),
                description: node.description.clone(),
            },
        }
    }
}

/// A directed parent -> child edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The result of one composition
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    /// Nodes in placement order: parents before children, siblings left to right
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub warnings: Vec<ComposeWarning>,
}

impl Layout {
    /// Find a node by id
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Find an edge by id
    pub fn edge(&self, id: &str) -> Option<&LayoutEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// Children of a node, left to right
    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a LayoutNode> + 'a {
        self.nodes
            .iter()
            .filter(move |node| node.data.parent_id.as_deref() == Some(id))
    }

    /// Warning messages as plain strings
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Returns true if no node was placed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
