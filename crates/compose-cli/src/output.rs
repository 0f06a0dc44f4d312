//! The document written to stdout

use layout_canvas::{Bounds, CanvasItems, ItemId, MergeReport, SavedPositions};
use serde::Serialize;
use tree_composer::{ComposeWarning, Layout, LayoutEdge, LayoutNode};

/// A layout with saved positions applied
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub warnings: Vec<ComposeWarning>,
    /// Nodes placed from saved positions rather than by the layout
    pub pinned: Vec<ItemId>,
    /// Extent of all node footprints, absent for an empty layout
    pub bounds: Option<Bounds>,
}

impl Document {
    pub fn build(layout: Layout, node_size: f64, saved: Option<&SavedPositions>) -> Self {
        let mut items = CanvasItems::from_layout(&layout, node_size);
        let MergeReport { restored, .. } = saved
            .map(|saved| saved.merge_into(&mut items))
            .unwrap_or_default();

        let Layout {
            mut nodes,
            edges,
            warnings,
        } = layout;
        // Items are built in node order
        for (node, item) in nodes.iter_mut().zip(items.iter()) {
            node.position = item.center().into();
        }

        Self {
            nodes,
            edges,
            warnings,
            pinned: restored,
            bounds: items.bounds(),
        }
    }

    pub fn to_json(&self, compact: bool) -> serde_json::Result<String> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
