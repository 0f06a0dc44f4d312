//! Tree Composer
//!
//! Turns a persisted, partially untrusted file/folder index into a
//! deterministic 2D layout: positioned nodes plus deduplicated parent-child
//! edges, ready for a pan/zoom canvas.
//!
//! # Pipeline
//!
//! - **Normalize**: classify records, assign identities, drop what can't be
//!   trusted ([`normalize`])
//! - **Order**: files before folders, each alphabetical ignoring case
//! - **Measure**: bottom-up subtree widths with shape-aware gaps ([`width`], [`gap`])
//! - **Place**: top-down coordinates, one row per depth ([`place`])
//! - **Connect**: one edge per parent-child pair ([`edge`])
//!
//! Composition is pure: nothing is remembered between calls and malformed
//! input never fails, it only produces warnings.
//!
//! # Example
//!
//! ```
//! use tree_composer::prelude::*;
//!
//! let tree = SourceNode::folder("project")
//!     .with_child(SourceNode::file("README.md"))
//!     .with_child(SourceNode::folder("src").with_child(SourceNode::file("main.rs")));
//!
//! let layout = compose(&tree, &ComposeOptions::default());
//!
//! assert_eq!(layout.nodes.len(), 4);
//! assert_eq!(layout.edges.len(), 3);
//! assert!(layout.warnings.is_empty());
//! ```

pub mod edge;
pub mod gap;
mod layout;
pub mod node;
pub mod normalize;
mod options;
pub mod place;
mod source;
mod warning;
pub mod width;

pub use edge::EdgeSet;
pub use gap::{ChildShape, GapPolicy};
pub use layout::*;
pub use node::{NodeKind, NodeTable, NormalizedNode, RenderVariant};
pub use normalize::Normalized;
pub use options::*;
pub use source::SourceNode;
pub use warning::ComposeWarning;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::compose;
    pub use crate::layout::{Layout, LayoutEdge, LayoutNode, NodeData, Position};
    pub use crate::node::{NodeKind, RenderVariant};
    pub use crate::options::ComposeOptions;
    pub use crate::source::SourceNode;
    pub use crate::warning::ComposeWarning;
    pub use crate::Composer;
}

/// Compose a layout for `root`
///
/// Identical inputs always produce identical output.
pub fn compose(root: &SourceNode, options: &ComposeOptions) -> Layout {
    let spacing = Spacing::resolve(options);

    let Normalized {
        mut table,
        warnings,
    } = normalize::normalize(root, options.root_id.as_deref());
    table.sort_siblings();

    let policy = GapPolicy::new(&spacing);
    let widths = width::SubtreeWidths::compute(&table, &policy, spacing.node_size);

    let mut edges = EdgeSet::new();
    let mut nodes = Vec::with_capacity(table.len());

    for placed in place::place(&table, &widths, &spacing) {
        for child_id in &placed.node.child_ids {
            edges.connect(&placed.node.id, child_id);
        }
        nodes.push(LayoutNode::from_normalized(placed.node, placed.position));
    }

    log::debug!(
        "composed {} node(s), {} edge(s), {} warning(s)",
        nodes.len(),
        edges.len(),
        warnings.len()
    );

    Layout {
        nodes,
        edges: edges.into_vec(),
        warnings,
    }
}

/// A reusable composer holding one set of options
///
/// Holds no state between calls besides the options themselves.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Compose a layout for `root` with this composer's options
    pub fn compose(&self, root: &SourceNode) -> Layout {
        compose(root, &self.options)
    }
}
