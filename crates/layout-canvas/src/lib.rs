//! Layout Canvas
//!
//! The caller side of a composed layout: turns positioned nodes into
//! rectangular canvas items and keeps positions the user moved items to
//! across recompositions.
//!
//! # Core Concepts
//!
//! - **CanvasItem**: A node's footprint on the canvas, centred on its layout position
//! - **CanvasItems**: The collection built from a [`tree_composer::Layout`]
//! - **SavedPositions**: Stored centres that win over computed ones
//!
//! # Example
//!
//! ```
//! use layout_canvas::prelude::*;
//! use tree_composer::prelude::*;
//!
//! let tree = SourceNode::folder("root").with_child(SourceNode::file("notes.txt"));
//! let layout = compose(&tree, &ComposeOptions::default());
//!
//! let mut items = CanvasItems::from_layout(&layout, 200.0);
//! let mut saved = SavedPositions::new();
//! saved.insert("00", point(10.0, 10.0));
//!
//! let report = saved.merge_into(&mut items);
//! assert_eq!(report.restored.len(), 1);
//! ```

mod geometry;
mod item;
mod saved;

pub use geometry::*;
pub use item::*;
pub use saved::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::geometry::{point, size, Bounds, Point, Size};
    pub use crate::item::{CanvasItem, CanvasItems, ItemId, NodeItem};
    pub use crate::saved::{MergeReport, SavedPositions};
}
