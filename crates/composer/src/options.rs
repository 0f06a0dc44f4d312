//! Configuration options for a composition.
//!
//! `ComposeOptions` is the loose, caller-facing option bag: every field may be
//! missing or nonsensical. `Spacing` is the validated form the layout passes
//! work with.

use serde::{Deserialize, Serialize};

use crate::layout::Position;

/// Root identity used when neither the options nor the record supply one.
pub const DEFAULT_ROOT_ID: &str = "00";

/// Default per-node footprint in layout units.
pub const DEFAULT_NODE_SIZE: f64 = 200.0;

/// Default vertical gap between rows.
pub const DEFAULT_LEVEL_SPACING: f64 = 120.0;

/// Rows are never closer than this.
pub const MIN_LEVEL_SPACING: f64 = 80.0;

/// Default gap between the children of a parent whose children are all leaves.
pub const DEFAULT_LEAF_SIBLING_GAP: f64 = 30.0;

/// Default floor for every horizontal gap.
pub const DEFAULT_MIN_SIBLING_GAP: f64 = 30.0;

/// Default sibling gap as a multiple of the node size.
const SIBLING_SPACING_FACTOR: f64 = 1.4;

/// Options controlling a composition.
///
/// All fields have defaults, so a partial JSON object deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComposeOptions {
    /// Override for the root's identity.
    pub root_id: Option<String>,

    /// Where the root node is anchored.
    pub root_position: Position,

    /// Per-node footprint (width and height) in layout units.
    pub node_size: f64,

    /// Vertical gap between rows.
    pub level_spacing: f64,

    /// Default horizontal gap between siblings.
    /// `None` means `round(node_size * 1.4)`.
    pub sibling_spacing: Option<f64>,

    /// Gap used between siblings that are all leaves.
    pub leaf_sibling_gap: f64,

    /// Hard floor for every computed horizontal gap.
    pub min_sibling_gap: f64,

    /// Per-depth gap overrides. Entry `i` applies between children at depth `i + 1`.
    pub level_horizontal_gaps: Vec<Option<f64>>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            root_id: None,
            root_position: Position::ORIGIN,
            node_size: DEFAULT_NODE_SIZE,
            level_spacing: DEFAULT_LEVEL_SPACING,
            sibling_spacing: None,
            leaf_sibling_gap: DEFAULT_LEAF_SIBLING_GAP,
            min_sibling_gap: DEFAULT_MIN_SIBLING_GAP,
            level_horizontal_gaps: Vec::new(),
        }
    }
}

impl ComposeOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root identity.
    pub fn root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = Some(id.into());
        self
    }

    /// Set the root anchor.
    pub fn root_position(mut self, x: f64, y: f64) -> Self {
        self.root_position = Position::new(x, y);
        self
    }

    /// Set the per-node footprint.
    pub fn node_size(mut self, size: f64) -> Self {
        self.node_size = size;
        self
    }

    /// Set the vertical gap between rows.
    pub fn level_spacing(mut self, spacing: f64) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the default sibling gap.
    pub fn sibling_spacing(mut self, spacing: f64) -> Self {
        self.sibling_spacing = Some(spacing);
        self
    }

    /// Set the gap between all-leaf siblings.
    pub fn leaf_sibling_gap(mut self, gap: f64) -> Self {
        self.leaf_sibling_gap = gap;
        self
    }

    /// Set the floor for every horizontal gap.
    pub fn min_sibling_gap(mut self, gap: f64) -> Self {
        self.min_sibling_gap = gap;
        self
    }

    /// Set the per-depth gap overrides, starting at depth 1.
    pub fn level_horizontal_gaps(mut self, gaps: impl IntoIterator<Item = f64>) -> Self {
        self.level_horizontal_gaps = gaps.into_iter().map(Some).collect();
        self
    }
}

/// Validated spacing values for one composition.
#[derive(Clone, Debug, PartialEq)]
pub struct Spacing {
    pub root_position: Position,
    pub node_size: f64,
    pub level_spacing: f64,
    pub sibling_spacing: f64,
    pub leaf_sibling_gap: f64,
    pub min_sibling_gap: f64,
    level_gaps: Vec<Option<f64>>,
}

impl Spacing {
    /// Validate the options, replacing unusable values with defaults.
    pub fn resolve(options: &ComposeOptions) -> Self {
        let node_size = positive(options.node_size).unwrap_or(DEFAULT_NODE_SIZE);

        let level_spacing = finite(options.level_spacing)
            .unwrap_or(DEFAULT_LEVEL_SPACING)
            .max(MIN_LEVEL_SPACING);

        let sibling_spacing = options
            .sibling_spacing
            .and_then(finite)
            .unwrap_or_else(|| (node_size * SIBLING_SPACING_FACTOR).round());

        let min_sibling_gap = finite(options.min_sibling_gap)
            .filter(|gap| *gap >= 0.0)
            .unwrap_or(DEFAULT_MIN_SIBLING_GAP);

        let leaf_sibling_gap = finite(options.leaf_sibling_gap)
            .filter(|gap| *gap >= 0.0)
            .unwrap_or(DEFAULT_LEAF_SIBLING_GAP);

        let Position { x, y } = options.root_position;
        let root_position = if x.is_finite() && y.is_finite() {
            options.root_position
        } else {
            Position::ORIGIN
        };

        Self {
            root_position,
            node_size,
            level_spacing,
            sibling_spacing,
            leaf_sibling_gap,
            min_sibling_gap,
            level_gaps: options.level_horizontal_gaps.clone(),
        }
    }

    /// The untightened gap between children sitting at `child_depth`.
    ///
    /// A finite per-depth override wins over the sibling spacing; the result
    /// is never below the minimum gap.
    pub fn baseline_gap(&self, child_depth: usize) -> f64 {
        child_depth
            .checked_sub(1)
            .and_then(|slot| self.level_gaps.get(slot).copied().flatten())
            .and_then(finite)
            .unwrap_or(self.sibling_spacing)
            .max(self.min_sibling_gap)
    }

    /// The gap between children that are all leaves.
    pub fn leaf_gap(&self) -> f64 {
        self.leaf_sibling_gap.max(self.min_sibling_gap)
    }

    /// The y coordinate of every node at `depth`.
    pub fn row_y(&self, depth: usize) -> f64 {
        self.root_position.y + depth as f64 * (self.node_size + self.level_spacing)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn positive(value: f64) -> Option<f64> {
    finite(value).filter(|v| *v > 0.0)
}
