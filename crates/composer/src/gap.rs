//! Horizontal spacing between the children of one parent
//!
//! The gap depends on the shape of the children:
//!
//! - **Leaf row**: every child is a leaf. Terminal nodes are packed with the
//!   small leaf gap.
//! - **Last-but-one row**: every child is a parent of leaves only. The
//!   baseline is stepped down towards the minimum gap so neighbouring leaf
//!   clusters are pulled together without overlapping.
//! - **Mixed**: anything else uses the per-depth baseline.

use crate::node::{NodeTable, NormalizedNode};
use crate::options::Spacing;

/// Step by which the last-but-one gap is reduced.
pub const GAP_DECREMENT: f64 = 5.0;

/// The shape of a parent's children, as far as spacing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildShape {
    /// Every child is a leaf
    Leaves,
    /// Every child has children, and all of those are leaves
    LastButOne,
    /// Anything else
    Mixed,
}

impl ChildShape {
    /// Classify the surviving children of `parent`
    pub fn of(table: &NodeTable, parent: &NormalizedNode) -> Self {
        if table.children(parent).all(NormalizedNode::is_leaf) {
            return ChildShape::Leaves;
        }

        let last_but_one = table
            .children(parent)
            .all(|child| !child.is_leaf() && table.children(child).all(NormalizedNode::is_leaf));

        if last_but_one {
            ChildShape::LastButOne
        } else {
            ChildShape::Mixed
        }
    }
}

/// Decides the gap between consecutive children of a parent
#[derive(Debug, Clone, Copy)]
pub struct GapPolicy<'a> {
    spacing: &'a Spacing,
}

impl<'a> GapPolicy<'a> {
    pub fn new(spacing: &'a Spacing) -> Self {
        Self { spacing }
    }

    /// The gap to leave between consecutive children of `parent`
    pub fn gap_for(&self, table: &NodeTable, parent: &NormalizedNode) -> f64 {
        let baseline = self.spacing.baseline_gap(parent.depth + 1);

        match ChildShape::of(table, parent) {
            ChildShape::Leaves => self.spacing.leaf_gap(),
            ChildShape::LastButOne => tighten(baseline, self.spacing.min_sibling_gap),
            ChildShape::Mixed => baseline,
        }
    }
}

/// Step `baseline` down by [`GAP_DECREMENT`] as far as it goes without
/// dropping below `floor`.
///
/// Equivalent to subtracting the decrement in a loop, without the loop.
pub fn tighten(baseline: f64, floor: f64) -> f64 {
    if baseline <= floor {
        return baseline;
    }

    let steps = ((baseline - floor) / GAP_DECREMENT).floor();
    baseline - steps * GAP_DECREMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::options::ComposeOptions;
    use crate::source::SourceNode;

    fn files(names: &[&str]) -> Vec<SourceNode> {
        names.iter().map(|name| SourceNode::file(*name)).collect()
    }

    #[test]
    fn test_tighten() {
        assert_eq!(tighten(280.0, 30.0), 30.0);
        assert_eq!(tighten(50.0, 30.0), 30.0);
        assert_eq!(tighten(50.0, 33.0), 35.0);
        assert_eq!(tighten(52.0, 30.0), 32.0);
        assert_eq!(tighten(34.0, 30.0), 34.0);
        assert_eq!(tighten(30.0, 30.0), 30.0);
    }

    #[test]
    fn test_child_shape() {
        let tree = SourceNode::folder("root")
            .with_child(SourceNode::folder("leaves").with_children(files(&["a", "b"])))
            .with_child(SourceNode::folder("near").with_child(
                SourceNode::folder("inner").with_children(files(&["c"])),
            ))
            .with_child(SourceNode::folder("empty"));
        let normalized = normalize(&tree, None);
        let table = &normalized.table;

        let by_name = |name: &str| table.iter().find(|n| n.name == name).unwrap();

        assert_eq!(ChildShape::of(table, by_name("leaves")), ChildShape::Leaves);
        assert_eq!(ChildShape::of(table, by_name("near")), ChildShape::LastButOne);
        assert_eq!(ChildShape::of(table, by_name("root")), ChildShape::Mixed);
        assert_eq!(ChildShape::of(table, by_name("empty")), ChildShape::Leaves);
    }

    #[test]
    fn test_gap_for_each_shape() {
        let tree = SourceNode::folder("root")
            .with_child(SourceNode::folder("x").with_children(files(&["1", "2"])))
            .with_child(SourceNode::folder("y").with_children(files(&["3"])));
        let normalized = normalize(&tree, None);
        let table = &normalized.table;
        let root = table.root().unwrap();

        let spacing = Spacing::resolve(&ComposeOptions::new().sibling_spacing(100.0));
        let policy = GapPolicy::new(&spacing);

        // Root's children are both parents of leaves
        assert_eq!(policy.gap_for(table, root), 30.0);

        let x = table.get(&root.child_ids[0]).unwrap();
        assert_eq!(policy.gap_for(table, x), 30.0);

        let spacing = Spacing::resolve(
            &ComposeOptions::new()
                .sibling_spacing(100.0)
                .leaf_sibling_gap(12.0)
                .min_sibling_gap(18.0),
        );
        let policy = GapPolicy::new(&spacing);
        assert_eq!(policy.gap_for(table, x), 18.0);
        // 100 - 16 * 5 = 20
        assert_eq!(policy.gap_for(table, root), 20.0);
    }
}
