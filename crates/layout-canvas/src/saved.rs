//! Positions the user has moved items to, kept across recompositions.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::item::{CanvasItems, ItemId};

/// Stored item centres keyed by item id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedPositions {
    positions: BTreeMap<ItemId, Point>,
}

/// Outcome of [`SavedPositions::merge_into`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Items moved to their stored position, in item order.
    pub restored: Vec<ItemId>,
    /// Items left where the layout put them.
    pub computed: usize,
    /// Stored ids with no matching item.
    pub unknown: usize,
}

impl SavedPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current centre of every item.
    pub fn capture<D>(items: &CanvasItems<D>) -> Self {
        items
            .iter()
            .map(|item| (item.id.clone(), item.center()))
            .collect()
    }

    /// Remember `center` for `id`. Non-finite points are refused.
    pub fn insert(&mut self, id: impl Into<ItemId>, center: Point) -> bool {
        if !center.is_finite() {
            return false;
        }
        self.positions.insert(id.into(), center);
        true
    }

    pub fn get(&self, id: &ItemId) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Move items with a stored position onto it and pin them.
    ///
    /// Stored positions win over computed ones. Entries for ids that no longer
    /// exist and non-finite entries are ignored.
    pub fn merge_into<D>(&self, items: &mut CanvasItems<D>) -> MergeReport {
        let mut report = MergeReport::default();
        let mut matched = BTreeSet::new();

        for item in items.iter_mut() {
            match self.positions.get(&item.id) {
                Some(center) if center.is_finite() => {
                    trace!("restoring {} to ({}, {})", item.id, center.x, center.y);
                    item.set_center(*center);
                    item.pinned = true;
                    report.restored.push(item.id.clone());
                    matched.insert(item.id.clone());
                }
                Some(_) => {
                    trace!("ignoring non-finite stored position for {}", item.id);
                    report.computed += 1;
                    matched.insert(item.id.clone());
                }
                None => report.computed += 1,
            }
        }

        report.unknown = self
            .positions
            .keys()
            .filter(|id| !matched.contains(*id))
            .count();
        debug!(
            "restored {} saved position(s), {} computed, {} stale",
            report.restored.len(),
            report.computed,
            report.unknown
        );
        report
    }
}

impl FromIterator<(ItemId, Point)> for SavedPositions {
    fn from_iter<I: IntoIterator<Item = (ItemId, Point)>>(iter: I) -> Self {
        let mut saved = Self::new();
        for (id, center) in iter {
            saved.insert(id, center);
        }
        saved
    }
}
