//! Items placed on the canvas.
//!
//! This module provides the `CanvasItem` type which represents one composed
//! node as a rectangle on the canvas, along with the `ItemId` identifier type
//! and the `CanvasItems` collection built from a [`Layout`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;
use tree_composer::{Layout, NodeData, RenderVariant};

use crate::geometry::{size, Bounds, Point, Size};

/// A unique identifier for a canvas item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Create a new item ID from a string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the string representation of this ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a canvas item built from a layout carries.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    pub render_variant: RenderVariant,
    #[serde(flatten)]
    pub data: NodeData,
}

/// A rectangular item on the canvas.
///
/// # Type Parameters
///
/// * `D` - The type of data associated with this item. Use `()` if no data is needed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanvasItem<D = ()> {
    /// Unique identifier for this item.
    pub id: ItemId,

    /// The bounds of this item in canvas space.
    pub bounds: Bounds,

    /// User-defined data associated with this item.
    pub data: D,

    /// Whether this item sits where the user left it rather than where the
    /// layout put it.
    pub pinned: bool,
}

impl CanvasItem<()> {
    /// Create a new canvas item with no associated data.
    pub fn new(id: impl Into<ItemId>, bounds: Bounds) -> Self {
        Self::with_data(id, bounds, ())
    }
}

impl<D> CanvasItem<D> {
    /// Create a new canvas item with associated data.
    pub fn with_data(id: impl Into<ItemId>, bounds: Bounds, data: D) -> Self {
        Self {
            id: id.into(),
            bounds,
            data,
            pinned: false,
        }
    }

    /// Get the position (origin) of this item.
    pub fn position(&self) -> Point {
        self.bounds.origin
    }

    /// Get the size of this item.
    pub fn size(&self) -> Size {
        self.bounds.size
    }

    /// Get the center point of this item.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Move the item so its center lands on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.bounds = Bounds::centered_at(center, self.bounds.size);
    }

    /// Move the item by a delta.
    pub fn translate(&mut self, delta: Point) {
        self.bounds.origin = self.bounds.origin + delta;
    }

    /// Check if this item contains a point (in canvas space).
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(&point)
    }

    /// Set the pinned state.
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}

/// A collection of canvas items with helper methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CanvasItems<D = ()> {
    items: Vec<CanvasItem<D>>,
}

impl CanvasItems<NodeItem> {
    /// One square item per layout node, centred on the node's position.
    ///
    /// Items keep the layout's node order.
    pub fn from_layout(layout: &Layout, node_size: f64) -> Self {
        let footprint = size(node_size, node_size);

        layout
            .nodes
            .iter()
            .map(|node| {
                CanvasItem::with_data(
                    node.id.as_str(),
                    Bounds::centered_at(node.position.into(), footprint),
                    NodeItem {
                        render_variant: node.render_variant,
                        data: node.data.clone(),
                    },
                )
            })
            .collect()
    }
}

impl<D> CanvasItems<D> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the collection.
    pub fn push(&mut self, item: CanvasItem<D>) {
        self.items.push(item);
    }

    /// Get an item by ID.
    pub fn get(&self, id: &ItemId) -> Option<&CanvasItem<D>> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Get a mutable reference to an item by ID.
    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut CanvasItem<D>> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Get all items.
    pub fn all(&self) -> &[CanvasItem<D>] {
        &self.items
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasItem<D>> {
        self.items.iter()
    }

    /// Iterate over items mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CanvasItem<D>> {
        self.items.iter_mut()
    }

    /// Get pinned items.
    pub fn pinned(&self) -> impl Iterator<Item = &CanvasItem<D>> {
        self.items.iter().filter(|item| item.pinned)
    }

    /// Get the bounding box of all items.
    pub fn bounds(&self) -> Option<Bounds> {
        self.items
            .iter()
            .map(|item| item.bounds)
            .reduce(|acc, bounds| acc.union(&bounds))
    }

    /// Find the item at a given point (the last one drawn wins).
    pub fn item_at(&self, point: Point) -> Option<&CanvasItem<D>> {
        self.items.iter().rev().find(|item| item.contains(point))
    }
}

impl<D> IntoIterator for CanvasItems<D> {
    type Item = CanvasItem<D>;
    type IntoIter = std::vec::IntoIter<CanvasItem<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a CanvasItems<D> {
    type Item = &'a CanvasItem<D>;
    type IntoIter = std::slice::Iter<'a, CanvasItem<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<D> FromIterator<CanvasItem<D>> for CanvasItems<D> {
    fn from_iter<I: IntoIterator<Item = CanvasItem<D>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
