//! Normalized node types and the per-invocation node table

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

/// File extensions rendered with the image presentation
const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "ico", "tif", "tiff", "avif",
];

/// The resolved kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A container record - may have children
    #[display(fmt = "folder")]
    Folder,
    /// A terminal record
    #[display(fmt = "file")]
    File,
    /// A record whose type string could not be classified
    #[display(fmt = "unknown")]
    Unknown,
}

impl NodeKind {
    /// Classify a raw type string
    ///
    /// Matching is case-insensitive and by substring, so `"ImageFile"` is a
    /// file and `"project-folder"` is a folder. "folder" wins over "file".
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("folder") {
            NodeKind::Folder
        } else if lowered.contains("file") {
            NodeKind::File
        } else {
            NodeKind::Unknown
        }
    }

    /// Returns true for folders
    pub const fn is_folder(self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Returns true for files
    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Rank used when ordering siblings: files first, then folders
    const fn sibling_rank(self) -> u8 {
        match self {
            NodeKind::File => 0,
            NodeKind::Folder => 1,
            NodeKind::Unknown => 2,
        }
    }
}

/// How a node should be presented by a renderer
///
/// Purely presentational: the variant never affects layout geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RenderVariant {
    #[display(fmt = "folder")]
    #[serde(rename = "folder")]
    Folder,
    #[display(fmt = "plain-file")]
    #[serde(rename = "plain-file")]
    File,
    #[display(fmt = "image-file")]
    #[serde(rename = "image-file")]
    Image,
    #[display(fmt = "code-file")]
    #[serde(rename = "code-file")]
    Code,
    #[display(fmt = "document-file")]
    #[serde(rename = "document-file")]
    Document,
    #[display(fmt = "link-file")]
    #[serde(rename = "link-file")]
    Link,
}

impl RenderVariant {
    /// Resolve the variant for a node of the given kind
    ///
    /// An explicit tag wins over the file extension. Tags are ignored for
    /// folders.
    pub fn resolve(kind: NodeKind, name: &str, tag: Option<&str>) -> Self {
        if !kind.is_file() {
            return RenderVariant::Folder;
        }

        if let Some(variant) = tag.and_then(Self::from_tag) {
            return variant;
        }

        if has_image_extension(name) {
            RenderVariant::Image
        } else {
            RenderVariant::File
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "image" => Some(RenderVariant::Image),
            "code" => Some(RenderVariant::Code),
            "document" | "doc" => Some(RenderVariant::Document),
            "link" => Some(RenderVariant::Link),
            _ => None,
        }
    }
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|image| ext.eq_ignore_ascii_case(image)))
        .unwrap_or(false)
}

/// A validated, uniquely identified node
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNode {
    pub id: String,
    /// Distance from the root (root = 0)
    pub depth: usize,
    pub kind: NodeKind,
    pub render_variant: RenderVariant,
    pub name: String,
    pub purpose: Option<String>,
    pub description: Option<String>,
    /// `None` for the root
    pub parent_id: Option<String>,
    /// Surviving children, in sibling order once the table is sorted
    pub child_ids: Vec<String>,
}

impl NormalizedNode {
    /// Returns true if the node has no surviving children
    pub fn is_leaf(&self) -> bool {
        self.child_ids.is_empty()
    }

    /// Compare two siblings: files before folders, then by name ignoring case
    pub fn sibling_cmp(&self, other: &Self) -> Ordering {
        self.kind
            .sibling_rank()
            .cmp(&other.kind.sibling_rank())
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
    }
}

/// Flat table of normalized nodes keyed by id
///
/// Insertion order is retained; the first node inserted is the root.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: Vec<NormalizedNode>,
    index: HashMap<String, usize>,
}

impl NodeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node
    ///
    /// Returns false, leaving the table untouched, if the id is taken. If the
    /// node has a parent already in the table it is appended to the parent's
    /// children.
    pub fn insert(&mut self, node: NormalizedNode) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }

        if let Some(parent_id) = &node.parent_id {
            if let Some(&parent) = self.index.get(parent_id) {
                self.nodes[parent].child_ids.push(node.id.clone());
            }
        }

        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Check whether an id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get a node by id
    pub fn get(&self, id: &str) -> Option<&NormalizedNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// The root node, if anything was registered
    pub fn root(&self) -> Option<&NormalizedNode> {
        self.nodes.first()
    }

    /// Iterate over the surviving children of a node, in stored order
    pub fn children<'a>(
        &'a self,
        node: &'a NormalizedNode,
    ) -> impl Iterator<Item = &'a NormalizedNode> + 'a {
        node.child_ids.iter().filter_map(move |id| self.get(id))
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing was registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedNode> {
        self.nodes.iter()
    }

    /// Put every child list into sibling order
    ///
    /// The sort is stable, so siblings that compare equal keep their source
    /// order.
    pub fn sort_siblings(&mut self) {
        for slot in 0..self.nodes.len() {
            if self.nodes[slot].child_ids.len() < 2 {
                continue;
            }

            let mut children: Vec<&NormalizedNode> = self.children(&self.nodes[slot]).collect();
            children.sort_by(|a, b| a.sibling_cmp(b));
            let ordered: Vec<String> = children.into_iter().map(|c| c.id.clone()).collect();

            self.nodes[slot].child_ids = ordered;
        }
    }

    /// Walk from the root, parents before children, children in stored order
    pub fn pre_order(&self) -> Vec<&NormalizedNode> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<&NormalizedNode> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            order.push(node);
            // Reverse so the first child is popped first
            let children: Vec<_> = self.children(node).collect();
            stack.extend(children.into_iter().rev());
        }

        order
    }
}
