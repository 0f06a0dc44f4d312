//! Source records supplied by the caller
//!
//! A `SourceNode` is the persisted, untrusted form of the file/folder index.
//! Nothing here is validated; the normalizer decides what survives.

use serde::{Deserialize, Deserializer, Serialize};

/// A single record of the persisted file/folder index
///
/// The `kind` field is a free-form type string (`"folder"`, `"file"`,
/// `"image-file"`, ...). It is classified once during normalization and never
/// trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    /// Explicit identity, if the record carries one
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Raw type string
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    /// Display name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Free-text purpose of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Free-text description of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional presentation tag for file records (e.g. `"image"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Ordered children; only folders may legally have any
    #[serde(
        default,
        deserialize_with = "lenient_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<SourceNode>,
}

/// A scalar where a string is expected
///
/// Persisted indexes sometimes carry numeric ids or names. They are read as
/// their text form instead of failing the whole load.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Signed(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// `null` reads as an empty string
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// `null` reads as no children
fn lenient_children<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<SourceNode>, D::Error> {
    Ok(Option::<Vec<SourceNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SourceNode {
    /// Create a record with the given raw type string and name
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a folder record
    pub fn folder(name: impl Into<String>) -> Self {
        Self::new("folder", name)
    }

    /// Create a file record
    pub fn file(name: impl Into<String>) -> Self {
        Self::new("file", name)
    }

    /// Set the explicit identity
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the purpose text
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Set the description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the presentation tag
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Append a child record
    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the child list
    pub fn with_children(mut self, children: impl IntoIterator<Item = SourceNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// The explicit identity, trimmed, if it is non-blank
    pub fn explicit_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Count every record below this one
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&SourceNode> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
