//! Non-fatal problems found while normalizing the source tree

use derive_more::Display;
use serde::{Serialize, Serializer};

/// A problem with the source tree that was recovered from
///
/// Warnings never abort composition. They are returned with the layout in
/// the order the records were visited; the caller decides whether to surface
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ComposeWarning {
    /// A second record presented an id that was already registered.
    /// The record and everything below it were skipped.
    #[display(
        fmt = "skipped node \"{}\" under \"{}\": duplicate id \"{}\" ({} descendant node(s) dropped)",
        name,
        parent_id,
        id,
        dropped
    )]
    DuplicateId {
        id: String,
        name: String,
        parent_id: String,
        dropped: usize,
    },

    /// A record's type string is neither a folder nor a file.
    /// The record and everything below it were skipped.
    #[display(
        fmt = "skipped node \"{}\" ({}): unrecognized type \"{}\" ({} descendant node(s) dropped)",
        name,
        id,
        raw_kind,
        dropped
    )]
    UnknownKind {
        id: String,
        name: String,
        raw_kind: String,
        dropped: usize,
    },

    /// A file record carries children. They are kept.
    #[display(fmt = "file node \"{}\" ({}) has {} child record(s)", name, id, child_count)]
    FileWithChildren {
        id: String,
        name: String,
        child_count: usize,
    },
}

impl ComposeWarning {
    /// The id of the record the warning is about
    pub fn id(&self) -> &str {
        match self {
            ComposeWarning::DuplicateId { id, .. }
            | ComposeWarning::UnknownKind { id, .. }
            | ComposeWarning::FileWithChildren { id, .. } => id,
        }
    }

    /// Returns true if the warning means records were dropped
    pub fn is_data_loss(&self) -> bool {
        !matches!(self, ComposeWarning::FileWithChildren { .. })
    }
}

/// Warnings serialize as their human-readable message
impl Serialize for ComposeWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
