//! Tree normalization
//!
//! Walks the source tree once, pre-order and in source order, classifying
//! every record and assigning it a stable identity. Records that cannot be
//! trusted are skipped together with their subtrees; the walk never descends
//! into them, so one bad record yields exactly one warning.

use crate::node::{NodeKind, NodeTable, NormalizedNode, RenderVariant};
use crate::options::DEFAULT_ROOT_ID;
use crate::source::SourceNode;
use crate::warning::ComposeWarning;

/// Longest name suffix used in a synthesized id
const MAX_NAME_SUFFIX: usize = 32;

/// Suffix used when a record's name sanitizes to nothing
const FALLBACK_NAME_SUFFIX: &str = "node";

/// The node table for one composition plus what was skipped building it
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub table: NodeTable,
    pub warnings: Vec<ComposeWarning>,
}

/// A record waiting to be visited
struct Pending<'a> {
    source: &'a SourceNode,
    parent_id: String,
    sibling_index: usize,
    depth: usize,
}

/// Build the node table for `root`
///
/// The root's identity is `root_id` if given and non-blank, else the root's
/// own explicit id, else [`DEFAULT_ROOT_ID`]. The root is always registered;
/// if its type string cannot be classified it is treated as a folder.
pub fn normalize(root: &SourceNode, root_id: Option<&str>) -> Normalized {
    let mut table = NodeTable::new();
    let mut warnings = Vec::new();

    let root_id = root_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| root.explicit_id())
        .unwrap_or(DEFAULT_ROOT_ID)
        .to_string();

    let root_kind = match NodeKind::classify(&root.kind) {
        NodeKind::Unknown => NodeKind::Folder,
        kind => kind,
    };

    check_file_children(root, &root_id, root_kind, &mut warnings);
    table.insert(normalized_node(root, root_id.clone(), root_kind, None, 0));

    let mut stack: Vec<Pending> = Vec::new();
    push_children(&mut stack, root, &root_id, 1);

    while let Some(pending) = stack.pop() {
        let source = pending.source;
        let id = resolve_id(source, &pending.parent_id, pending.sibling_index);
        let kind = NodeKind::classify(&source.kind);

        if kind == NodeKind::Unknown {
            warnings.push(ComposeWarning::UnknownKind {
                id,
                name: source.name.clone(),
                raw_kind: source.kind.clone(),
                dropped: source.descendant_count(),
            });
            continue;
        }

        if table.contains(&id) {
            warnings.push(ComposeWarning::DuplicateId {
                id,
                name: source.name.clone(),
                parent_id: pending.parent_id,
                dropped: source.descendant_count(),
            });
            continue;
        }

        check_file_children(source, &id, kind, &mut warnings);

        let node = normalized_node(
            source,
            id.clone(),
            kind,
            Some(pending.parent_id),
            pending.depth,
        );
        table.insert(node);
        push_children(&mut stack, source, &id, pending.depth + 1);
    }

    log::trace!(
        "normalized {} node(s), {} warning(s)",
        table.len(),
        warnings.len()
    );

    Normalized { table, warnings }
}

/// Queue the children of `source` so the first child is visited first
fn push_children<'a>(
    stack: &mut Vec<Pending<'a>>,
    source: &'a SourceNode,
    parent_id: &str,
    depth: usize,
) {
    for (sibling_index, child) in source.children.iter().enumerate().rev() {
        stack.push(Pending {
            source: child,
            parent_id: parent_id.to_string(),
            sibling_index,
            depth,
        });
    }
}

fn check_file_children(
    source: &SourceNode,
    id: &str,
    kind: NodeKind,
    warnings: &mut Vec<ComposeWarning>,
) {
    if kind.is_file() && !source.children.is_empty() {
        warnings.push(ComposeWarning::FileWithChildren {
            id: id.to_string(),
            name: source.name.clone(),
            child_count: source.children.len(),
        });
    }
}

fn normalized_node(
    source: &SourceNode,
    id: String,
    kind: NodeKind,
    parent_id: Option<String>,
    depth: usize,
) -> NormalizedNode {
    NormalizedNode {
        id,
        depth,
        kind,
        render_variant: RenderVariant::resolve(kind, &source.name, source.variant.as_deref()),
        name: source.name.clone(),
        purpose: source.purpose.clone(),
        description: source.description.clone(),
        parent_id,
        child_ids: Vec::new(),
    }
}

/// The identity of a non-root record
///
/// An explicit, non-blank id is used as-is (trimmed). Otherwise the id is
/// `<parent>_child_<index>_<name>`; the parent and sibling index alone keep it
/// unique, the name only makes it readable.
pub fn resolve_id(source: &SourceNode, parent_id: &str, sibling_index: usize) -> String {
    if let Some(id) = source.explicit_id() {
        return id.to_string();
    }

    let suffix = sanitize_name(&source.name);
    let suffix = if suffix.is_empty() {
        FALLBACK_NAME_SUFFIX
    } else {
        suffix.as_str()
    };

    format!("{parent_id}_child_{sibling_index}_{suffix}")
}

/// Reduce a display name to `[a-z0-9_]`
///
/// Lower-cases, collapses each run of other characters to one underscore,
/// drops leading and trailing underscores, and keeps at most 32 characters.
pub fn sanitize_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len().min(MAX_NAME_SUFFIX * 2));
    let mut separator_pending = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if separator_pending && !sanitized.is_empty() {
                sanitized.push('_');
            }
            separator_pending = false;
            sanitized.push(ch);
        } else {
            separator_pending = true;
        }
    }

    // Only ASCII was pushed, so byte length equals char count
    sanitized.truncate(MAX_NAME_SUFFIX);
    sanitized
}
