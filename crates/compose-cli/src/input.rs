//! Loading the JSON inputs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use layout_canvas::SavedPositions;
use serde::de::DeserializeOwned;
use tree_composer::{ComposeOptions, SourceNode};

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {what} file {}", path.display()))
}

pub fn load_tree(path: &Path) -> Result<SourceNode> {
    read_json(path, "tree")
}

/// Options file, or defaults when none was given
pub fn load_options(path: Option<&Path>) -> Result<ComposeOptions> {
    path.map_or_else(|| Ok(ComposeOptions::default()), |path| read_json(path, "options"))
}

pub fn load_saved(path: Option<&Path>) -> Result<Option<SavedPositions>> {
    path.map(|path| read_json(path, "saved positions")).transpose()
}
