use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str =
    "usage: compose-tree <tree.json> [--options <options.json>] [--saved <positions.json>] [--compact]";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub tree: PathBuf,
    pub options: Option<PathBuf>,
    pub saved: Option<PathBuf>,
    pub compact: bool,
}

impl Args {
    /// Parse everything after the program name
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut tree = None;
        let mut options = None;
        let mut saved = None;
        let mut compact = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => options = Some(value_for(&arg, args.next())?),
                "--saved" => saved = Some(value_for(&arg, args.next())?),
                "--compact" => compact = true,
                flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
                _ if tree.is_some() => bail!("unexpected argument {arg}\n{USAGE}"),
                _ => tree = Some(PathBuf::from(arg)),
            }
        }

        Ok(Self {
            tree: tree.ok_or_else(|| anyhow!("missing tree file\n{USAGE}"))?,
            options,
            saved,
            compact,
        })
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<PathBuf> {
    match value {
        Some(value) if !value.starts_with("--") => Ok(PathBuf::from(value)),
        _ => bail!("{flag} needs a file path\n{USAGE}"),
    }
}
