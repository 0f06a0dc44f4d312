mod args;
mod input;
mod output;

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{info, warn};
use tree_composer::{Composer, Spacing};

use args::Args;
use output::Document;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    let tree = input::load_tree(&args.tree)?;
    let options = input::load_options(args.options.as_deref())?;
    let saved = input::load_saved(args.saved.as_deref())?;

    let node_size = Spacing::resolve(&options).node_size;
    let layout = Composer::new(options).compose(&tree);
    for warning in &layout.warnings {
        warn!("{warning}");
    }
    info!(
        "composed {} node(s) from {}",
        layout.nodes.len(),
        args.tree.display()
    );

    let document = Document::build(layout, node_size, saved.as_ref());
    let json = document
        .to_json(args.compact)
        .context("Failed to serialize layout")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write layout")?;
    Ok(())
}
