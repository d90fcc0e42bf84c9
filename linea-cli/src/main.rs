//! `linea`: run a layout pass over a JSON scene description.
//!
//! Prints the resulting element positions as JSON on stdout.

mod cli;
mod logging;
mod scene_file;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::scene_file::SceneFile;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let scene = SceneFile::load(&args.scene)?;
    let orientation = args.orientation.unwrap_or(scene.orientation);
    tracing::info!(path = %args.scene.display(), ?orientation, "laying out scene");

    let report = scene.lay_out(orientation, args.outlines)?;
    let json = serde_json::to_string_pretty(&report).context("failed to encode layout report")?;
    println!("{json}");
    Ok(())
}
