use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;

/// Lay out the elements of a container along one axis.
#[derive(Parser, Debug)]
#[command(name = "linea", version, about)]
pub struct Args {
    /// Scene description (JSON).
    pub scene: PathBuf,

    /// Layout axis. Overrides the scene file's `orientation`.
    #[arg(long, value_enum)]
    pub orientation: Option<LayoutOrientation>,

    /// Include debug outlines in the output.
    #[arg(long)]
    pub outlines: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutOrientation {
    #[default]
    Horizontal,
    Vertical,
}
