//! Linear layout engine.
//!
//! Lays out the direct elements of one container along a single axis. Each
//! pass is a pure function of the element list, their extents and the
//! configuration; nothing is cached between passes.
//!
//! # Architecture
//!
//! ```text
//! LayoutConfig + element list -> measure extents -> plan cursor -> apply positions
//! ```
//!
//! The axis is a type parameter ([`Horizontal`] / [`Vertical`]), so one
//! algorithm serves both orientations.

pub mod alignment;
pub mod axis;
pub mod config;
pub mod debug;
pub mod measure;
pub mod mover;
pub mod strategy;

// group must come after the modules it orchestrates
pub mod group;

// Re-export core types
pub use alignment::{Alignment, CommitMode, HorizontalAlignment, Population, SizingMode, VerticalAlignment};
pub use axis::{Axis, Horizontal, Orientation, Vertical};
pub use config::LayoutConfig;
pub use debug::Outline;
pub use group::{HorizontalLayoutGroup, LayoutGroup, VerticalLayoutGroup};
pub use measure::ExtentSource;
pub use mover::apply_position;
pub use strategy::{CursorPlan, PassParams, Placement, plan_positions};
