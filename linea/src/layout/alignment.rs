//! Layout policy types.
//!
//! Alignment is stored per orientation in its own vocabulary
//! (Left/Center/Right or Lower/Center/Upper) and resolved to the
//! orientation-free [`Alignment`] before the cursor is planned.

use serde::{Deserialize, Serialize};

/// Orientation-free alignment anchor along the layout axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Grow from the negative edge of the container.
    Start,
    /// Center the content (or distribute from the negative edge under
    /// container fit).
    #[default]
    Center,
    /// Grow from the positive edge inward.
    End,
}

/// Alignment vocabulary for horizontal layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl From<HorizontalAlignment> for Alignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => Alignment::Start,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::End,
        }
    }
}

/// Alignment vocabulary for vertical layouts (Y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Lower,
    #[default]
    Center,
    Upper,
}

impl From<VerticalAlignment> for Alignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Lower => Alignment::Start,
            VerticalAlignment::Center => Alignment::Center,
            VerticalAlignment::Upper => Alignment::End,
        }
    }
}

/// How the gap between elements is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Fixed configured gap; the container is not guaranteed to be filled.
    #[default]
    FixedSpacing,
    /// Gap derived so the content spans the container extent exactly.
    ContainerFit,
}

/// Which element list a container lays out, and how those elements are
/// measured and moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    /// Elements with an intrinsic rectangle; 2D positions.
    #[default]
    Rectangle,
    /// Free-form elements measured by a configured extent or a bounds probe;
    /// 3D positions.
    FreeForm,
}

/// When computed positions are handed to the elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMode {
    /// Apply each position as soon as it is computed. A measurement failure
    /// leaves earlier elements moved.
    #[default]
    Progressive,
    /// Measure and compute everything first; apply only if the whole pass
    /// succeeded.
    Atomic,
}
