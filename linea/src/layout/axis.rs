//! Axis selection.
//!
//! One layout algorithm serves both orientations. [`Axis`] says which
//! coordinate is written and which size field is read; [`Orientation`] fixes
//! the axis and alignment vocabulary at the type level so a container cannot
//! switch orientation at runtime.

use std::fmt;

use crate::primitives::{Color, Size, Vec3};

use super::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};

/// The coordinate a layout pass computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// A position with only this axis set; the other axes are held at zero.
    #[inline]
    pub fn position(self, coordinate: f32) -> Vec3 {
        match self {
            Axis::Horizontal => Vec3::new(coordinate, 0.0, 0.0),
            Axis::Vertical => Vec3::new(0.0, coordinate, 0.0),
        }
    }

    /// Read this axis back out of a position.
    #[inline]
    pub fn coordinate(self, position: Vec3) -> f32 {
        match self {
            Axis::Horizontal => position.x,
            Axis::Vertical => position.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Compile-time orientation of a layout container.
pub trait Orientation {
    const AXIS: Axis;

    /// Outline color for per-element debug boxes.
    const OUTLINE_COLOR: Color;

    /// Alignment vocabulary surfaced to configuration.
    type Alignment: Copy + Default + PartialEq + fmt::Debug + Into<Alignment>;

    /// Size of the debug box drawn around an element of the configured extent.
    fn outline_size(extent: f32) -> Size;
}

/// Elements flow left to right.
#[derive(Debug, Clone, Copy, Default)]
pub struct Horizontal;

/// Elements flow bottom to top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vertical;

impl Orientation for Horizontal {
    const AXIS: Axis = Axis::Horizontal;
    const OUTLINE_COLOR: Color = Color::BLUE;
    type Alignment = HorizontalAlignment;

    fn outline_size(extent: f32) -> Size {
        Size::new(extent, 1.0)
    }
}

impl Orientation for Vertical {
    const AXIS: Axis = Axis::Vertical;
    const OUTLINE_COLOR: Color = Color::GREEN;
    type Alignment = VerticalAlignment;

    fn outline_size(extent: f32) -> Size {
        Size::new(extent, extent)
    }
}
