//! Debug outlines for layout visualization.
//!
//! Hosts with an overlay can draw these to see the nominal container box and
//! the configured element extents. Everything is in the container's local
//! space.

use serde::Serialize;

use crate::primitives::{Color, Rect, Size, Vec3};
use crate::scene::SceneHost;

use super::axis::Orientation;

/// A wireframe box to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub rect: Rect,
    pub color: Color,
}

/// Outline of the nominal free-form container, centered on the origin.
pub fn container_outline(container_size: Size) -> Outline {
    Outline {
        rect: Rect::centered(Vec3::ZERO, container_size),
        color: Color::RED,
    }
}

/// One outline per element, sized by the configured element extent and
/// drawn at each element's current position.
pub fn element_outlines<O: Orientation, H: SceneHost>(
    host: &H,
    elements: &[H::Node],
    element_extent: f32,
) -> Vec<Outline> {
    let size = O::outline_size(element_extent);
    elements
        .iter()
        .map(|&element| Outline {
            rect: Rect::centered(host.local_position(element), size),
            color: O::OUTLINE_COLOR,
        })
        .collect()
}
