//! Element measurement.
//!
//! Resolves each element's extent along the active axis. Rectangle elements
//! report their own rect; free-form elements either share one configured
//! extent or are probed for visual bounds on themselves and then their
//! descendants.

use crate::error::{LayoutError, Result};
use crate::primitives::Size;
use crate::scene::SceneHost;

use super::alignment::Population;
use super::axis::Axis;

/// Where extents come from for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtentSource {
    /// The element's own rectangle.
    Rect,
    /// One configured scalar shared by every element.
    Configured(f32),
    /// Visual bounds found on the element or its descendants.
    Probe,
}

impl ExtentSource {
    pub fn for_population(population: Population, use_measured_extent: bool, configured: f32) -> Self {
        match population {
            Population::Rectangle => ExtentSource::Rect,
            Population::FreeForm if use_measured_extent => ExtentSource::Probe,
            Population::FreeForm => ExtentSource::Configured(configured),
        }
    }

    /// Measure `element` (at list position `index`) along `axis`.
    ///
    /// Only [`ExtentSource::Probe`] can fail. A rectangle element that
    /// somehow has no rect measures as zero.
    pub fn measure<H: SceneHost>(
        self,
        host: &H,
        axis: Axis,
        element: H::Node,
        index: usize,
    ) -> Result<f32> {
        match self {
            ExtentSource::Rect => Ok(axis.extent(host.rect_size(element).unwrap_or(Size::ZERO))),
            ExtentSource::Configured(extent) => Ok(extent),
            ExtentSource::Probe => match find_bounds(host, element) {
                Some(bounds) => Ok(axis.extent(bounds)),
                None => {
                    let name = host.name(element);
                    tracing::error!(
                        "No bounds provider found in {} or its children; disable measured extents \
                         and set a configured element extent",
                        name
                    );
                    Err(LayoutError::MeasurementUnavailable { element: name, index })
                }
            },
        }
    }

    /// Measure every element in order, stopping at the first failure.
    pub fn measure_all<H: SceneHost>(self, host: &H, axis: Axis, elements: &[H::Node]) -> Result<Vec<f32>> {
        elements
            .iter()
            .enumerate()
            .map(|(index, &element)| self.measure(host, axis, element, index))
            .collect()
    }
}

/// Find the first bounds provider on `node` or below it.
///
/// The node itself is checked first, then descendants depth-first in
/// sibling order. Each node is visited once, so a host that reports cyclic
/// children still terminates.
pub fn find_bounds<H: SceneHost>(host: &H, node: H::Node) -> Option<Size> {
    let mut visited = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.push(current);

        if let Some(bounds) = host.bounds_size(current) {
            return Some(bounds);
        }
        stack.extend(host.children(current).into_iter().rev());
    }
    None
}

/// Nominal container extent along `axis`.
///
/// Rectangle layouts read the container's own rect and yield `None` when the
/// container has none; free-form layouts use the configured container size.
pub fn container_extent<H: SceneHost>(
    host: &H,
    container: H::Node,
    population: Population,
    container_size: Size,
    axis: Axis,
) -> Option<f32> {
    match population {
        Population::Rectangle => host.rect_size(container).map(|size| axis.extent(size)),
        Population::FreeForm => Some(axis.extent(container_size)),
    }
}
