//! Axis strategy: the cursor-advance layout algorithm.
//!
//! Every combination of sizing mode, alignment and population follows the
//! same shape. A start cursor is chosen, then each element in list order is
//! centered on `cursor ± extent/2` and the cursor moves on by
//! `extent + gap`. End alignment grows from the positive edge inward, so its
//! placement and advance are negated.
//!
//! ```text
//! Start/Center:  |cursor→ [e0] gap [e1] gap [e2]
//! End:                    [e2] gap [e1] gap [e0] ←cursor|
//! ```

use crate::error::Result;
use crate::primitives::Vec3;
use crate::scene::SceneHost;

use super::alignment::{Alignment, CommitMode, SizingMode};
use super::axis::Axis;
use super::measure::ExtentSource;
use super::mover::apply_position;

// =========================================================================
// Cursor planning
// =========================================================================

/// Whether the start cursor depends on the summed element extents.
///
/// When it does, every element is measured before any position is applied.
#[inline]
pub fn needs_content_extent(sizing: SizingMode, alignment: Alignment) -> bool {
    match sizing {
        SizingMode::FixedSpacing => alignment == Alignment::Center,
        SizingMode::ContainerFit => true,
    }
}

/// Start cursor and gap for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPlan {
    /// Cursor before the first element.
    pub start: f32,
    /// Gap added after each element; negative under an overflowing container fit.
    pub gap: f32,
    pub alignment: Alignment,
    /// A lone center-aligned element under container fit sits exactly at 0.
    pub pinned: bool,
}

impl CursorPlan {
    /// Plan a fixed-spacing pass.
    ///
    /// Center uses the content extent (`Σe + spacing·(n−1)`); Start and End
    /// anchor on the container extent instead, so they are not guaranteed to
    /// fit and do not share the Center basis. `content_extent` is only read
    /// for Center.
    pub fn fixed_spacing(
        alignment: Alignment,
        spacing: f32,
        count: usize,
        content_extent: f32,
        container_extent: f32,
    ) -> Self {
        let start = match alignment {
            Alignment::Center => {
                let total = content_extent + spacing * count.saturating_sub(1) as f32;
                -total / 2.0
            }
            Alignment::Start => -container_extent / 2.0,
            Alignment::End => container_extent / 2.0,
        };

        Self {
            start,
            gap: spacing,
            alignment,
            pinned: false,
        }
    }

    /// Plan a container-fit pass.
    ///
    /// The gap is derived so `Σe + gap·(n−1) == container_extent`. It may be
    /// negative, which overlaps elements rather than failing.
    pub fn container_fit(
        alignment: Alignment,
        count: usize,
        content_extent: f32,
        container_extent: f32,
    ) -> Self {
        let gap = if count > 1 {
            (container_extent - content_extent) / (count - 1) as f32
        } else {
            0.0
        };
        let pinned = alignment == Alignment::Center && count == 1;

        let start = match alignment {
            _ if pinned => 0.0,
            Alignment::End => container_extent / 2.0,
            Alignment::Start | Alignment::Center => -container_extent / 2.0,
        };

        Self {
            start,
            gap,
            alignment,
            pinned,
        }
    }

    /// Center coordinate of an element whose near edge is at `cursor`.
    #[inline]
    pub fn place(&self, cursor: f32, extent: f32) -> f32 {
        if self.pinned {
            return 0.0;
        }
        match self.alignment {
            Alignment::End => cursor - extent / 2.0,
            Alignment::Start | Alignment::Center => cursor + extent / 2.0,
        }
    }

    /// Cursor after an element of `extent`.
    #[inline]
    pub fn advance(&self, cursor: f32, extent: f32) -> f32 {
        match self.alignment {
            Alignment::End => cursor - (extent + self.gap),
            Alignment::Start | Alignment::Center => cursor + extent + self.gap,
        }
    }
}

// =========================================================================
// Pass parameters
// =========================================================================

/// Everything a pass needs besides the host and the element list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassParams {
    pub axis: Axis,
    pub sizing: SizingMode,
    pub alignment: Alignment,
    /// Fixed gap, read only under [`SizingMode::FixedSpacing`].
    pub spacing: f32,
    /// Nominal container extent, `None` when the container has no size.
    pub container_extent: Option<f32>,
    pub source: ExtentSource,
    pub commit: CommitMode,
}

impl PassParams {
    /// Build the cursor plan for `count` elements.
    ///
    /// Returns `None` when the pass has nothing to anchor on: a container fit
    /// against a container without a size. Fixed spacing treats a missing
    /// container extent as zero.
    pub fn plan(&self, count: usize, content_extent: f32) -> Option<CursorPlan> {
        match self.sizing {
            SizingMode::FixedSpacing => Some(CursorPlan::fixed_spacing(
                self.alignment,
                self.spacing,
                count,
                content_extent,
                self.container_extent.unwrap_or(0.0),
            )),
            SizingMode::ContainerFit => {
                let available = self.container_extent?;
                Some(CursorPlan::container_fit(self.alignment, count, content_extent, available))
            }
        }
    }
}

/// A position handed to one element during a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<N> {
    pub element: N,
    /// Index in the laid-out list.
    pub index: usize,
    pub extent: f32,
    pub position: Vec3,
}

// =========================================================================
// Pure computation
// =========================================================================

/// Compute axis coordinates for already-measured extents.
///
/// Returns `None` where [`PassParams::plan`] does. Does not touch any host.
pub fn plan_positions(params: &PassParams, extents: &[f32]) -> Option<Vec<f32>> {
    if extents.is_empty() {
        return Some(Vec::new());
    }

    let content: f32 = extents.iter().sum();
    let plan = params.plan(extents.len(), content)?;

    let mut cursor = plan.start;
    let positions = extents
        .iter()
        .map(|&extent| {
            let position = plan.place(cursor, extent);
            cursor = plan.advance(cursor, extent);
            position
        })
        .collect();
    Some(positions)
}

// =========================================================================
// Pass execution
// =========================================================================

/// Lay out `elements` against `host` and apply the resulting positions.
///
/// Under [`CommitMode::Progressive`] each position is applied as soon as it
/// is computed. A measurement failure then stops the pass at the failing
/// element: earlier elements stay moved, the failing one and everything after
/// it keep their previous positions. Passes whose cursor depends on the summed
/// extents measure everything up front, so they fail before moving anything.
///
/// Under [`CommitMode::Atomic`] nothing is applied unless every element
/// measured successfully.
pub fn run<H: SceneHost>(
    host: &mut H,
    elements: &[H::Node],
    params: &PassParams,
) -> Result<Vec<Placement<H::Node>>> {
    if elements.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(
        axis = %params.axis,
        sizing = ?params.sizing,
        alignment = ?params.alignment,
        commit = ?params.commit,
        count = elements.len(),
        "layout pass"
    );

    let upfront = params.commit == CommitMode::Atomic
        || needs_content_extent(params.sizing, params.alignment);
    let measured = if upfront {
        Some(params.source.measure_all(host, params.axis, elements)?)
    } else {
        None
    };

    let content: f32 = measured.as_ref().map_or(0.0, |extents| extents.iter().sum());
    let Some(plan) = params.plan(elements.len(), content) else {
        tracing::debug!("container has no size, skipping container fit");
        return Ok(Vec::new());
    };
    if params.sizing == SizingMode::ContainerFit && plan.gap < 0.0 {
        tracing::warn!(
            gap = plan.gap,
            "content exceeds container extent, elements will overlap"
        );
    }

    let mut placements = Vec::with_capacity(elements.len());
    let mut cursor = plan.start;

    for (index, &element) in elements.iter().enumerate() {
        let extent = match &measured {
            Some(extents) => extents[index],
            None => params.source.measure(host, params.axis, element, index)?,
        };

        let position = params.axis.position(plan.place(cursor, extent));
        cursor = plan.advance(cursor, extent);

        if params.commit == CommitMode::Progressive {
            apply_position(host, element, position);
        }
        tracing::trace!(index, extent, ?position, "placed element");

        placements.push(Placement {
            element,
            index,
            extent,
            position,
        });
    }

    if params.commit == CommitMode::Atomic {
        for placement in &placements {
            apply_position(host, placement.element, placement.position);
        }
    }

    Ok(placements)
}

// =========================================================================
// Tests
// =========================================================================
