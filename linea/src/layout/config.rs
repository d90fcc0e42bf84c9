//! Layout container configuration.
//!
//! A plain value owned by each container. Hosts mutate it through
//! [`LayoutGroup::config_mut`](super::group::LayoutGroup::config_mut) and
//! then ask for a relayout; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::primitives::Size;

use super::alignment::{CommitMode, Population, SizingMode};

/// Per-container layout options.
///
/// `A` is the orientation's alignment vocabulary
/// ([`HorizontalAlignment`](super::alignment::HorizontalAlignment) or
/// [`VerticalAlignment`](super::alignment::VerticalAlignment)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(
        serialize = "A: Serialize",
        deserialize = "A: Deserialize<'de> + Default"
    )
)]
pub struct LayoutConfig<A> {
    /// Which element list is laid out.
    pub population: Population,
    /// Anchor along the layout axis.
    pub alignment: A,
    /// Fixed gap vs container fit.
    pub sizing: SizingMode,
    /// Gap between elements under [`SizingMode::FixedSpacing`].
    pub spacing: f32,
    /// Nominal container size for the free-form population.
    pub container_size: Size,
    /// Free-form only: probe element bounds instead of using `element_extent`.
    pub use_measured_extent: bool,
    /// Free-form only: shared extent of every element when not probing.
    pub element_extent: f32,
    /// Relayout after add/remove and structural notifications.
    pub auto_update: bool,
    /// Rebuild the active list from the container's children before a pass.
    pub auto_add_child_elements: bool,
    /// Progressive (apply as computed) or atomic (apply only on success).
    pub commit: CommitMode,
}

impl<A: Default> Default for LayoutConfig<A> {
    fn default() -> Self {
        Self {
            population: Population::Rectangle,
            alignment: A::default(),
            sizing: SizingMode::FixedSpacing,
            spacing: 0.1,
            container_size: Size::ONE,
            use_measured_extent: false,
            element_extent: 1.0,
            auto_update: true,
            auto_add_child_elements: false,
            commit: CommitMode::Progressive,
        }
    }
}

impl<A: Default> LayoutConfig<A> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> LayoutConfig<A> {
    /// Set the laid-out population.
    pub fn population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    /// Set the alignment anchor.
    pub fn align(mut self, alignment: A) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the sizing mode.
    pub fn sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the fixed gap between elements.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the nominal free-form container size.
    pub fn container_size(mut self, size: Size) -> Self {
        self.container_size = size;
        self
    }

    /// Probe free-form element bounds instead of using a configured extent.
    pub fn measured_extent(mut self, enabled: bool) -> Self {
        self.use_measured_extent = enabled;
        self
    }

    /// Set the shared free-form element extent.
    pub fn element_extent(mut self, extent: f32) -> Self {
        self.element_extent = extent;
        self
    }

    pub fn auto_update(mut self, enabled: bool) -> Self {
        self.auto_update = enabled;
        self
    }

    pub fn auto_add_child_elements(mut self, enabled: bool) -> Self {
        self.auto_add_child_elements = enabled;
        self
    }

    /// Set when positions are committed.
    pub fn commit(mut self, commit: CommitMode) -> Self {
        self.commit = commit;
        self
    }
}
