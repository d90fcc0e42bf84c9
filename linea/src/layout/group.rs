//! Layout container.
//!
//! A `LayoutGroup` owns two ordered element lists (rectangle and free-form)
//! and the configuration for one orientation. It never caches results: each
//! call to [`LayoutGroup::update_layout`] recomputes every position from the
//! current list, extents and configuration.
//!
//! ```
//! # use linea::{HorizontalLayoutGroup, LayoutConfig, Scene, SceneHost, Size, Vec3};
//! # let mut scene = Scene::new();
//! # let container = scene.spawn("panel");
//! # scene.set_rect(container, Size::new(100.0, 20.0));
//! # let button = scene.spawn("button");
//! # scene.set_rect(button, Size::new(10.0, 20.0));
//! let mut group = HorizontalLayoutGroup::new(container)
//!     .with_config(LayoutConfig::new().spacing(5.0));
//! group.add_rect_element(&mut scene, button)?;
//! group.update_layout(&mut scene)?;
//! assert_eq!(scene.local_position(button), Vec3::ZERO);
//! # Ok::<(), linea::LayoutError>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::Result;
use crate::scene::SceneHost;

use super::alignment::Population;
use super::axis::{Horizontal, Orientation, Vertical};
use super::config::LayoutConfig;
use super::debug::{Outline, container_outline, element_outlines};
use super::measure::{ExtentSource, container_extent};
use super::strategy::{self, PassParams, Placement};

/// Elements flow left to right; alignment is Left/Center/Right.
pub type HorizontalLayoutGroup<N> = LayoutGroup<Horizontal, N>;

/// Elements flow bottom to top; alignment is Lower/Center/Upper.
pub type VerticalLayoutGroup<N> = LayoutGroup<Vertical, N>;

// =========================================================================
// LayoutGroup
// =========================================================================

/// A linear layout container for one orientation.
///
/// `N` is the host's node handle. The container is itself a node in the host
/// (its rect is the extent basis for rectangle layouts and its children feed
/// `auto_add_child_elements`).
pub struct LayoutGroup<O: Orientation, N> {
    /// The host node this container lives on.
    node: N,
    config: LayoutConfig<O::Alignment>,
    /// Rectangle population, in layout order.
    rect_elements: Vec<N>,
    /// Free-form population, in layout order.
    free_elements: Vec<N>,
    _orientation: PhantomData<O>,
}

impl<O: Orientation, N: fmt::Debug> fmt::Debug for LayoutGroup<O, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutGroup")
            .field("axis", &O::AXIS)
            .field("node", &self.node)
            .field("config", &self.config)
            .field("rect_elements", &self.rect_elements)
            .field("free_elements", &self.free_elements)
            .finish()
    }
}

impl<O: Orientation, N: Copy + Eq + fmt::Debug> LayoutGroup<O, N> {
    /// Create an empty container on `node` with default configuration.
    pub fn new(node: N) -> Self {
        Self {
            node,
            config: LayoutConfig::default(),
            rect_elements: Vec::new(),
            free_elements: Vec::new(),
            _orientation: PhantomData,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: LayoutConfig<O::Alignment>) -> Self {
        self.config = config;
        self
    }

    pub fn node(&self) -> N {
        self.node
    }

    pub fn config(&self) -> &LayoutConfig<O::Alignment> {
        &self.config
    }

    /// Mutable access to the configuration.
    ///
    /// Edits take effect on the next pass; call
    /// [`on_config_changed`](Self::on_config_changed) to relayout right away.
    pub fn config_mut(&mut self) -> &mut LayoutConfig<O::Alignment> {
        &mut self.config
    }

    pub fn rect_elements(&self) -> &[N] {
        &self.rect_elements
    }

    pub fn free_elements(&self) -> &[N] {
        &self.free_elements
    }

    /// The list for `population`.
    pub fn elements(&self, population: Population) -> &[N] {
        match population {
            Population::Rectangle => &self.rect_elements,
            Population::FreeForm => &self.free_elements,
        }
    }

    fn elements_mut(&mut self, population: Population) -> &mut Vec<N> {
        match population {
            Population::Rectangle => &mut self.rect_elements,
            Population::FreeForm => &mut self.free_elements,
        }
    }

    // =========================================================================
    // Element management
    // =========================================================================

    /// Append a rectangle element. See [`add_element`](Self::add_element).
    pub fn add_rect_element<H>(&mut self, host: &mut H, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        self.add_element(host, Population::Rectangle, element)
    }

    /// Append a free-form element. See [`add_element`](Self::add_element).
    pub fn add_free_element<H>(&mut self, host: &mut H, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        self.add_element(host, Population::FreeForm, element)
    }

    /// Reparent `element` under the container and append it to the
    /// `population` list.
    ///
    /// Returns `Ok(false)` if the element is already in that list, or if it
    /// is the container itself or one of its ancestors. When `auto_update` is
    /// set the container is laid out again; a failure there is returned, but
    /// the element stays added.
    pub fn add_element<H>(&mut self, host: &mut H, population: Population, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        if self.elements(population).contains(&element) {
            return Ok(false);
        }
        if self.is_container_or_ancestor(host, element) {
            tracing::warn!(?element, container = ?self.node, "cannot lay out the container's own ancestry");
            return Ok(false);
        }

        host.set_parent(element, Some(self.node));
        self.elements_mut(population).push(element);
        tracing::debug!(?element, ?population, "added layout element");

        if self.config.auto_update {
            self.update_layout(host)?;
        }
        Ok(true)
    }

    /// Remove a rectangle element. See [`remove_element`](Self::remove_element).
    pub fn remove_rect_element<H>(&mut self, host: &mut H, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        self.remove_element(host, Population::Rectangle, element)
    }

    /// Remove a free-form element. See [`remove_element`](Self::remove_element).
    pub fn remove_free_element<H>(&mut self, host: &mut H, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        self.remove_element(host, Population::FreeForm, element)
    }

    /// Remove `element` from the `population` list.
    ///
    /// The element is detached only if the container is still its parent.
    /// Returns `Ok(false)` if it was not in the list.
    pub fn remove_element<H>(&mut self, host: &mut H, population: Population, element: N) -> Result<bool>
    where
        H: SceneHost<Node = N>,
    {
        let Some(index) = self.elements(population).iter().position(|&e| e == element) else {
            return Ok(false);
        };

        if host.parent(element) == Some(self.node) {
            host.set_parent(element, None);
        }
        self.elements_mut(population).remove(index);
        tracing::debug!(?element, ?population, "removed layout element");

        if self.config.auto_update {
            self.update_layout(host)?;
        }
        Ok(true)
    }

    fn is_container_or_ancestor<H>(&self, host: &H, element: N) -> bool
    where
        H: SceneHost<Node = N>,
    {
        let mut seen = Vec::new();
        let mut current = Some(self.node);
        while let Some(node) = current {
            if node == element {
                return true;
            }
            if seen.contains(&node) {
                return false;
            }
            seen.push(node);
            current = host.parent(node);
        }
        false
    }

    /// Forget every element in both lists. Parents and positions are left
    /// alone and no pass runs.
    pub fn clear_elements(&mut self) {
        self.rect_elements.clear();
        self.free_elements.clear();
    }

    /// Rebuild the active list from the container's children.
    ///
    /// No-op unless `auto_add_child_elements` is set. The rectangle list only
    /// takes children that have a rect.
    pub fn sync_child_elements<H>(&mut self, host: &H)
    where
        H: SceneHost<Node = N>,
    {
        if !self.config.auto_add_child_elements {
            return;
        }

        let population = self.config.population;
        let children = host.children(self.node);
        let list = self.elements_mut(population);
        list.clear();
        for child in children {
            if population == Population::Rectangle && host.rect_size(child).is_none() {
                continue;
            }
            if !list.contains(&child) {
                list.push(child);
            }
        }
    }

    // =========================================================================
    // Layout passes
    // =========================================================================

    /// Run a full layout pass over the active population.
    ///
    /// Returns the placements handed out. An empty list is a no-op. A probe
    /// miss aborts the pass with
    /// [`LayoutError::MeasurementUnavailable`](crate::error::LayoutError::MeasurementUnavailable);
    /// see [`strategy::run`] for what has been applied by then.
    pub fn update_layout<H>(&mut self, host: &mut H) -> Result<Vec<Placement<N>>>
    where
        H: SceneHost<Node = N>,
    {
        self.sync_child_elements(host);

        let elements = self.elements(self.config.population);
        if elements.is_empty() {
            return Ok(Vec::new());
        }

        let params = self.pass_params(host);
        strategy::run(host, elements, &params)
    }

    /// Host notification that the container's children changed.
    pub fn on_children_changed<H>(&mut self, host: &mut H) -> Result<Vec<Placement<N>>>
    where
        H: SceneHost<Node = N>,
    {
        self.sync_child_elements(host);
        if self.config.auto_update {
            self.update_layout(host)
        } else {
            Ok(Vec::new())
        }
    }

    /// Host notification that the configuration was edited.
    ///
    /// Relayouts only when `auto_update` is set; otherwise the edit waits for
    /// the next explicit [`update_layout`](Self::update_layout).
    pub fn on_config_changed<H>(&mut self, host: &mut H) -> Result<Vec<Placement<N>>>
    where
        H: SceneHost<Node = N>,
    {
        if self.config.auto_update {
            self.update_layout(host)
        } else {
            Ok(Vec::new())
        }
    }

    /// Resolve the pass parameters for the current configuration.
    pub fn pass_params<H>(&self, host: &H) -> PassParams
    where
        H: SceneHost<Node = N>,
    {
        let config = &self.config;
        PassParams {
            axis: O::AXIS,
            sizing: config.sizing,
            alignment: config.alignment.into(),
            spacing: config.spacing,
            container_extent: container_extent(
                host,
                self.node,
                config.population,
                config.container_size,
                O::AXIS,
            ),
            source: ExtentSource::for_population(
                config.population,
                config.use_measured_extent,
                config.element_extent,
            ),
            commit: config.commit,
        }
    }

    /// Debug outlines for the free-form configuration.
    ///
    /// The container box is drawn for the free-form population; element
    /// boxes are drawn whenever free-form extents are configured rather than
    /// probed.
    pub fn debug_outlines<H>(&self, host: &H) -> Vec<Outline>
    where
        H: SceneHost<Node = N>,
    {
        let mut outlines = Vec::new();
        if self.config.population == Population::FreeForm {
            outlines.push(container_outline(self.config.container_size));
        }
        if !self.config.use_measured_extent {
            outlines.extend(element_outlines::<O, H>(
                host,
                &self.free_elements,
                self.config.element_extent,
            ));
        }
        outlines
    }
}

// =========================================================================
// Tests
// =========================================================================
