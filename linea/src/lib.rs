//! Linea: linear layout groups for scene graphs.
//!
//! Linea positions the direct elements of a container along one axis, with
//! Start/Center/End alignment and either a fixed gap or a gap derived to fill
//! the container. It does not own transforms: the host scene graph is reached
//! through [`SceneHost`], and elements that want to animate their way to a
//! target expose an [`ElementMover`].
//!
//! # Usage
//!
//! ```
//! use linea::{HorizontalLayoutGroup, LayoutConfig, Scene, SceneHost, Size, Vec3};
//!
//! let mut scene = Scene::new();
//! let container = scene.spawn("toolbar");
//! scene.set_rect(container, Size::new(100.0, 20.0));
//!
//! let mut group = HorizontalLayoutGroup::new(container)
//!     .with_config(LayoutConfig::new().spacing(5.0));
//!
//! for width in [10.0, 20.0, 30.0] {
//!     let button = scene.spawn("button");
//!     scene.set_rect(button, Size::new(width, 20.0));
//!     group.add_rect_element(&mut scene, button).unwrap();
//! }
//!
//! let first = group.rect_elements()[0];
//! assert_eq!(scene.local_position(first), Vec3::planar(-30.0, 0.0));
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Host seam and in-memory scene
pub mod scene;

// Layout engine
pub mod layout;

pub use error::{LayoutError, Result};
pub use layout::{
    Alignment, Axis, CommitMode, Horizontal, HorizontalAlignment, HorizontalLayoutGroup, LayoutConfig,
    LayoutGroup, Orientation, Outline, Placement, Population, SizingMode, Vertical, VerticalAlignment,
    VerticalLayoutGroup,
};
pub use primitives::{Color, Rect, Size, Vec3};
pub use scene::{ElementMover, NodeId, Scene, SceneHost};
