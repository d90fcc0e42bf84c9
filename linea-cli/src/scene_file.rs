//! JSON scene descriptions.
//!
//! A scene file describes one container and its elements:
//!
//! ```json
//! {
//!   "orientation": "horizontal",
//!   "config": { "spacing": 5.0, "alignment": "left" },
//!   "container": { "width": 100.0, "height": 20.0 },
//!   "elements": [
//!     { "name": "a", "rect": { "width": 10.0, "height": 20.0 } },
//!     { "name": "b", "children": [{ "name": "mesh", "bounds": { "width": 4.0, "height": 4.0 } }] }
//!   ]
//! }
//! ```
//!
//! `config` is a partial `LayoutConfig`; its alignment uses the vocabulary of
//! the chosen orientation.

use std::path::Path;

use anyhow::{Context, Result};
use linea::{
    Horizontal, LayoutConfig, LayoutGroup, NodeId, Orientation, Outline, Scene, SceneHost, Size, Vec3, Vertical,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cli::LayoutOrientation;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub orientation: LayoutOrientation,
    /// Kept raw until the orientation, and so the alignment vocabulary, is known.
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    /// Container rect. Omitted means the container has none.
    #[serde(default)]
    pub container: Option<Size>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementSpec {
    pub name: String,
    #[serde(default)]
    pub rect: Option<Size>,
    #[serde(default)]
    pub bounds: Option<Size>,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    fn spawn(&self, scene: &mut Scene, parent: Option<NodeId>) -> NodeId {
        let node = match parent {
            Some(parent) => scene.spawn_child(parent, &self.name),
            None => scene.spawn(&self.name),
        };
        if let Some(size) = self.rect {
            scene.set_rect(node, size);
        }
        if let Some(size) = self.bounds {
            scene.set_bounds(node, size);
        }
        scene.set_local_position(node, self.position);

        for child in &self.children {
            child.spawn(scene, Some(node));
        }
        node
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementPosition {
    pub name: String,
    pub position: Vec3,
}

/// Output of one run: a bare position list, or positions plus outlines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Positions(Vec<ElementPosition>),
    WithOutlines {
        positions: Vec<ElementPosition>,
        outlines: Vec<Outline>,
    },
}

impl Report {
    pub fn positions(&self) -> &[ElementPosition] {
        match self {
            Report::Positions(positions) => positions,
            Report::WithOutlines { positions, .. } => positions,
        }
    }
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse scene file {}", path.display()))
    }

    pub fn lay_out(&self, orientation: LayoutOrientation, outlines: bool) -> Result<Report> {
        match orientation {
            LayoutOrientation::Horizontal => self.lay_out_along::<Horizontal>(outlines),
            LayoutOrientation::Vertical => self.lay_out_along::<Vertical>(outlines),
        }
    }

    fn config<A>(&self) -> Result<LayoutConfig<A>>
    where
        A: DeserializeOwned + Default,
    {
        match &self.config {
            Some(value) => serde_json::from_value(value.clone()).context("invalid layout config"),
            None => Ok(LayoutConfig::default()),
        }
    }

    fn lay_out_along<O>(&self, outlines: bool) -> Result<Report>
    where
        O: Orientation,
        O::Alignment: DeserializeOwned,
    {
        let config = self.config::<O::Alignment>()?;
        let population = config.population;
        let auto_update = config.auto_update;

        let mut scene = Scene::new();
        let container = scene.spawn("container");
        if let Some(size) = self.container {
            scene.set_rect(container, size);
        }

        // Populate first, then run a single pass.
        let mut group = LayoutGroup::<O, NodeId>::new(container).with_config(config.auto_update(false));
        for spec in &self.elements {
            let node = spec.spawn(&mut scene, None);
            group.add_element(&mut scene, population, node)?;
        }
        group.config_mut().auto_update = auto_update;

        let placements = group
            .update_layout(&mut scene)
            .with_context(|| format!("{} layout pass failed", O::AXIS))?;
        tracing::debug!(placed = placements.len(), "layout pass complete");

        let positions = group
            .elements(population)
            .iter()
            .map(|&node| ElementPosition {
                name: scene.name(node),
                position: scene.local_position(node),
            })
            .collect();

        Ok(if outlines {
            Report::WithOutlines {
                positions,
                outlines: group.debug_outlines(&scene),
            }
        } else {
            Report::Positions(positions)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use linea::Color;

    use super::*;

    fn write_temp_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn coordinates(report: &Report, pick: fn(Vec3) -> f32) -> Vec<(String, f32)> {
        report
            .positions()
            .iter()
            .map(|p| (p.name.clone(), pick(p.position)))
            .collect()
    }

    #[test]
    fn test_horizontal_fixed_spacing_from_file() {
        let (_dir, path) = write_temp_file(
            r#"{
                "config": { "spacing": 5.0 },
                "container": { "width": 500.0, "height": 10.0 },
                "elements": [
                    { "name": "a", "rect": { "width": 10.0, "height": 1.0 } },
                    { "name": "b", "rect": { "width": 20.0, "height": 1.0 } },
                    { "name": "c", "rect": { "width": 30.0, "height": 1.0 } }
                ]
            }"#,
        );

        let scene = SceneFile::load(&path).unwrap();
        let report = scene.lay_out(scene.orientation, false).unwrap();

        assert_eq!(
            coordinates(&report, |p| p.x),
            vec![("a".to_string(), -30.0), ("b".to_string(), -10.0), ("c".to_string(), 20.0)]
        );
        assert!(serde_json::to_value(&report).unwrap().is_array());
    }

    #[test]
    fn test_vertical_upper_alignment() {
        let (_dir, path) = write_temp_file(
            r#"{
                "orientation": "vertical",
                "config": { "alignment": "upper", "spacing": 5.0 },
                "container": { "width": 10.0, "height": 100.0 },
                "elements": [
                    { "name": "top", "rect": { "width": 1.0, "height": 10.0 }, "position": { "x": 9.0, "y": 9.0 } },
                    { "name": "next", "rect": { "width": 1.0, "height": 20.0 } }
                ]
            }"#,
        );

        let scene = SceneFile::load(&path).unwrap();
        let report = scene.lay_out(scene.orientation, false).unwrap();

        assert_eq!(report.positions()[0].position, Vec3::new(0.0, 45.0, 0.0));
        assert_eq!(report.positions()[1].position, Vec3::new(0.0, 25.0, 0.0));
    }

    #[test]
    fn test_orientation_override_changes_vocabulary() {
        let scene: SceneFile = serde_json::from_str(
            r#"{
                "config": { "alignment": "left" },
                "elements": [{ "name": "a", "rect": { "width": 1.0, "height": 1.0 } }]
            }"#,
        )
        .unwrap();

        assert!(scene.lay_out(LayoutOrientation::Horizontal, false).is_ok());
        let err = scene.lay_out(LayoutOrientation::Vertical, false).unwrap_err();
        assert!(err.to_string().contains("invalid layout config"));
    }

    #[test]
    fn test_free_form_probe_reads_children() {
        let (_dir, path) = write_temp_file(
            r#"{
                "config": {
                    "population": "free_form",
                    "use_measured_extent": true,
                    "sizing": "container_fit",
                    "container_size": { "width": 20.0, "height": 1.0 }
                },
                "elements": [
                    { "name": "a", "bounds": { "width": 4.0, "height": 1.0 } },
                    { "name": "b", "children": [{ "name": "mesh", "bounds": { "width": 6.0, "height": 1.0 } }] }
                ]
            }"#,
        );

        let scene = SceneFile::load(&path).unwrap();
        let report = scene.lay_out(LayoutOrientation::Horizontal, false).unwrap();

        assert_eq!(
            coordinates(&report, |p| p.x),
            vec![("a".to_string(), -8.0), ("b".to_string(), 7.0)]
        );
    }

    #[test]
    fn test_probe_miss_reports_element() {
        let scene: SceneFile = serde_json::from_str(
            r#"{
                "config": { "population": "free_form", "use_measured_extent": true },
                "elements": [{ "name": "ghost" }]
            }"#,
        )
        .unwrap();

        let err = scene.lay_out(LayoutOrientation::Horizontal, false).unwrap_err();

        assert!(err.to_string().contains("horizontal layout pass failed"));
        assert!(format!("{err:#}").contains("ghost"));
    }

    #[test]
    fn test_outlines_for_configured_free_form() {
        let scene: SceneFile = serde_json::from_str(
            r#"{
                "config": {
                    "population": "free_form",
                    "element_extent": 2.0,
                    "spacing": 0.0,
                    "container_size": { "width": 4.0, "height": 1.0 }
                },
                "elements": [{ "name": "a" }, { "name": "b" }]
            }"#,
        )
        .unwrap();

        let report = scene.lay_out(LayoutOrientation::Horizontal, true).unwrap();

        let Report::WithOutlines { positions, outlines } = &report else {
            panic!("expected outlines");
        };
        assert_eq!(positions[0].position.x, -1.0);
        assert_eq!(positions[1].position.x, 1.0);
        assert_eq!(outlines.len(), 3);
        assert_eq!(outlines[0].color, Color::RED);
        assert_eq!(outlines[1].color, Color::BLUE);
        assert_eq!(outlines[2].rect.center, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneFile::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read scene file"));
    }

    #[test]
    fn test_empty_scene_is_noop() {
        let scene: SceneFile = serde_json::from_str("{}").unwrap();
        let report = scene.lay_out(LayoutOrientation::Vertical, false).unwrap();
        assert!(report.positions().is_empty());
    }
}
