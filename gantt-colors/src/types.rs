//! Input types: task-tree nodes and the persisted color mode state.
//!
//! All types serialize with camelCase field names, matching the shape callers
//! persist alongside the rest of their project state. Every option bag has a
//! default, so partially persisted state still loads.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::palettes::lookup_palette;
use crate::space::generate_monochrome_palette;

/// What a node in the task tree represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Task,
    Summary,
    Milestone,
}

/// One node of the task hierarchy, in parent-pointer form.
///
/// A `parent_id` naming no node in the snapshot is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub kind: NodeKind,
    pub own_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_override: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, own_color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            kind,
            own_color: own_color.into(),
            color_override: None,
        }
    }

    pub fn task(id: impl Into<String>, own_color: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Task, own_color)
    }

    pub fn summary(id: impl Into<String>, own_color: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Summary, own_color)
    }

    pub fn milestone(id: impl Into<String>, own_color: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Milestone, own_color)
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_override(mut self, color: impl Into<String>) -> Self {
        self.color_override = Some(color.into());
        self
    }

    pub fn is_summary(&self) -> bool {
        self.kind == NodeKind::Summary
    }
}

/// The project-wide coloring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorMode {
    #[default]
    Manual,
    Theme,
    Summary,
    TaskType,
    Hierarchy,
}

impl ColorMode {
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Manual,
        ColorMode::Theme,
        ColorMode::Summary,
        ColorMode::TaskType,
        ColorMode::Hierarchy,
    ];
}

/// Theme mode: a curated palette or a monochrome ramp spread across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    /// Built-in palette id; `None` means no palette is selected.
    pub selected_palette_id: Option<String>,
    pub custom_monochrome_base: Option<String>,
}

impl ThemeOptions {
    /// Colors of the active palette.
    ///
    /// A custom monochrome base wins over a selected palette id. `None` when
    /// neither is set or the id names no known palette.
    pub fn resolve_palette(&self) -> Option<Vec<String>> {
        if let Some(base) = &self.custom_monochrome_base {
            return Some(generate_monochrome_palette(base));
        }
        let id = self.selected_palette_id.as_deref()?;
        match lookup_palette(id) {
            Some(palette) if !palette.colors.is_empty() => {
                Some(palette.colors.iter().map(|c| c.to_string()).collect())
            }
            Some(_) => None,
            None => {
                warn!(palette_id = id, "unknown palette id, theme falls back to own colors");
                None
            }
        }
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            selected_palette_id: Some("tableau-10".to_string()),
            custom_monochrome_base: None,
        }
    }
}

/// Summary mode: children take the color of their nearest summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryOptions {
    pub use_milestone_accent: bool,
    pub milestone_accent_color: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            use_milestone_accent: false,
            milestone_accent_color: "#F59E0B".to_string(),
        }
    }
}

/// Task type mode: one fixed color per node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskTypeOptions {
    pub summary_color: String,
    pub task_color: String,
    pub milestone_color: String,
}

impl TaskTypeOptions {
    pub fn color_for(&self, kind: NodeKind) -> &str {
        match kind {
            NodeKind::Summary => &self.summary_color,
            NodeKind::Task => &self.task_color,
            NodeKind::Milestone => &self.milestone_color,
        }
    }
}

impl Default for TaskTypeOptions {
    fn default() -> Self {
        Self {
            summary_color: "#1E293B".to_string(),
            task_color: "#3B82F6".to_string(),
            milestone_color: "#F59E0B".to_string(),
        }
    }
}

/// Hierarchy mode: one base color lightened per level of depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HierarchyOptions {
    pub base_color: String,
    /// Percentage points of lightness added per level (0-100).
    pub lighten_percent_per_level: f64,
    /// Cap on total added lightness (0-100).
    pub max_lighten_percent: f64,
}

impl HierarchyOptions {
    /// Lighten fraction for a node at `depth`.
    pub fn lighten_fraction(&self, depth: usize) -> f64 {
        let per_level = depth as f64 * self.lighten_percent_per_level / 100.0;
        per_level.min(self.max_lighten_percent / 100.0)
    }
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            base_color: "#3B82F6".to_string(),
            lighten_percent_per_level: 12.0,
            max_lighten_percent: 48.0,
        }
    }
}

/// Active mode plus the options of every automatic mode.
///
/// All four option bags are always present so switching modes never loses
/// previously configured options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorModeState {
    pub mode: ColorMode,
    pub theme_options: ThemeOptions,
    pub summary_options: SummaryOptions,
    pub task_type_options: TaskTypeOptions,
    pub hierarchy_options: HierarchyOptions,
}

impl ColorModeState {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Copy with only the mode switched.
    #[must_use]
    pub fn with_mode(&self, mode: ColorMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_json_shape() {
        let node = Node::task("t1", "#FF0000").with_parent("s1");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["parentId"], "s1");
        assert_eq!(json["ownColor"], "#FF0000");
        assert_eq!(json["kind"], "task");
        assert!(json.get("colorOverride").is_none());
    }

    #[test]
    fn test_state_json_shape() {
        let state = ColorModeState::new(ColorMode::TaskType);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["mode"], "taskType");
        assert_eq!(json["themeOptions"]["selectedPaletteId"], "tableau-10");
        assert_eq!(json["hierarchyOptions"]["lightenPercentPerLevel"], 12.0);
        assert_eq!(json["summaryOptions"]["useMilestoneAccent"], false);
    }

    #[test]
    fn test_partial_state_fills_defaults() {
        let state: ColorModeState =
            serde_json::from_str(r##"{"mode":"hierarchy","hierarchyOptions":{"baseColor":"#000000"}}"##).unwrap();
        assert_eq!(state.mode, ColorMode::Hierarchy);
        assert_eq!(state.hierarchy_options.base_color, "#000000");
        assert_eq!(state.hierarchy_options.max_lighten_percent, 48.0);
        assert_eq!(state.task_type_options, TaskTypeOptions::default());
    }

    #[test]
    fn test_state_yaml_round_trip() {
        let mut state = ColorModeState::new(ColorMode::Theme);
        state.theme_options.custom_monochrome_base = Some("#112233".into());
        let yaml = serde_yaml_ng::to_string(&state).unwrap();
        let parsed: ColorModeState = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_unset_palette_survives_round_trip() {
        let mut state = ColorModeState::new(ColorMode::Theme);
        state.theme_options.selected_palette_id = None;
        let json = serde_json::to_string(&state).unwrap();
        let parsed: ColorModeState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme_options.selected_palette_id, None);
    }

    #[test]
    fn test_with_mode_preserves_options() {
        let mut state = ColorModeState::new(ColorMode::Theme);
        state.summary_options.use_milestone_accent = true;
        state.hierarchy_options.base_color = "#123456".into();

        let switched = state.with_mode(ColorMode::Summary).with_mode(ColorMode::Theme);
        assert_eq!(switched, state);
    }

    #[test]
    fn test_lighten_fraction_caps() {
        let opts = HierarchyOptions {
            base_color: "#000000".into(),
            lighten_percent_per_level: 10.0,
            max_lighten_percent: 25.0,
        };
        assert_eq!(opts.lighten_fraction(0), 0.0);
        assert!((opts.lighten_fraction(2) - 0.2).abs() < 1e-12);
        assert!((opts.lighten_fraction(5) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_palette() {
        let mut opts = ThemeOptions::default();
        assert_eq!(opts.resolve_palette().unwrap().len(), 10);

        opts.custom_monochrome_base = Some("#3B82F6".into());
        assert_eq!(opts.resolve_palette().unwrap().len(), 5);

        let unknown = ThemeOptions {
            selected_palette_id: Some("no-such-palette".into()),
            custom_monochrome_base: None,
        };
        assert!(unknown.resolve_palette().is_none());
        assert!(ThemeOptions {
            selected_palette_id: None,
            custom_monochrome_base: None
        }
        .resolve_palette()
        .is_none());
    }

    #[test]
    fn test_task_type_color_for() {
        let opts = TaskTypeOptions::default();
        assert_eq!(opts.color_for(NodeKind::Summary), "#1E293B");
        assert_eq!(opts.color_for(NodeKind::Task), "#3B82F6");
        assert_eq!(opts.color_for(NodeKind::Milestone), "#F59E0B");
    }
}
