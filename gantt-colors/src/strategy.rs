//! Per-mode color rules.
//!
//! [`ModeStrategy`] is built once per snapshot from a [`ColorModeState`] and
//! then answers one node at a time. Per-node overrides are checked before any
//! mode rule runs, except in manual mode where they are ignored.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::color::{hex_to_hsl, hsl_to_hex, lighten, Hsl};
use crate::hash::{assign_palette_indices, preferred_index, stable_hash};
use crate::hierarchy::NodeIndex;
use crate::types::{
    ColorMode, ColorModeState, HierarchyOptions, Node, NodeKind, SummaryOptions, TaskTypeOptions,
    ThemeOptions,
};

/// Lightness added per level below a theme color-giver.
const THEME_DEPTH_STEP: f64 = 7.0;

/// Lightness added per unit of a node's hash variation.
const THEME_VARIATION_STEP: f64 = 2.0;

/// Ceiling on theme child lightness.
const THEME_MAX_LIGHTNESS: f64 = 88.0;

/// The active coloring rule together with the options it reads.
#[derive(Debug)]
pub enum ModeStrategy<'s> {
    Manual,
    /// `None` when no palette could be resolved; nodes keep their own color.
    Theme(Option<ThemePlan>),
    Summary(&'s SummaryOptions),
    TaskType(&'s TaskTypeOptions),
    Hierarchy(&'s HierarchyOptions),
}

impl<'s> ModeStrategy<'s> {
    pub fn new(state: &'s ColorModeState, index: &NodeIndex<'_>) -> Self {
        match state.mode {
            ColorMode::Manual => Self::Manual,
            ColorMode::Theme => Self::Theme(ThemePlan::new(&state.theme_options, index)),
            ColorMode::Summary => Self::Summary(&state.summary_options),
            ColorMode::TaskType => Self::TaskType(&state.task_type_options),
            ColorMode::Hierarchy => Self::Hierarchy(&state.hierarchy_options),
        }
    }

    pub fn mode(&self) -> ColorMode {
        match self {
            Self::Manual => ColorMode::Manual,
            Self::Theme(_) => ColorMode::Theme,
            Self::Summary(_) => ColorMode::Summary,
            Self::TaskType(_) => ColorMode::TaskType,
            Self::Hierarchy(_) => ColorMode::Hierarchy,
        }
    }

    /// Display color of `node`.
    pub fn color_for<'a>(&self, node: &'a Node, index: &NodeIndex<'a>) -> String {
        if let Some(color) = self.override_for(node) {
            return color.to_string();
        }

        match self {
            Self::Manual => node.own_color.clone(),
            Self::Theme(Some(plan)) => plan.color_for(node, index),
            Self::Theme(None) => node.own_color.clone(),
            Self::Summary(options) => summary_color(node, index, options),
            Self::TaskType(options) => options.color_for(node.kind).to_string(),
            Self::Hierarchy(options) => hierarchy_color(node, index, options),
        }
    }

    fn override_for<'n>(&self, node: &'n Node) -> Option<&'n str> {
        match self {
            Self::Manual => None,
            _ => node.color_override.as_deref(),
        }
    }
}

/// Theme mode, resolved for one snapshot: the palette plus the slot of every
/// color-giver.
#[derive(Debug, Clone)]
pub struct ThemePlan {
    colors: Vec<String>,
    assignment: HashMap<String, usize>,
}

impl ThemePlan {
    /// `None` when the options resolve to no palette.
    pub fn new(options: &ThemeOptions, index: &NodeIndex<'_>) -> Option<Self> {
        let colors = options.resolve_palette().filter(|c| !c.is_empty())?;
        let assignment = assign_palette_indices(index.color_giver_ids(), colors.len());
        debug!(
            palette_size = colors.len(),
            givers = assignment.len(),
            "resolved theme palette"
        );
        Some(Self { colors, assignment })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Palette slot of a color-giver; ids without an assignment use their hash.
    pub fn slot(&self, id: &str) -> usize {
        self.assignment
            .get(id)
            .copied()
            .unwrap_or_else(|| preferred_index(id, self.colors.len()))
    }

    pub fn color_for<'a>(&self, node: &'a Node, index: &NodeIndex<'a>) -> String {
        let Some(giver) = index.theme_color_giver(node) else {
            let slot = self.slot(&node.id);
            trace!(node = %node.id, slot, "theme color-giver");
            return self.colors[slot].clone();
        };

        let slot = self.slot(&giver.id);
        let base = &self.colors[slot];
        trace!(node = %node.id, giver = %giver.id, slot, "theme child");
        if node.id == giver.id {
            return base.clone();
        }

        // siblings share the giver's hue family, offset by a small hash-derived step
        let variation = f64::from(stable_hash(&node.id) % 5);
        let depth = index.depth_below(node, giver) as f64;
        let hsl = hex_to_hsl(base);
        let lightness = (hsl.l + depth * THEME_DEPTH_STEP + variation * THEME_VARIATION_STEP)
            .min(THEME_MAX_LIGHTNESS);
        let hue = hsl.h + variation - 2.0;
        hsl_to_hex(Hsl::new(hue, hsl.s, lightness))
    }
}

fn summary_color<'a>(node: &'a Node, index: &NodeIndex<'a>, options: &SummaryOptions) -> String {
    if node.kind == NodeKind::Milestone && options.use_milestone_accent {
        return options.milestone_accent_color.clone();
    }
    if node.is_summary() {
        return node.own_color.clone();
    }
    index
        .nearest_ancestor_matching(node, Node::is_summary)
        .map_or_else(|| node.own_color.clone(), |summary| summary.own_color.clone())
}

fn hierarchy_color<'a>(node: &'a Node, index: &NodeIndex<'a>, options: &HierarchyOptions) -> String {
    let fraction = options.lighten_fraction(index.depth(node));
    lighten(&options.base_color, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy_color(state: &ColorModeState, nodes: &[Node], id: &str) -> String {
        let index = NodeIndex::new(nodes);
        let strategy = ModeStrategy::new(state, &index);
        let node = nodes.iter().find(|n| n.id == id).unwrap();
        strategy.color_for(node, &index)
    }

    #[test]
    fn test_mode_round_trip() {
        let nodes: Vec<Node> = Vec::new();
        let index = NodeIndex::new(&nodes);
        for mode in ColorMode::ALL {
            let state = ColorModeState::new(mode);
            assert_eq!(ModeStrategy::new(&state, &index).mode(), mode);
        }
    }

    #[test]
    fn test_manual_ignores_override() {
        let nodes = vec![Node::task("t", "#123456").with_override("#FF0000")];
        let state = ColorModeState::new(ColorMode::Manual);
        assert_eq!(strategy_color(&state, &nodes, "t"), "#123456");
    }

    #[test]
    fn test_override_wins_in_automatic_modes() {
        let nodes = vec![Node::task("t", "#123456").with_override("#ff0000")];
        for mode in ColorMode::ALL.into_iter().filter(|m| *m != ColorMode::Manual) {
            let state = ColorModeState::new(mode);
            assert_eq!(strategy_color(&state, &nodes, "t"), "#ff0000", "mode {mode:?}");
        }
    }

    #[test]
    fn test_theme_without_palette_keeps_own_color() {
        let nodes = vec![Node::summary("s", "#ABCDEF")];
        let mut state = ColorModeState::new(ColorMode::Theme);
        state.theme_options.selected_palette_id = Some("does-not-exist".into());
        assert_eq!(strategy_color(&state, &nodes, "s"), "#ABCDEF");

        state.theme_options.selected_palette_id = None;
        assert_eq!(strategy_color(&state, &nodes, "s"), "#ABCDEF");
    }

    #[test]
    fn test_theme_child_is_lighter_variant() {
        let nodes = vec![
            Node::summary("group-a", "#000000"),
            Node::summary("group-b", "#000000"),
            Node::task("task-a1", "#000000").with_parent("group-a"),
        ];
        let state = ColorModeState::new(ColorMode::Theme);
        let giver = strategy_color(&state, &nodes, "group-a");
        let child = strategy_color(&state, &nodes, "task-a1");

        let giver_hsl = hex_to_hsl(&giver);
        let child_hsl = hex_to_hsl(&child);
        assert!(child_hsl.l >= giver_hsl.l.min(THEME_MAX_LIGHTNESS) - 0.5);
        let hue_delta = (child_hsl.h - giver_hsl.h + 540.0).rem_euclid(360.0) - 180.0;
        assert!(hue_delta.abs() <= 3.0, "hue moved {hue_delta}");
    }

    #[test]
    fn test_theme_monochrome_base_wins() {
        let nodes = vec![Node::summary("only", "#000000")];
        let mut state = ColorModeState::new(ColorMode::Theme);
        state.theme_options.custom_monochrome_base = Some("#3B82F6".into());
        let ramp = crate::space::generate_monochrome_palette("#3B82F6");
        assert!(ramp.contains(&strategy_color(&state, &nodes, "only")));
    }

    #[test]
    fn test_summary_milestone_accent() {
        let nodes = vec![
            Node::summary("s", "#111111"),
            Node::milestone("m", "#222222").with_parent("s"),
        ];
        let mut state = ColorModeState::new(ColorMode::Summary);
        assert_eq!(strategy_color(&state, &nodes, "m"), "#111111");

        state.summary_options.use_milestone_accent = true;
        state.summary_options.milestone_accent_color = "#FACC15".into();
        assert_eq!(strategy_color(&state, &nodes, "m"), "#FACC15");
    }

    #[test]
    fn test_summary_root_task_keeps_own_color() {
        let nodes = vec![Node::task("loose", "#333333")];
        let state = ColorModeState::new(ColorMode::Summary);
        assert_eq!(strategy_color(&state, &nodes, "loose"), "#333333");
    }

    #[test]
    fn test_task_type_by_kind() {
        let nodes = vec![
            Node::summary("s", "#000000"),
            Node::task("t", "#000000").with_parent("s"),
            Node::milestone("m", "#000000").with_parent("s"),
        ];
        let state = ColorModeState::new(ColorMode::TaskType);
        let opts = &state.task_type_options;
        assert_eq!(strategy_color(&state, &nodes, "s"), opts.summary_color);
        assert_eq!(strategy_color(&state, &nodes, "t"), opts.task_color);
        assert_eq!(strategy_color(&state, &nodes, "m"), opts.milestone_color);
    }

    #[test]
    fn test_hierarchy_negative_percent_is_clamped() {
        let nodes = vec![
            Node::summary("r", "#000000"),
            Node::task("c", "#000000").with_parent("r"),
        ];
        let mut state = ColorModeState::new(ColorMode::Hierarchy);
        state.hierarchy_options.lighten_percent_per_level = -20.0;
        assert_eq!(
            strategy_color(&state, &nodes, "c"),
            state.hierarchy_options.base_color
        );
    }
}
