//! Color engine facade.
//!
//! [`ColorEngine`] indexes one snapshot of the task tree, resolves the active
//! mode once, then answers per node. The free functions build a throwaway
//! engine per call and are equivalent to the methods.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::contrast::TextColors;
use crate::hierarchy::NodeIndex;
use crate::strategy::ModeStrategy;
use crate::types::{ColorMode, ColorModeState, Node};

/// Fill and label colors for one rendered node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderColors {
    pub fill: String,
    pub text: String,
}

/// Pure color computation over one task snapshot and mode state.
pub struct ColorEngine<'a> {
    index: NodeIndex<'a>,
    strategy: ModeStrategy<'a>,
}

impl<'a> ColorEngine<'a> {
    pub fn new(nodes: &'a [Node], state: &'a ColorModeState) -> Self {
        let index = NodeIndex::new(nodes);
        let strategy = ModeStrategy::new(state, &index);
        Self { index, strategy }
    }

    pub fn mode(&self) -> ColorMode {
        self.strategy.mode()
    }

    /// Display color of `node`.
    pub fn color_for(&self, node: &'a Node) -> String {
        self.strategy.color_for(node, &self.index)
    }

    /// Display color of every node in the snapshot, keyed by id in input order.
    pub fn all_colors(&self) -> IndexMap<String, String> {
        let nodes = self.index.nodes();
        debug!(nodes = nodes.len(), mode = ?self.mode(), "computing node colors");

        let mut colors = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            colors
                .entry(node.id.clone())
                .or_insert_with(|| self.color_for(node));
        }
        colors
    }

    /// Fill color plus a legible label color for every node.
    pub fn all_render_colors(&self, text: &TextColors) -> IndexMap<String, RenderColors> {
        self.all_colors()
            .into_iter()
            .map(|(id, fill)| {
                let text = text.pick(&fill).to_string();
                (id, RenderColors { fill, text })
            })
            .collect()
    }
}

/// Display color of `node` within `all_nodes` under `state`.
pub fn compute_color(node: &Node, all_nodes: &[Node], state: &ColorModeState) -> String {
    ColorEngine::new(all_nodes, state).color_for(node)
}

/// Display color of every node, keyed by id in input order.
pub fn compute_all_colors(all_nodes: &[Node], state: &ColorModeState) -> IndexMap<String, String> {
    ColorEngine::new(all_nodes, state).all_colors()
}

/// Fill and default label color of every node, keyed by id in input order.
pub fn compute_all_render_colors(
    all_nodes: &[Node],
    state: &ColorModeState,
) -> IndexMap<String, RenderColors> {
    ColorEngine::new(all_nodes, state).all_render_colors(&TextColors::default())
}
