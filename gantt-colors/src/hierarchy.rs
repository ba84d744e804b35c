//! Ancestor walks over a flat, parent-pointer task snapshot.
//!
//! [`NodeIndex`] indexes the snapshot by id once so each hop up the tree is a
//! hash lookup. A `parent_id` that names no node (or the node itself) ends the
//! walk, and walks never take more hops than there are nodes, so a malformed
//! cyclic snapshot terminates.

use std::collections::HashMap;

use crate::types::Node;

/// Id index over one snapshot of the task hierarchy.
pub struct NodeIndex<'a> {
    nodes: &'a [Node],
    by_id: HashMap<&'a str, &'a Node>,
    summary_roots: Vec<&'a Node>,
}

impl<'a> NodeIndex<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            // first occurrence of a duplicated id wins
            by_id.entry(node.id.as_str()).or_insert(node);
        }

        let mut index = Self {
            nodes,
            by_id,
            summary_roots: Vec::new(),
        };
        let summary_roots: Vec<&'a Node> = nodes
            .iter()
            .filter(|n| n.is_summary() && index.parent(n).is_none())
            .collect();
        index.summary_roots = summary_roots;
        index
    }

    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).copied()
    }

    /// Parent of `node`, or `None` for a root or a dangling parent reference.
    pub fn parent(&self, node: &Node) -> Option<&'a Node> {
        let parent_id = node.parent_id.as_deref()?;
        if parent_id == node.id {
            return None;
        }
        self.get(parent_id)
    }

    /// Iterator over the ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: &'a Node) -> Ancestors<'_, 'a> {
        Ancestors {
            index: self,
            current: node,
            remaining: self.nodes.len(),
        }
    }

    /// Number of parent hops from `node` to its root. A root has depth 0.
    pub fn depth(&self, node: &'a Node) -> usize {
        self.ancestors(node).count()
    }

    /// Nearest ancestor of `node` satisfying `predicate`. `node` itself is not tested.
    pub fn nearest_ancestor_matching<P>(&self, node: &'a Node, mut predicate: P) -> Option<&'a Node>
    where
        P: FnMut(&Node) -> bool,
    {
        self.ancestors(node).find(|n| predicate(n))
    }

    /// Topmost ancestor of `node`; a root is its own root.
    pub fn root_ancestor(&self, node: &'a Node) -> &'a Node {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Summary nodes without a parent.
    pub fn summary_roots(&self) -> &[&'a Node] {
        &self.summary_roots
    }

    /// The only summary root, when there is exactly one.
    pub fn single_summary_root(&self) -> Option<&'a Node> {
        match self.summary_roots.as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    /// Hops from `node` up to `ancestor`; 0 when they are the same node.
    pub fn depth_below(&self, node: &'a Node, ancestor: &Node) -> usize {
        if node.id == ancestor.id {
            return 0;
        }
        self.ancestors(node)
            .position(|a| a.id == ancestor.id)
            .map(|p| p + 1)
            .unwrap_or_else(|| self.depth(node).saturating_sub(self.depth_of_id(&ancestor.id)))
    }

    fn depth_of_id(&self, id: &str) -> usize {
        self.get(id).map(|n| self.depth(n)).unwrap_or(0)
    }

    /// Node whose palette slot colors `node`'s subtree in theme mode.
    ///
    /// With exactly one summary root, the root's direct children are the
    /// givers: sibling groups under one umbrella still get distinct colors.
    /// The root itself has no giver. Otherwise (and for nodes outside the
    /// single root's tree) the giver is the topmost ancestor, and a root has
    /// no giver because it is one.
    pub fn theme_color_giver(&self, node: &'a Node) -> Option<&'a Node> {
        if let Some(root) = self.single_summary_root() {
            if node.id == root.id {
                return None;
            }
            let under_root = std::iter::once(node)
                .chain(self.ancestors(node))
                .find(|n| self.parent(n).is_some_and(|p| p.id == root.id));
            if under_root.is_some() {
                return under_root;
            }
        }

        self.parent(node)?;
        Some(self.root_ancestor(node))
    }

    /// Ids that each receive one palette slot in theme mode.
    pub fn color_giver_ids(&self) -> Vec<&'a str> {
        match self.single_summary_root() {
            Some(root) => self
                .nodes
                .iter()
                .filter(|n| self.parent(n).is_some_and(|p| p.id == root.id))
                .map(|n| n.id.as_str())
                .collect(),
            None => self
                .nodes
                .iter()
                .filter(|n| self.parent(n).is_none())
                .map(|n| n.id.as_str())
                .collect(),
        }
    }
}

/// Ancestor walk, bounded by the snapshot size.
pub struct Ancestors<'i, 'a> {
    index: &'i NodeIndex<'a>,
    current: &'a Node,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'_, 'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let parent = self.index.parent(self.current)?;
        self.current = parent;
        Some(parent)
    }
}

/// Parent hops from `node` to its root.
pub fn depth(node: &Node, all_nodes: &[Node]) -> usize {
    let index = NodeIndex::new(all_nodes);
    index.depth(node)
}

/// Nearest ancestor of `node` satisfying `predicate`.
pub fn nearest_ancestor_matching<'a, P>(node: &'a Node, all_nodes: &'a [Node], predicate: P) -> Option<&'a Node>
where
    P: FnMut(&Node) -> bool,
{
    NodeIndex::new(all_nodes).nearest_ancestor_matching(node, predicate)
}

/// Topmost ancestor of `node`.
pub fn root_ancestor<'a>(node: &'a Node, all_nodes: &'a [Node]) -> &'a Node {
    NodeIndex::new(all_nodes).root_ancestor(node)
}

/// Theme-mode color-giver of `node`; see [`NodeIndex::theme_color_giver`].
pub fn theme_color_giver<'a>(node: &'a Node, all_nodes: &'a [Node]) -> Option<&'a Node> {
    NodeIndex::new(all_nodes).theme_color_giver(node)
}

/// Ids receiving one palette slot each in theme mode.
pub fn color_giver_ids(all_nodes: &[Node]) -> Vec<&str> {
    NodeIndex::new(all_nodes).color_giver_ids()
}
