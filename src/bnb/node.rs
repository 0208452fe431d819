//! Search-tree nodes addressed by index.

/// Position of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the include/exclude tree.
///
/// `level` counts decided items: a node at level `L` has decided items
/// `0..L`, and if `included` is set the decision that created it took
/// item `L - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub level: usize,
    pub acc_value: u64,
    pub acc_weight: u64,
    pub included: bool,
    pub upper_bound: f64,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// The empty selection at level 0.
    pub fn root(upper_bound: f64) -> Self {
        Self {
            level: 0,
            acc_value: 0,
            acc_weight: 0,
            included: false,
            upper_bound,
            parent: None,
        }
    }
}

/// Append-only storage for search nodes.
///
/// Children are never looked up from their parent; reconstruction walks
/// parent links upward from a candidate node. Dropping the arena frees the
/// whole tree at once.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node
            .parent
            .map_or(node.level == 0, |p| self.nodes[p.0].level + 1 == node.level));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(self.get(id)), move |node| {
            node.parent.map(|parent| self.get(parent))
        })
    }

    /// Indices of the items taken on the path from the root to `id`, in
    /// ascending order.
    pub fn selected_indices(&self, id: NodeId) -> Vec<usize> {
        let mut picks: Vec<usize> = self
            .ancestors(id)
            .filter(|node| node.included)
            .map(|node| node.level - 1)
            .collect();
        picks.reverse();
        picks
    }
}
