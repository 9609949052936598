pub mod registry;

use std::fmt;

use log::{debug, trace};

use crate::{error::Result, frequency::FrequencyTable, priority_queue::PriorityQueue, Bit, Symbol};

pub use registry::SymbolRegistry;

/// Handle of a node inside a [`CodeTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf { symbol: S },
    /// Internal nodes always carry both children.
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNode<S> {
    weight: u64,
    kind: NodeKind<S>,
    /// Back-reference used for codeword derivation only, set once when the
    /// node is attached under a freshly merged parent.
    parent: Option<NodeId>,
}

impl<S: Symbol> CodeNode<S> {
    fn leaf(symbol: S, weight: u64) -> Self {
        Self { weight, kind: NodeKind::Leaf { symbol }, parent: None }
    }

    fn internal(left: NodeId, right: NodeId, weight: u64) -> Self {
        Self { weight, kind: NodeKind::Internal { left, right }, parent: None }
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    #[inline(always)]
    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<S> {
        match self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }
}

/// Huffman code tree stored as an arena of nodes.
///
/// All nodes are owned by the arena and dropped together with the tree.
/// Children are reached through [`NodeKind::Internal`], parents through
/// [`CodeNode::parent`].
#[derive(Debug, Clone)]
pub struct CodeTree<S: Symbol> {
    nodes: Vec<CodeNode<S>>,
    root: NodeId,
    registry: SymbolRegistry<S>,
}

impl<S: Symbol> CodeTree<S> {
    /// Counts `input` and builds its code tree.
    pub fn from_symbols(input: &[S]) -> Result<Self> {
        Ok(Self::build(&FrequencyTable::from_symbols(input)?))
    }

    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Queue keys are `(weight, NodeId)`: among equal weights the node
    /// created first wins, and leaves are created in ascending symbol order
    /// before any internal node. The same table therefore always yields the
    /// same tree.
    pub fn build(frequencies: &FrequencyTable<S>) -> Self {
        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        for (symbol, weight) in frequencies.iter() {
            nodes.push(CodeNode::leaf(symbol, weight));
        }

        let mut queue: PriorityQueue<(u64, NodeId)> = nodes.iter()
            .enumerate()
            .map(|(i, node)| (node.weight, NodeId(i)))
            .collect();

        let root = loop {
            match (queue.extract_min(), queue.extract_min()) {
                (Some((left_weight, left)), Some((right_weight, right))) => {
                    let id = NodeId(nodes.len());
                    let weight = left_weight + right_weight;
                    nodes.push(CodeNode::internal(left, right, weight));

                    for child in [left, right] {
                        debug_assert!(nodes[child.0].parent.is_none());
                        nodes[child.0].parent = Some(id);
                    }

                    trace!("merged {:?} ({}) and {:?} ({}) into {:?}", left, left_weight, right, right_weight, id);
                    queue.insert((weight, id));
                },
                (Some((_, root)), None) => break root,
                (None, _) => unreachable!("a frequency table always holds at least one symbol"),
            }
        };

        let mut tree = Self { nodes, root, registry: SymbolRegistry::default() };
        tree.registry = SymbolRegistry::collect(&tree);

        debug!(
            "built code tree: {} symbols, {} nodes, weight {}, height {}",
            tree.num_leaves(), tree.len(), tree.weight(), tree.height()
        );

        tree
    }

    #[inline(always)]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &CodeNode<S> {
        &self.nodes[id.0]
    }

    /// Total number of nodes, leaves and internal ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn num_leaves(&self) -> usize {
        self.registry.len()
    }

    /// Weight of the root, the length of the input the tree was built from.
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight
    }

    /// True when the alphabet has a single symbol and the root is its leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.node(self.root).is_leaf()
    }

    pub fn registry(&self) -> &SymbolRegistry<S> {
        &self.registry
    }

    /// Follows the edge labelled `bit` out of `id`; `None` on a leaf.
    #[inline(always)]
    pub fn child(&self, id: NodeId, bit: Bit) -> Option<NodeId> {
        self.node(id).children().map(|(left, right)| match bit {
            Bit::Zero => left,
            Bit::One => right,
        })
    }

    /// Number of edges from the root to the deepest leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            match self.node(id).children() {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                },
                None => height = height.max(depth),
            }
        }

        height
    }

    /// Checks the structural invariants of the tree, describing the first
    /// violation found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.node(self.root).parent.is_some() {
            return Err(format!("root {:?} has a parent", self.root));
        }

        let mut reached = 0;
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            reached += 1;
            let node = self.node(id);

            if let Some((left, right)) = node.children() {
                let (l, r) = (self.node(left), self.node(right));

                if l.weight + r.weight != node.weight {
                    return Err(format!(
                        "{:?} weighs {} but its children sum to {}",
                        id, node.weight, l.weight + r.weight
                    ));
                }
                if l.parent != Some(id) || r.parent != Some(id) {
                    return Err(format!("children of {:?} do not point back to it", id));
                }

                stack.push(left);
                stack.push(right);
            }
        }

        if reached != self.nodes.len() {
            return Err(format!("{} nodes reachable out of {}", reached, self.nodes.len()));
        }

        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        if leaves != self.registry.len() || self.nodes.len() != 2 * leaves - 1 {
            return Err(format!(
                "{} leaves, {} registered, {} nodes",
                leaves, self.registry.len(), self.nodes.len()
            ));
        }

        Ok(())
    }

    fn fmt_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node(id);
        match node.kind {
            NodeKind::Leaf { symbol } => write!(f, "({:?})", symbol),
            NodeKind::Internal { left, right } => {
                write!(f, "({}", node.weight)?;
                self.fmt_node(left, f)?;
                self.fmt_node(right, f)?;
                write!(f, ")")
            },
        }
    }
}

/// Parenthesised dump: internal nodes show their weight, leaves their symbol.
impl<S: Symbol> fmt::Display for CodeTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}

#[cfg(test)]
mod tests;
