use std::collections::BTreeMap;

use crate::Symbol;

use super::{CodeTree, NodeId, NodeKind};

/// Leaf handles of a finished [`CodeTree`], one per distinct symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRegistry<S: Symbol> {
    leaves: BTreeMap<S, NodeId>,
}

impl<S: Symbol> Default for SymbolRegistry<S> {
    fn default() -> Self {
        Self { leaves: BTreeMap::new() }
    }
}

impl<S: Symbol> SymbolRegistry<S> {
    /// Walks the tree in pre-order and records every leaf it meets.
    pub fn collect(tree: &CodeTree<S>) -> Self {
        let mut leaves = BTreeMap::new();
        let mut stack = vec![tree.root()];

        while let Some(id) = stack.pop() {
            match *tree.node(id).kind() {
                NodeKind::Leaf { symbol } => {
                    let previous = leaves.insert(symbol, id);
                    debug_assert!(previous.is_none(), "symbol {:?} has two leaves", symbol);
                },
                NodeKind::Internal { left, right } => {
                    stack.push(right);
                    stack.push(left);
                },
            }
        }

        Self { leaves }
    }

    pub fn get(&self, symbol: &S) -> Option<NodeId> {
        self.leaves.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.leaves.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Leaves in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, NodeId)> + '_ {
        self.leaves.iter().map(|(&s, &id)| (s, id))
    }
}
