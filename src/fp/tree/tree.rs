use super::node::{NodeId, PrefixTreeNode};
use crate::fp::transaction::Transaction;
use crate::itemset::Item;
use std::collections::HashMap;

/// FP-tree: transactions folded into a trie of shared prefixes.
///
/// `node_lookup` maps every item to all live nodes carrying it, across all
/// branches. Detached nodes stay in the arena but never appear in the lookup
/// or in any `children` list.
#[derive(Debug)]
pub struct PrefixTree<I: Item> {
    pub(crate) nodes: Vec<PrefixTreeNode<I>>,
    pub(crate) node_lookup: HashMap<I, Vec<NodeId>>,
    pub(crate) root_index: NodeId,
}

impl<I: Item> Default for PrefixTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> PrefixTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![PrefixTreeNode::new_root()],
            node_lookup: HashMap::new(),
            root_index: 0,
        }
    }

    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction<I>>) -> Self
    where
        I: 'a,
    {
        let mut tree = Self::new();
        for transaction in transactions {
            tree.add_transaction(transaction);
        }
        tree
    }

    pub fn add_transaction(&mut self, transaction: &Transaction<I>) -> &mut Self {
        let mut current_index = self.root_index;

        for item in transaction.items() {
            match self.child_with_item(current_index, item) {
                Some(child_index) => {
                    self.nodes[child_index].frequency += 1;
                    current_index = child_index;
                }
                None => {
                    current_index = self.push_node(item.clone(), 1, current_index);
                }
            }
        }

        self
    }

    /// Sum of frequencies over every indexed node carrying `item`.
    pub fn support_count(&self, item: &I) -> usize {
        self.nodes_for(item)
            .iter()
            .map(|&idx| self.nodes[idx].frequency)
            .sum()
    }

    pub fn nodes_for(&self, item: &I) -> &[NodeId] {
        self.node_lookup
            .get(item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node(&self, id: NodeId) -> &PrefixTreeNode<I> {
        &self.nodes[id]
    }

    pub fn root(&self) -> NodeId {
        self.root_index
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Number of live item nodes, root excluded.
    pub fn len(&self) -> usize {
        self.node_lookup.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }

    /// Items that still have at least one live node.
    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.node_lookup
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(item, _)| item)
    }

    fn child_with_item(&self, parent: NodeId, item: &I) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item.as_ref() == Some(item))
    }

    fn push_node(&mut self, item: I, frequency: usize, parent: NodeId) -> NodeId {
        let new_index = self.nodes.len();
        self.node_lookup
            .entry(item.clone())
            .or_default()
            .push(new_index);
        self.nodes
            .push(PrefixTreeNode::new_item(item, frequency, parent));
        self.nodes[parent].children.push(new_index);
        new_index
    }
}

/// Deep copy of the live tree.
///
/// The arena is compacted, the lookup is rebuilt from the copied nodes and
/// conditional-tree marks start cleared, so mutating the copy can never
/// reach back into the source.
impl<I: Item> Clone for PrefixTree<I> {
    fn clone(&self) -> Self {
        let mut cloned = PrefixTree::new();
        cloned.nodes.reserve(self.len());
        cloned.nodes[cloned.root_index].frequency = self.nodes[self.root_index].frequency;

        let mut stack = vec![(self.root_index, cloned.root_index)];
        while let Some((source_index, target_index)) = stack.pop() {
            for &child in &self.nodes[source_index].children {
                let node = &self.nodes[child];
                let Some(item) = node.item.clone() else {
                    continue;
                };
                let new_index = cloned.push_node(item, node.frequency, target_index);
                stack.push((child, new_index));
            }
        }

        cloned
    }
}
