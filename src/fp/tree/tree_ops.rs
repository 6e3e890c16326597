use super::node::NodeId;
use super::tree::PrefixTree;
use crate::itemset::Item;

impl<I: Item> PrefixTree<I> {
    /// Reduce the tree, in place, to the conditional pattern base of `item`.
    ///
    /// Afterwards only the prefix paths that led to `item` remain, `item`
    /// itself is gone, and each surviving node's frequency counts the
    /// transactions that passed through both that node and `item`.
    pub fn to_conditional_tree(&mut self, item: &I) {
        let item_nodes = self.node_lookup.remove(item).unwrap_or_default();

        for &node_index in &item_nodes {
            self.nodes[node_index].in_conditional_tree = true;
            self.mark_ancestors(node_index);
        }

        self.remove_nodes_not_in_conditional_tree();

        for &node_index in &item_nodes {
            let frequency = self.nodes[node_index].frequency;
            self.increase_ancestors_frequency(node_index, frequency);
            self.detach(node_index);
        }

        self.drop_detached_from_lookup();
        for node in &mut self.nodes {
            node.in_conditional_tree = false;
        }
    }

    // Ancestor counts are rebuilt from the item nodes afterwards, so they
    // start from zero here.
    fn mark_ancestors(&mut self, node_index: NodeId) {
        let mut current = self.nodes[node_index].parent;
        while let Some(idx) = current {
            let node = &mut self.nodes[idx];
            node.in_conditional_tree = true;
            node.frequency = 0;
            current = node.parent;
        }
    }

    fn remove_nodes_not_in_conditional_tree(&mut self) {
        let mut stack = vec![self.root_index];

        while let Some(idx) = stack.pop() {
            let children = std::mem::take(&mut self.nodes[idx].children);
            let (kept, removed): (Vec<NodeId>, Vec<NodeId>) = children
                .into_iter()
                .partition(|&child| self.nodes[child].in_conditional_tree);

            for child in removed {
                self.mark_subtree_detached(child);
            }
            stack.extend(kept.iter().copied());
            self.nodes[idx].children = kept;
        }
    }

    fn increase_ancestors_frequency(&mut self, node_index: NodeId, frequency: usize) {
        let mut current = self.nodes[node_index].parent;
        while let Some(idx) = current {
            self.nodes[idx].frequency += frequency;
            current = self.nodes[idx].parent;
        }
    }

    fn detach(&mut self, node_index: NodeId) {
        if let Some(parent) = self.nodes[node_index].parent {
            self.nodes[parent].children.retain(|&child| child != node_index);
        }
        self.mark_subtree_detached(node_index);
    }

    fn mark_subtree_detached(&mut self, node_index: NodeId) {
        let mut stack = vec![node_index];
        while let Some(idx) = stack.pop() {
            let node = &mut self.nodes[idx];
            node.detached = true;
            stack.extend(node.children.drain(..));
        }
    }

    fn drop_detached_from_lookup(&mut self) {
        let nodes = &self.nodes;
        self.node_lookup.retain(|_, ids| {
            ids.retain(|&idx| !nodes[idx].detached);
            !ids.is_empty()
        });
    }
}
