use crate::config::DEFAULT_MIN_SUPPORT;
use crate::fp::transaction::{item_universe, Transaction};
use crate::fp::tree::PrefixTree;
use crate::itemset::{FrequentItemset, Item, Itemset};
use std::rc::Rc;
use tracing::{debug, trace};

/// Mine every frequent itemset straight from a list of transactions.
///
/// The candidate items are all items that occur in `transactions`.
pub fn fp_growth_algorithm<I: Item>(
    transactions: &[Transaction<I>],
    min_support: f64,
) -> Vec<FrequentItemset<I>> {
    let fp_tree = PrefixTree::from_transactions(transactions);
    let items = item_universe(transactions);

    FrequentItemsetMiner::new(&fp_tree, items, transactions.len())
        .with_min_support(min_support)
        .generate()
}

/// Depth-first FP-Growth over suffixes of the sorted item list.
///
/// Every frequent branch works on its own clone of the tree, conditioned on
/// the branch item, so sibling branches never observe each other's changes.
pub struct FrequentItemsetMiner<'a, I: Item> {
    fp_tree: &'a PrefixTree<I>,
    items: Vec<I>,
    num_transactions: usize,
    min_support: f64,
}

/// The tree a pending branch is conditioned from.
enum BranchTree<'a, I: Item> {
    Root(&'a PrefixTree<I>),
    Conditional(Rc<PrefixTree<I>>),
}

impl<I: Item> BranchTree<'_, I> {
    fn tree(&self) -> &PrefixTree<I> {
        match self {
            BranchTree::Root(tree) => *tree,
            BranchTree::Conditional(tree) => tree.as_ref(),
        }
    }
}

struct Branch<'a, I: Item> {
    tree: BranchTree<'a, I>,
    item_index: usize,
    suffix: Vec<I>,
}

impl<'a, I: Item> FrequentItemsetMiner<'a, I> {
    /// `items` is sorted and deduplicated; it fixes the walk order.
    pub fn new(fp_tree: &'a PrefixTree<I>, items: impl IntoIterator<Item = I>, num_transactions: usize) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();

        Self {
            fp_tree,
            items,
            num_transactions,
            min_support: DEFAULT_MIN_SUPPORT,
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn generate(&self) -> Vec<FrequentItemset<I>> {
        let mut frequent_itemsets = Vec::new();

        if self.num_transactions == 0 {
            debug!("no transactions, nothing to mine");
            return frequent_itemsets;
        }

        debug!(
            items = self.items.len(),
            transactions = self.num_transactions,
            tree_nodes = self.fp_tree.len(),
            min_support = self.min_support,
            "mining frequent itemsets"
        );

        // Explicit stack in place of recursion. Pushing ascending indices
        // means the highest index pops first, matching a descending loop.
        let mut stack: Vec<Branch<'a, I>> = (0..self.items.len())
            .map(|item_index| Branch {
                tree: BranchTree::Root(self.fp_tree),
                item_index,
                suffix: Vec::new(),
            })
            .collect();

        while let Some(branch) = stack.pop() {
            let item = &self.items[branch.item_index];
            let source_tree = branch.tree.tree();
            let support = source_tree.support_count(item) as f64 / self.num_transactions as f64;

            if support < self.min_support {
                trace!(?item, support, depth = branch.suffix.len(), "pruned");
                continue;
            }

            let mut conditional_tree = source_tree.clone();
            conditional_tree.to_conditional_tree(item);

            let mut itemset = Vec::with_capacity(branch.suffix.len() + 1);
            itemset.push(item.clone());
            itemset.extend(branch.suffix.iter().cloned());
            trace!(?itemset, support, "frequent");

            let conditional_tree = Rc::new(conditional_tree);
            for item_index in 0..branch.item_index {
                stack.push(Branch {
                    tree: BranchTree::Conditional(Rc::clone(&conditional_tree)),
                    item_index,
                    suffix: itemset.clone(),
                });
            }

            frequent_itemsets.push(FrequentItemset::new(Itemset::from_sorted(itemset), support));
        }

        debug!(found = frequent_itemsets.len(), "frequent itemsets mined");
        frequent_itemsets
    }
}
