use crate::itemset::{FrequentItemset, Item};

/// All frequent itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<I> {
    pub itemset_size: usize,
    itemsets: Vec<FrequentItemset<I>>,
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            itemsets: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, itemset: FrequentItemset<I>) {
        debug_assert_eq!(itemset.itemset.len(), self.itemset_size);
        self.itemsets.push(itemset);
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &FrequentItemset<I>> {
        self.itemsets.iter()
    }
}

/// Bucket itemsets by size; level `n` sits at index `n - 1`.
///
/// Sizes with no itemsets still get an (empty) level, so indexing by size
/// stays valid.
pub fn group_by_level<I: Item>(frequent_itemsets: &[FrequentItemset<I>]) -> Vec<FrequentLevel<I>> {
    let mut result: Vec<FrequentLevel<I>> = Vec::new();

    for frequent in frequent_itemsets {
        let size = frequent.itemset.len();
        if size == 0 {
            continue;
        }
        while result.len() < size {
            result.push(FrequentLevel::new(result.len() + 1));
        }
        result[size - 1].add_itemset(frequent.clone());
    }

    result
}
