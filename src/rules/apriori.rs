use crate::itemset::{Item, Itemset};
use std::collections::HashSet;

/// Apriori join step restricted to a known set of frequent itemsets.
///
/// Candidates are built from pairs sharing a prefix and kept only when the
/// membership set already holds them; support is never recomputed here.
#[derive(Debug, Clone)]
pub struct ItemsetCombiner<I: Item> {
    frequent: HashSet<Itemset<I>>,
}

impl<I: Item> ItemsetCombiner<I> {
    pub fn new(frequent_itemsets: impl IntoIterator<Item = Itemset<I>>) -> Self {
        Self {
            frequent: frequent_itemsets.into_iter().collect(),
        }
    }

    pub fn is_frequent(&self, itemset: &Itemset<I>) -> bool {
        self.frequent.contains(itemset)
    }

    /// Same prefix, different last item. An empty `a` joins with anything.
    pub fn is_combinable(&self, a: &Itemset<I>, b: &Itemset<I>) -> bool {
        let Some((last_a, prefix_a)) = a.items().split_last() else {
            return true;
        };
        let Some((last_b, prefix_b)) = b.items().split_last() else {
            return false;
        };

        prefix_a == prefix_b && last_a != last_b
    }

    /// Join `a` with `b`: singletons concatenate, longer sets take `b`'s last item.
    pub fn combine(&self, a: &Itemset<I>, b: &Itemset<I>) -> Itemset<I> {
        let mut items = a.items().to_vec();
        if a.len() == 1 {
            items.extend(b.iter().cloned());
        } else if let Some(last) = b.last() {
            items.push(last.clone());
        }
        Itemset::new(items)
    }

    /// Next-size candidates from one level, filtered to known frequent sets.
    ///
    /// Each itemset is paired only with itemsets at or after its own
    /// position, so no pair is joined twice.
    pub fn generate(&self, itemsets: &[Itemset<I>]) -> Vec<Itemset<I>> {
        itemsets
            .iter()
            .enumerate()
            .flat_map(|(n, a)| {
                itemsets[n..]
                    .iter()
                    .filter(move |b| self.is_combinable(a, b))
                    .map(move |b| self.combine(a, b))
            })
            .filter(|candidate| self.is_frequent(candidate))
            .collect()
    }
}
