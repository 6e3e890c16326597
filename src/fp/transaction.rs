use crate::itemset::Item;
use ndarray::ArrayView2;

/// One basket of items, kept sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<I> {
    items: Vec<I>,
}

impl<I: Item> Transaction<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<I: Item> FromIterator<I> for Transaction<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Convert binary transaction matrix to transactions over column indices
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Vec<Transaction<usize>> {
    let num_transactions = matrix.shape()[0];
    let num_items = matrix.shape()[1];

    (0..num_transactions)
        .map(|i| {
            (0..num_items)
                .filter(|&j| matrix[[i, j]] != 0)
                .collect()
        })
        .collect()
}

/// Every distinct item across `transactions`, in canonical order.
pub fn item_universe<I: Item>(transactions: &[Transaction<I>]) -> Vec<I> {
    let mut items: Vec<I> = transactions
        .iter()
        .flat_map(|t| t.items().iter().cloned())
        .collect();
    items.sort_unstable();
    items.dedup();
    items
}
