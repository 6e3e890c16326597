use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Anything that can be mined: a totally ordered, hashable identifier.
///
/// The order is global. Transactions, itemsets and the tree walk all follow it.
pub trait Item: Ord + Hash + Clone + fmt::Debug {}

impl<T> Item for T where T: Ord + Hash + Clone + fmt::Debug {}

/// A strictly increasing run of items.
///
/// Equality and hashing use the item sequence directly, so two itemsets are
/// the same key exactly when they hold the same items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itemset<I>(Vec<I>);

impl<I: Ord> Itemset<I> {
    /// Sorts and deduplicates `items`.
    pub fn new(mut items: Vec<I>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Wraps items already in canonical order.
    pub(crate) fn from_sorted(items: Vec<I>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }
}

impl<I: Ord + Clone> Itemset<I> {
    /// Items of `self` that are not in `other`, order preserved.
    pub fn without(&self, other: &Itemset<I>) -> Itemset<I> {
        Self(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    pub fn singletons(&self) -> Vec<Itemset<I>> {
        self.0.iter().map(|item| Self(vec![item.clone()])).collect()
    }
}

impl<I> Itemset<I> {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn items(&self) -> &[I] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&I> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<I> {
        self.0
    }
}

impl<I: Ord> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<I: fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, " }}")
    }
}

/// An itemset together with the fraction of transactions containing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset<I> {
    pub itemset: Itemset<I>,
    pub support: f64,
}

impl<I> FrequentItemset<I> {
    pub fn new(itemset: Itemset<I>, support: f64) -> Self {
        Self { itemset, support }
    }
}

/// `antecedent -> consequent`, both halves of one frequent itemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule<I> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    pub confidence: f64,
}

impl<I> Rule<I> {
    pub fn new(antecedent: Itemset<I>, consequent: Itemset<I>, confidence: f64) -> Self {
        Self {
            antecedent,
            consequent,
            confidence,
        }
    }
}

impl<I: fmt::Display> fmt::Display for Rule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.confidence * 100.0).round() / 100.0;
        write!(
            f,
            "{} -> {} (confidence: {})",
            self.antecedent, self.consequent, rounded
        )
    }
}
