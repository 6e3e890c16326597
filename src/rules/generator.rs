use crate::config::DEFAULT_MIN_CONFIDENCE;
use crate::itemset::{FrequentItemset, Item, Itemset, Rule};
use crate::rules::apriori::ItemsetCombiner;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Derives association rules from a finished set of frequent itemsets.
pub struct RuleGenerator<I: Item> {
    frequent_itemsets: Vec<FrequentItemset<I>>,
    itemset_to_support: HashMap<Itemset<I>, f64>,
    combiner: ItemsetCombiner<I>,
    min_confidence: f64,
}

impl<I: Item> RuleGenerator<I> {
    pub fn new(frequent_itemsets: &[FrequentItemset<I>]) -> Self {
        let itemset_to_support = frequent_itemsets
            .iter()
            .map(|f| (f.itemset.clone(), f.support))
            .collect();
        let combiner = ItemsetCombiner::new(frequent_itemsets.iter().map(|f| f.itemset.clone()));

        Self {
            frequent_itemsets: frequent_itemsets.to_vec(),
            itemset_to_support,
            combiner,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Recorded support, or 0 for an itemset that was never frequent.
    pub fn support(&self, itemset: &Itemset<I>) -> f64 {
        self.itemset_to_support.get(itemset).copied().unwrap_or(0.0)
    }

    /// `support(itemset) / support(antecedent)`, 0 when the antecedent has no support.
    pub fn confidence(&self, itemset: &Itemset<I>, antecedent: &Itemset<I>) -> f64 {
        let antecedent_support = self.support(antecedent);
        if antecedent_support == 0.0 {
            return 0.0;
        }
        self.support(itemset) / antecedent_support
    }

    /// All rules above the threshold, highest confidence first.
    ///
    /// Equal confidences keep the order in which they were produced.
    pub fn generate(&self) -> Vec<Rule<I>> {
        debug!(
            itemsets = self.frequent_itemsets.len(),
            min_confidence = self.min_confidence,
            "generating rules"
        );

        let mut rules: Vec<Rule<I>> = self
            .frequent_itemsets
            .iter()
            .filter(|f| f.itemset.len() >= 2)
            .flat_map(|f| self.rules_for(&f.itemset))
            .collect();

        rules.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        debug!(found = rules.len(), "rules generated");
        rules
    }

    /// Rules splitting one frequent itemset.
    ///
    /// Consequents start as singletons and grow one item per level through
    /// the Apriori join. A consequent that fails the threshold is dropped
    /// before the join, since any larger consequent containing it has an
    /// antecedent of at least as much support and so no higher confidence.
    pub fn rules_for(&self, itemset: &Itemset<I>) -> Vec<Rule<I>> {
        let mut rules = Vec::new();
        if itemset.len() < 2 {
            return rules;
        }

        let mut consequents = self.keep_confident(itemset, itemset.singletons(), &mut rules);

        while let Some(consequent_size) = consequents.first().map(Itemset::len) {
            if itemset.len() <= consequent_size + 1 {
                break;
            }
            let candidates = self.combiner.generate(&consequents);
            consequents = self.keep_confident(itemset, candidates, &mut rules);
        }

        rules
    }

    fn keep_confident(
        &self,
        itemset: &Itemset<I>,
        mut candidates: Vec<Itemset<I>>,
        rules: &mut Vec<Rule<I>>,
    ) -> Vec<Itemset<I>> {
        candidates.retain(|consequent| {
            let antecedent = itemset.without(consequent);
            if antecedent.is_empty() || self.support(&antecedent) == 0.0 {
                return false;
            }
            let confidence = self.confidence(itemset, &antecedent);

            if confidence >= self.min_confidence {
                rules.push(Rule::new(antecedent, consequent.clone(), confidence));
                true
            } else {
                trace!(?consequent, confidence, "consequent pruned");
                false
            }
        });
        candidates
    }
}
