use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::{group_by_level, item_universe, FrequentItemsetMiner, FrequentLevel, PrefixTree, Transaction};
use crate::itemset::{FrequentItemset, Item, Rule};
use crate::rules::RuleGenerator;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Checkpoints reported while a run progresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    FrequentItemsetsGenerating,
    FrequentItemsetsGenerated { count: usize, min_support: f64 },
    RulesGenerating,
    RulesGenerated { count: usize, min_confidence: f64 },
}

/// Receives [`ProgressEvent`]s. Any `FnMut(ProgressEvent)` closure works.
pub trait ProgressObserver {
    fn on_progress(&mut self, event: ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(ProgressEvent),
{
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _event: ProgressEvent) {}
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningResult<I> {
    pub frequent_itemsets: Vec<FrequentItemset<I>>,
    pub rules: Vec<Rule<I>>,
}

impl<I: Item> MiningResult<I> {
    pub fn levels(&self) -> Vec<FrequentLevel<I>> {
        group_by_level(&self.frequent_itemsets)
    }
}

/// Mine itemsets from `fp_tree`, then derive rules from them.
///
/// `config` is validated first; no work starts on out-of-range thresholds.
pub fn execute_fp_growth<I, P>(
    fp_tree: &PrefixTree<I>,
    items: &[I],
    num_transactions: usize,
    config: &MiningConfig,
    progress: &mut P,
) -> Result<MiningResult<I>>
where
    I: Item,
    P: ProgressObserver + ?Sized,
{
    config.validate()?;

    progress.on_progress(ProgressEvent::FrequentItemsetsGenerating);
    let start = Instant::now();
    let frequent_itemsets = FrequentItemsetMiner::new(fp_tree, items.iter().cloned(), num_transactions)
        .with_min_support(config.min_support)
        .generate();
    info!(
        count = frequent_itemsets.len(),
        min_support = config.min_support,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "frequent itemsets generated"
    );
    progress.on_progress(ProgressEvent::FrequentItemsetsGenerated {
        count: frequent_itemsets.len(),
        min_support: config.min_support,
    });

    progress.on_progress(ProgressEvent::RulesGenerating);
    let start = Instant::now();
    let rules = RuleGenerator::new(&frequent_itemsets)
        .with_min_confidence(config.min_confidence)
        .generate();
    info!(
        count = rules.len(),
        min_confidence = config.min_confidence,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rules generated"
    );
    progress.on_progress(ProgressEvent::RulesGenerated {
        count: rules.len(),
        min_confidence: config.min_confidence,
    });

    Ok(MiningResult {
        frequent_itemsets,
        rules,
    })
}

/// Build the tree from `transactions` and run the whole pipeline over every
/// item that occurs in them.
pub fn mine_transactions<I: Item>(
    transactions: &[Transaction<I>],
    config: &MiningConfig,
) -> Result<MiningResult<I>> {
    let fp_tree = PrefixTree::from_transactions(transactions);
    let items = item_universe(transactions);
    execute_fp_growth(&fp_tree, &items, transactions.len(), config, &mut NoProgress)
}
