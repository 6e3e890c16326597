//! FP-Growth frequent itemset mining and association rule generation.
//!
//! Transactions are folded into a [`PrefixTree`], mined depth-first by
//! [`FrequentItemsetMiner`], and the resulting itemsets are split into rules
//! by [`RuleGenerator`], which grows consequents with the Apriori join in
//! [`ItemsetCombiner`].
//!
//! ```
//! use fprules::{mine_transactions, MiningConfig, Transaction};
//!
//! let transactions = vec![
//!     Transaction::new(["bread", "milk"]),
//!     Transaction::new(["bread", "diapers", "beer"]),
//!     Transaction::new(["milk", "diapers", "beer"]),
//!     Transaction::new(["bread", "milk", "diapers", "beer"]),
//! ];
//! let result = mine_transactions(&transactions, &MiningConfig::new(0.5, 0.7)).unwrap();
//! assert!(result.rules.iter().all(|rule| rule.confidence >= 0.7));
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod io;
pub mod itemset;
pub mod pipeline;
pub mod rules;

#[cfg(feature = "python")]
mod python;

pub use config::MiningConfig;
pub use error::{Error, Result};
pub use fp::{fp_growth_algorithm, transactions_from_matrix, FrequentItemsetMiner, FrequentLevel, PrefixTree, Transaction};
pub use itemset::{FrequentItemset, Item, Itemset, Rule};
pub use pipeline::{execute_fp_growth, mine_transactions, MiningResult, NoProgress, ProgressEvent, ProgressObserver};
pub use rules::{ItemsetCombiner, RuleGenerator};
