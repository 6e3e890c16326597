pub mod growth;
pub mod transaction;
pub mod tree;
pub mod utils;


pub use growth::{fp_growth_algorithm, FrequentItemsetMiner};
pub use transaction::{item_universe, transactions_from_matrix, Transaction};
pub use tree::{NodeId, PrefixTree, PrefixTreeNode};
pub use utils::{group_by_level, FrequentLevel};
