pub mod mining;

pub use mining::{fp_growth_algorithm, FrequentItemsetMiner};
