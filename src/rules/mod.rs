pub mod apriori;
pub mod generator;


pub use apriori::ItemsetCombiner;
pub use generator::RuleGenerator;
