// Tree module - prefix tree storage, cloning and conditional extraction

mod node;
mod tree;
mod tree_ops;

pub use node::{NodeId, PrefixTreeNode};
pub use tree::PrefixTree;
