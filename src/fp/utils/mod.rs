pub mod storage;

pub use storage::{group_by_level, FrequentLevel};
