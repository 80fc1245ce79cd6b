pub mod candidates;
pub mod itemset;
pub mod mining;
pub mod rules;
pub mod storage;
pub mod support;

pub use candidates::{combinations, generate_candidates};
pub use itemset::ItemSet;
pub use mining::{mine, mine_with_support, MiningResult};
pub use rules::{generate_rules, generate_rules_into, Rule, RuleSet};
pub use storage::{FrequentLevel, ItemsetStorage};
pub use support::SupportEvaluator;
