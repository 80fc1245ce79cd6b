use super::candidates::generate_candidates;
use super::itemset::ItemSet;
use super::storage::FrequentLevel;
use super::support::SupportEvaluator;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::table::BinaryTable;
use rayon::prelude::*;
use std::collections::HashMap;

/// Output of a level-wise search.
///
/// `levels[k - 1]` holds the frequent itemsets of size `k`. Level 1 is always
/// present, even when empty; later levels only when they found something.
/// `candidates[k - 1]` holds every candidate whose support was evaluated at
/// size `k`, including the level that ended the search.
#[derive(Debug, Clone)]
pub struct MiningResult {
    levels: Vec<FrequentLevel>,
    candidates: Vec<FrequentLevel>,
    num_transactions: usize,
}

impl MiningResult {
    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    pub fn level(&self, k: usize) -> Option<&FrequentLevel> {
        k.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    /// `None` when the level was never reached or candidates were not retained.
    pub fn candidates(&self, k: usize) -> Option<&FrequentLevel> {
        k.checked_sub(1).and_then(|idx| self.candidates.get(idx))
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn total_itemsets(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = (&[usize], f64)> {
        self.levels.iter().flat_map(|level| level.iter())
    }

    /// Support recorded for a frequent itemset, if it was found.
    pub fn support_of(&self, itemset: &ItemSet) -> Option<f64> {
        let level = self.level(itemset.len())?;
        level.position(itemset.items()).map(|idx| level.support(idx))
    }

    pub(crate) fn support_index(&self) -> HashMap<&[usize], f64> {
        self.iter_itemsets().collect()
    }
}

pub fn mine_with_support(table: &BinaryTable, min_support: f64) -> Result<MiningResult> {
    let config = MiningConfig {
        min_support,
        ..MiningConfig::default()
    };
    mine(table, &config)
}

pub fn mine(table: &BinaryTable, config: &MiningConfig) -> Result<MiningResult> {
    config.validate()?;
    let evaluator = SupportEvaluator::new(table)?;
    let num_items = table.num_items();

    let seeds: Vec<ItemSet> = (0..num_items).map(ItemSet::singleton).collect();
    let (seed_candidates, first_level) = evaluate_level(&evaluator, 1, seeds, config);
    tracing::debug!(
        level = 1,
        candidates = seed_candidates.len(),
        frequent = first_level.len(),
        "finished level"
    );

    let mut levels = vec![first_level];
    let mut candidates = Vec::new();
    if config.retain_candidates {
        candidates.push(seed_candidates);
    }

    for k in 2..=num_items {
        let previous = &levels[levels.len() - 1];
        let raw = generate_candidates(previous, k);
        let (evaluated, frequent) = evaluate_level(&evaluator, k, raw, config);
        tracing::debug!(
            level = k,
            candidates = evaluated.len(),
            frequent = frequent.len(),
            "finished level"
        );

        if config.retain_candidates {
            candidates.push(evaluated);
        }
        if frequent.is_empty() {
            break;
        }
        levels.push(frequent);
    }

    let result = MiningResult {
        levels,
        candidates,
        num_transactions: table.num_transactions(),
    };
    tracing::info!(
        levels = result.num_levels(),
        itemsets = result.total_itemsets(),
        min_support = config.min_support,
        "frequent itemset search complete"
    );
    Ok(result)
}

/// Scores every candidate and splits out those meeting `min_support`.
/// Returns `(candidates, frequent)`, both in candidate order.
fn evaluate_level(
    evaluator: &SupportEvaluator<'_>,
    k: usize,
    candidates: Vec<ItemSet>,
    config: &MiningConfig,
) -> (FrequentLevel, FrequentLevel) {
    let supports: Vec<f64> = if config.parallel {
        candidates.par_iter().map(|c| evaluator.support(c)).collect()
    } else {
        candidates.iter().map(|c| evaluator.support(c)).collect()
    };

    let mut evaluated = FrequentLevel::with_capacity(k, candidates.len());
    let mut frequent = FrequentLevel::new(k);
    for (candidate, support) in candidates.iter().zip(supports) {
        evaluated.add_itemset(candidate, support);
        if support >= config.min_support {
            frequent.add_itemset(candidate, support);
        }
    }

    (evaluated, frequent)
}
