use super::itemset::ItemSet;
use super::mining::MiningResult;
use super::support::SupportEvaluator;
use crate::config::{MiningConfig, ZeroSupportPolicy};
use crate::error::{AprioriError, Result};
use crate::table::BinaryTable;
use std::collections::{BTreeMap, HashMap};

/// An association rule `antecedent -> consequent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
    pub confidence: f64,
}

/// Rules grouped by antecedent, then by consequent.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<ItemSet, BTreeMap<ItemSet, f64>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, antecedent: ItemSet, consequent: ItemSet, confidence: f64) {
        self.rules
            .entry(antecedent)
            .or_default()
            .insert(consequent, confidence);
    }

    pub fn contains(&self, antecedent: &ItemSet, consequent: &ItemSet) -> bool {
        self.confidence(antecedent, consequent).is_some()
    }

    pub fn confidence(&self, antecedent: &ItemSet, consequent: &ItemSet) -> Option<f64> {
        self.rules.get(antecedent)?.get(consequent).copied()
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn num_antecedents(&self) -> usize {
        self.rules.len()
    }

    pub fn antecedents(&self) -> impl Iterator<Item = &ItemSet> {
        self.rules.keys()
    }

    pub fn consequents_of(&self, antecedent: &ItemSet) -> Option<&BTreeMap<ItemSet, f64>> {
        self.rules.get(antecedent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemSet, &ItemSet, f64)> {
        self.rules.iter().flat_map(|(antecedent, consequents)| {
            consequents
                .iter()
                .map(move |(consequent, &confidence)| (antecedent, consequent, confidence))
        })
    }

    pub fn to_rules(&self) -> Vec<Rule> {
        self.iter()
            .map(|(antecedent, consequent, confidence)| Rule {
                antecedent: antecedent.clone(),
                consequent: consequent.clone(),
                confidence,
            })
            .collect()
    }
}

pub fn generate_rules(
    table: &BinaryTable,
    mining: &MiningResult,
    config: &MiningConfig,
) -> Result<RuleSet> {
    let mut rules = RuleSet::new();
    generate_rules_into(table, mining, config, &mut rules)?;
    Ok(rules)
}

/// Derives rules from every frequent itemset of size two or more and adds
/// them to `rules`. Splits already present in `rules` are not re-derived.
pub fn generate_rules_into(
    table: &BinaryTable,
    mining: &MiningResult,
    config: &MiningConfig,
    rules: &mut RuleSet,
) -> Result<()> {
    config.validate()?;
    let generator = RuleGenerator {
        evaluator: SupportEvaluator::new(table)?,
        known: mining.support_index(),
        min_confidence: config.min_confidence,
        policy: config.zero_support_policy,
    };

    for level in mining.levels().iter().filter(|level| level.itemset_size > 1) {
        let before = rules.len();
        for items in level.iter_itemsets() {
            let itemset = ItemSet::from_sorted(items);
            generator.split(&itemset, &ItemSet::empty(), rules)?;
        }
        tracing::debug!(
            itemset_size = level.itemset_size,
            new_rules = rules.len() - before,
            "computed rules for level"
        );
    }

    tracing::info!(
        rules = rules.len(),
        min_confidence = config.min_confidence,
        "rule generation complete"
    );
    Ok(())
}

struct RuleGenerator<'a> {
    evaluator: SupportEvaluator<'a>,
    // every subset of a frequent itemset is frequent, so most lookups hit
    known: HashMap<&'a [usize], f64>,
    min_confidence: f64,
    policy: ZeroSupportPolicy,
}

impl RuleGenerator<'_> {
    fn support(&self, itemset: &ItemSet) -> f64 {
        match self.known.get(itemset.items()) {
            Some(&support) => support,
            None => self.evaluator.support(itemset),
        }
    }

    /// Moves one antecedent item at a time into the consequent. A branch is
    /// only explored further when its rule met the confidence threshold.
    fn split(&self, antecedent: &ItemSet, consequent: &ItemSet, rules: &mut RuleSet) -> Result<()> {
        if antecedent.is_empty() {
            return Ok(());
        }

        for &item in antecedent.items() {
            let next_antecedent = antecedent.without(item);
            let next_consequent = consequent.with(item);

            if rules.contains(&next_antecedent, &next_consequent) {
                continue;
            }

            let Some(confidence) = self.confidence(&next_antecedent, &next_consequent)? else {
                continue;
            };

            if confidence >= self.min_confidence {
                rules.insert(next_antecedent.clone(), next_consequent.clone(), confidence);
                if next_antecedent.len() > 1 {
                    self.split(&next_antecedent, &next_consequent, rules)?;
                }
            }
        }

        Ok(())
    }

    fn confidence(&self, antecedent: &ItemSet, consequent: &ItemSet) -> Result<Option<f64>> {
        let antecedent_support = self.support(antecedent);
        if antecedent_support == 0.0 {
            return match self.policy {
                ZeroSupportPolicy::Fail => Err(AprioriError::ZeroSupportAntecedent {
                    antecedent: antecedent.items().to_vec(),
                }),
                ZeroSupportPolicy::Skip => {
                    tracing::trace!(antecedent = ?antecedent.items(), "skipping zero-support antecedent");
                    Ok(None)
                }
            };
        }
        Ok(Some(self.support(&antecedent.union(consequent)) / antecedent_support))
    }
}
