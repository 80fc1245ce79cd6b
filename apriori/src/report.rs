//! Human-readable rendering of mining results.

use crate::apriori::{ItemSet, MiningResult, Rule, RuleSet};
use crate::table::BinaryTable;
use std::fmt::Write;

/// `{a, b}` using the table's item names.
pub fn format_itemset(table: &BinaryTable, itemset: &ItemSet) -> String {
    format_items(table, itemset.items())
}

fn format_items(table: &BinaryTable, items: &[usize]) -> String {
    let names: Vec<&str> = items
        .iter()
        .map(|&item| table.item_name(item).unwrap_or("?"))
        .collect();
    format!("{{{}}}", names.join(", "))
}

pub fn format_rule(table: &BinaryTable, rule: &Rule) -> String {
    rule_line(table, &rule.antecedent, &rule.consequent, rule.confidence)
}

fn rule_line(table: &BinaryTable, antecedent: &ItemSet, consequent: &ItemSet, confidence: f64) -> String {
    format!(
        "{} -> {} (confidence = {:?})",
        format_itemset(table, antecedent),
        format_itemset(table, consequent),
        confidence
    )
}

/// One `k: count` line per level.
pub fn level_summary(mining: &MiningResult) -> Vec<String> {
    mining
        .levels()
        .iter()
        .map(|level| format!("{}: {}", level.itemset_size, level.len()))
        .collect()
}

pub fn render(table: &BinaryTable, mining: &MiningResult, rules: &RuleSet) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "Lengths for L:");
    for line in level_summary(mining) {
        let _ = writeln!(out, "{line}");
    }
    for (antecedent, consequent, confidence) in rules.iter() {
        let _ = writeln!(out, "{}", rule_line(table, antecedent, consequent, confidence));
    }
    let _ = writeln!(out, "Rule count: {}", rules.len());
    out
}
