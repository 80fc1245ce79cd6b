//! Property-based tests for itemset mining and rule generation.

use apriori::apriori::combinations;
use apriori::{analyze, BinaryTable, ItemSet, MiningConfig, SupportEvaluator};
use ndarray::Array2;
use proptest::prelude::*;
use std::collections::HashSet;

/// Random binary tables with 1..=6 items and 1..=24 transactions.
fn arbitrary_table() -> impl Strategy<Value = BinaryTable> {
    (1usize..=6, 1usize..=24)
        .prop_flat_map(|(items, rows)| {
            prop::collection::vec(prop::bool::weighted(0.6), items * rows)
                .prop_map(move |cells| (items, rows, cells))
        })
        .prop_map(|(items, rows, cells)| {
            let data = Array2::from_shape_vec(
                (rows, items),
                cells.into_iter().map(i32::from).collect(),
            )
            .unwrap();
            let names = (0..items).map(|idx| format!("i{idx}")).collect();
            BinaryTable::from_array(names, data.view()).unwrap()
        })
}

fn config(min_support: f64, min_confidence: f64) -> MiningConfig {
    MiningConfig::new(min_support, min_confidence)
}

proptest! {
    /// Every (k-1)-subset of a frequent k-itemset is frequent.
    #[test]
    fn frequent_itemsets_are_downward_closed(
        table in arbitrary_table(),
        min_support in 0.05f64..=1.0,
    ) {
        let analysis = analyze(&table, &config(min_support, 0.5)).unwrap();
        let mining = &analysis.mining;

        for level in mining.levels().iter().skip(1) {
            let previous = mining.level(level.itemset_size - 1).unwrap();
            for items in level.iter_itemsets() {
                for subset in ItemSet::new(items.to_vec()).subsets_dropping_one() {
                    prop_assert!(previous.contains(subset.items()));
                }
            }
        }
    }

    /// No itemset appears twice within a level, and sizes match the level.
    #[test]
    fn levels_have_unique_sets_of_the_right_size(
        table in arbitrary_table(),
        min_support in 0.05f64..=1.0,
    ) {
        let analysis = analyze(&table, &config(min_support, 0.5)).unwrap();
        for level in analysis.mining.levels() {
            let unique: HashSet<&[usize]> = level.iter_itemsets().collect();
            prop_assert_eq!(unique.len(), level.len());
            prop_assert!(level.iter_itemsets().all(|items| items.len() == level.itemset_size));
        }
    }

    /// The level-wise search finds exactly the itemsets a brute-force scan finds.
    #[test]
    fn matches_exhaustive_enumeration(
        table in arbitrary_table(),
        min_support in 0.05f64..=1.0,
    ) {
        let analysis = analyze(&table, &config(min_support, 0.5)).unwrap();
        let evaluator = SupportEvaluator::new(&table).unwrap();
        let all_items: Vec<usize> = (0..table.num_items()).collect();

        let mut expected: HashSet<Vec<usize>> = HashSet::new();
        for k in 1..=table.num_items() {
            for combo in combinations(&all_items, k) {
                if evaluator.support_of(&combo) >= min_support {
                    expected.insert(combo);
                }
            }
        }

        let found: HashSet<Vec<usize>> = analysis
            .mining
            .iter_itemsets()
            .map(|(items, _)| items.to_vec())
            .collect();
        prop_assert_eq!(found, expected);
    }

    /// support(A) >= support(B) whenever A is a subset of B.
    #[test]
    fn support_is_monotone(
        table in arbitrary_table(),
        picks in prop::collection::vec(0usize..6, 0..6),
        extra in prop::collection::vec(0usize..6, 0..6),
    ) {
        let n = table.num_items();
        let smaller = ItemSet::new(picks.iter().map(|p| p % n).collect());
        let larger = smaller.union(&ItemSet::new(extra.iter().map(|p| p % n).collect()));
        let evaluator = SupportEvaluator::new(&table).unwrap();

        if !smaller.is_empty() {
            prop_assert!(evaluator.support(&smaller) >= evaluator.support(&larger));
        }
    }

    /// Rules split one frequent itemset into two disjoint, non-empty sides,
    /// and carry the confidence support(A ∪ C) / support(A).
    #[test]
    fn rules_are_valid(
        table in arbitrary_table(),
        min_support in 0.05f64..=1.0,
        min_confidence in 0.0f64..=1.0,
    ) {
        let analysis = analyze(&table, &config(min_support, min_confidence)).unwrap();
        let evaluator = SupportEvaluator::new(&table).unwrap();

        for (antecedent, consequent, confidence) in analysis.rules.iter() {
            prop_assert!(!antecedent.is_empty());
            prop_assert!(!consequent.is_empty());
            prop_assert_eq!(antecedent.intersection_len(consequent), 0);
            prop_assert!((0.0..=1.0).contains(&confidence));
            prop_assert!(confidence >= min_confidence);

            let whole = antecedent.union(consequent);
            prop_assert!(analysis.mining.support_of(&whole).is_some());

            let expected = evaluator.support(&whole) / evaluator.support(antecedent);
            prop_assert!((confidence - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn no_frequent_items_yields_no_pair_candidates() {
    let data = Array2::from_shape_vec((4, 3), vec![1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0]).unwrap();
    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let table = BinaryTable::from_array(names, data.view()).unwrap();

    let analysis = analyze(&table, &config(0.5, 0.5)).unwrap();
    assert!(analysis.mining.level(1).unwrap().is_empty());
    assert_eq!(analysis.mining.candidates(2).map(|c| c.len()), Some(0));
    assert!(analysis.rules.is_empty());
}
