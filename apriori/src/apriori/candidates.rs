use super::itemset::ItemSet;
use super::storage::FrequentLevel;
use std::collections::HashSet;

/// Candidates of size `k` built from the frequent itemsets of size `k - 1`:
/// every unordered pair sharing exactly `k - 2` items is joined, duplicates
/// are skipped, and a union survives only if all of its `(k - 1)`-subsets
/// are frequent. Output keeps discovery order.
pub fn generate_candidates(prev_level: &FrequentLevel, k: usize) -> Vec<ItemSet> {
    if k < 2 || prev_level.len() < 2 {
        return Vec::new();
    }

    let previous = prev_level.to_itemsets();
    let prev_index: HashSet<&[usize]> = prev_level.iter_itemsets().collect();

    let mut seen: HashSet<ItemSet> = HashSet::new();
    let mut candidates = Vec::new();

    for_each_joinable_pair(&previous, k, |candidate| {
        if !seen.insert(candidate.clone()) {
            return;
        }
        if all_subsets_frequent(&candidate, &prev_index) {
            candidates.push(candidate);
        }
    });

    candidates
}

/// Self-join: calls `callback` with `p ∪ q` for each pair `p < q` (by position)
/// with `|p ∩ q| == k - 2`.
pub fn for_each_joinable_pair<F>(previous: &[ItemSet], k: usize, mut callback: F)
where
    F: FnMut(ItemSet),
{
    if k < 2 {
        return;
    }
    let shared = k - 2;
    for (p, left) in previous.iter().enumerate() {
        for right in &previous[p + 1..] {
            if left.intersection_len(right) == shared {
                callback(left.union(right));
            }
        }
    }
}

/// Anti-monotone prune test.
pub fn all_subsets_frequent(candidate: &ItemSet, prev_index: &HashSet<&[usize]>) -> bool {
    candidate
        .subsets_dropping_one()
        .all(|subset| prev_index.contains(subset.items()))
}

/// All `k`-combinations of `items`, in lexicographic order of positions.
pub fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > items.len() {
        return out;
    }
    let mut callback = |combination: &[usize]| out.push(combination.to_vec());
    generate_combinations_recursive(items, k, 0, &mut Vec::with_capacity(k), &mut callback);
    out
}

fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
