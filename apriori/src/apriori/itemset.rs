/// A set of item indices kept in canonical (sorted, deduplicated) form, so
/// structural equality and hashing work regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemSet {
    items: Vec<usize>,
}

impl ItemSet {
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn singleton(item: usize) -> Self {
        Self { items: vec![item] }
    }

    /// Builds from a slice that is already sorted and unique.
    pub(crate) fn from_sorted(items: &[usize]) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self {
            items: items.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn contains(&self, item: usize) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            let (a, b) = (self.items[i], other.items[j]);
            if a < b {
                merged.push(a);
                i += 1;
            } else if b < a {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a);
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&self.items[i..]);
        merged.extend_from_slice(&other.items[j..]);
        ItemSet { items: merged }
    }

    pub fn intersection_len(&self, other: &ItemSet) -> usize {
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        self.intersection_len(other) == self.len()
    }

    pub fn without(&self, item: usize) -> ItemSet {
        ItemSet {
            items: self.items.iter().copied().filter(|&x| x != item).collect(),
        }
    }

    pub fn with(&self, item: usize) -> ItemSet {
        let mut items = self.items.clone();
        if let Err(pos) = items.binary_search(&item) {
            items.insert(pos, item);
        }
        ItemSet { items }
    }

    /// All subsets obtained by dropping exactly one item.
    pub fn subsets_dropping_one(&self) -> impl Iterator<Item = ItemSet> + '_ {
        (0..self.items.len()).map(move |skip| {
            let mut items = Vec::with_capacity(self.items.len().saturating_sub(1));
            items.extend_from_slice(&self.items[..skip]);
            items.extend_from_slice(&self.items[skip + 1..]);
            ItemSet { items }
        })
    }
}

impl From<Vec<usize>> for ItemSet {
    fn from(items: Vec<usize>) -> Self {
        ItemSet::new(items)
    }
}

impl<const N: usize> From<[usize; N]> for ItemSet {
    fn from(items: [usize; N]) -> Self {
        ItemSet::new(items.to_vec())
    }
}
