//! Binary transaction table with one row-membership bitset per item.

use crate::apriori::ItemSet;
use crate::error::{AprioriError, Result};
use bitvec::prelude::*;
use ndarray::ArrayView2;
use std::collections::HashMap;

pub(crate) type TransactionBits = BitVec<u64, Lsb0>;

#[derive(Debug, Clone)]
pub struct BinaryTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<TransactionBits>,
    num_transactions: usize,
}

impl BinaryTable {
    /// Builds a table from a dense transactions x items matrix; any nonzero
    /// cell marks the item as present.
    pub fn from_array(names: Vec<String>, data: ArrayView2<i32>) -> Result<Self> {
        let (num_transactions, num_items) = data.dim();
        if names.len() != num_items {
            return Err(AprioriError::ShapeMismatch {
                expected: names.len(),
                found: num_items,
            });
        }

        let columns = data
            .columns()
            .into_iter()
            .map(|column| column.iter().map(|&value| value != 0).collect())
            .collect();

        Self::from_columns(names, columns, num_transactions)
    }

    /// Builds a table from textual rows: a cell equal to `marker` is 1,
    /// every other value (including a missing one) is 0.
    pub fn from_records<I, R, S>(headers: Vec<String>, records: I, marker: &str) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut columns: Vec<TransactionBits> = vec![BitVec::new(); headers.len()];
        let mut num_transactions = 0;

        for record in records {
            let mut width = 0;
            for (col, cell) in record.into_iter().enumerate() {
                let present = cell
                    .as_ref()
                    .is_some_and(|value| AsRef::<str>::as_ref(value) == marker);
                match columns.get_mut(col) {
                    Some(bits) => bits.push(present),
                    None => {
                        return Err(AprioriError::ShapeMismatch {
                            expected: headers.len(),
                            found: col + 1,
                        })
                    }
                }
                width = col + 1;
            }
            if width != headers.len() {
                return Err(AprioriError::ShapeMismatch {
                    expected: headers.len(),
                    found: width,
                });
            }
            num_transactions += 1;
        }

        Self::from_columns(headers, columns, num_transactions)
    }

    pub(crate) fn from_columns(
        names: Vec<String>,
        columns: Vec<TransactionBits>,
        num_transactions: usize,
    ) -> Result<Self> {
        if let Some(bad) = columns.iter().find(|c| c.len() != num_transactions) {
            return Err(AprioriError::ShapeMismatch {
                expected: num_transactions,
                found: bad.len(),
            });
        }

        let mut index = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if index.insert(name.clone(), idx).is_some() {
                return Err(AprioriError::DuplicateItem(name.clone()));
            }
        }

        Ok(Self {
            names,
            index,
            columns,
            num_transactions,
        })
    }

    pub fn item_names(&self) -> &[String] {
        &self.names
    }

    pub fn item_name(&self, item: usize) -> Option<&str> {
        self.names.get(item).map(String::as_str)
    }

    pub fn item_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn num_items(&self) -> usize {
        self.names.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Resolves item names into an `ItemSet`.
    pub fn itemset<S: AsRef<str>>(&self, names: &[S]) -> Result<ItemSet> {
        names
            .iter()
            .map(|name| {
                self.item_index(name.as_ref())
                    .ok_or_else(|| AprioriError::UnknownItem(name.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>>>()
            .map(ItemSet::new)
    }

    /// Number of transactions containing every item of `items`.
    /// The empty set counts zero.
    pub fn count(&self, items: &[usize]) -> usize {
        let Some((&first, rest)) = items.split_first() else {
            return 0;
        };
        if rest.is_empty() {
            return self.columns[first].count_ones();
        }

        let mut acc = self.columns[first].clone();
        for &item in rest {
            let other = self.columns[item].as_raw_slice();
            for (word, &mask) in acc.as_raw_mut_slice().iter_mut().zip(other) {
                *word &= mask;
            }
        }
        acc.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_with_bitset_intersection() {
        let data = array![[1, 1, 0], [1, 1, 1], [0, 1, 1], [1, 0, 0]];
        let table = BinaryTable::from_array(names(&["a", "b", "c"]), data.view()).unwrap();

        assert_eq!(table.num_transactions(), 4);
        assert_eq!(table.count(&[0]), 3);
        assert_eq!(table.count(&[0, 1]), 2);
        assert_eq!(table.count(&[0, 2]), 1);
        assert_eq!(table.count(&[0, 1, 2]), 1);
        assert_eq!(table.count(&[]), 0);
    }

    #[test]
    fn counts_across_word_boundaries() {
        let rows = 130;
        let data = ndarray::Array2::from_shape_fn((rows, 2), |(r, c)| {
            if c == 0 || r % 3 == 0 {
                1
            } else {
                0
            }
        });
        let table = BinaryTable::from_array(names(&["x", "y"]), data.view()).unwrap();
        assert_eq!(table.count(&[0]), rows);
        assert_eq!(table.count(&[0, 1]), (0..rows).filter(|r| r % 3 == 0).count());
    }

    #[test]
    fn records_use_marker() {
        let rows = vec![
            vec![Some("t"), None],
            vec![Some("f"), Some("t")],
            vec![None, Some("t")],
        ];
        let table = BinaryTable::from_records(names(&["milk", "bread"]), rows, "t").unwrap();
        assert_eq!(table.num_transactions(), 3);
        assert_eq!(table.count(&[0]), 1);
        assert_eq!(table.count(&[1]), 2);
        assert_eq!(table.count(&[0, 1]), 0);
    }

    #[test]
    fn ragged_record_is_rejected() {
        let rows = vec![vec![Some("t"), Some("t")], vec![Some("t")]];
        let err = BinaryTable::from_records(names(&["a", "b"]), rows, "t").unwrap_err();
        assert!(matches!(err, AprioriError::ShapeMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn header_mismatch_and_duplicates() {
        let data = array![[1, 0]];
        assert!(matches!(
            BinaryTable::from_array(names(&["a"]), data.view()),
            Err(AprioriError::ShapeMismatch { expected: 1, found: 2 })
        ));
        assert!(matches!(
            BinaryTable::from_array(names(&["a", "a"]), data.view()),
            Err(AprioriError::DuplicateItem(_))
        ));
    }

    #[test]
    fn resolves_names() {
        let data = array![[1, 0, 1]];
        let table = BinaryTable::from_array(names(&["c", "a", "b"]), data.view()).unwrap();
        assert_eq!(table.itemset(&["b", "c"]).unwrap().items(), &[0, 2]);
        assert!(matches!(
            table.itemset(&["z"]),
            Err(AprioriError::UnknownItem(name)) if name == "z"
        ));
    }
}
