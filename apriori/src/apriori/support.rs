use super::itemset::ItemSet;
use crate::error::{AprioriError, Result};
use crate::table::BinaryTable;

/// Support queries against a non-empty table.
#[derive(Debug, Clone, Copy)]
pub struct SupportEvaluator<'a> {
    table: &'a BinaryTable,
    num_transactions: f64,
}

impl<'a> SupportEvaluator<'a> {
    pub fn new(table: &'a BinaryTable) -> Result<Self> {
        if table.num_transactions() == 0 {
            return Err(AprioriError::EmptyTable);
        }
        Ok(Self {
            table,
            num_transactions: table.num_transactions() as f64,
        })
    }

    pub fn table(&self) -> &'a BinaryTable {
        self.table
    }

    pub fn count(&self, itemset: &ItemSet) -> usize {
        self.table.count(itemset.items())
    }

    /// Fraction of transactions containing every item; zero for the empty set.
    pub fn support(&self, itemset: &ItemSet) -> f64 {
        self.support_of(itemset.items())
    }

    pub fn support_of(&self, items: &[usize]) -> f64 {
        if items.is_empty() {
            return 0.0;
        }
        self.table.count(items) as f64 / self.num_transactions
    }
}
