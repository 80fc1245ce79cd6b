//! Level-wise (Apriori) frequent itemset mining over a binary transaction
//! table, and confidence-pruned association rule generation.

pub mod apriori;
pub mod config;
pub mod error;
#[cfg(feature = "io")]
pub mod io;
pub mod report;
pub mod table;

pub use apriori::{
    generate_rules, mine, FrequentLevel, ItemSet, MiningResult, Rule, RuleSet, SupportEvaluator,
};
pub use config::{MiningConfig, ZeroSupportPolicy};
pub use error::{AprioriError, Result};
#[cfg(feature = "io")]
pub use io::load_csv;
pub use table::BinaryTable;

/// Frequent itemsets together with the rules derived from them.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub mining: MiningResult,
    pub rules: RuleSet,
}

pub fn analyze(table: &BinaryTable, config: &MiningConfig) -> Result<Analysis> {
    let mining = mine(table, config)?;
    let rules = generate_rules(table, &mining, config)?;
    Ok(Analysis { mining, rules })
}

#[cfg(feature = "python")]
mod python {
    use crate::{analyze, mine, AprioriError, BinaryTable, MiningConfig};
    use numpy::ndarray::{Array2, ArrayView2};
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    fn to_py_err(err: AprioriError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn table_from(transactions: ArrayView2<i32>) -> PyResult<BinaryTable> {
        let names = (0..transactions.ncols()).map(|idx| idx.to_string()).collect();
        BinaryTable::from_array(names, transactions).map_err(to_py_err)
    }

    #[pyfunction]
    fn mine_itemsets<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
    ) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
        let table = table_from(transactions.as_array())?;
        let config = MiningConfig {
            min_support,
            retain_candidates: false,
            ..MiningConfig::default()
        };
        let mining = py.allow_threads(|| mine(&table, &config)).map_err(to_py_err)?;

        let mut result = Vec::new();
        for level in mining.levels() {
            if level.is_empty() {
                continue;
            }

            let itemset_size = level.itemset_size;
            let mut data = Vec::with_capacity(level.len() * itemset_size);
            for itemset in level.iter_itemsets() {
                data.extend_from_slice(itemset);
            }

            let array = Array2::from_shape_vec((level.len(), itemset_size), data)
                .map_err(|_| PyValueError::new_err("Failed to create array"))?;
            result.push(array.into_pyarray_bound(py));
        }

        Ok(result)
    }

    #[pyfunction]
    fn association_rules(
        py: Python<'_>,
        transactions: PyReadonlyArray2<'_, i32>,
        min_support: f64,
        min_confidence: f64,
    ) -> PyResult<Vec<(Vec<usize>, Vec<usize>, f64)>> {
        let table = table_from(transactions.as_array())?;
        let config = MiningConfig::new(min_support, min_confidence).with_retain_candidates(false);
        let analysis = py.allow_threads(|| analyze(&table, &config)).map_err(to_py_err)?;

        Ok(analysis
            .rules
            .iter()
            .map(|(antecedent, consequent, confidence)| {
                (antecedent.items().to_vec(), consequent.items().to_vec(), confidence)
            })
            .collect())
    }

    #[pymodule]
    fn apriori(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(mine_itemsets, m)?)?;
        m.add_function(wrap_pyfunction!(association_rules, m)?)?;
        Ok(())
    }
}
