use crate::config::MiningConfig;
use crate::fp::transactions_from_matrix;
use crate::pipeline::mine_transactions;
use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PyItemset = (Vec<usize>, f64);
type PyRule = (Vec<usize>, Vec<usize>, f64);

fn to_py_err(err: crate::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyfunction]
#[pyo3(name = "fp_growth", signature = (transactions, min_support = 0.2))]
fn fp_growth_py(transactions: PyReadonlyArray2<'_, i32>, min_support: f64) -> PyResult<Vec<PyItemset>> {
    let transactions = transactions_from_matrix(transactions.as_array());
    // Only the itemsets are returned.
    let config = MiningConfig::new(min_support, 1.0);
    let result = mine_transactions(&transactions, &config).map_err(to_py_err)?;

    Ok(result
        .frequent_itemsets
        .into_iter()
        .map(|f| (f.itemset.into_vec(), f.support))
        .collect())
}

#[pyfunction]
#[pyo3(name = "association_rules", signature = (transactions, min_support = 0.2, min_confidence = 0.5))]
fn association_rules_py(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<Vec<PyRule>> {
    let transactions = transactions_from_matrix(transactions.as_array());
    let config = MiningConfig::new(min_support, min_confidence);
    let result = mine_transactions(&transactions, &config).map_err(to_py_err)?;

    Ok(result
        .rules
        .into_iter()
        .map(|rule| (rule.antecedent.into_vec(), rule.consequent.into_vec(), rule.confidence))
        .collect())
}

#[pymodule]
fn fprules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules_py, m)?)?;
    Ok(())
}
