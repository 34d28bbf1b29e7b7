use crate::matrix::invertibility;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::MatrixReal;
use crate::matrix::rref_config::RrefConfig;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

// Python callers pass nested lists; malformed input is a ValueError rather
// than a panic inside the interpreter.
fn to_matrix(lines: Vec<Vec<f64>>) -> PyResult<MatrixReal<f64>> {
    match MatrixReal::try_from_list(lines) {
        Ok(matrix) => Ok(matrix),
        Err(error) => Err(PyValueError::new_err(error)),
    }
}

#[pyfunction]
#[pyo3(signature = (matrix, config=None))]
pub fn compute_rref(
    matrix: Vec<Vec<f64>>,
    config: Option<RrefConfig>,
) -> PyResult<Vec<Vec<f64>>> {
    let matrix = to_matrix(matrix)?;
    Ok(matrix
        .compute_rref_with(&config.unwrap_or_default())
        .to_list())
}

/// Number of pivots found by the reduction.
#[pyfunction]
#[pyo3(signature = (matrix, config=None))]
pub fn rank(matrix: Vec<Vec<f64>>, config: Option<RrefConfig>) -> PyResult<usize> {
    let matrix = to_matrix(matrix)?;
    Ok(matrix.reduce_with(&config.unwrap_or_default()).rank())
}

#[pyfunction]
#[pyo3(signature = (matrix, config=None))]
pub fn is_invertible(matrix: Vec<Vec<f64>>, config: Option<RrefConfig>) -> PyResult<bool> {
    let matrix = to_matrix(matrix)?;
    Ok(matrix.is_invertible_with(&config.unwrap_or_default()))
}

#[pyfunction]
#[pyo3(signature = (matrices, config=None))]
pub fn is_invertible_many(
    py: Python,
    matrices: Vec<Vec<Vec<f64>>>,
    config: Option<RrefConfig>,
) -> PyResult<Vec<bool>> {
    let matrices = matrices
        .into_iter()
        .map(to_matrix)
        .collect::<PyResult<Vec<_>>>()?;
    let config = config.unwrap_or_default();
    Ok(py.allow_threads(|| invertibility::is_invertible_many(&matrices, &config)))
}

#[pyfunction]
#[pyo3(signature = (matrix, config=None))]
pub fn is_standard_basis(matrix: Vec<Vec<f64>>, config: Option<RrefConfig>) -> PyResult<bool> {
    let matrix = to_matrix(matrix)?;
    Ok(matrix.is_standard_basis_with(&config.unwrap_or_default()))
}

/// Python lists are copied on the way in, so the updated matrix is returned
/// next to the flag.
#[pyfunction]
#[pyo3(signature = (matrix, col, row, config=None))]
pub fn find_pivot(
    matrix: Vec<Vec<f64>>,
    col: usize,
    row: usize,
    config: Option<RrefConfig>,
) -> PyResult<(bool, Vec<Vec<f64>>)> {
    let mut matrix = to_matrix(matrix)?;
    if col >= matrix.cols || row > matrix.rows {
        return Err(PyValueError::new_err("Pivot position out of range"));
    }
    let found = matrix.find_pivot_with(col, row, &config.unwrap_or_default());
    Ok((found, matrix.to_list()))
}

#[pyfunction]
pub fn format_matrix(matrix: Vec<Vec<f64>>) -> PyResult<String> {
    Ok(to_matrix(matrix)?.to_string())
}
