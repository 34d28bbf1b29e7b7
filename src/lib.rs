use pyo3::prelude::*;

pub mod matrix {
    pub mod invertibility;
    pub mod matrix;
    pub mod matrix_real;
    pub mod pivot;
    pub mod row_ops;
    pub mod rref;
    pub mod rref_config;
}
pub mod vector {
    pub mod dot_product;
}

pub mod python;
pub mod utils;

pub use matrix::invertibility::is_invertible_many;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_real::{MatrixReal, RealElement};
pub use matrix::rref::{PivotPosition, Rref};
pub use matrix::rref_config::{ElimCheck, RrefConfig};
pub use vector::dot_product::dot_product;

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::rref_config::RrefConfig>()?;
    m.add_class::<matrix::rref_config::ElimCheck>()?;
    m.add_function(wrap_pyfunction!(vector::dot_product::py_dot_product, m)?)?;
    m.add_function(wrap_pyfunction!(python::compute_rref, m)?)?;
    m.add_function(wrap_pyfunction!(python::rank, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_invertible, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_invertible_many, m)?)?;
    m.add_function(wrap_pyfunction!(python::is_standard_basis, m)?)?;
    m.add_function(wrap_pyfunction!(python::find_pivot, m)?)?;
    m.add_function(wrap_pyfunction!(python::format_matrix, m)?)?;
    Ok(())
}
