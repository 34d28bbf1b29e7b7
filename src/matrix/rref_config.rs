use num_traits::{cast, Float};
use pyo3::prelude::*;

/// Which entry of the target row `elim_row` inspects before subtracting the
/// pivot row.
#[pyclass(eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElimCheck {
    /// The target's entry in the pivot column.
    #[default]
    PivotColumn,
    /// The target's entry at the column equal to the pivot row index. This is
    /// the historical rule: it only agrees with `PivotColumn` while every
    /// column so far produced a pivot, and otherwise may subtract the pivot
    /// row from a row that is already zero in the pivot column.
    PivotRowIndex,
}

/// Comparison tolerance and elimination rule shared by the reduction,
/// the pivot search and the identity check.
///
/// The default compares exactly (`epsilon == 0.0`).
#[pyclass]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RrefConfig {
    #[pyo3(get, set)]
    pub epsilon: f64,
    #[pyo3(get, set)]
    pub elim_check: ElimCheck,
}

impl RrefConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        assert!(
            epsilon >= 0.0 && epsilon.is_finite(),
            "Violation of: epsilon is a finite non-negative number"
        );
        self.epsilon = epsilon;
        self
    }

    pub fn with_elim_check(mut self, elim_check: ElimCheck) -> Self {
        self.elim_check = elim_check;
        self
    }

    /// Tolerance in the matrix element type.
    pub fn eps<T: Float>(&self) -> T {
        cast(self.epsilon).unwrap_or_else(T::zero)
    }
}

#[pymethods]
impl RrefConfig {
    #[new]
    #[pyo3(signature = (epsilon=0.0, elim_check=ElimCheck::PivotColumn))]
    pub fn new(epsilon: f64, elim_check: ElimCheck) -> PyResult<Self> {
        if !(epsilon >= 0.0 && epsilon.is_finite()) {
            return Err(pyo3::exceptions::PyValueError::new_err(
                "epsilon must be a finite non-negative number",
            ));
        }
        Ok(RrefConfig {
            epsilon,
            elim_check,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "RrefConfig(epsilon={}, elim_check={:?})",
            self.epsilon, self.elim_check
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rref_config() {
        let config = RrefConfig::default();
        assert_eq!(config.epsilon, 0.0);
        assert_eq!(config.elim_check, ElimCheck::PivotColumn);
        assert_eq!(config.eps::<f32>(), 0.0f32);

        let config = config
            .with_epsilon(1e-6)
            .with_elim_check(ElimCheck::PivotRowIndex);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.eps::<f64>(), 1e-6);
        assert_eq!(config.elim_check, ElimCheck::PivotRowIndex);
    }

    #[test]
    #[should_panic(expected = "epsilon is a finite non-negative number")]
    fn test_rref_config_negative_epsilon() {
        RrefConfig::default().with_epsilon(-1.0);
    }
}
