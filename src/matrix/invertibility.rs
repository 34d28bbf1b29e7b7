use rayon::prelude::*;
use tracing::debug;

use crate::matrix::matrix_real::{MatrixReal, RealElement};
use crate::matrix::rref_config::RrefConfig;
use crate::utils::{is_one, is_zero};

impl<T: RealElement> MatrixReal<T> {
    /// `1` on the diagonal, `0` everywhere else, over the full row length.
    pub fn is_standard_basis(&self) -> bool {
        self.is_standard_basis_with(&RrefConfig::default())
    }

    pub fn is_standard_basis_with(&self, config: &RrefConfig) -> bool {
        let eps = config.eps::<T>();
        self.cells
            .chunks(self.cols)
            .enumerate()
            .all(|(row, line)| {
                line.iter().enumerate().all(|(col, &x)| {
                    if row == col {
                        is_one(x, eps)
                    } else {
                        is_zero(x, eps)
                    }
                })
            })
    }

    /// Non-square matrices are never invertible and are not reduced.
    pub fn is_invertible(&self) -> bool {
        self.is_invertible_with(&RrefConfig::default())
    }

    pub fn is_invertible_with(&self, config: &RrefConfig) -> bool {
        assert!(
            self.rows > 0 && self.cols > 0,
            "Violation of: Zero dimensional matrix"
        );

        let invertible =
            self.is_square() && self.compute_rref_with(config).is_standard_basis_with(config);
        debug!(
            rows = self.rows,
            cols = self.cols,
            invertible,
            "invertibility checked"
        );
        invertible
    }
}

/// Checks every matrix on the rayon pool; each check works on its own copy.
pub fn is_invertible_many<T: RealElement>(
    matrices: &[MatrixReal<T>],
    config: &RrefConfig,
) -> Vec<bool> {
    matrices
        .par_iter()
        .map(|m| m.is_invertible_with(config))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
