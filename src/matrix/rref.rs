use tracing::debug;

use crate::matrix::matrix_real::{MatrixReal, RealElement};
use crate::matrix::rref_config::RrefConfig;

/// Where a pivot was fixed during the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotPosition {
    pub row: usize,
    pub col: usize,
}

/// Result of a reduction: the reduced working copy and its pivots in sweep
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rref<T> {
    pub matrix: MatrixReal<T>,
    pub pivots: Vec<PivotPosition>,
}

impl<T> Rref<T> {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

impl<T: RealElement> MatrixReal<T> {
    pub fn compute_rref(&self) -> MatrixReal<T> {
        self.compute_rref_with(&RrefConfig::default())
    }

    pub fn compute_rref_with(&self, config: &RrefConfig) -> MatrixReal<T> {
        self.reduce_with(config).matrix
    }

    /// Reduces a copy of `self`; `self` is never modified.
    ///
    /// Columns are swept once, left to right. Each column where a pivot is
    /// found moves the target row down by one. Once every row holds a pivot
    /// the remaining columns are still visited, but their search range is
    /// empty.
    ///
    /// The result is row-equivalent to `self` but not always in reduced
    /// echelon form: rows other than the pivot row are rescaled before the
    /// subtraction, which can turn an earlier leading 1 into another value.
    pub fn reduce_with(&self, config: &RrefConfig) -> Rref<T> {
        assert!(
            self.rows > 0 && self.cols > 0,
            "Violation of: Zero dimensional matrix"
        );

        let mut rref = self.clone();
        let mut pivots = vec![];
        let mut pos_r = 0;

        for pos_c in 0..rref.cols {
            if rref.find_pivot_with(pos_c, pos_r, config) {
                pivots.push(PivotPosition {
                    row: pos_r,
                    col: pos_c,
                });
                pos_r += 1;
            }
        }

        debug!(
            rows = rref.rows,
            cols = rref.cols,
            rank = pivots.len(),
            "reduction finished"
        );

        Rref {
            matrix: rref,
            pivots,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
