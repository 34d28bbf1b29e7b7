use tracing::trace;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};
use crate::matrix::rref_config::RrefConfig;
use crate::utils::{is_unit, is_zero};

impl<T: RealElement> MatrixReal<T> {
    /// Looks for a pivot in column `col` among rows `row..rows` and, when one
    /// is found, moves it to `row` and clears the column around it.
    ///
    /// A `1` or `-1` entry wins immediately. Otherwise the fallback is the
    /// last nonzero row seen, except that once `row` itself holds a nonzero
    /// entry it stays the fallback.
    ///
    /// Returns `false` and leaves the matrix untouched when the column has no
    /// nonzero entry at or below `row`.
    pub fn find_pivot(&mut self, col: usize, row: usize) -> bool {
        self.find_pivot_with(col, row, &RrefConfig::default())
    }

    pub fn find_pivot_with(&mut self, col: usize, row: usize, config: &RrefConfig) -> bool {
        assert!(col < self.cols, "Violation of: column index out of range");
        assert!(row <= self.rows, "Violation of: row index out of range");

        let eps = config.eps::<T>();
        let mut unit_pivot = None;
        let mut fallback = None;

        for r in row..self.rows {
            let point = self.at(r, col);
            if is_unit(point, eps) {
                unit_pivot = Some(r);
                break;
            } else if !is_zero(point, eps) && fallback != Some(row) {
                fallback = Some(r);
            }
        }

        match unit_pivot.or(fallback) {
            Some(pivot) => {
                trace!(
                    row,
                    col,
                    pivot,
                    unit = unit_pivot.is_some(),
                    "promoting pivot"
                );
                self.pivot_math(row, pivot, col, config);
                true
            }
            None => false,
        }
    }

    // Brings the pivot to `row`, normalizes it to 1, then for every other row
    // scales it to 1 in `col` and subtracts the pivot row.
    fn pivot_math(&mut self, row: usize, pivot: usize, col: usize, config: &RrefConfig) {
        let eps = config.eps::<T>();

        if pivot != row {
            trace!(from = pivot, to = row, "swapping rows");
            self.swap_rows(pivot, row);
        }
        self.scale_row(row, col, eps);

        for i in 0..self.rows {
            if i != row {
                self.scale_row(i, col, eps);
                self.elim_row(i, row, col, eps, config.elim_check);
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
