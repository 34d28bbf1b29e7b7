use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_real::{MatrixReal, RealElement};
use crate::matrix::rref_config::ElimCheck;
use crate::utils::is_zero;

// Elementary row operations used by the pivot step. All of them mutate the
// matrix in place; the reduction calls them on its own working copy.

impl<T: RealElement> MatrixReal<T> {
    pub(crate) fn swap_rows(&mut self, row1: usize, row2: usize) {
        if row1 == row2 {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(row1 * self.cols + k, row2 * self.cols + k);
        }
    }

    /// Makes `self[row][col]` exactly 1: negate the row if the entry is
    /// negative, then divide the row by the entry. No-op on a zero entry.
    pub(crate) fn scale_row(&mut self, row: usize, col: usize, eps: T) {
        let mut digit = self.at(row, col);
        if is_zero(digit, eps) {
            return;
        }

        let line = self.row_mut(row);
        if digit < T::zero() {
            digit = -digit;
            line.iter_mut().for_each(|x| *x = -*x);
        }
        // x / x is exactly 1, x * (1 / x) is not always
        line.iter_mut().for_each(|x| *x = *x / digit);
    }

    /// Subtracts `pivot_row` from `row_to_elim` when the inspected entry of
    /// `row_to_elim` is nonzero.
    ///
    /// The subtraction is not scaled: it clears the pivot column only when
    /// `row_to_elim` was first scaled to 1 in that column by `scale_row`.
    pub(crate) fn elim_row(
        &mut self,
        row_to_elim: usize,
        pivot_row: usize,
        pivot_col: usize,
        eps: T,
        elim_check: ElimCheck,
    ) {
        let check_col = match elim_check {
            ElimCheck::PivotColumn => pivot_col,
            // pivot_row <= pivot_col during a sweep, direct callers can break it
            ElimCheck::PivotRowIndex => {
                assert!(
                    pivot_row < self.cols,
                    "Violation of: pivot row index used as a column is out of range"
                );
                pivot_row
            }
        };
        if is_zero(self.at(row_to_elim, check_col), eps) {
            return;
        }

        let pivot_slice = self.row(pivot_row).to_vec();
        self.row_mut(row_to_elim)
            .iter_mut()
            .zip(pivot_slice)
            .for_each(|(x, p)| *x = *x - p);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
