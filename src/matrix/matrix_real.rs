use itertools::Itertools;
use num_traits::Float;

use crate::matrix::matrix::Matrix;
use std::fmt;

pub trait RealElement:  // Avoid repeating all the traits
    Float
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
{
}

impl<T> RealElement for T where
    T: Float + std::fmt::Display + std::fmt::Debug + Send + Sync
{
}

/// Dense row-major matrix of floats, at least one row and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReal<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: RealElement> MatrixReal<T> {
    pub fn try_from_list(lines: Vec<Vec<T>>) -> Result<Self, String> {
        let rows = lines.len();
        if rows == 0 {
            return Err("Zero dimensional matrix".into());
        }
        let cols = lines[0].len();
        if cols == 0 {
            return Err("Zero dimensional matrix".into());
        }
        if lines.iter().any(|line| line.len() != cols) {
            return Err("Rows have different lengths".into());
        }

        Ok(MatrixReal {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: RealElement> Matrix<T> for MatrixReal<T> {
    /// Panics on an empty or ragged list, see `try_from_list`.
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        match MatrixReal::try_from_list(lines) {
            Ok(matrix) => matrix,
            Err(error) => panic!("Violation of: {}", error),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    // Exact shape check: leading entries are 1, move strictly right, are the
    // only nonzero entry of their column, and zero rows come last.
    fn is_rref(&self) -> bool {
        let mut lead = None;

        for i in 0..self.rows {
            let row = self.row(i);
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if self.row(r).iter().any(|x| !x.is_zero()) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if row[pivot_col] != T::one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn identity(n: usize) -> MatrixReal<T> {
        assert!(n > 0, "Violation of: Zero dimensional matrix");
        MatrixReal {
            rows: n,
            cols: n,
            cells: (0..n)
                .cartesian_product(0..n)
                .map(|(i, j)| if i == j { T::one() } else { T::zero() })
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixReal<T> {
        MatrixReal {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

// One line per row: `| 1 0 0.5 |`
impl<T: RealElement> fmt::Display for MatrixReal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .cells
            .chunks(self.cols)
            .map(|line| format!("| {} |", line.iter().join(" ")))
            .join("\n");
        write!(f, "{}", lines)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_real() {
        let m = MatrixReal::<f64>::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(m.at(1, 0), 4.0);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert!(!m.is_square());
        assert_eq!(
            m.to_list(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
        assert_eq!(
            m.transpose().to_list(),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );

        assert_eq!(
            MatrixReal::<f32>::identity(3).to_list(),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0]
            ]
        );
    }

    #[test]
    fn test_try_from_list() {
        assert_eq!(
            MatrixReal::<f64>::try_from_list(vec![]).unwrap_err(),
            "Zero dimensional matrix"
        );
        assert_eq!(
            MatrixReal::<f64>::try_from_list(vec![vec![], vec![]]).unwrap_err(),
            "Zero dimensional matrix"
        );
        assert_eq!(
            MatrixReal::<f64>::try_from_list(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            "Rows have different lengths"
        );
        assert!(MatrixReal::<f64>::try_from_list(vec![vec![0.0]]).is_ok());
    }

    #[test]
    #[should_panic(expected = "Violation of: Zero dimensional matrix")]
    fn test_from_list_empty() {
        MatrixReal::<f64>::from_list(vec![]);
    }

    #[test]
    fn test_is_rref() {
        let m = MatrixReal::<f64>::from_list(vec![
            vec![1.0, 2.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, -1.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ]);
        assert!(m.is_rref());
        assert!(MatrixReal::<f64>::identity(4).is_rref());

        // leading entry is not 1
        let m = MatrixReal::<f64>::from_list(vec![vec![2.0, 0.0], vec![0.0, 1.0]]);
        assert!(!m.is_rref());

        // pivot column not cleared
        let m = MatrixReal::<f64>::from_list(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        assert!(!m.is_rref());

        // zero row above a nonzero row
        let m = MatrixReal::<f64>::from_list(vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
        assert!(!m.is_rref());

        // leading entries out of order
        let m = MatrixReal::<f64>::from_list(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert!(!m.is_rref());
    }

    #[test]
    fn test_display() {
        let m = MatrixReal::<f64>::from_list(vec![vec![2.0, 0.0, 1.0], vec![0.0, 0.5, -3.0]]);
        assert_eq!(m.to_string(), "| 2 0 1 |\n| 0 0.5 -3 |");
    }
}
