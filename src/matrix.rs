use nalgebra::SMatrix;
use thiserror::Error;

use crate::{Criterion, NUM_CRITERIA};

/// Products of mirrored cells must be within this distance of 1 to satisfy
/// the reciprocal property.
const RECIPROCAL_TOLERANCE: f64 = 1e-6;

/// The Saaty preference scale used to compare two criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preference {
    Equal,
    Moderate,
    Strong,
    VeryStrong,
    Extreme,
}

impl Preference {
    pub fn value(&self) -> f64 {
        match self {
            Preference::Equal => 1.0,
            Preference::Moderate => 3.0,
            Preference::Strong => 5.0,
            Preference::VeryStrong => 7.0,
            Preference::Extreme => 9.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("comparison matrix must have one row and column per criterion, got {rows}x{cols}")]
    Dimension { rows: usize, cols: usize },
    #[error("diagonal cells are fixed at 1")]
    DiagonalEdit,
    #[error("diagonal cell ({0}, {0}) must be 1")]
    DiagonalValue(usize),
    #[error("comparison value must be positive and finite, got {0}")]
    InvalidValue(f64),
    #[error("cells ({row}, {col}) and ({col}, {row}) violate the reciprocal property")]
    ReciprocalViolation { row: usize, col: usize },
}

/// Pairwise comparison matrix over the five criteria. Cell (i, j) holds how
/// much more important criterion i is than criterion j.
///
/// The diagonal is fixed at 1 and every edit writes the reciprocal into the
/// mirrored cell, so `cells[(j, i)] == 1 / cells[(i, j)]` holds at all times.
/// A 0 marks a pair the user has not compared yet; weight extraction treats
/// it as "equal importance".
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonMatrix(SMatrix<f64, NUM_CRITERIA, NUM_CRITERIA>);

impl ComparisonMatrix {
    /// Matrix with all off-diagonal pairs unset.
    pub fn new() -> Self {
        Self(SMatrix::identity())
    }

    pub fn get(&self, row: Criterion, col: Criterion) -> f64 {
        self.0[(row as usize, col as usize)]
    }

    /// Write `value` at (row, col) and its reciprocal at (col, row). A value
    /// of 0 clears both cells back to unset.
    pub fn set(&mut self, row: Criterion, col: Criterion, value: f64) -> Result<(), MatrixError> {
        if row == col {
            return Err(MatrixError::DiagonalEdit);
        }
        if value == 0.0 {
            return self.clear(row, col);
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(MatrixError::InvalidValue(value));
        }
        self.0[(row as usize, col as usize)] = value;
        self.0[(col as usize, row as usize)] = value.recip();
        Ok(())
    }

    pub fn set_preference(
        &mut self,
        row: Criterion,
        col: Criterion,
        preference: Preference,
    ) -> Result<(), MatrixError> {
        self.set(row, col, preference.value())
    }

    /// Reset the pair (row, col) to unset.
    pub fn clear(&mut self, row: Criterion, col: Criterion) -> Result<(), MatrixError> {
        if row == col {
            return Err(MatrixError::DiagonalEdit);
        }
        self.0[(row as usize, col as usize)] = 0.0;
        self.0[(col as usize, row as usize)] = 0.0;
        Ok(())
    }

    /// Build a matrix from complete rows, rejecting malformed input up front:
    /// wrong dimensions, a diagonal off 1, negative or non-finite cells, and
    /// mirrored pairs that are not reciprocals of each other (a pair may also
    /// be unset, with 0 on both sides).
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let dimension_of = |rows: &[R]| MatrixError::Dimension {
            rows: rows.len(),
            cols: rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0),
        };
        if rows.len() != NUM_CRITERIA {
            return Err(dimension_of(rows));
        }
        if rows.iter().any(|row| row.as_ref().len() != NUM_CRITERIA) {
            return Err(dimension_of(rows));
        }

        let mut cells = SMatrix::<f64, NUM_CRITERIA, NUM_CRITERIA>::zeros();
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidValue(value));
                }
                cells[(i, j)] = value;
            }
        }
        for i in 0..NUM_CRITERIA {
            if (cells[(i, i)] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(MatrixError::DiagonalValue(i));
            }
            for j in (i + 1)..NUM_CRITERIA {
                let (upper, lower) = (cells[(i, j)], cells[(j, i)]);
                let reciprocal = match (upper == 0.0, lower == 0.0) {
                    (true, true) => continue,
                    (false, false) => (upper * lower - 1.0).abs() <= RECIPROCAL_TOLERANCE,
                    _ => false,
                };
                if !reciprocal {
                    return Err(MatrixError::ReciprocalViolation { row: i, col: j });
                }
            }
        }
        Ok(Self(cells))
    }

    pub(crate) fn cells(&self) -> &SMatrix<f64, NUM_CRITERIA, NUM_CRITERIA> {
        &self.0
    }
}

impl Default for ComparisonMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{ComparisonMatrix, MatrixError, Preference};
    use crate::num::assert_within;
    use crate::Criterion::*;

    #[test]
    fn edits_write_the_reciprocal_cell() {
        let mut matrix = ComparisonMatrix::new();
        matrix.set(Memory, Storage, 3.0).unwrap();
        assert_eq!(matrix.get(Memory, Storage), 3.0);
        assert_within(matrix.get(Storage, Memory), 1.0 / 3.0, 1e-12);

        matrix.set(Memory, Storage, 5.0).unwrap();
        assert_within(matrix.get(Storage, Memory), 0.2, 1e-12);
    }

    #[test]
    fn new_matrix_is_identity_like() {
        let matrix = ComparisonMatrix::new();
        for row in crate::Criterion::ALL {
            for col in crate::Criterion::ALL {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(matrix.get(row, col), expected);
            }
        }
    }

    #[test]
    fn diagonal_edits_rejected() {
        let mut matrix = ComparisonMatrix::new();
        assert_eq!(matrix.set(Price, Price, 3.0), Err(MatrixError::DiagonalEdit));
        assert_eq!(matrix.clear(Price, Price), Err(MatrixError::DiagonalEdit));
    }

    #[test]
    fn non_positive_values_rejected() {
        let mut matrix = ComparisonMatrix::new();
        assert_eq!(
            matrix.set(Memory, Storage, -3.0),
            Err(MatrixError::InvalidValue(-3.0))
        );
        assert!(matrix.set(Memory, Storage, f64::NAN).is_err());
        assert!(matrix.set(Memory, Storage, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_clears_both_cells() {
        let mut matrix = ComparisonMatrix::new();
        matrix.set(Memory, Storage, 7.0).unwrap();
        matrix.set(Memory, Storage, 0.0).unwrap();
        assert_eq!(matrix.get(Memory, Storage), 0.0);
        assert_eq!(matrix.get(Storage, Memory), 0.0);
    }

    #[test]
    fn preference_scale_values() {
        let mut matrix = ComparisonMatrix::new();
        matrix
            .set_preference(CpuFrequency, BrandValue, Preference::Extreme)
            .unwrap();
        assert_eq!(matrix.get(CpuFrequency, BrandValue), 9.0);
        assert_within(matrix.get(BrandValue, CpuFrequency), 1.0 / 9.0, 1e-12);
    }

    #[test]
    fn from_rows_accepts_a_valid_matrix() {
        let rows = [
            [1.0, 3.0, 0.0, 0.0, 0.0],
            [1.0 / 3.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 1.0],
        ];
        let matrix = ComparisonMatrix::from_rows(&rows).unwrap();
        assert_eq!(matrix.get(Memory, Storage), 3.0);
    }

    #[test]
    fn from_rows_rejects_wrong_dimensions() {
        let rows = vec![vec![1.0; 5]; 4];
        assert_eq!(
            ComparisonMatrix::from_rows(&rows),
            Err(MatrixError::Dimension { rows: 4, cols: 5 })
        );

        let ragged = vec![vec![1.0; 5], vec![1.0; 5], vec![1.0; 6], vec![1.0; 5], vec![1.0; 5]];
        assert_eq!(
            ComparisonMatrix::from_rows(&ragged),
            Err(MatrixError::Dimension { rows: 5, cols: 6 })
        );
    }

    #[test]
    fn from_rows_rejects_reciprocal_violations() {
        let mut rows = [[0.0; 5]; 5];
        for i in 0..5 {
            rows[i][i] = 1.0;
        }
        rows[0][1] = 3.0;
        rows[1][0] = 0.5;
        assert_eq!(
            ComparisonMatrix::from_rows(&rows),
            Err(MatrixError::ReciprocalViolation { row: 0, col: 1 })
        );

        // One side of the pair set, the other unset.
        rows[1][0] = 0.0;
        assert_eq!(
            ComparisonMatrix::from_rows(&rows),
            Err(MatrixError::ReciprocalViolation { row: 0, col: 1 })
        );
    }

    #[test]
    fn from_rows_rejects_bad_diagonal() {
        let mut rows = [[0.0; 5]; 5];
        for i in 0..5 {
            rows[i][i] = 1.0;
        }
        rows[2][2] = 2.0;
        assert_eq!(
            ComparisonMatrix::from_rows(&rows),
            Err(MatrixError::DiagonalValue(2))
        );
    }
}
