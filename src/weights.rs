use nalgebra::{SMatrix, SVector};
use thiserror::Error;

use crate::matrix::ComparisonMatrix;
use crate::num::Normalized;
use crate::{Criterion, NUM_CRITERIA};

const MAX_ITERATIONS: usize = 500;
const CONVERGENCE_TOLERANCE: f64 = 1e-12;
const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("expected {expected} weights, one per criterion, got {actual}")]
    Dimension { expected: usize, actual: usize },
    #[error("weight for {criterion:?} must be non-negative and finite, got {value}")]
    Entry { criterion: Criterion, value: f64 },
    #[error("weights must sum to 1, got {0}")]
    NotNormalized(f64),
}

/// Criterion weights summing to 1, aligned to the [`Criterion`] ordering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights([Normalized; NUM_CRITERIA]);

impl Weights {
    /// Equal importance for every criterion.
    pub fn uniform() -> Self {
        let share = 1.0 / NUM_CRITERIA as f64;
        Self([Normalized::new(share).unwrap(); NUM_CRITERIA])
    }

    /// Derive weights from a pairwise comparison matrix as the normalized
    /// dominant eigenvector, computed by power iteration. Unset cells (0)
    /// are treated as "equal importance" (1). The matrix is all-positive
    /// after that substitution, so the iteration converges to an eigenvector
    /// with positive components; if it somehow fails to, fall back to
    /// uniform weights rather than produce NaN.
    pub fn extract(matrix: &ComparisonMatrix) -> Self {
        let cells = matrix.cells().map(|v| if v == 0.0 { 1.0 } else { v });
        match dominant_eigenvector(&cells) {
            Some(vector) => Self(std::array::from_fn(|i| {
                Normalized::clamp(vector[i], 0.0, 1.0).unwrap()
            })),
            None => Self::uniform(),
        }
    }

    /// Validated boundary for caller-supplied weight vectors.
    pub fn from_slice(values: &[f64]) -> Result<Self, WeightError> {
        if values.len() != NUM_CRITERIA {
            return Err(WeightError::Dimension {
                expected: NUM_CRITERIA,
                actual: values.len(),
            });
        }
        for (&criterion, &value) in Criterion::ALL.iter().zip(values) {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightError::Entry { criterion, value });
            }
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightError::NotNormalized(sum));
        }
        Ok(Self(std::array::from_fn(|i| {
            Normalized::clamp(values[i], 0.0, 1.0).unwrap()
        })))
    }

    pub fn get(&self, criterion: Criterion) -> Normalized {
        self.0[criterion as usize]
    }

    pub fn as_array(&self) -> [f64; NUM_CRITERIA] {
        std::array::from_fn(|i| self.0[i].as_f64())
    }
}

/// Power iteration for the dominant eigenvector, sum-normalized so the
/// components add up to 1. Returns `None` when an iterate degenerates to a
/// zero or non-finite sum, or when the iteration does not settle.
fn dominant_eigenvector(
    cells: &SMatrix<f64, NUM_CRITERIA, NUM_CRITERIA>,
) -> Option<[f64; NUM_CRITERIA]> {
    let mut vector = SVector::<f64, NUM_CRITERIA>::repeat(1.0 / NUM_CRITERIA as f64);
    for _ in 0..MAX_ITERATIONS {
        let next = (cells * vector).abs();
        let sum = next.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return None;
        }
        let next = next / sum;
        let delta = (next - vector).abs().max();
        vector = next;
        if delta < CONVERGENCE_TOLERANCE {
            return Some(std::array::from_fn(|i| vector[i]));
        }
    }
    None
}
