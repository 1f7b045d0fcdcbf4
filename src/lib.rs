mod catalog;
pub mod matrix;
pub mod num;
mod weights;

pub use crate::catalog::catalog;
pub use crate::matrix::{ComparisonMatrix, MatrixError, Preference};
pub use crate::num::Normalized;
pub use crate::weights::{WeightError, Weights};

/// Number of criteria a phone is judged on.
pub const NUM_CRITERIA: usize = 5;

/// The fixed criteria ordering shared by the weight extractor's output and
/// the scorer's input. `Price` is the one cost criterion (lower is better);
/// the rest are benefit criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Criterion {
    Memory,
    Storage,
    CpuFrequency,
    Price,
    BrandValue,
}

impl Criterion {
    pub const ALL: [Self; NUM_CRITERIA] = [
        Self::Memory,
        Self::Storage,
        Self::CpuFrequency,
        Self::Price,
        Self::BrandValue,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Phone {
    pub name: String,
    /// RAM in GB.
    pub memory: f64,
    /// Storage in GB.
    pub storage: f64,
    /// CPU clock in GHz.
    pub cpu_frequency: f64,
    /// Price in USD.
    pub price: f64,
    /// Subjective brand score, 1 to 10.
    pub brand_value: f64,
}

impl Phone {
    fn value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Memory => self.memory,
            Criterion::Storage => self.storage,
            Criterion::CpuFrequency => self.cpu_frequency,
            Criterion::Price => self.price,
            Criterion::BrandValue => self.brand_value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ranked {
    pub phone: Phone,
    pub score: Normalized,
}

/// Score every phone against the weighted criteria and return them sorted by
/// descending score. The sort is stable, so exact ties keep their input
/// order. Inputs are untouched.
///
/// Each benefit criterion is normalized across phones by dividing raw values
/// by their sum. Price is inverted first via `(max - price) / max` so that
/// cheaper phones score higher, then normalized the same way. A column that
/// sums to 0 contributes an equal share to every phone instead of NaN.
pub fn rank(phones: &[Phone], weights: &Weights) -> Vec<Ranked> {
    if phones.is_empty() {
        return Vec::new();
    }
    let columns: [Vec<f64>; NUM_CRITERIA] =
        std::array::from_fn(|i| normalized_column(phones, Criterion::ALL[i]));
    let mut ranked: Vec<Ranked> = phones
        .iter()
        .enumerate()
        .map(|(i, phone)| {
            let score: f64 = Criterion::ALL
                .iter()
                .zip(&columns)
                .map(|(&criterion, column)| column[i] * weights.get(criterion).as_f64())
                .sum();
            Ranked {
                phone: phone.clone(),
                score: Normalized::clamp(score, 0.0, 1.0).unwrap(),
            }
        })
        .collect();
    ranked.sort_by_key(|r| std::cmp::Reverse(r.score));
    ranked
}

/// Per-phone share of one criterion, summing to 1 across phones.
fn normalized_column(phones: &[Phone], criterion: Criterion) -> Vec<f64> {
    let equal_shares = || vec![1.0 / phones.len() as f64; phones.len()];
    let raw: Vec<f64> = match criterion {
        Criterion::Price => {
            let max = phones.iter().map(|p| p.price).fold(0.0, f64::max);
            if max == 0.0 {
                return equal_shares();
            }
            phones.iter().map(|p| (max - p.price) / max).collect()
        }
        _ => phones.iter().map(|p| p.value(criterion)).collect(),
    };
    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return equal_shares();
    }
    raw.into_iter().map(|v| v / sum).collect()
}
