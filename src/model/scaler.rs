//! Standard-score scaling for the three continuous columns.
//!
//! Two paths exist. [`ScalingMode::RefitPerRequest`] reproduces the serving
//! behavior of the original pipeline, which refit the scaler on every
//! single-row request: a one-row fit has zero standard deviation, the
//! divisor falls back to one, and all three scaled columns come out 0.0.
//! That path is kept as the default so predictions stay comparable with the
//! reference system. [`ScalingMode::FrozenStats`] applies the training-time
//! mean and standard deviation stored in the artifact, which is the correct
//! design once parity with the reference is no longer required.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::model::encoding::SCALED_COLUMNS;

/// Mean and standard deviation for the scaled columns, in scaler order
/// (tenure, TotalCharges, MonthlyCharges).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalerStats {
    /// Per-column mean of the reference distribution.
    pub mean: [f64; 3],
    /// Per-column population standard deviation of the reference
    /// distribution.
    pub std: [f64; 3],
}

impl ScalerStats {
    /// Fit over rows of (tenure, TotalCharges, MonthlyCharges).
    ///
    /// Uses the population standard deviation. An empty slice fits to a
    /// zero-mean, zero-deviation scaler.
    pub fn fit(rows: &[[f64; 3]]) -> Self {
        let count = rows.len() as f64;
        if rows.is_empty() {
            return Self {
                mean: [0.0; 3],
                std: [0.0; 3],
            };
        }
        let mut mean = [0.0; 3];
        for row in rows {
            for (sum, value) in mean.iter_mut().zip(row) {
                *sum += value;
            }
        }
        for sum in &mut mean {
            *sum /= count;
        }
        let mut variance = [0.0; 3];
        for row in rows {
            for column in 0..3 {
                let delta = row[column] - mean[column];
                variance[column] += delta * delta;
            }
        }
        let mut std = [0.0; 3];
        for column in 0..3 {
            std[column] = (variance[column] / count).sqrt();
        }
        Self { mean, std }
    }

    /// Standard-score a row: (x - mean) / std, with a unit divisor wherever
    /// the fitted deviation is zero.
    pub fn transform(&self, row: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for column in 0..3 {
            let divisor = if self.std[column] == 0.0 {
                1.0
            } else {
                self.std[column]
            };
            out[column] = (row[column] - self.mean[column]) / divisor;
        }
        out
    }
}

/// How the continuous columns are scaled before classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScalingMode {
    /// Refit on the single request row, matching the reference pipeline.
    /// Degenerate: the scaled columns always come out 0.0.
    #[default]
    RefitPerRequest,
    /// Apply the training-time statistics stored in the artifact.
    FrozenStats,
}

/// Scale the vector's continuous columns in place.
///
/// `frozen` is the training-time statistics from the artifact; it is only
/// consulted in [`ScalingMode::FrozenStats`].
pub fn scale_in_place(vector: &mut Array1<f64>, frozen: &ScalerStats, mode: ScalingMode) {
    let row = [
        vector[SCALED_COLUMNS[0]],
        vector[SCALED_COLUMNS[1]],
        vector[SCALED_COLUMNS[2]],
    ];
    let scaled = match mode {
        ScalingMode::RefitPerRequest => ScalerStats::fit(&[row]).transform(row),
        ScalingMode::FrozenStats => frozen.transform(row),
    };
    for (column, value) in SCALED_COLUMNS.iter().zip(scaled) {
        vector[*column] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn frozen() -> ScalerStats {
        ScalerStats {
            mean: [32.0, 2280.0, 64.0],
            std: [24.0, 2266.0, 30.0],
        }
    }

    #[test]
    fn single_row_refit_zeroes_every_scaled_column() {
        let mut vector = Array1::from(vec![
            1.0, 0.0, 0.0, 12.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 3.0, 70.5, 840.0,
        ]);
        scale_in_place(&mut vector, &frozen(), ScalingMode::RefitPerRequest);
        assert_eq!(vector[3], 0.0);
        assert_eq!(vector[11], 0.0);
        assert_eq!(vector[12], 0.0);
        // Categorical columns are untouched.
        assert_eq!(vector[0], 1.0);
        assert_eq!(vector[10], 3.0);
    }

    #[test]
    fn frozen_stats_produce_real_standard_scores() {
        let mut vector = Array1::from(vec![
            1.0, 0.0, 0.0, 12.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 3.0, 70.5, 840.0,
        ]);
        scale_in_place(&mut vector, &frozen(), ScalingMode::FrozenStats);
        let stats = frozen();
        assert!((vector[3] - (12.0 - stats.mean[0]) / stats.std[0]).abs() < 1e-12);
        assert!((vector[12] - (840.0 - stats.mean[1]) / stats.std[1]).abs() < 1e-12);
        assert!((vector[11] - (70.5 - stats.mean[2]) / stats.std[2]).abs() < 1e-12);
    }

    #[test]
    fn fit_computes_population_statistics() {
        let stats = ScalerStats::fit(&[[1.0, 10.0, 100.0], [3.0, 30.0, 300.0]]);
        assert_eq!(stats.mean, [2.0, 20.0, 200.0]);
        assert_eq!(stats.std, [1.0, 10.0, 100.0]);
    }

    #[test]
    fn zero_deviation_falls_back_to_unit_divisor() {
        let stats = ScalerStats::fit(&[[5.0, 5.0, 5.0]]);
        assert_eq!(stats.std, [0.0; 3]);
        assert_eq!(stats.transform([5.0, 5.0, 5.0]), [0.0; 3]);
        assert_eq!(stats.transform([7.0, 5.0, 4.0]), [2.0, 0.0, -1.0]);
    }
}
