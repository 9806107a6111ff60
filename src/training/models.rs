//! Model trait and evaluation metrics

use crate::error::{Result, VoyageError};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Common interface of the classifiers in this crate
pub trait Model: Send + Sync {
    /// Fit the model to training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()>;

    /// Predict one class label per row
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>>;

    /// Whether `fit` has completed
    fn is_fitted(&self) -> bool;
}

/// Fraction of labels predicted correctly
pub fn accuracy_score(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(VoyageError::ShapeError {
            expected: format!("{} predictions", y_true.len()),
            actual: format!("{} predictions", y_pred.len()),
        });
    }
    if y_true.is_empty() {
        return Err(VoyageError::ValidationError(
            "accuracy is undefined for an empty test set".to_string(),
        ));
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Metrics for one held-out evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelMetrics {
    /// Held-out accuracy in [0, 1]
    pub accuracy: f64,
    /// Number of training samples
    pub n_train: usize,
    /// Number of test samples
    pub n_test: usize,
    /// Number of features
    pub n_features: usize,
    /// Wall time for fit + predict
    pub training_time_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_accuracy_score() {
        let y_true = array![1usize, 0, 1, 1, 0, 1, 0, 0];
        let y_pred = array![1usize, 0, 1, 0, 0, 1, 1, 0];
        let acc = accuracy_score(&y_true, &y_pred).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_bounds() {
        let y = array![3usize, 4, 5];
        assert_eq!(accuracy_score(&y, &y).unwrap(), 1.0);
        assert_eq!(accuracy_score(&y, &array![0usize, 0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_length_mismatch() {
        let err = accuracy_score(&array![1usize, 2], &array![1usize]).unwrap_err();
        assert!(matches!(err, VoyageError::ShapeError { .. }));
    }

    #[test]
    fn test_accuracy_empty() {
        let empty: Array1<usize> = Array1::from_vec(vec![]);
        assert!(accuracy_score(&empty, &empty).is_err());
    }
}
