//! K-Nearest Neighbors classifier
//!
//! Brute-force Euclidean search with a uniform majority vote.

use ndarray::{Array1, Array2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::models::Model;
use crate::error::{Result, VoyageError};

/// KNN configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KNNConfig {
    /// Number of neighbors
    pub n_neighbors: usize,
}

impl Default for KNNConfig {
    fn default() -> Self {
        Self { n_neighbors: 5 }
    }
}

/// K-Nearest Neighbors Classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KNNClassifier {
    config: KNNConfig,
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<usize>>,
    classes: Vec<usize>,
}

impl KNNClassifier {
    pub fn new(config: KNNConfig) -> Self {
        Self {
            config,
            x_train: None,
            y_train: None,
            classes: Vec::new(),
        }
    }

    /// Create with the given number of neighbors
    pub fn with_k(k: usize) -> Self {
        Self::new(KNNConfig { n_neighbors: k })
    }

    pub fn n_neighbors(&self) -> usize {
        self.config.n_neighbors
    }

    pub fn classes(&self) -> &[usize] {
        &self.classes
    }
}

impl Model for KNNClassifier {
    /// Stores the training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("y length = {}", x.nrows()),
                actual: format!("y length = {}", y.len()),
            });
        }
        let k = self.config.n_neighbors;
        if k == 0 {
            return Err(VoyageError::TrainingError("n_neighbors must be at least 1".to_string()));
        }
        if k > x.nrows() {
            return Err(VoyageError::TrainingError(format!(
                "Expected n_neighbors <= n_samples, but n_samples = {}, n_neighbors = {}",
                x.nrows(),
                k
            )));
        }

        let mut classes: Vec<usize> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        self.classes = classes;
        self.x_train = Some(x.to_owned());
        self.y_train = Some(y.to_owned());
        Ok(())
    }

    /// Predict class labels (parallelized over test samples)
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        let (x_train, y_train) = match (&self.x_train, &self.y_train) {
            (Some(x_train), Some(y_train)) => (x_train, y_train),
            _ => return Err(VoyageError::ModelNotFitted),
        };
        if x.ncols() != x_train.ncols() {
            return Err(VoyageError::ShapeError {
                expected: format!("{} features", x_train.ncols()),
                actual: format!("{} features", x.ncols()),
            });
        }

        let k = self.config.n_neighbors;
        let classes = &self.classes;

        let predictions: Vec<usize> = (0..x.nrows())
            .into_par_iter()
            .map(|i| {
                let row = x.row(i);
                let neighbors = find_k_nearest(row.iter().copied(), x_train, k);
                vote(&neighbors, y_train, classes)
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }

    fn is_fitted(&self) -> bool {
        self.x_train.is_some()
    }
}

/// Max-heap entry; index breaks distance ties so neighbor sets are deterministic
#[derive(PartialEq)]
struct Neighbor {
    dist: f64,
    index: usize,
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .partial_cmp(&other.dist)
            .unwrap_or(Ordering::Equal)
            .then(self.index.cmp(&other.index))
    }
}

/// Find k nearest training rows using a max-heap, O(n log k)
fn find_k_nearest(
    point: impl Iterator<Item = f64> + Clone,
    x_train: &Array2<f64>,
    k: usize,
) -> Vec<usize> {
    let mut heap: BinaryHeap<Neighbor> = BinaryHeap::with_capacity(k + 1);

    for (index, row) in x_train.rows().into_iter().enumerate() {
        let dist = squared_euclidean(point.clone(), row.iter().copied());
        let candidate = Neighbor { dist, index };
        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(top) = heap.peek() {
            if candidate < *top {
                heap.pop();
                heap.push(candidate);
            }
        }
    }

    heap.into_iter().map(|n| n.index).collect()
}

/// Ranking by squared distance is equivalent to ranking by distance
fn squared_euclidean(a: impl Iterator<Item = f64>, b: impl Iterator<Item = f64>) -> f64 {
    a.zip(b).map(|(ai, bi)| (ai - bi) * (ai - bi)).sum()
}

/// Uniform majority vote; ties go to the smallest label
fn vote(neighbors: &[usize], y_train: &Array1<usize>, classes: &[usize]) -> usize {
    let mut counts = vec![0usize; classes.len()];
    for &idx in neighbors {
        if let Ok(pos) = classes.binary_search(&y_train[idx]) {
            counts[pos] += 1;
        }
    }

    let mut best = 0;
    for (pos, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = pos;
        }
    }
    classes[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_classification_data() -> (Array2<f64>, Array1<usize>) {
        // Two well separated clusters
        let x = Array2::from_shape_vec((20, 2), vec![
            // Class 0 (low values)
            1.0, 1.0, 1.5, 1.5, 2.0, 2.0, 2.5, 2.5, 1.0, 2.0,
            1.5, 2.5, 2.0, 1.5, 2.5, 1.0, 1.2, 1.8, 1.8, 1.2,
            // Class 1 (high values)
            8.0, 8.0, 8.5, 8.5, 9.0, 9.0, 9.5, 9.5, 8.0, 9.0,
            8.5, 9.5, 9.0, 8.5, 9.5, 8.0, 8.2, 8.8, 8.8, 8.2,
        ]).unwrap();

        let y = Array1::from_vec(vec![
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ]);

        (x, y)
    }

    #[test]
    fn test_knn_classifier() {
        let (x, y) = create_classification_data();

        let mut knn = KNNClassifier::with_k(3);
        knn.fit(&x, &y).unwrap();

        let predictions = knn.predict(&x).unwrap();
        assert_eq!(predictions, y);
    }

    #[test]
    fn test_reports_configured_k() {
        let knn = KNNClassifier::with_k(7);
        assert_eq!(knn.n_neighbors(), 7);
    }

    #[test]
    fn test_k_larger_than_training_set() {
        let (x, y) = create_classification_data();
        let mut knn = KNNClassifier::with_k(21);
        let err = knn.fit(&x, &y).unwrap_err();
        assert!(matches!(err, VoyageError::TrainingError(_)));
    }

    #[test]
    fn test_predict_before_fit() {
        let knn = KNNClassifier::with_k(1);
        let x = Array2::zeros((1, 2));
        assert!(matches!(knn.predict(&x), Err(VoyageError::ModelNotFitted)));
    }

    #[test]
    fn test_tie_goes_to_smallest_label() {
        let x = Array2::from_shape_vec((2, 1), vec![0.0, 2.0]).unwrap();
        let y = Array1::from_vec(vec![4, 2]);
        let mut knn = KNNClassifier::with_k(2);
        knn.fit(&x, &y).unwrap();
        let query = Array2::from_shape_vec((1, 1), vec![1.0]).unwrap();
        assert_eq!(knn.predict(&query).unwrap()[0], 2);
    }

    #[test]
    fn test_k1_memorizes_training_set() {
        let (x, y) = create_classification_data();
        let mut knn = KNNClassifier::with_k(1);
        knn.fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&x).unwrap(), y);
        assert_eq!(knn.classes(), &[0, 1]);
    }
}
