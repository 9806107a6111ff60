//! Random Forest classifier

use crate::error::{Result, VoyageError};
use super::decision_tree::DecisionTree;
use super::models::Model;
use ndarray::{Array1, Array2, Axis};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Random Forest model
///
/// Each tree is grown on a bootstrap sample and tries sqrt(n_features)
/// candidate features per split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    /// Individual trees
    trees: Vec<DecisionTree>,
    /// Number of trees
    pub n_estimators: usize,
    /// Maximum depth per tree
    pub max_depth: Option<usize>,
    /// Random state
    pub random_state: Option<u64>,
    /// Number of features
    n_features: usize,
    /// Classes seen during fit, sorted
    classes: Vec<usize>,
}

impl RandomForest {
    /// Create a new forest
    pub fn new(n_estimators: usize) -> Self {
        Self {
            trees: Vec::new(),
            n_estimators,
            max_depth: None,
            random_state: None,
            n_features: 0,
            classes: Vec::new(),
        }
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set random state
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Fitted trees
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}

/// Features tried per split: floor(sqrt(n_features)), at least one
fn split_features(n_features: usize) -> usize {
    ((n_features as f64).sqrt().floor() as usize).clamp(1, n_features.max(1))
}

impl Model for RandomForest {
    /// Fit the forest to training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples != y.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if self.n_estimators == 0 {
            return Err(VoyageError::TrainingError("n_estimators must be at least 1".to_string()));
        }
        if n_samples == 0 {
            return Err(VoyageError::ValidationError("Cannot fit a forest on zero samples".to_string()));
        }

        let max_features = split_features(n_features);

        let mut classes: Vec<usize> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        // Per-tree seeds are derived up front so parallel building stays reproducible
        let mut seeder = match self.random_state {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let seeds: Vec<u64> = (0..self.n_estimators).map(|_| seeder.gen()).collect();

        let trees: Result<Vec<DecisionTree>> = seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);

                let sample_indices: Vec<usize> =
                    (0..n_samples).map(|_| rng.gen_range(0..n_samples)).collect();

                let x_boot = x.select(Axis(0), &sample_indices);
                let y_boot = y.select(Axis(0), &sample_indices);

                let mut tree = DecisionTree::new()
                    .with_max_features(max_features)
                    .with_random_state(rng.gen());
                if let Some(d) = self.max_depth {
                    tree = tree.with_max_depth(d);
                }

                tree.fit(&x_boot, &y_boot)?;
                Ok(tree)
            })
            .collect();

        self.trees = trees?;
        self.classes = classes;
        self.n_features = n_features;
        Ok(())
    }

    /// Majority vote across trees; ties go to the smallest label
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        if self.trees.is_empty() {
            return Err(VoyageError::ModelNotFitted);
        }
        if x.ncols() != self.n_features {
            return Err(VoyageError::ShapeError {
                expected: format!("{} features", self.n_features),
                actual: format!("{} features", x.ncols()),
            });
        }

        let all_predictions: Vec<Array1<usize>> = self
            .trees
            .par_iter()
            .map(|tree| tree.predict(x))
            .collect::<Result<_>>()?;

        let predictions: Vec<usize> = (0..x.nrows())
            .map(|i| {
                let mut votes = vec![0usize; self.classes.len()];
                for preds in &all_predictions {
                    if let Ok(pos) = self.classes.binary_search(&preds[i]) {
                        votes[pos] += 1;
                    }
                }
                let mut best = 0;
                for (pos, &count) in votes.iter().enumerate() {
                    if count > votes[best] {
                        best = pos;
                    }
                }
                self.classes[best]
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }

    fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}
