//! Decision tree classifier (Gini impurity)

use crate::error::{Result, VoyageError};
use ndarray::{Array1, Array2};
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::models::Model;

/// Decision tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Leaf node with the majority class of its samples
    Leaf {
        class: usize,
        n_samples: usize,
    },
    /// Internal node; samples with `x[feature_idx] <= threshold` go left
    Split {
        feature_idx: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
        n_samples: usize,
        impurity: f64,
    },
}

impl TreeNode {
    fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }
}

/// Best split found for one feature
#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature_idx: usize,
    threshold: f64,
    gain: f64,
}

/// Nodes with fewer samples become leaves
const MIN_SAMPLES_SPLIT: usize = 2;

/// Decision tree classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Tree root
    root: Option<TreeNode>,
    /// Maximum depth
    pub max_depth: Option<usize>,
    /// Features drawn at random for each split; all features when `None`
    pub max_features: Option<usize>,
    /// Seed for feature sampling
    pub random_state: u64,
    /// Number of features
    n_features: usize,
    /// Sorted class labels
    classes: Vec<usize>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: None,
            max_features: None,
            random_state: 0,
            n_features: 0,
            classes: Vec::new(),
        }
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Number of features considered at each split
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Depth of the fitted tree (0 for a single leaf)
    pub fn get_depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::n_leaves)
    }

    fn build_tree(
        &self,
        x: &Array2<f64>,
        y_idx: &[usize],
        indices: &[usize],
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> TreeNode {
        let n_samples = indices.len();
        let counts = self.class_counts(y_idx, indices);
        let leaf = || TreeNode::Leaf {
            class: self.classes[majority(&counts)],
            n_samples,
        };

        let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let should_stop = n_samples < MIN_SAMPLES_SPLIT
            || self.max_depth.map_or(false, |d| depth >= d)
            || is_pure;
        if should_stop {
            return leaf();
        }

        let features = self.sample_features(rng);
        let parent_impurity = gini(n_samples, sum_of_squares(&counts));

        let Some(best) = self.find_best_split(x, y_idx, indices, &features, parent_impurity) else {
            return leaf();
        };

        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| x[[i, best.feature_idx]] <= best.threshold);

        let left = Box::new(self.build_tree(x, y_idx, &left_indices, depth + 1, rng));
        let right = Box::new(self.build_tree(x, y_idx, &right_indices, depth + 1, rng));

        TreeNode::Split {
            feature_idx: best.feature_idx,
            threshold: best.threshold,
            left,
            right,
            n_samples,
            impurity: parent_impurity,
        }
    }

    fn class_counts(&self, y_idx: &[usize], indices: &[usize]) -> Vec<usize> {
        let mut counts = vec![0usize; self.classes.len()];
        for &i in indices {
            counts[y_idx[i]] += 1;
        }
        counts
    }

    /// Feature subset for one split, in ascending order
    fn sample_features(&self, rng: &mut ChaCha8Rng) -> Vec<usize> {
        match self.max_features {
            Some(m) if m < self.n_features => {
                let mut picked = index::sample(rng, self.n_features, m.max(1)).into_vec();
                picked.sort_unstable();
                picked
            }
            _ => (0..self.n_features).collect(),
        }
    }

    fn find_best_split(
        &self,
        x: &Array2<f64>,
        y_idx: &[usize],
        indices: &[usize],
        features: &[usize],
        parent_impurity: f64,
    ) -> Option<SplitCandidate> {
        let n_classes = self.classes.len();
        let n = indices.len();

        // Each feature independently sweeps its sorted values
        let candidates: Vec<Option<SplitCandidate>> = features
            .par_iter()
            .map(|&feature_idx| {
                let mut column: Vec<(f64, usize)> = indices
                    .iter()
                    .map(|&i| (x[[i, feature_idx]], y_idx[i]))
                    .collect();
                column.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

                let mut left = vec![0usize; n_classes];
                let mut right = vec![0usize; n_classes];
                for &(_, c) in &column {
                    right[c] += 1;
                }
                let mut left_sq = 0usize;
                let mut right_sq = sum_of_squares(&right);

                let mut best: Option<SplitCandidate> = None;

                for pos in 0..n - 1 {
                    let (value, c) = column[pos];
                    left_sq += 2 * left[c] + 1;
                    left[c] += 1;
                    right_sq -= 2 * right[c] - 1;
                    right[c] -= 1;

                    let n_left = pos + 1;
                    let n_right = n - n_left;
                    let next_value = column[pos + 1].0;
                    if next_value <= value {
                        continue;
                    }

                    let weighted = (n_left as f64 * gini(n_left, left_sq)
                        + n_right as f64 * gini(n_right, right_sq))
                        / n as f64;
                    let gain = parent_impurity - weighted;

                    if gain > best.map_or(1e-12, |b| b.gain) {
                        best = Some(SplitCandidate {
                            feature_idx,
                            threshold: (value + next_value) / 2.0,
                            gain,
                        });
                    }
                }

                best
            })
            .collect();

        // Ties keep the earliest feature
        candidates.into_iter().flatten().fold(None, |acc: Option<SplitCandidate>, c| match acc {
            Some(a) if a.gain >= c.gain => Some(a),
            _ => Some(c),
        })
    }

    fn predict_sample(&self, node: &TreeNode, sample: ndarray::ArrayView1<f64>) -> usize {
        match node {
            TreeNode::Leaf { class, .. } => *class,
            TreeNode::Split { feature_idx, threshold, left, right, .. } => {
                if sample[*feature_idx] <= *threshold {
                    self.predict_sample(left, sample)
                } else {
                    self.predict_sample(right, sample)
                }
            }
        }
    }
}

impl Model for DecisionTree {
    /// Fit the tree to training data
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        let n_samples = x.nrows();

        if n_samples != y.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }
        if n_samples == 0 {
            return Err(VoyageError::ValidationError("Cannot fit a tree on zero samples".to_string()));
        }

        let mut classes: Vec<usize> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        // Labels as positions into `classes`
        let y_idx: Vec<usize> = y
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or(0))
            .collect();

        self.classes = classes;
        self.n_features = x.ncols();

        let mut rng = ChaCha8Rng::seed_from_u64(self.random_state);
        let indices: Vec<usize> = (0..n_samples).collect();
        self.root = Some(self.build_tree(x, &y_idx, &indices, 0, &mut rng));

        Ok(())
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        let root = self.root.as_ref().ok_or(VoyageError::ModelNotFitted)?;
        if x.ncols() != self.n_features {
            return Err(VoyageError::ShapeError {
                expected: format!("{} features", self.n_features),
                actual: format!("{} features", x.ncols()),
            });
        }

        Ok(x.rows().into_iter().map(|row| self.predict_sample(root, row)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.root.is_some()
    }
}

fn sum_of_squares(counts: &[usize]) -> usize {
    counts.iter().map(|&c| c * c).sum()
}

/// Gini impurity from sample count and the sum of squared class counts
fn gini(n: usize, sum_sq: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    1.0 - sum_sq as f64 / (n * n)
}

/// Position of the largest count; ties go to the smallest position
fn majority(counts: &[usize]) -> usize {
    let mut best = 0;
    for (pos, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = pos;
        }
    }
    best
}
