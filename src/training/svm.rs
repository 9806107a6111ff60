//! Support Vector Machine classifier
//!
//! RBF-kernel SVC trained with SMO (Sequential Minimal Optimization). Multi-class
//! problems use One-vs-Rest; all binary machines share one kernel matrix.

use crate::error::{Result, VoyageError};
use ndarray::{Array1, Array2, ArrayView1};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::models::Model;

/// Maximum number of samples for eager kernel matrix computation.
/// Beyond this, training will return an error to prevent OOM.
const MAX_KERNEL_MATRIX_SAMPLES: usize = 10_000;

/// Consecutive passes without an update before SMO stops
const MAX_QUIET_PASSES: usize = 5;

/// SVM configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SVMConfig {
    /// Regularization parameter (C)
    pub c: f64,
    /// Tolerance for the KKT conditions
    pub tol: f64,
    /// Maximum number of passes over the training set
    pub max_iter: usize,
    /// Seed for the second-multiplier choice
    pub random_state: u64,
}

impl Default for SVMConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            tol: 1e-3,
            max_iter: 500,
            random_state: 42,
        }
    }
}

/// RBF kernel K(x, y) = exp(-gamma * ||x - y||^2), gamma resolved from the training data
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RbfKernel {
    gamma: f64,
}

impl RbfKernel {
    /// gamma = 1 / (n_features * Var(X)), falling back to 1 for constant input
    fn scale(x: &Array2<f64>) -> Self {
        let var = x.var(0.0);
        let gamma = if var > 0.0 { 1.0 / (x.ncols() as f64 * var) } else { 1.0 };
        Self { gamma }
    }

    fn eval(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        let norm_sq: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum();
        (-self.gamma * norm_sq).exp()
    }
}

/// A single binary SVM: positive class vs everything else
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BinarySVM {
    support_vectors: Array2<f64>,
    /// alpha_i * y_i per support vector
    dual_coef: Array1<f64>,
    bias: f64,
}

impl BinarySVM {
    fn score(&self, kernel: RbfKernel, sample: ArrayView1<f64>) -> f64 {
        self.support_vectors
            .rows()
            .into_iter()
            .zip(self.dual_coef.iter())
            .map(|(sv, &coef)| coef * kernel.eval(sample, sv))
            .sum::<f64>()
            + self.bias
    }
}

/// Support Vector Classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SVMClassifier {
    config: SVMConfig,
    /// Unique class labels, sorted
    classes: Vec<usize>,
    /// One machine for binary problems, one per class otherwise
    machines: Vec<BinarySVM>,
    kernel: Option<RbfKernel>,
    n_features: usize,
}

impl SVMClassifier {
    /// Create a new SVM classifier
    pub fn new(config: SVMConfig) -> Self {
        Self {
            config,
            classes: Vec::new(),
            machines: Vec::new(),
            kernel: None,
            n_features: 0,
        }
    }

    /// RBF classifier with the given regularization strength
    pub fn with_c(c: f64) -> Self {
        Self::new(SVMConfig { c, ..Default::default() })
    }

    pub fn c(&self) -> f64 {
        self.config.c
    }

    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// Resolved RBF coefficient, once fitted
    pub fn gamma(&self) -> Option<f64> {
        self.kernel.map(|k| k.gamma)
    }

    /// Total number of support vectors across all binary machines
    pub fn n_support_vectors(&self) -> usize {
        self.machines.iter().map(|m| m.support_vectors.nrows()).sum()
    }

    /// Compute kernel matrix (rows in parallel, upper triangle mirrored)
    fn compute_kernel_matrix(kernel: RbfKernel, x: &Array2<f64>) -> Vec<f64> {
        let n = x.nrows();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| (i..n).map(|j| kernel.eval(x.row(i), x.row(j))).collect())
            .collect();

        let mut k = vec![0.0; n * n];
        for (i, row_vals) in rows.into_iter().enumerate() {
            for (offset, val) in row_vals.into_iter().enumerate() {
                let j = i + offset;
                k[i * n + j] = val;
                k[j * n + i] = val;
            }
        }
        k
    }

    /// SMO on a precomputed kernel; returns (alphas, bias)
    fn smo_train(&self, k: &[f64], y: &[f64], seed: u64) -> (Vec<f64>, f64) {
        let n = y.len();
        let c = self.config.c;
        let tol = self.config.tol;

        let mut alphas = vec![0.0; n];
        let mut bias = 0.0;
        // f(x_i) - y_i, kept current after every update
        let mut errors: Vec<f64> = y.iter().map(|&yi| -yi).collect();

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let mut quiet_passes = 0;
        let mut total_iter = 0;

        while n > 1 && quiet_passes < MAX_QUIET_PASSES && total_iter < self.config.max_iter {
            let mut num_changed = 0;

            for i in 0..n {
                let e_i = errors[i];

                let violates_kkt = (y[i] * e_i < -tol && alphas[i] < c)
                    || (y[i] * e_i > tol && alphas[i] > 0.0);
                if !violates_kkt {
                    continue;
                }

                let j = loop {
                    let j = rng.gen_range(0..n);
                    if j != i {
                        break j;
                    }
                };
                let e_j = errors[j];

                let alpha_i_old = alphas[i];
                let alpha_j_old = alphas[j];

                let (l, h) = if y[i] != y[j] {
                    ((alpha_j_old - alpha_i_old).max(0.0), (c + alpha_j_old - alpha_i_old).min(c))
                } else {
                    ((alpha_i_old + alpha_j_old - c).max(0.0), (alpha_i_old + alpha_j_old).min(c))
                };
                if (l - h).abs() < 1e-10 {
                    continue;
                }

                let k_ii = k[i * n + i];
                let k_jj = k[j * n + j];
                let k_ij = k[i * n + j];
                let eta = 2.0 * k_ij - k_ii - k_jj;
                if eta >= 0.0 {
                    continue;
                }

                let alpha_j_new = (alpha_j_old - y[j] * (e_i - e_j) / eta).clamp(l, h);
                if (alpha_j_new - alpha_j_old).abs() < 1e-5 {
                    continue;
                }
                let alpha_i_new = alpha_i_old + y[i] * y[j] * (alpha_j_old - alpha_j_new);

                let delta_i = y[i] * (alpha_i_new - alpha_i_old);
                let delta_j = y[j] * (alpha_j_new - alpha_j_old);

                let b1 = bias - e_i - delta_i * k_ii - delta_j * k_ij;
                let b2 = bias - e_j - delta_i * k_ij - delta_j * k_jj;
                let new_bias = if alpha_i_new > 0.0 && alpha_i_new < c {
                    b1
                } else if alpha_j_new > 0.0 && alpha_j_new < c {
                    b2
                } else {
                    (b1 + b2) / 2.0
                };
                let delta_b = new_bias - bias;

                for t in 0..n {
                    errors[t] += delta_i * k[i * n + t] + delta_j * k[j * n + t] + delta_b;
                }

                alphas[i] = alpha_i_new;
                alphas[j] = alpha_j_new;
                bias = new_bias;
                num_changed += 1;
            }

            total_iter += 1;
            if num_changed == 0 {
                quiet_passes += 1;
            } else {
                quiet_passes = 0;
            }
        }

        (alphas, bias)
    }

    fn train_machine(
        &self,
        x: &Array2<f64>,
        k: &[f64],
        y_binary: &[f64],
        seed: u64,
    ) -> BinarySVM {
        let (alphas, bias) = self.smo_train(k, y_binary, seed);

        let support: Vec<usize> = alphas
            .iter()
            .enumerate()
            .filter(|(_, &a)| a > 1e-8)
            .map(|(i, _)| i)
            .collect();

        BinarySVM {
            support_vectors: x.select(ndarray::Axis(0), &support),
            dual_coef: support.iter().map(|&i| alphas[i] * y_binary[i]).collect(),
            bias,
        }
    }
}

impl Model for SVMClassifier {
    /// Fit the classifier (binary directly, multi-class via One-vs-Rest)
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        let n = x.nrows();
        if n != y.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("y length = {}", n),
                actual: format!("y length = {}", y.len()),
            });
        }
        if !(self.config.c > 0.0) {
            return Err(VoyageError::TrainingError(format!(
                "C must be strictly positive, got {}",
                self.config.c
            )));
        }
        if n > MAX_KERNEL_MATRIX_SAMPLES {
            return Err(VoyageError::TrainingError(format!(
                "Dataset has {} samples, exceeding the maximum {} for SVM kernel matrix",
                n, MAX_KERNEL_MATRIX_SAMPLES
            )));
        }

        let mut classes: Vec<usize> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        if classes.len() < 2 {
            return Err(VoyageError::TrainingError(
                "SVM requires at least 2 distinct classes".to_string(),
            ));
        }

        let kernel = RbfKernel::scale(x);
        let k = Self::compute_kernel_matrix(kernel, x);

        // Binary problems need a single machine separating classes[1] from classes[0]
        let positives: &[usize] = if classes.len() == 2 { &classes[1..] } else { &classes };

        let machines: Vec<BinarySVM> = positives
            .par_iter()
            .enumerate()
            .map(|(m, &positive)| {
                let y_binary: Vec<f64> =
                    y.iter().map(|&v| if v == positive { 1.0 } else { -1.0 }).collect();
                let seed = self.config.random_state.wrapping_add(m as u64);
                self.train_machine(x, &k, &y_binary, seed)
            })
            .collect();

        self.classes = classes;
        self.machines = machines;
        self.kernel = Some(kernel);
        self.n_features = x.ncols();
        Ok(())
    }

    /// Predict class labels; multi-class picks the highest One-vs-Rest score
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        let kernel = self.kernel.ok_or(VoyageError::ModelNotFitted)?;
        if x.ncols() != self.n_features {
            return Err(VoyageError::ShapeError {
                expected: format!("{} features", self.n_features),
                actual: format!("{} features", x.ncols()),
            });
        }

        let predictions: Vec<usize> = (0..x.nrows())
            .into_par_iter()
            .map(|i| {
                let sample = x.row(i);
                if self.classes.len() == 2 {
                    if self.machines[0].score(kernel, sample) >= 0.0 {
                        self.classes[1]
                    } else {
                        self.classes[0]
                    }
                } else {
                    let mut best_score = f64::NEG_INFINITY;
                    let mut best_class = self.classes[0];
                    for (machine, &class) in self.machines.iter().zip(&self.classes) {
                        let score = machine.score(kernel, sample);
                        if score > best_score {
                            best_score = score;
                            best_class = class;
                        }
                    }
                    best_class
                }
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }

    fn is_fitted(&self) -> bool {
        self.kernel.is_some()
    }
}
