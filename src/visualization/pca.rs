//! Principal Component Analysis
//!
//! Linear dimensionality reduction for 2D visualization.
//! Computes the top-k eigenvectors of the covariance matrix
//! using power iteration with deflation.

use ndarray::{Array1, Array2, Axis};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// PCA configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaConfig {
    /// Number of output dimensions (default 2)
    pub n_components: usize,
    /// Random seed for power iteration initialization
    pub random_state: u64,
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for PcaConfig {
    fn default() -> Self {
        Self {
            n_components: 2,
            random_state: 42,
            max_iter: 500,
            tol: 1e-10,
        }
    }
}

/// PCA result including the embedding and explained variance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaResult {
    /// Projected data: n_samples x n_components
    pub embedding: Array2<f64>,
    /// Explained variance ratio for each component (sums to <= 1.0)
    pub explained_variance_ratio: Vec<f64>,
    /// Eigenvalues (raw variance per component)
    pub eigenvalues: Vec<f64>,
}

/// PCA dimensionality reduction
#[derive(Debug, Clone, Default)]
pub struct Pca {
    config: PcaConfig,
}

impl Pca {
    pub fn new(config: PcaConfig) -> Self {
        Self { config }
    }

    /// Reduce to `n_components` dimensions
    pub fn with_components(n_components: usize) -> Self {
        Self::new(PcaConfig {
            n_components,
            ..Default::default()
        })
    }

    /// Project `data` onto its leading principal components.
    ///
    /// The embedding keeps one row per input row. Each component's sign is
    /// fixed so its largest-magnitude loading is positive, which keeps output
    /// stable across runs.
    pub fn fit_transform(&self, data: &Array2<f64>) -> Result<PcaResult> {
        let (n, d) = data.dim();
        let k = self.config.n_components;

        if n < 2 {
            return Err(VoyageError::DataError("PCA requires at least 2 samples".to_string()));
        }
        if k == 0 || d < k {
            return Err(VoyageError::DataError(format!(
                "PCA to {} components requires at least {} features, got {}",
                k, k, d
            )));
        }

        let centered = center(data)?;
        let cov = centered.t().dot(&centered) / (n as f64 - 1.0);

        let (eigenvalues, components) = self.power_iteration(&cov, k);

        let full_variance = cov.diag().sum().max(1e-12);
        let explained_variance_ratio = eigenvalues
            .iter()
            .map(|&ev| (ev / full_variance).max(0.0))
            .collect();

        // components: k x d, embedding: n x k
        let embedding = centered.dot(&components.t());

        Ok(PcaResult {
            embedding,
            explained_variance_ratio,
            eigenvalues,
        })
    }

    /// Power iteration with deflation to extract top-k eigenvectors.
    fn power_iteration(&self, cov: &Array2<f64>, k: usize) -> (Vec<f64>, Array2<f64>) {
        let d = cov.nrows();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.random_state);

        let mut work = cov.to_owned();
        let mut eigenvalues = Vec::with_capacity(k);
        let mut components = Array2::<f64>::zeros((k, d));

        for c in 0..k {
            let mut v: Array1<f64> = (0..d).map(|_| rng.gen_range(-1.0..1.0)).collect();
            normalize(&mut v);

            for _ in 0..self.config.max_iter {
                let mut w = work.dot(&v);
                if normalize(&mut w) == 0.0 {
                    // Remaining variance is zero; any unit vector will do
                    break;
                }
                let diff = (&w - &v).mapv(|x| x * x).sum().sqrt();
                v = w;
                if diff < self.config.tol {
                    break;
                }
            }

            let eigenvalue = v.dot(&work.dot(&v)).max(0.0);

            let pivot = v
                .iter()
                .copied()
                .fold(0.0f64, |best, x| if x.abs() > best.abs() { x } else { best });
            if pivot < 0.0 {
                v.mapv_inplace(|x| -x);
            }

            // Deflate: A = A - eigenvalue * v * v^T
            for i in 0..d {
                for j in 0..d {
                    work[[i, j]] -= eigenvalue * v[i] * v[j];
                }
            }

            eigenvalues.push(eigenvalue);
            components.row_mut(c).assign(&v);
        }

        (eigenvalues, components)
    }
}

/// Subtract column means; features keep their original units
fn center(data: &Array2<f64>) -> Result<Array2<f64>> {
    let means = data
        .mean_axis(Axis(0))
        .ok_or_else(|| VoyageError::ComputationError("mean of empty matrix".to_string()))?;
    Ok(data - &means)
}

/// Scale to unit length in place, returning the original norm
fn normalize(v: &mut Array1<f64>) -> f64 {
    let norm = v.dot(&*v).sqrt();
    if norm > 1e-300 {
        v.mapv_inplace(|x| x / norm);
        norm
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pca_basic() {
        // Perfectly linear data
        let data = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0], [4.0, 8.0], [5.0, 10.0]];

        let result = Pca::default().fit_transform(&data).unwrap();

        assert_eq!(result.embedding.dim(), (5, 2));
        assert!(
            result.explained_variance_ratio[0] > 0.95,
            "First component should explain >95% variance, got {}",
            result.explained_variance_ratio[0]
        );
    }

    #[test]
    fn test_pca_two_clusters() {
        let data = array![
            [0.0, 0.0, 0.0],
            [0.1, 0.1, 0.0],
            [0.0, 0.1, 0.1],
            [10.0, 10.0, 10.0],
            [10.1, 10.0, 10.0],
            [10.0, 10.1, 10.0],
        ];

        let result = Pca::default().fit_transform(&data).unwrap();
        assert_eq!(result.embedding.dim(), (6, 2));
        assert_eq!(result.explained_variance_ratio.len(), 2);

        let pc1 = result.embedding.column(0);
        let mean_a = pc1.iter().take(3).sum::<f64>() / 3.0;
        let mean_b = pc1.iter().skip(3).sum::<f64>() / 3.0;
        assert!((mean_a - mean_b).abs() > 1.0, "Clusters should be separated");
    }

    #[test]
    fn test_embedding_is_centered() {
        let data = array![[1.0, 5.0, 2.0], [2.0, 3.0, 8.0], [7.0, 1.0, 4.0], [4.0, 4.0, 4.0]];
        let result = Pca::default().fit_transform(&data).unwrap();
        for col in result.embedding.columns() {
            assert!(col.sum().abs() < 1e-9);
        }
    }

    #[test]
    fn test_explained_variance_in_range() {
        let data = array![
            [1.0, 0.0, 0.5],
            [0.0, 1.0, 0.3],
            [1.0, 1.0, 0.8],
            [0.5, 0.5, 0.4],
            [0.2, 0.8, 0.6],
            [0.9, 0.1, 0.2],
        ];

        let result = Pca::default().fit_transform(&data).unwrap();
        let total: f64 = result.explained_variance_ratio.iter().sum();
        assert!(total > 0.0 && total <= 1.001, "sum={}", total);
        assert!(result.eigenvalues[0] >= result.eigenvalues[1]);
    }

    #[test]
    fn test_deterministic() {
        let data = Array2::from_shape_fn((30, 4), |(i, j)| ((i * 7 + j * 3) % 11) as f64);
        let a = Pca::default().fit_transform(&data).unwrap();
        let b = Pca::default().fit_transform(&data).unwrap();
        assert_eq!(a.embedding, b.embedding);
    }

    #[test]
    fn test_constant_data() {
        let data = Array2::from_elem((5, 3), 2.0);
        let result = Pca::default().fit_transform(&data).unwrap();
        assert!(result.embedding.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_pca_too_few_samples() {
        assert!(Pca::default().fit_transform(&array![[1.0, 2.0]]).is_err());
    }

    #[test]
    fn test_too_few_features() {
        assert!(Pca::default().fit_transform(&array![[1.0], [2.0], [3.0]]).is_err());
    }
}
