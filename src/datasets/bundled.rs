//! Reference datasets shipped inside the `smartcore` crate

use ndarray::{Array1, Array2};
use smartcore::dataset::{breast_cancer, diabetes, digits, iris};

use super::{Dataset, DatasetName};
use crate::error::{Result, VoyageError};

pub(super) fn load_iris() -> Result<Dataset> {
    convert(DatasetName::Iris, iris::load_dataset(), |v| v as f64, |t| t as usize)
}

pub(super) fn load_breast_cancer() -> Result<Dataset> {
    convert(DatasetName::BreastCancer, breast_cancer::load_dataset(), |v| v as f64, |t| t as usize)
}

pub(super) fn load_digits() -> Result<Dataset> {
    convert(DatasetName::Digits, digits::load_dataset(), |v| v as f64, |t| t as usize)
}

/// Diabetes targets are disease-progression scores; every distinct score is its own class
pub(super) fn load_diabetes() -> Result<Dataset> {
    convert(DatasetName::Diabetes, diabetes::load_dataset(), |v| v as f64, |t| t as usize)
}

/// Row-major smartcore payload to ndarray
fn convert<X: Copy, Y: Copy>(
    name: DatasetName,
    raw: smartcore::dataset::Dataset<X, Y>,
    to_feature: impl Fn(X) -> f64,
    to_label: impl Fn(Y) -> usize,
) -> Result<Dataset> {
    let n = raw.num_samples;
    let d = raw.num_features;

    if raw.data.len() != n * d {
        return Err(VoyageError::DataError(format!(
            "{}: expected {} values for {}x{}, found {}",
            name,
            n * d,
            n,
            d,
            raw.data.len()
        )));
    }

    let values: Vec<f64> = raw.data.iter().map(|&v| to_feature(v)).collect();
    let features = Array2::from_shape_vec((n, d), values)?;
    let targets: Array1<usize> = raw.target.iter().map(|&t| to_label(t)).collect();

    Dataset::new(name, features, targets, raw.feature_names)
}
