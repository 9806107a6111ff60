//! Dataset catalog
//!
//! The five bundled toy datasets, addressable by name. Loading returns an
//! immutable feature matrix with a parallel vector of class labels.

mod bundled;
mod wine;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VoyageError};

/// Names of the datasets in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetName {
    Iris,
    BreastCancer,
    Wine,
    Digits,
    Diabetes,
}

impl DatasetName {
    /// Catalog order, as shown in the dataset selector
    pub const ALL: [DatasetName; 5] = [
        DatasetName::Iris,
        DatasetName::BreastCancer,
        DatasetName::Wine,
        DatasetName::Digits,
        DatasetName::Diabetes,
    ];

    /// Label shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetName::Iris => "Iris",
            DatasetName::BreastCancer => "Breast Cancer",
            DatasetName::Wine => "Wine dataset",
            DatasetName::Digits => "Handwritten digits",
            DatasetName::Diabetes => "Diabetes",
        }
    }

    /// Stable machine key
    pub fn key(&self) -> &'static str {
        match self {
            DatasetName::Iris => "iris",
            DatasetName::BreastCancer => "breast_cancer",
            DatasetName::Wine => "wine",
            DatasetName::Digits => "digits",
            DatasetName::Diabetes => "diabetes",
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DatasetName {
    type Err = VoyageError;

    /// Accepts either the display name or the key, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        DatasetName::ALL
            .into_iter()
            .find(|name| {
                name.display_name().eq_ignore_ascii_case(needle) || name.key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VoyageError::UnknownDataset(s.to_string()))
    }
}

/// A loaded dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    name: DatasetName,
    features: Array2<f64>,
    targets: Array1<usize>,
    feature_names: Vec<String>,
}

/// Shape and class information, for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSummary {
    pub name: String,
    pub key: String,
    pub n_samples: usize,
    pub n_features: usize,
    pub n_classes: usize,
}

impl Dataset {
    /// Build a dataset, checking that labels line up with feature rows
    pub fn new(
        name: DatasetName,
        features: Array2<f64>,
        targets: Array1<usize>,
        feature_names: Vec<String>,
    ) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("{} labels", features.nrows()),
                actual: format!("{} labels", targets.len()),
            });
        }
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(VoyageError::DataError(format!("{} is empty", name)));
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(VoyageError::DataError(format!("{} contains non-finite values", name)));
        }

        let feature_names = if feature_names.len() == features.ncols() {
            feature_names
        } else {
            (0..features.ncols()).map(|i| format!("feature_{}", i)).collect()
        };

        Ok(Self { name, features, targets, feature_names })
    }

    pub fn name(&self) -> DatasetName {
        self.name
    }

    /// Feature matrix, one row per sample
    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    /// Class label per sample
    pub fn targets(&self) -> &Array1<usize> {
        &self.targets
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// (n_samples, n_features)
    pub fn shape(&self) -> (usize, usize) {
        self.features.dim()
    }

    /// Distinct labels, sorted
    pub fn classes(&self) -> Vec<usize> {
        self.targets.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
    }

    pub fn n_classes(&self) -> usize {
        self.classes().len()
    }

    pub fn summary(&self) -> DatasetSummary {
        let (n_samples, n_features) = self.shape();
        DatasetSummary {
            name: self.name.display_name().to_string(),
            key: self.name.key().to_string(),
            n_samples,
            n_features,
            n_classes: self.n_classes(),
        }
    }
}

/// Load a dataset from the bundled corpus
pub fn load(name: DatasetName) -> Result<Dataset> {
    let dataset = match name {
        DatasetName::Iris => bundled::load_iris()?,
        DatasetName::BreastCancer => bundled::load_breast_cancer()?,
        DatasetName::Wine => wine::load_wine()?,
        DatasetName::Digits => bundled::load_digits()?,
        DatasetName::Diabetes => bundled::load_diabetes()?,
    };

    let (rows, cols) = dataset.shape();
    debug!(dataset = %name, rows, cols, "Loaded dataset");
    Ok(dataset)
}

/// Load a dataset by display name or key
pub fn load_by_name(name: &str) -> Result<Dataset> {
    load(name.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_display_names_and_keys() {
        assert_eq!("Iris".parse::<DatasetName>().unwrap(), DatasetName::Iris);
        assert_eq!("breast_cancer".parse::<DatasetName>().unwrap(), DatasetName::BreastCancer);
        assert_eq!("Wine dataset".parse::<DatasetName>().unwrap(), DatasetName::Wine);
        assert_eq!("handwritten digits".parse::<DatasetName>().unwrap(), DatasetName::Digits);
        assert_eq!(" Diabetes ".parse::<DatasetName>().unwrap(), DatasetName::Diabetes);
    }

    #[test]
    fn test_unknown_name_is_error() {
        let err = "Boston".parse::<DatasetName>().unwrap_err();
        assert!(matches!(err, VoyageError::UnknownDataset(ref n) if n == "Boston"));
        assert!(load_by_name("Titanic").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for name in DatasetName::ALL {
            assert_eq!(name.to_string().parse::<DatasetName>().unwrap(), name);
        }
    }

    #[test]
    fn test_dataset_rejects_mismatched_labels() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = Array1::from_vec(vec![0usize]);
        let err = Dataset::new(DatasetName::Iris, x, y, vec![]).unwrap_err();
        assert!(matches!(err, VoyageError::ShapeError { .. }));
    }

    #[test]
    fn test_dataset_classes_sorted_and_unique() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = Array1::from_vec(vec![2usize, 0, 2, 1]);
        let ds = Dataset::new(DatasetName::Iris, x, y, vec!["a".into()]).unwrap();
        assert_eq!(ds.classes(), vec![0, 1, 2]);
        assert_eq!(ds.n_classes(), 3);
        assert_eq!(ds.feature_names(), &["a".to_string()]);
    }

    #[test]
    fn test_feature_names_fallback() {
        let x = array![[1.0, 2.0]];
        let y = Array1::from_vec(vec![0usize]);
        let ds = Dataset::new(DatasetName::Wine, x, y, vec![]).unwrap();
        assert_eq!(ds.feature_names(), &["feature_0".to_string(), "feature_1".to_string()]);
    }
}
