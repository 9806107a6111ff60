//! Evaluation and visualization pipeline
//!
//! One pass per user interaction: load the dataset, split it, fit the
//! configured classifier, score it on the held-out rows and project the full
//! feature matrix to two dimensions for plotting. Every pass is a pure function
//! of the selection and the [`EvaluationConfig`].

use std::collections::HashMap;
use std::time::Instant;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::datasets::{self, Dataset, DatasetName, DatasetSummary};
use crate::error::Result;
use crate::training::{
    accuracy_score, configure, train_test_split, Classifier, ClassifierKind, ClassifierParams, Model,
    ModelMetrics,
};
use crate::visualization::{Pca, ScatterPlot};

/// Fixed settings shared by every evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationConfig {
    /// Fraction of rows held out for scoring
    pub test_size: f64,
    /// Seed for the train/test shuffle
    pub random_state: u64,
    /// Dimensions of the projection
    pub n_components: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            random_state: 1234,
            n_components: 2,
        }
    }
}

/// What the user picked: a dataset and a configured classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub dataset: DatasetName,
    pub params: ClassifierParams,
}

impl Selection {
    pub fn new(dataset: DatasetName, params: ClassifierParams) -> Self {
        Self { dataset, params }
    }

    /// Resolve names and raw slider values, failing on anything outside the catalog
    pub fn from_raw(dataset: &str, classifier: &str, sliders: &HashMap<String, f64>) -> Result<Self> {
        let dataset: DatasetName = dataset.parse()?;
        let kind: ClassifierKind = classifier.parse()?;
        let params = ClassifierParams::from_sliders(kind, sliders)?;
        Ok(Self { dataset, params })
    }

    pub fn classifier(&self) -> ClassifierKind {
        self.params.kind()
    }
}

/// 2D embedding of every sample with its true label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// n_samples x 2
    pub points: Array2<f64>,
    pub labels: Array1<usize>,
    pub explained_variance_ratio: Vec<f64>,
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone)]
pub struct FitResult {
    pub dataset: DatasetSummary,
    pub params: ClassifierParams,
    /// Classifier fitted on the training partition
    pub model: Classifier,
    pub metrics: ModelMetrics,
    pub projection: Projection,
}

impl FitResult {
    pub fn accuracy(&self) -> f64 {
        self.metrics.accuracy
    }

    pub fn classifier(&self) -> ClassifierKind {
        self.params.kind()
    }

    /// Render the projection as an SVG scatter plot
    pub fn plot(&self) -> Result<String> {
        let title = format!("{} ({})", self.dataset.name, self.classifier());
        ScatterPlot::default()
            .with_title(title)
            .render(&self.projection.points, &self.projection.labels)
    }
}

/// Run one evaluation pass with the default settings
pub fn evaluate(selection: &Selection) -> Result<FitResult> {
    evaluate_with(selection, &EvaluationConfig::default())
}

pub fn evaluate_with(selection: &Selection, config: &EvaluationConfig) -> Result<FitResult> {
    let dataset = datasets::load(selection.dataset)?;
    evaluate_dataset(&dataset, &selection.params, config)
}

/// Evaluate on an already loaded dataset
pub fn evaluate_dataset(
    dataset: &Dataset,
    params: &ClassifierParams,
    config: &EvaluationConfig,
) -> Result<FitResult> {
    let mut model = configure(params)?;
    let x = dataset.features();
    let y = dataset.targets();

    let split = train_test_split(x, y, config.test_size, config.random_state)?;
    debug!(
        dataset = %dataset.name(),
        n_train = split.y_train.len(),
        n_test = split.y_test.len(),
        "Split dataset"
    );

    let start = Instant::now();
    model.fit(&split.x_train, &split.y_train)?;
    let predictions = model.predict(&split.x_test)?;
    let elapsed = start.elapsed().as_secs_f64();

    let accuracy = accuracy_score(&split.y_test, &predictions)?;

    let reduced = Pca::with_components(config.n_components).fit_transform(x)?;

    info!(
        dataset = %dataset.name(),
        classifier = %params.kind(),
        params = %params,
        accuracy,
        elapsed_secs = elapsed,
        "Evaluation complete"
    );

    Ok(FitResult {
        dataset: dataset.summary(),
        params: *params,
        model,
        metrics: ModelMetrics {
            accuracy,
            n_train: split.y_train.len(),
            n_test: split.y_test.len(),
            n_features: x.ncols(),
            training_time_secs: elapsed,
        },
        projection: Projection {
            points: reduced.embedding,
            labels: y.clone(),
            explained_variance_ratio: reduced.explained_variance_ratio,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoyageError;

    #[test]
    fn test_selection_from_raw() {
        let sliders: HashMap<String, f64> = [("K".to_string(), 5.0)].into_iter().collect();
        let selection = Selection::from_raw("Iris", "KNN", &sliders).unwrap();
        assert_eq!(selection.dataset, DatasetName::Iris);
        assert_eq!(selection.params, ClassifierParams::Knn { k: 5 });
        assert_eq!(selection.classifier(), ClassifierKind::Knn);
    }

    #[test]
    fn test_selection_rejects_unknown_names() {
        let empty = HashMap::new();
        assert!(matches!(
            Selection::from_raw("Boston", "KNN", &empty),
            Err(VoyageError::UnknownDataset(_))
        ));
        assert!(matches!(
            Selection::from_raw("Iris", "Perceptron", &empty),
            Err(VoyageError::UnknownClassifier(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = EvaluationConfig::default();
        assert_eq!(config.test_size, 0.2);
        assert_eq!(config.random_state, 1234);
        assert_eq!(config.n_components, 2);
    }

    #[test]
    fn test_iris_knn_end_to_end() {
        let selection = Selection::new(DatasetName::Iris, ClassifierParams::Knn { k: 5 });
        let result = evaluate(&selection).unwrap();

        assert_eq!((result.dataset.n_samples, result.dataset.n_features), (150, 4));
        assert_eq!(result.dataset.n_classes, 3);
        assert_eq!(result.metrics.n_test, 30);
        assert!(result.accuracy() > 0.8);
        assert_eq!(result.projection.points.dim(), (150, 2));
        assert!(result.model.is_fitted());

        let svg = result.plot().unwrap();
        assert_eq!(svg.matches("<circle").count(), 150);
    }
}
