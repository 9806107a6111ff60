//! Dataset Voyage - interactive classifier explorer for toy datasets
//!
//! Pick one of five bundled datasets and one of three classifiers, tune the
//! classifier with sliders, and see held-out accuracy together with a 2D PCA
//! projection of the data.
//!
//! # Modules
//!
//! - [`datasets`] - The dataset catalog and loaders
//! - [`training`] - KNN, SVM and Random Forest classifiers, slider configuration, splitting
//! - [`visualization`] - PCA and the SVG scatter plot
//! - [`pipeline`] - One evaluation pass from selection to plot
//! - [`server`] - HTTP server with the page and REST API
//! - [`cli`] - Command-line interface

pub mod error;

pub mod datasets;
pub mod training;
pub mod visualization;
pub mod pipeline;

pub mod server;
pub mod cli;

pub use error::{Result, VoyageError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::datasets::{load, Dataset, DatasetName, DatasetSummary};
    pub use crate::error::{Result, VoyageError};
    pub use crate::pipeline::{evaluate, evaluate_with, EvaluationConfig, FitResult, Selection};
    pub use crate::training::{
        accuracy_score, configure, train_test_split, Classifier, ClassifierKind, ClassifierParams, Model,
    };
    pub use crate::visualization::{Pca, ScatterPlot};
}
