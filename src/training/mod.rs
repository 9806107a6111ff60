//! Model training module
//!
//! Provides the three selectable classifiers:
//! - K-Nearest Neighbors
//! - Support Vector Machines (RBF kernel)
//! - Random Forests of Gini decision trees
//!
//! plus the slider-driven configuration that builds them, a seeded
//! train/test split and accuracy scoring.

mod classifier;
mod config;
mod models;
mod split;
pub mod decision_tree;
pub mod knn;
pub mod random_forest;
pub mod svm;

pub use classifier::{configure, Classifier};
pub use config::{ClassifierKind, ClassifierParams, SliderSpec, FOREST_RANDOM_STATE};
pub use models::{accuracy_score, Model, ModelMetrics};
pub use split::{train_test_split, TrainTestSplit};
pub use decision_tree::{DecisionTree, TreeNode};
pub use knn::{KNNClassifier, KNNConfig};
pub use random_forest::RandomForest;
pub use svm::{SVMClassifier, SVMConfig};
