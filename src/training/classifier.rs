//! Configured classifier dispatch

use ndarray::{Array1, Array2};

use super::config::{ClassifierKind, ClassifierParams, FOREST_RANDOM_STATE};
use super::knn::KNNClassifier;
use super::models::Model;
use super::random_forest::RandomForest;
use super::svm::SVMClassifier;
use crate::error::Result;

/// One of the three selectable classifiers, configured and ready to fit
#[derive(Debug, Clone)]
pub enum Classifier {
    Knn(KNNClassifier),
    Svm(SVMClassifier),
    RandomForest(RandomForest),
}

/// Construct an untrained classifier from typed parameters
pub fn configure(params: &ClassifierParams) -> Result<Classifier> {
    params.validate()?;

    let classifier = match *params {
        ClassifierParams::Knn { k } => Classifier::Knn(KNNClassifier::with_k(k)),
        ClassifierParams::Svm { c } => Classifier::Svm(SVMClassifier::with_c(c)),
        ClassifierParams::RandomForest { max_depth, n_estimators } => Classifier::RandomForest(
            RandomForest::new(n_estimators)
                .with_max_depth(max_depth)
                .with_random_state(FOREST_RANDOM_STATE),
        ),
    };
    Ok(classifier)
}

impl Classifier {
    pub fn kind(&self) -> ClassifierKind {
        match self {
            Classifier::Knn(_) => ClassifierKind::Knn,
            Classifier::Svm(_) => ClassifierKind::Svm,
            Classifier::RandomForest(_) => ClassifierKind::RandomForest,
        }
    }

    /// Hyperparameters as reported by the underlying model
    pub fn params(&self) -> ClassifierParams {
        match self {
            Classifier::Knn(m) => ClassifierParams::Knn { k: m.n_neighbors() },
            Classifier::Svm(m) => ClassifierParams::Svm { c: m.c() },
            Classifier::RandomForest(m) => ClassifierParams::RandomForest {
                max_depth: m.max_depth.unwrap_or(0),
                n_estimators: m.n_estimators,
            },
        }
    }

    fn model(&self) -> &dyn Model {
        match self {
            Classifier::Knn(m) => m,
            Classifier::Svm(m) => m,
            Classifier::RandomForest(m) => m,
        }
    }

    fn model_mut(&mut self) -> &mut dyn Model {
        match self {
            Classifier::Knn(m) => m,
            Classifier::Svm(m) => m,
            Classifier::RandomForest(m) => m,
        }
    }
}

impl Model for Classifier {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        self.model_mut().fit(x, y)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        self.model().predict(x)
    }

    fn is_fitted(&self) -> bool {
        self.model().is_fitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoyageError;

    #[test]
    fn test_knn_reports_k() {
        let clf = configure(&ClassifierParams::Knn { k: 5 }).unwrap();
        assert_eq!(clf.kind(), ClassifierKind::Knn);
        assert_eq!(clf.params(), ClassifierParams::Knn { k: 5 });
        assert!(!clf.is_fitted());
    }

    #[test]
    fn test_svm_reports_c() {
        let clf = configure(&ClassifierParams::Svm { c: 2.5 }).unwrap();
        assert_eq!(clf.params(), ClassifierParams::Svm { c: 2.5 });
    }

    #[test]
    fn test_forest_reports_params_and_seed() {
        let clf = configure(&ClassifierParams::RandomForest { max_depth: 7, n_estimators: 40 }).unwrap();
        assert_eq!(clf.params(), ClassifierParams::RandomForest { max_depth: 7, n_estimators: 40 });
        match clf {
            Classifier::RandomForest(rf) => assert_eq!(rf.random_state, Some(FOREST_RANDOM_STATE)),
            other => panic!("unexpected classifier {:?}", other.kind()),
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = configure(&ClassifierParams::Knn { k: 0 }).unwrap_err();
        assert!(matches!(err, VoyageError::InvalidParameter { .. }));
    }

    #[test]
    fn test_fit_through_dispatch() {
        let x = Array2::from_shape_vec((6, 1), vec![0.0, 0.1, 0.2, 5.0, 5.1, 5.2]).unwrap();
        let y = Array1::from_vec(vec![0, 0, 0, 1, 1, 1]);
        let mut clf = configure(&ClassifierParams::Knn { k: 3 }).unwrap();
        clf.fit(&x, &y).unwrap();
        assert!(clf.is_fitted());
        assert_eq!(clf.predict(&x).unwrap(), y);
    }
}
