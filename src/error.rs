//! Error types for Dataset Voyage

use thiserror::Error;

/// Result type alias for Dataset Voyage operations
pub type Result<T> = std::result::Result<T, VoyageError>;

/// Main error type for dataset loading, classifier configuration and evaluation
#[derive(Error, Debug)]
pub enum VoyageError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Unknown classifier: {0}")]
    UnknownClassifier(String),

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Training error: {0}")]
    TrainingError(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Computation error: {0}")]
    ComputationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoyageError {
    /// Whether the error comes from a bad selection or parameter rather than from the data or fit
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            VoyageError::UnknownDataset(_)
                | VoyageError::UnknownClassifier(_)
                | VoyageError::InvalidParameter { .. }
        )
    }
}

impl From<ndarray::ShapeError> for VoyageError {
    fn from(err: ndarray::ShapeError) -> Self {
        VoyageError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}
