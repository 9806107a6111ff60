//! Classifier selection and hyperparameters
//!
//! Each classifier exposes a fixed set of sliders. Raw slider values arrive as a
//! loosely typed map and are turned into a typed [`ClassifierParams`] here, so
//! everything downstream works with one variant per algorithm.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// Seed shared by every random forest built from the UI
pub const FOREST_RANDOM_STATE: u64 = 1234;

/// Classifiers offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// K-Nearest Neighbors
    Knn,
    /// Support Vector Machine
    Svm,
    /// Random Forest
    RandomForest,
}

impl ClassifierKind {
    pub const ALL: [ClassifierKind; 3] = [
        ClassifierKind::Knn,
        ClassifierKind::Svm,
        ClassifierKind::RandomForest,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ClassifierKind::Knn => "KNN",
            ClassifierKind::Svm => "SVM",
            ClassifierKind::RandomForest => "Random Forest",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ClassifierKind::Knn => "knn",
            ClassifierKind::Svm => "svm",
            ClassifierKind::RandomForest => "random_forest",
        }
    }

    /// Sliders shown for this classifier, in display order
    pub fn sliders(&self) -> Vec<SliderSpec> {
        match self {
            ClassifierKind::Knn => vec![SliderSpec::integer("K", "K", 1.0, 15.0)],
            ClassifierKind::Svm => vec![SliderSpec {
                name: "C",
                label: "C",
                min: 0.01,
                max: 10.0,
                step: 0.01,
                default: 0.01,
                integer: false,
            }],
            ClassifierKind::RandomForest => vec![
                SliderSpec::integer("max_depth", "Max_depth", 2.0, 15.0),
                SliderSpec::integer("n_estimators", "Num of estimators", 1.0, 100.0),
            ],
        }
    }

    /// Parameters with every slider at its default
    pub fn default_params(&self) -> ClassifierParams {
        let defaults: Vec<f64> = self.sliders().iter().map(|s| s.default).collect();
        ClassifierParams::from_resolved(*self, &defaults)
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ClassifierKind {
    type Err = VoyageError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        ClassifierKind::ALL
            .into_iter()
            .find(|kind| {
                kind.display_name().eq_ignore_ascii_case(needle) || kind.key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VoyageError::UnknownClassifier(s.to_string()))
    }
}

/// One hyperparameter slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Key used in parameter maps
    pub name: &'static str,
    /// Label shown next to the slider
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial position; the slider minimum
    pub default: f64,
    /// Whether values are whole numbers
    pub integer: bool,
}

impl SliderSpec {
    fn integer(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            min,
            max,
            step: 1.0,
            default: min,
            integer: true,
        }
    }

    /// Snap a raw value onto the slider: round integers, then clamp to bounds
    pub fn clamp(&self, raw: f64) -> Result<f64> {
        if !raw.is_finite() {
            return Err(VoyageError::InvalidParameter {
                name: self.name.to_string(),
                value: raw.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
        let value = if self.integer { raw.round() } else { raw };
        Ok(value.clamp(self.min, self.max))
    }

    /// Whether `value` is a legal slider position
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.integer || value.fract() == 0.0)
    }
}

/// Typed hyperparameters, one variant per classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "classifier", rename_all = "snake_case")]
pub enum ClassifierParams {
    Knn { k: usize },
    Svm { c: f64 },
    RandomForest { max_depth: usize, n_estimators: usize },
}

impl ClassifierParams {
    /// Build parameters from raw slider values.
    ///
    /// The key set must match the classifier's sliders exactly. Values are
    /// clamped to the slider bounds rather than rejected.
    pub fn from_sliders(kind: ClassifierKind, values: &HashMap<String, f64>) -> Result<Self> {
        let sliders = kind.sliders();

        if let Some(extra) = values.keys().find(|k| !sliders.iter().any(|s| s.name == k.as_str())) {
            return Err(VoyageError::InvalidParameter {
                name: extra.clone(),
                value: values[extra].to_string(),
                reason: format!("not a parameter of {}", kind),
            });
        }

        let mut resolved = Vec::with_capacity(sliders.len());
        for slider in &sliders {
            let raw = values.get(slider.name).ok_or_else(|| VoyageError::InvalidParameter {
                name: slider.name.to_string(),
                value: "missing".to_string(),
                reason: format!("required by {}", kind),
            })?;
            resolved.push(slider.clamp(*raw)?);
        }

        Ok(Self::from_resolved(kind, &resolved))
    }

    /// `values` holds one in-range value per slider, in slider order
    fn from_resolved(kind: ClassifierKind, values: &[f64]) -> Self {
        match kind {
            ClassifierKind::Knn => ClassifierParams::Knn { k: values[0] as usize },
            ClassifierKind::Svm => ClassifierParams::Svm { c: values[0] },
            ClassifierKind::RandomForest => ClassifierParams::RandomForest {
                max_depth: values[0] as usize,
                n_estimators: values[1] as usize,
            },
        }
    }

    pub fn kind(&self) -> ClassifierKind {
        match self {
            ClassifierParams::Knn { .. } => ClassifierKind::Knn,
            ClassifierParams::Svm { .. } => ClassifierKind::Svm,
            ClassifierParams::RandomForest { .. } => ClassifierKind::RandomForest,
        }
    }

    /// Slider values keyed by slider name
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let pairs: Vec<(&str, f64)> = match *self {
            ClassifierParams::Knn { k } => vec![("K", k as f64)],
            ClassifierParams::Svm { c } => vec![("C", c)],
            ClassifierParams::RandomForest { max_depth, n_estimators } => {
                vec![("max_depth", max_depth as f64), ("n_estimators", n_estimators as f64)]
            }
        };
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Check every value against its slider bounds without clamping
    pub fn validate(&self) -> Result<()> {
        let sliders = self.kind().sliders();
        for (name, value) in self.to_map() {
            let in_range = sliders
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.contains(value))
                .unwrap_or(false);
            if !in_range {
                return Err(VoyageError::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "outside slider range".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ClassifierParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierParams::Knn { k } => write!(f, "K={}", k),
            ClassifierParams::Svm { c } => write!(f, "C={}", c),
            ClassifierParams::RandomForest { max_depth, n_estimators } => {
                write!(f, "max_depth={}, n_estimators={}", max_depth, n_estimators)
            }
        }
    }
}
