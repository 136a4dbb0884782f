// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Regression model artifacts.
//!
//! A model is trained elsewhere and shipped as a JSON document:
//!
//! ```json
//! { "format_version": 1,
//!   "target": "identity_score",
//!   "feature_names": ["gravy_A", "gravy_B", "..."],
//!   "model": { "kind": "linear", "intercept": 12.5, "coefficients": [ ... ] } }
//! ```
//!
//! `kind` is either `linear` (see [`linear::LinearModel`]) or `tree_ensemble` (see
//! [`forest::TreeEnsemble`]). Artifacts are validated when loaded, so that inference itself can
//! only fail on a feature layout mismatch.

pub mod forest;
pub mod linear;

use std::{fmt, fs::File, io, io::BufReader, path::Path};

use log::debug;
use serde::Deserialize;

use crate::model::{forest::TreeEnsemble, linear::LinearModel};
use crate::seq::features::FeatureRecord;

pub const FORMAT_VERSION: u32 = 1;

/// Anything that maps one row of features to a scalar. Implementations are immutable once built,
/// hence shareable between threads.
pub trait Regressor: Send + Sync {
    fn predict_row(&self, row: &[f64]) -> f64;

    // Short, human-readable description, for logs.
    fn describe(&self) -> String;
}

#[derive(Debug)]
pub enum ModelError {
    Io(io::Error),
    Json(serde_json::Error),
    UnsupportedVersion(u32),
    Invalid(String),
}

impl From<io::Error> for ModelError {
    fn from(e: io::Error) -> Self {
        ModelError::Io(e)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Json(e)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(e) => write!(f, "I/O error: {}", e),
            ModelError::Json(e) => write!(f, "malformed artifact: {}", e),
            ModelError::UnsupportedVersion(v) => write!(
                f,
                "unsupported artifact version {} (expected {})",
                v, FORMAT_VERSION
            ),
            ModelError::Invalid(msg) => write!(f, "invalid model: {}", msg),
        }
    }
}

/// Per-request inference failures. Both denote a mismatch between the record this program builds
/// and what the model was fitted on, never a user mistake.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    NonFiniteInput {
        column: String,
    },
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::SchemaMismatch { expected, found } => {
                let first_diff = expected
                    .iter()
                    .zip(found.iter())
                    .position(|(e, g)| e != g)
                    .unwrap_or(expected.len().min(found.len()));
                write!(
                    f,
                    "feature layout mismatch: model expects {} columns, got {} (first difference at column {})",
                    expected.len(),
                    found.len(),
                    first_diff
                )
            }
            InferenceError::NonFiniteInput { column } => {
                write!(f, "non-finite value in feature column {}", column)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    format_version: u32,
    #[serde(default)]
    target: Option<String>,
    feature_names: Vec<String>,
    model: ModelSpec,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ModelSpec {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

/// A loaded, validated model together with the column layout it was fitted on.
pub struct RegressionModel {
    feature_names: Vec<String>,
    target: Option<String>,
    estimator: Box<dyn Regressor>,
}

impl fmt::Debug for RegressionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegressionModel")
            .field("feature_names", &self.feature_names)
            .field("target", &self.target)
            .field("estimator", &self.estimator.describe())
            .finish()
    }
}

impl RegressionModel {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let file = File::open(path.as_ref())?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        Self::from_artifact(artifact)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_value(value)?;
        Self::from_artifact(artifact)
    }

    /// Wraps an arbitrary estimator; the caller vouches for its validity.
    pub fn from_estimator(feature_names: Vec<String>, estimator: Box<dyn Regressor>) -> Self {
        RegressionModel {
            feature_names,
            target: None,
            estimator,
        }
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.format_version != FORMAT_VERSION {
            return Err(ModelError::UnsupportedVersion(artifact.format_version));
        }
        let n_features = artifact.feature_names.len();
        if n_features == 0 {
            return Err(ModelError::Invalid(String::from("no feature names")));
        }
        let estimator: Box<dyn Regressor> = match artifact.model {
            ModelSpec::Linear(linear) => {
                linear.validate(n_features)?;
                Box::new(linear)
            }
            ModelSpec::TreeEnsemble(ensemble) => {
                ensemble.validate(n_features)?;
                Box::new(ensemble)
            }
        };
        debug!("Loaded model: {}", estimator.describe());
        Ok(RegressionModel {
            feature_names: artifact.feature_names,
            target: artifact.target,
            estimator,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn describe(&self) -> String {
        self.estimator.describe()
    }

    pub fn expect_columns(&self, n_features: usize) -> Result<(), ModelError> {
        if self.feature_names.len() != n_features {
            return Err(ModelError::Invalid(format!(
                "model has {} feature columns, {} expected",
                self.feature_names.len(),
                n_features
            )));
        }
        Ok(())
    }

    /// Predicts one row. The record's columns must be exactly (names and order) those the model
    /// was fitted on. The output is passed through as is.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, InferenceError> {
        if record.names() != self.feature_names.as_slice() {
            return Err(InferenceError::SchemaMismatch {
                expected: self.feature_names.clone(),
                found: record.names().to_vec(),
            });
        }
        if let Some((name, _)) = record.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InferenceError::NonFiniteInput {
                column: name.to_string(),
            });
        }
        Ok(self.estimator.predict_row(record.values()))
    }
}
