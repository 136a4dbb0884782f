// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! The prediction service: raw text in, identity score out.
//!
//! An [`IdentityPredictor`] is built once at startup around a loaded model and never mutated
//! afterwards, so a single instance can serve any number of requests (from any thread).

use std::fmt;

use bitflags::bitflags;
use log::{debug, warn};

use crate::model::{InferenceError, RegressionModel};
use crate::seq::{
    clean::{clean_sequence, CleanSequence},
    descriptors::{extract_descriptors, DescriptorError, DescriptorVector},
    features::{feature_column_names, FeatureRecord},
};

pub const MISSING_INPUT_WARNING: &str = "Please input both protein sequences.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationPolicy {
    // Sequences that clean to nothing are accepted and get the degenerate (all-zero) descriptors.
    Permissive,
    // Cleaned sequences shorter than min_length are rejected.
    Strict { min_length: usize },
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPolicy::Permissive => write!(f, "permissive"),
            ValidationPolicy::Strict { min_length } => write!(f, "strict (min length {})", min_length),
        }
    }
}

// Which of the two inputs are empty.

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MissingInput: u8 {
        const ProteinA = 0b01;
        const ProteinB = 0b10;
    }
}

pub fn missing_inputs(raw_a: &str, raw_b: &str) -> MissingInput {
    let mut missing = MissingInput::empty();
    if raw_a.is_empty() {
        missing |= MissingInput::ProteinA;
    }
    if raw_b.is_empty() {
        missing |= MissingInput::ProteinB;
    }
    missing
}

#[derive(Debug)]
pub enum PipelineError {
    MissingInput(MissingInput),
    // Strict mode only.
    TooShort {
        protein: &'static str,
        length: usize,
        min_length: usize,
    },
    Descriptor(DescriptorError),
    Inference(InferenceError),
}

impl PipelineError {
    // User-caused failures, as opposed to integration (program/model) failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingInput(_) | PipelineError::TooShort { .. }
        )
    }
}

impl From<DescriptorError> for PipelineError {
    fn from(e: DescriptorError) -> Self {
        PipelineError::Descriptor(e)
    }
}

impl From<InferenceError> for PipelineError {
    fn from(e: InferenceError) -> Self {
        PipelineError::Inference(e)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::MissingInput(_) => write!(f, "{}", MISSING_INPUT_WARNING),
            PipelineError::TooShort {
                protein,
                length,
                min_length,
            } => write!(
                f,
                "{} has {} valid residue(s); at least {} required.",
                protein, length, min_length
            ),
            PipelineError::Descriptor(e) => write!(f, "{}", e),
            PipelineError::Inference(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Prediction {
    pub score: f64,
    pub clean_a: CleanSequence,
    pub clean_b: CleanSequence,
    pub descriptors_a: DescriptorVector,
    pub descriptors_b: DescriptorVector,
    pub features: FeatureRecord,
}

impl Prediction {
    pub fn score_line(&self) -> String {
        format_score(self.score)
    }
}

pub fn format_score(score: f64) -> String {
    format!("Predicted Identity Score: {:.2}%", score)
}

#[derive(Debug)]
pub struct IdentityPredictor {
    model: RegressionModel,
    policy: ValidationPolicy,
}

impl IdentityPredictor {
    pub fn new(model: RegressionModel, policy: ValidationPolicy) -> Self {
        if model.feature_names() != feature_column_names().as_slice() {
            warn!(
                "[integration] model columns {:?} differ from the descriptor layout; every prediction will fail",
                model.feature_names()
            );
        }
        IdentityPredictor { model, policy }
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    // Cleaner -> extractor (x2) -> assembler -> model.
    pub fn predict(&self, raw_a: &str, raw_b: &str) -> Result<Prediction, PipelineError> {
        let missing = missing_inputs(raw_a, raw_b);
        if !missing.is_empty() {
            return Err(PipelineError::MissingInput(missing));
        }

        let clean_a = clean_sequence(raw_a);
        let clean_b = clean_sequence(raw_b);
        debug!(
            "cleaned lengths: A {} -> {}, B {} -> {}",
            raw_a.chars().count(),
            clean_a.len(),
            raw_b.chars().count(),
            clean_b.len()
        );
        self.check("Protein A", &clean_a)?;
        self.check("Protein B", &clean_b)?;

        let descriptors_a = extract_descriptors(&clean_a)?;
        let descriptors_b = extract_descriptors(&clean_b)?;
        debug!("descriptors A: {:?}", descriptors_a);
        debug!("descriptors B: {:?}", descriptors_b);

        let features = FeatureRecord::assemble(&descriptors_a, &descriptors_b);
        let score = self.model.predict(&features)?;
        debug!("score: {}", score);

        Ok(Prediction {
            score,
            clean_a,
            clean_b,
            descriptors_a,
            descriptors_b,
            features,
        })
    }

    fn check(&self, protein: &'static str, seq: &CleanSequence) -> Result<(), PipelineError> {
        match self.policy {
            ValidationPolicy::Strict { min_length } if seq.len() < min_length => {
                Err(PipelineError::TooShort {
                    protein,
                    length: seq.len(),
                    min_length,
                })
            }
            _ => {
                if seq.is_empty() {
                    warn!(
                        "[user] {} has no valid residues; using degenerate descriptors",
                        protein
                    );
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::model::Regressor;

    struct CountingRegressor {
        calls: Arc<AtomicUsize>,
    }

    impl Regressor for CountingRegressor {
        fn predict_row(&self, row: &[f64]) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            row.len() as f64
        }

        fn describe(&self) -> String {
            String::from("counting")
        }
    }

    fn counting_predictor(policy: ValidationPolicy) -> (IdentityPredictor, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let model = RegressionModel::from_estimator(
            feature_column_names(),
            Box::new(CountingRegressor {
                calls: Arc::clone(&calls),
            }),
        );
        (IdentityPredictor::new(model, policy), calls)
    }

    #[test]
    fn test_missing_inputs_flags() {
        assert_eq!(missing_inputs("A", "C"), MissingInput::empty());
        assert_eq!(missing_inputs("", "C"), MissingInput::ProteinA);
        assert_eq!(missing_inputs("A", ""), MissingInput::ProteinB);
        assert_eq!(missing_inputs("", ""), MissingInput::all());
    }

    #[test]
    fn test_missing_input_skips_model() {
        let (predictor, calls) = counting_predictor(ValidationPolicy::Permissive);
        let err = predictor.predict("", "MKTAY").unwrap_err();
        assert!(matches!(err, PipelineError::MissingInput(m) if m == MissingInput::ProteinA));
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), MISSING_INPUT_WARNING);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_prediction_invokes_model_once() {
        let (predictor, calls) = counting_predictor(ValidationPolicy::Permissive);
        let prediction = predictor.predict("mktay", "MKTAY").unwrap();
        assert_abs_diff_eq!(prediction.score, 16.0);
        assert_eq!(prediction.clean_a, prediction.clean_b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_permissive_accepts_degenerate() {
        let (predictor, calls) = counting_predictor(ValidationPolicy::Permissive);
        let prediction = predictor.predict("12345", "MKTAY").unwrap();
        assert!(prediction.clean_a.is_empty());
        assert_eq!(prediction.descriptors_a, DescriptorVector::DEGENERATE);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_strict_rejects_short_sequences() {
        let (predictor, calls) = counting_predictor(ValidationPolicy::Strict { min_length: 5 });
        let err = predictor.predict("MKTAY", "MK-T").unwrap_err();
        match &err {
            PipelineError::TooShort {
                protein,
                length,
                min_length,
            } => {
                assert_eq!(*protein, "Protein B");
                assert_eq!(*length, 3);
                assert_eq!(*min_length, 5);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(err.is_user_error());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(predictor.predict("MKTAY", "MKTAY").is_ok());
    }

    #[test]
    fn test_integration_errors_are_not_user_errors() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut names = feature_column_names();
        names.reverse();
        let model = RegressionModel::from_estimator(
            names,
            Box::new(CountingRegressor {
                calls: Arc::clone(&calls),
            }),
        );
        let predictor = IdentityPredictor::new(model, ValidationPolicy::Permissive);
        let err = predictor.predict("MKTAY", "MKTAY").unwrap_err();
        assert!(matches!(err, PipelineError::Inference(InferenceError::SchemaMismatch { .. })));
        assert!(!err.is_user_error());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_score_formatting() {
        assert_eq!(format_score(87.456), "Predicted Identity Score: 87.46%");
        assert_eq!(format_score(-3.0), "Predicted Identity Score: -3.00%");
    }
}
