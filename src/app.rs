// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use log::{error, info, warn};

use crate::predictor::{IdentityPredictor, PipelineError, Prediction};
use crate::seq::features::feature_column_names;

pub const COMPUTING_MSG: &str = "Analyzing sequences and predicting...";

// Idle: waiting for the user. Computing: a prediction was requested and runs (synchronously)
// before the next event is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Computing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

// Simple, 1-line message (possibly just "")
pub struct CurrentMessage {
    pub prefix: String,
    pub message: String,
    pub kind: MessageKind,
}

pub struct App {
    predictor: IdentityPredictor,
    phase: Phase,
    last_prediction: Option<Prediction>,
    banner: Option<String>,
    current_msg: CurrentMessage,
}

impl App {
    pub fn new(predictor: IdentityPredictor, banner: Option<String>) -> Self {
        let cur_msg = CurrentMessage {
            prefix: String::from(""),
            message: String::from(""),
            kind: MessageKind::Info,
        };
        App {
            predictor,
            phase: Phase::Idle,
            last_prediction: None,
            banner,
            current_msg: cur_msg,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_computing(&self) -> bool {
        self.phase == Phase::Computing
    }

    pub fn result_line(&self) -> Option<String> {
        self.last_prediction.as_ref().map(Prediction::score_line)
    }

    // Idle -> Computing. Ignored if a prediction is already pending.
    pub fn begin_prediction(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Computing;
            self.info_msg(COMPUTING_MSG);
        }
    }

    // Runs the whole pipeline on the two raw inputs, then goes back to Idle. Never fails: every
    // outcome ends up either as the result line or in the message bar.
    pub fn predict(&mut self, raw_a: &str, raw_b: &str) {
        let outcome = self.predictor.predict(raw_a, raw_b);
        self.phase = Phase::Idle;
        match outcome {
            Ok(prediction) => {
                info!("{}", prediction.score_line());
                // Degenerate (empty after cleaning) inputs are accepted silently here; only the log
                // and strict mode say anything about them.
                self.clear_msg();
                self.last_prediction = Some(prediction);
            }
            Err(e) => {
                self.last_prediction = None;
                if e.is_user_error() {
                    warn!("[user] {}", e);
                    self.warning_msg(e.to_string());
                } else {
                    error!("[integration] {}", e);
                    match e {
                        PipelineError::Inference(_) => {
                            self.error_msg("Prediction failed: the model does not accept these features.")
                        }
                        _ => self.error_msg(format!("Prediction failed: {}", e)),
                    }
                }
            }
        }
    }

    pub fn output_info(&self) {
        let model = self.predictor.model();
        println!("model: {}", model.describe());
        println!("target: {}", model.target().unwrap_or("-"));
        println!("validation: {}", self.predictor.policy());
        println!(
            "layout: {}",
            if model.feature_names() == feature_column_names().as_slice() {
                "ok"
            } else {
                "MISMATCH"
            }
        );
        for name in model.feature_names() {
            println!("  {}", name);
        }
    }

    // Messages

    pub fn current_message(&self) -> &CurrentMessage {
        &self.current_msg
    }

    pub fn clear_msg(&mut self) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: String::from(""),
            kind: MessageKind::Info,
        }
    }

    pub fn info_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from(""),
            message: msg.into(),
            kind: MessageKind::Info,
        };
    }

    pub fn warning_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("WARNING: "),
            message: msg.into(),
            kind: MessageKind::Warning,
        };
    }

    pub fn error_msg(&mut self, msg: impl Into<String>) {
        self.current_msg = CurrentMessage {
            prefix: String::from("ERROR: "),
            message: msg.into(),
            kind: MessageKind::Error,
        };
    }
}

#[cfg(test)]
mod tests;
