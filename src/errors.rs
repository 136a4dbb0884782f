// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io, path::PathBuf};

use crate::model::ModelError;
use crate::predictor::PipelineError;

#[derive(Debug)]
pub enum ProtidError {
    Io(io::Error),
    Format(String),
    // The model artifact could not be loaded: always fatal at startup.
    Model { path: PathBuf, source: ModelError },
    // A single request failed (headless mode only; the TUI renders these instead).
    Request(PipelineError),
}

// These allow conversion to ProtidError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for ProtidError {
    fn from(e: io::Error) -> Self {
        ProtidError::Io(e)
    }
}

impl From<serde_json::Error> for ProtidError {
    fn from(e: serde_json::Error) -> Self {
        ProtidError::Format(e.to_string())
    }
}

impl From<PipelineError> for ProtidError {
    fn from(e: PipelineError) -> Self {
        ProtidError::Request(e)
    }
}

impl fmt::Display for ProtidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtidError::Io(e) => write!(f, "I/O error: {}", e),
            ProtidError::Format(msg) => write!(f, "Format error: {}", msg),
            ProtidError::Model { path, source } => {
                write!(f, "cannot load model {}: {}", path.display(), source)
            }
            ProtidError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProtidError {}
