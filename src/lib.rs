// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Predicts the sequence identity score of two proteins from their physico-chemical descriptors.

pub mod app;
pub mod config;
pub mod errors;
pub mod model;
pub mod predictor;
mod runner;
pub mod seq;
pub mod ui;

pub use crate::app::App;
use crate::errors::ProtidError;

pub fn run() -> Result<(), ProtidError> {
    runner::run()
}
