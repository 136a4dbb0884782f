// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use serde::{Deserialize, Serialize};

use crate::model::{ModelError, Regressor};

/// Ordinary linear regression, optionally preceded by standardization of the inputs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

/// x' = (x - mean) / scale. A zero scale is treated as 1 (constant column in the training set).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn transform(&self, i: usize, x: f64) -> f64 {
        let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
        (x - self.mean[i]) / scale
    }
}

impl LinearModel {
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != n_features {
            return Err(ModelError::Invalid(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                n_features
            )));
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n_features || scaler.scale.len() != n_features {
                return Err(ModelError::Invalid(format!(
                    "scaler has {} means and {} scales for {} features",
                    scaler.mean.len(),
                    scaler.scale.len(),
                    n_features
                )));
            }
        }
        let all_finite = std::iter::once(&self.intercept)
            .chain(self.coefficients.iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ModelError::Invalid(String::from("non-finite parameter")));
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict_row(&self, row: &[f64]) -> f64 {
        let dot: f64 = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(&self.coefficients)
                .enumerate()
                .map(|(i, (x, w))| scaler.transform(i, *x) * w)
                .sum(),
            None => row.iter().zip(&self.coefficients).map(|(x, w)| x * w).sum(),
        };
        self.intercept + dot
    }

    fn describe(&self) -> String {
        format!(
            "linear model, {} coefficients{}",
            self.coefficients.len(),
            if self.scaler.is_some() { ", standardized inputs" } else { "" }
        )
    }
}
