// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Tree ensembles: random forests (trees averaged) and gradient boosting (trees summed and scaled
//! by the learning rate).

use serde::{Deserialize, Serialize};

use crate::model::{ModelError, Regressor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Mean,
    Sum,
}

// A split sends a row to `left` when row[feature] <= threshold. Nodes are stored flat, children
// after their parent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(String::from("empty tree"));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= n_features {
                    return Err(format!("node {}: feature {} out of range", idx, feature));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {}: non-finite threshold", idx));
                }
                // Children must come after their parent: guarantees that evaluation terminates.
                for child in [*left, *right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(format!("node {}: bad child index {}", idx, child));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

fn default_learning_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeEnsemble {
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsemble {
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Invalid(String::from("ensemble has no trees")));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|msg| ModelError::Invalid(format!("tree {}: {}", i, msg)))?;
        }
        Ok(())
    }
}

impl Regressor for TreeEnsemble {
    fn predict_row(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.evaluate(row)).sum();
        match self.aggregation {
            Aggregation::Mean => self.base_score + total / self.trees.len() as f64,
            Aggregation::Sum => self.base_score + self.learning_rate * total,
        }
    }

    fn describe(&self) -> String {
        let kind = match self.aggregation {
            Aggregation::Mean => "random forest",
            Aggregation::Sum => "gradient boosting",
        };
        let n_nodes: usize = self.trees.iter().map(|t| t.nodes.len()).sum();
        format!("{}, {} trees, {} nodes", kind, self.trees.len(), n_nodes)
    }
}
