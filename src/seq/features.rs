// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::izip;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::seq::descriptors::{DescriptorVector, DESCRIPTOR_COUNT};

pub const FEATURE_COUNT: usize = 2 * DESCRIPTOR_COUNT;

pub const SUFFIX_A: &str = "_A";
pub const SUFFIX_B: &str = "_B";

// The 16 model columns: for each descriptor name, `<name>_A` then `<name>_B`.
pub fn feature_column_names() -> Vec<String> {
    DescriptorVector::NAMES
        .iter()
        .flat_map(|name| [format!("{name}{SUFFIX_A}"), format!("{name}{SUFFIX_B}")])
        .collect()
}

/// One row of model input: the descriptors of both proteins, interleaved per descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRecord {
    pub fn assemble(a: &DescriptorVector, b: &DescriptorVector) -> Self {
        let (names, values): (Vec<String>, Vec<f64>) =
            izip!(DescriptorVector::NAMES, a.values(), b.values())
                .flat_map(|(name, va, vb)| {
                    [
                        (format!("{name}{SUFFIX_A}"), va),
                        (format!("{name}{SUFFIX_B}"), vb),
                    ]
                })
                .unzip();
        FeatureRecord { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names.iter().map(String::as_str).zip(self.values.iter().copied())
    }
}

// Serialized as a JSON object whose keys keep the column order.
impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
