// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod clean;
pub mod descriptors;
pub mod fasta;
pub mod features;
pub mod record;
mod tables;
