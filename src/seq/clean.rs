// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use serde::Serialize;

/// The 20 canonical amino acids, in the order used by every per-residue table of this crate.
pub const CANONICAL_AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// A protein sequence made only of (upper-case) canonical amino acids. It can only be obtained
/// through [`clean_sequence`], so its alphabet is guaranteed. It may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CleanSequence(String);

impl CleanSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CleanSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn is_canonical(c: char) -> bool {
    matches!(
        c,
        'A' | 'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'I' | 'K' | 'L'
            | 'M' | 'N' | 'P' | 'Q' | 'R' | 'S' | 'T' | 'V' | 'W' | 'Y'
    )
}

// Upper-cases, then keeps canonical residues only. Whitespace, digits, gaps, stop codons and
// ambiguity codes (B, J, O, U, X, Z) are all dropped. Never fails.
pub fn clean_sequence(raw: &str) -> CleanSequence {
    CleanSequence(
        raw.chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| is_canonical(c))
            .collect(),
    )
}
