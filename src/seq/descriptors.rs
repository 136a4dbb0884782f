// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Physicochemical descriptors of a single protein sequence.
//!
//! The definitions are the classical ProtParam ones (Kyte-Doolittle GRAVY, Bjellqvist-style pI by
//! bisection, Guruprasad instability index, average molecular weight, and residue-class secondary
//! structure fractions), so that models fitted on descriptors produced by the usual tools can be
//! fed from here.

use std::fmt;

use serde::Serialize;

use crate::seq::{
    clean::CleanSequence,
    tables::{
        aa_index, pk_cterm, pk_nterm, AVERAGE_MASS, DIWV, KYTE_DOOLITTLE, PK_C, PK_D, PK_E, PK_H,
        PK_K, PK_R, PK_Y, WATER_MASS,
    },
};

pub const DESCRIPTOR_COUNT: usize = 8;

// Indices into composition counts (see tables::aa_index()).
const IDX_C: usize = 1;
const IDX_D: usize = 2;
const IDX_E: usize = 3;
const IDX_H: usize = 6;
const IDX_K: usize = 8;
const IDX_R: usize = 14;
const IDX_Y: usize = 19;

const AROMATIC: &[u8] = b"FWY";
const HELIX_FORMERS: &[u8] = b"VIYFWL";
const TURN_FORMERS: &[u8] = b"NPGS";
const SHEET_FORMERS: &[u8] = b"EMAL";

// Isoelectric point search.
const PI_START: f64 = 7.775;
const PI_MIN: f64 = 4.05;
const PI_MAX: f64 = 12.0;
const PI_PRECISION: f64 = 1e-4;

/// The eight descriptors of one sequence. Field order is the column order expected by the model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DescriptorVector {
    pub gravy: f64,
    pub isoelectric_point: f64,
    pub aromaticity: f64,
    pub instability_index: f64,
    pub molecular_weight: f64,
    pub helix: f64,
    pub turn: f64,
    pub sheet: f64,
}

impl DescriptorVector {
    pub const NAMES: [&'static str; DESCRIPTOR_COUNT] = [
        "gravy",
        "isoelectric_point",
        "aromaticity",
        "instability_index",
        "molecular_weight",
        "helix",
        "turn",
        "sheet",
    ];

    /// Returned for an empty sequence, for which most descriptors are undefined.
    pub const DEGENERATE: DescriptorVector = DescriptorVector {
        gravy: 0.0,
        isoelectric_point: 0.0,
        aromaticity: 0.0,
        instability_index: 0.0,
        molecular_weight: 0.0,
        helix: 0.0,
        turn: 0.0,
        sheet: 0.0,
    };

    pub fn values(&self) -> [f64; DESCRIPTOR_COUNT] {
        [
            self.gravy,
            self.isoelectric_point,
            self.aromaticity,
            self.instability_index,
            self.molecular_weight,
            self.helix,
            self.turn,
            self.sheet,
        ]
    }

    pub fn is_degenerate(&self) -> bool {
        *self == Self::DEGENERATE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorError {
    UnknownResidue(char),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::UnknownResidue(c) => {
                write!(f, "cannot compute descriptors: unknown residue '{}'", c)
            }
        }
    }
}

/// Computes the descriptors of a cleaned sequence.
///
/// An empty sequence yields [`DescriptorVector::DEGENERATE`] (all zeros): no NaN ever leaves this
/// function.
pub fn extract_descriptors(seq: &CleanSequence) -> Result<DescriptorVector, DescriptorError> {
    if seq.is_empty() {
        return Ok(DescriptorVector::DEGENERATE);
    }
    let residues = seq.as_bytes();
    let indices: Vec<usize> = residues
        .iter()
        .map(|&aa| aa_index(aa).ok_or(DescriptorError::UnknownResidue(aa as char)))
        .collect::<Result<_, _>>()?;

    let mut counts = [0usize; 20];
    for &i in &indices {
        counts[i] += 1;
    }
    let len = indices.len() as f64;

    Ok(DescriptorVector {
        gravy: gravy(&indices),
        isoelectric_point: isoelectric_point(residues, &counts),
        aromaticity: class_fraction(&counts, AROMATIC, len),
        instability_index: instability_index(&indices),
        molecular_weight: molecular_weight(&indices),
        helix: class_fraction(&counts, HELIX_FORMERS, len),
        turn: class_fraction(&counts, TURN_FORMERS, len),
        sheet: class_fraction(&counts, SHEET_FORMERS, len),
    })
}

// The functions below assume a non-empty sequence.

fn gravy(indices: &[usize]) -> f64 {
    let total: f64 = indices.iter().map(|&i| KYTE_DOOLITTLE[i]).sum();
    total / indices.len() as f64
}

fn class_fraction(counts: &[usize; 20], class: &[u8], len: f64) -> f64 {
    class
        .iter()
        .filter_map(|&aa| aa_index(aa))
        .map(|i| counts[i] as f64 / len)
        .sum()
}

fn instability_index(indices: &[usize]) -> f64 {
    // Starts from +0.0; an empty sum() is -0.0.
    let score = indices
        .windows(2)
        .fold(0.0, |acc, w| acc + DIWV[w[0]][w[1]]);
    (10.0 / indices.len() as f64) * score
}

// Residue masses plus one water, i.e. free amino acids minus one water per peptide bond.
fn molecular_weight(indices: &[usize]) -> f64 {
    let total: f64 = indices.iter().map(|&i| AVERAGE_MASS[i]).sum();
    total - (indices.len() - 1) as f64 * WATER_MASS
}

// Net charge at a given pH: Henderson-Hasselbalch over the ionizable side chains and both termini.
fn charge_at_ph(ph: f64, counts: &[usize; 20], nterm_pk: f64, cterm_pk: f64) -> f64 {
    let positive = [
        (1.0, nterm_pk),
        (counts[IDX_K] as f64, PK_K),
        (counts[IDX_R] as f64, PK_R),
        (counts[IDX_H] as f64, PK_H),
    ];
    let negative = [
        (1.0, cterm_pk),
        (counts[IDX_D] as f64, PK_D),
        (counts[IDX_E] as f64, PK_E),
        (counts[IDX_C] as f64, PK_C),
        (counts[IDX_Y] as f64, PK_Y),
    ];
    let pos: f64 = positive
        .iter()
        .map(|&(n, pk)| n / (10f64.powf(ph - pk) + 1.0))
        .sum();
    let neg: f64 = negative
        .iter()
        .map(|&(n, pk)| n / (10f64.powf(pk - ph) + 1.0))
        .sum();
    pos - neg
}

// Bisection on the net charge. The result stays within [PI_MIN, PI_MAX].
fn isoelectric_point(residues: &[u8], counts: &[usize; 20]) -> f64 {
    let nterm_pk = pk_nterm(residues[0]);
    let cterm_pk = pk_cterm(residues[residues.len() - 1]);
    let (mut lo, mut hi) = (PI_MIN, PI_MAX);
    let mut ph = PI_START;
    while hi - lo > PI_PRECISION {
        if charge_at_ph(ph, counts, nterm_pk, cterm_pk) > 0.0 {
            lo = ph;
        } else {
            hi = ph;
        }
        ph = (lo + hi) / 2.0;
    }
    ph
}
