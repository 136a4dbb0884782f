// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Per-residue constants. Every 20-element table is indexed by aa_index(), i.e. in the order of
// CANONICAL_AMINO_ACIDS (ACDEFGHIKLMNPQRSTVWY).

pub fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

// Kyte & Doolittle (1982) hydropathy.
pub const KYTE_DOOLITTLE: [f64; 20] = [
    1.8,  // A
    2.5,  // C
    -3.5, // D
    -3.5, // E
    2.8,  // F
    -0.4, // G
    -3.2, // H
    4.5,  // I
    -3.9, // K
    3.8,  // L
    1.9,  // M
    -3.5, // N
    -1.6, // P
    -3.5, // Q
    -4.5, // R
    -0.8, // S
    -0.7, // T
    4.2,  // V
    -0.9, // W
    -1.3, // Y
];

// Average masses of the free amino acids (Da).
pub const AVERAGE_MASS: [f64; 20] = [
    89.0932,  // A
    121.1582, // C
    133.1027, // D
    147.1293, // E
    165.1891, // F
    75.0666,  // G
    155.1546, // H
    131.1729, // I
    146.1876, // K
    131.1729, // L
    149.2113, // M
    132.1179, // N
    115.1305, // P
    146.1445, // Q
    174.201,  // R
    105.0926, // S
    119.1192, // T
    117.1463, // V
    204.2252, // W
    181.1885, // Y
];

pub const WATER_MASS: f64 = 18.0153;

// pK values for the charge balance (Bjellqvist-style set, as used by ProtParam-like tools).
pub const PK_NTERM: f64 = 7.5;
pub const PK_CTERM: f64 = 3.55;
pub const PK_K: f64 = 10.0;
pub const PK_R: f64 = 12.0;
pub const PK_H: f64 = 5.98;
pub const PK_D: f64 = 4.05;
pub const PK_E: f64 = 4.45;
pub const PK_C: f64 = 9.0;
pub const PK_Y: f64 = 10.0;

// N-terminus pK, depending on the first residue.
pub fn pk_nterm(first: u8) -> f64 {
    match first {
        b'A' => 7.59,
        b'M' => 7.0,
        b'S' => 6.93,
        b'P' => 8.36,
        b'T' => 6.82,
        b'V' => 7.44,
        b'E' => 7.7,
        _ => PK_NTERM,
    }
}

// C-terminus pK, depending on the last residue.
pub fn pk_cterm(last: u8) -> f64 {
    match last {
        b'D' => 4.55,
        b'E' => 4.75,
        _ => PK_CTERM,
    }
}

// Dipeptide instability weight values (Guruprasad, Reddy & Pandit 1990). DIWV[x][y] is the weight
// of dipeptide xy.
#[rustfmt::skip]
pub const DIWV: [[f64; 20]; 20] = [
    //  A       C       D       E       F       G       H       I       K       L       M       N       P       Q       R       S       T       V       W       Y
    [  1.0,  44.94,  -7.49,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0  ], // A
    [  1.0,   1.0,   20.26,   1.0,    1.0,    1.0,   33.60,   1.0,    1.0,   20.26,  33.60,   1.0,   20.26,  -6.54,   1.0,    1.0,   33.60,  -6.54,  24.68,   1.0  ], // C
    [  1.0,   1.0,    1.0,    1.0,   -6.54,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,  20.26, -14.03,   1.0,    1.0,    1.0  ], // D
    [  1.0,  44.94,  20.26,  33.60,   1.0,    1.0,   -6.54,  20.26,   1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   20.26,   1.0,    1.0,  -14.03,   1.0  ], // E
    [  1.0,   1.0,   13.34,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   33.601], // F
    [ -7.49,  1.0,    1.0,   -6.54,   1.0,   13.34,   1.0,   -7.49,  -7.49,   1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   13.34,  -7.49 ], // G
    [  1.0,   1.0,    1.0,    1.0,   -9.37,  -9.37,   1.0,   44.94,  24.68,   1.0,    1.0,   24.68,  -1.88,   1.0,    1.0,    1.0,   -6.54,   1.0,   -1.88,  44.94 ], // H
    [  1.0,   1.0,    1.0,   44.94,   1.0,    1.0,   13.34,   1.0,   -7.49,  20.26,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0  ], // I
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,   -7.49,   1.0,   -7.49,  33.60,   1.0,   -6.54,  24.64,  33.60,   1.0,    1.0,   -7.49,   1.0,    1.0  ], // K
    [  1.0,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,    1.0,   20.26,  33.60,  20.26,   1.0,    1.0,    1.0,   24.68,   1.0  ], // L
    [ 13.34,  1.0,    1.0,    1.0,    1.0,    1.0,   58.28,   1.0,    1.0,    1.0,   -1.88,   1.0,   44.94,  -6.54,  -6.54,  44.94,  -1.88,   1.0,    1.0,   24.68 ], // M
    [  1.0,  -1.88,   1.0,    1.0,  -14.03, -14.03,   1.0,   44.94,  24.68,   1.0,    1.0,    1.0,   -1.88,  -6.54,   1.0,    1.0,   -7.49,   1.0,   -9.37,   1.0  ], // N
    [ 20.26, -6.54,  -6.54,  18.38,  20.26,   1.0,    1.0,    1.0,    1.0,    1.0,   -6.54,   1.0,   20.26,  20.26,  -6.54,  20.26,   1.0,   20.26,  -1.88,   1.0  ], // P
    [  1.0,  -6.54,  20.26,  20.26,  -6.54,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   20.26,  20.26,   1.0,   44.94,   1.0,   -6.54,   1.0,   -6.54 ], // Q
    [  1.0,   1.0,    1.0,    1.0,    1.0,   -7.49,  20.26,   1.0,    1.0,    1.0,    1.0,   13.34,  20.26,  20.26,  58.28,  44.94,   1.0,    1.0,   58.28,  -6.54 ], // R
    [  1.0,  33.60,   1.0,   20.26,   1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,    1.0,   44.94,  20.26,  20.26,  20.26,   1.0,    1.0,    1.0,    1.0  ], // S
    [  1.0,   1.0,    1.0,   20.26,  13.34,  -7.49,   1.0,    1.0,    1.0,    1.0,    1.0,  -14.03,   1.0,   -6.54,   1.0,    1.0,    1.0,    1.0,  -14.03,   1.0  ], // T
    [  1.0,   1.0,  -14.03,   1.0,    1.0,   -7.49,   1.0,    1.0,   -1.88,   1.0,    1.0,    1.0,   20.26,   1.0,    1.0,    1.0,   -7.49,   1.0,    1.0,   -6.54 ], // V
    [-14.03,  1.0,    1.0,    1.0,    1.0,   -9.37,  24.68,   1.0,    1.0,   13.34,  24.68,  13.34,   1.0,    1.0,    1.0,    1.0,  -14.03,  -7.49,   1.0,    1.0  ], // W
    [ 24.68,  1.0,   24.68,  -6.54,   1.0,   -7.49,  13.34,   1.0,    1.0,    1.0,   44.94,   1.0,   13.34,   1.0,  -15.91,   1.0,   -7.49,   1.0,   -9.37,  13.34 ], // Y
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::clean::CANONICAL_AMINO_ACIDS;

    #[test]
    fn test_aa_index_follows_alphabet() {
        for (i, aa) in CANONICAL_AMINO_ACIDS.bytes().enumerate() {
            assert_eq!(aa_index(aa), Some(i));
        }
        assert_eq!(aa_index(b'X'), None);
        assert_eq!(aa_index(b'a'), None);
    }

    #[test]
    fn test_diwv_spot_values() {
        let w = |x: u8, y: u8| DIWV[aa_index(x).unwrap()][aa_index(y).unwrap()];
        assert_eq!(w(b'A', b'C'), 44.94);
        assert_eq!(w(b'M', b'H'), 58.28);
        assert_eq!(w(b'Y', b'R'), -15.91);
        assert_eq!(w(b'W', b'A'), -14.03);
        assert_eq!(w(b'K', b'Q'), 24.64);
    }
}
