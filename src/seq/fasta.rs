// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::ProtidError;
use crate::seq::record::SeqRecord;

pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<SeqRecord>, std::io::Error> {
    let mut result: Vec<SeqRecord> = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for line in reader.lines() {
        let l = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            current_record = Some(SeqRecord {
                header: hdr.trim().to_string(),
                sequence: String::new(),
            });
        } else if let Some(record) = current_record.as_mut() {
            record.sequence.push_str(l.trim_end());
        } else if !l.trim().is_empty() {
            // Sequence data before any header: treat as a header-less record.
            current_record = Some(SeqRecord {
                header: String::new(),
                sequence: l.trim_end().to_string(),
            });
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeqRecord>, std::io::Error> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

// Sequence of the first record of a FastA file, used to pre-fill an input.
pub fn first_sequence<P: AsRef<Path>>(path: P) -> Result<String, ProtidError> {
    let path = path.as_ref();
    let records = read_fasta_file(path)?;
    records
        .into_iter()
        .next()
        .map(|rec| rec.sequence)
        .ok_or_else(|| ProtidError::Format(format!("no FastA record in {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fasta_multiline() {
        let text = ">seq1 some protein\nMKTAY\nIAKQR\n>seq2\nGAATTC\n";
        let fasta = read_fasta(text.as_bytes()).unwrap();
        assert_eq!(fasta.len(), 2);
        assert_eq!(fasta[0].header, "seq1 some protein");
        assert_eq!(fasta[0].sequence, "MKTAYIAKQR");
        assert_eq!(fasta[1].header, "seq2");
        assert_eq!(fasta[1].sequence, "GAATTC");
    }

    #[test]
    fn test_read_fasta_headerless() {
        let fasta = read_fasta("MKTAY\nIAK\n".as_bytes()).unwrap();
        assert_eq!(fasta.len(), 1);
        assert_eq!(fasta[0].header, "");
        assert_eq!(fasta[0].sequence, "MKTAYIAK");
    }

    #[test]
    fn test_read_fasta_empty() {
        assert!(read_fasta("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_first_sequence_from_file() {
        let seq = first_sequence("tests/data/protein_a.fas").expect("Test file not found");
        assert!(seq.starts_with("MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ"));
    }
}
