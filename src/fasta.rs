//! FASTA input for nucleotide records.
//!
//! Lines starting with `>` open a new record; every other non-blank line
//! appends sequence symbols to the open record. Data before the first header
//! is ignored, bases parse case-insensitively with `T` read as `U`, and an
//! empty input yields zero records. Each new record's buffer is pre-sized to
//! the largest record seen so far, so reading many similar-length records
//! settles into a steady allocation size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::error::FormatError;
use crate::nucleotide::NucleotideSymbol;
use crate::sequence::SequenceBuffer;

/// Errors raised while reading FASTA input.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("failed to read FASTA input")]
    Io(#[from] std::io::Error),

    #[error("invalid sequence data on line {line}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
}

/// One named nucleotide record.
#[derive(Debug, Clone)]
pub struct FastaRecord {
    /// The full header text after `>`, trimmed.
    pub header: String,
    pub sequence: SequenceBuffer<NucleotideSymbol>,
}

impl FastaRecord {
    /// The header text up to the first space.
    pub fn title(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

/// Reads every record from a FASTA stream.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;
    let mut largest = 0;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                largest = largest.max(done.sequence.len());
                records.push(done);
            }
            let sequence = if largest == 0 {
                SequenceBuffer::new()
            } else {
                SequenceBuffer::with_capacity(largest)
            };
            current = Some(FastaRecord {
                header: header.trim().to_string(),
                sequence,
            });
        } else if let Some(record) = current.as_mut() {
            for character in line.chars() {
                if character.is_ascii_whitespace() {
                    continue;
                }
                let symbol = NucleotideSymbol::parse(character)
                    .map_err(|source| FastaError::Format {
                        line: number + 1,
                        source,
                    })?;
                record.sequence.push(symbol);
            }
        }
    }

    if let Some(done) = current.take() {
        records.push(done);
    }
    Ok(records)
}

/// Reads every record from a FASTA file.
pub fn read_file(path: &Path) -> Result<Vec<FastaRecord>, FastaError> {
    read_records(BufReader::new(File::open(path)?))
}
