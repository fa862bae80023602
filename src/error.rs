//! Shared error taxonomy.
//!
//! Three families of errors cross module boundaries:
//! - [`FormatError`]: invalid symbol characters and malformed codon-table text
//! - [`RangeError`]: out-of-bounds buffer access, invalid stored symbol bytes
//! - [`ConfigError`]: translation-option and table-construction misuse
//!
//! Symbol- and buffer-level errors are never recovered locally; they propagate
//! to the caller of the failing operation. The codon-table text parser folds
//! everything it hits into a single [`FormatError::Table`] so callers see one
//! "invalid genetic code table" failure regardless of which line triggered it.

use thiserror::Error;

/// Errors raised while parsing textual sequence or table data.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unrecognized nucleotide symbol '{0}'")]
    Nucleotide(char),

    #[error("unrecognized amino acid symbol '{0}'")]
    AminoAcid(char),

    #[error("codon text must be exactly 3 nucleotide symbols, got {0} characters")]
    CodonLength(usize),

    #[error("invalid genetic code table")]
    Table(#[source] Box<TableError>),
}

/// Errors raised while reading the labeled codon-table text format.
///
/// Always surfaced wrapped inside [`FormatError::Table`].
#[derive(Error, Debug)]
pub enum TableError {
    #[error("missing required line '{0}='")]
    MissingLine(&'static str),

    #[error("line '{label}=' must carry 64 characters, got {length}")]
    LineLength { label: &'static str, length: usize },

    #[error("invalid start flag character '{0}' in 'Starts=' line")]
    StartFlag(char),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TableError {
    /// Wraps this error into the single outer failure callers observe.
    pub fn wrap(self) -> FormatError {
        FormatError::Table(Box::new(self))
    }
}

/// Errors raised by out-of-range buffer or symbol-value access.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("codon at offset {start} exceeds buffer length {length}")]
    CodonOutOfBounds { start: usize, length: usize },

    #[error("byte {0:#04x} is not a valid stored symbol value")]
    SymbolValue(u8),
}

/// Errors raised while validating translation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one start codon is required")]
    EmptyStartSet,

    #[error("start codon {0} is not a recognized start codon of the genetic code table")]
    StartNotInTable(String),

    #[error("alternative start codon {0} is not a recognized start codon of the genetic code table")]
    AltStartNotInTable(String),

    #[error("codon {0} is listed both as a start and as an alternative start")]
    OverlappingStarts(String),

    #[error("codon {0} is already assigned in the genetic code table")]
    DuplicateCodon(String),

    #[error("unknown NCBI genetic code table id {0}")]
    UnknownTable(u8),
}
