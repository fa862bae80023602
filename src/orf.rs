//! Open reading frame records.
//!
//! An [`OrfRecord`] is a view into one translated reading frame: which
//! strand and offset it came from, the start/stop codons that bound it (when
//! present), its completeness state and the residue range it covers. The
//! amino-acid storage is shared (`Arc<[AminoAcidSymbol]>`) so the six frames
//! of a record can hand out many ORFs without copying residues.

use std::ops::Range;
use std::sync::Arc;

use crate::amino_acid::AminoAcidSymbol;
use crate::codon::Codon;

/// The strand a reading frame was scanned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// The input sequence as given.
    Plus,
    /// The reverse complement of the input sequence.
    Minus,
}

impl Strand {
    /// The conventional one-character strand marker.
    pub fn symbol(self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

/// Completeness of an open reading frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrfState {
    /// Bounded by a start codon and a stop codon.
    Complete,
    /// No start codon; the 5' end runs off the frame.
    Partial5,
    /// No stop codon; the 3' end runs off the frame.
    Partial3,
    /// Neither boundary codon; spans the whole frame.
    Internal,
}

impl OrfState {
    /// True if the 5' boundary is open (no start codon).
    pub fn has_partial5(self) -> bool {
        matches!(self, OrfState::Partial5 | OrfState::Internal)
    }

    /// True if the 3' boundary is open (no stop codon).
    pub fn has_partial3(self) -> bool {
        matches!(self, OrfState::Partial3 | OrfState::Internal)
    }

    /// The display name used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            OrfState::Complete => "complete",
            OrfState::Partial5 => "5'partial",
            OrfState::Partial3 => "3'partial",
            OrfState::Internal => "internal",
        }
    }
}

/// One open reading frame found in a translated frame.
///
/// Indices are 0-based nucleotide positions in the scanned strand's own
/// coordinates (for the minus strand, positions in the reverse complement).
/// `range` selects this ORF's residues, stop included when one bounds it,
/// inside the shared frame translation.
#[derive(Debug, Clone)]
pub struct OrfRecord {
    pub strand: Strand,
    /// Frame offset within the strand, 0–2.
    pub offset: usize,
    /// The start codon, absent for 5'-open states.
    pub start_codon: Option<Codon>,
    /// Position of the start codon's first nucleotide.
    pub start_index: Option<usize>,
    /// The stop codon, absent for 3'-open states.
    pub end_codon: Option<Codon>,
    /// Position of the stop codon's last nucleotide.
    pub end_index: Option<usize>,
    pub state: OrfState,
    /// The whole frame's translation, shared across the frame's ORFs.
    pub sequence: Arc<[AminoAcidSymbol]>,
    /// This ORF's residue span within `sequence`.
    pub range: Range<usize>,
}

impl OrfRecord {
    /// The number of residues, bounding stop included when present.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// The residues this ORF covers, as stored.
    pub fn residues(&self) -> &[AminoAcidSymbol] {
        &self.sequence[self.range.clone()]
    }

    /// The rendered amino-acid line.
    ///
    /// When the 3' end is closed the final residue prints as `*` even if the
    /// bounding codon translated ambiguously.
    pub fn sequence_text(&self) -> String {
        let mut text: String = self.residues().iter().map(|aa| aa.to_char()).collect();
        if !self.state.has_partial3() && !text.is_empty() {
            text.pop();
            text.push('*');
        }
        text
    }

    /// The 1-based inclusive nucleotide region this ORF covers in the input
    /// sequence of length `sequence_length`.
    ///
    /// An absent 5' boundary maps to position 1 and an absent 3' boundary to
    /// the sequence length. Minus-strand positions are reflected into
    /// plus-strand coordinates (`length - position + 1`) so both strands
    /// report against the sequence as written, low bound first.
    pub fn region(&self, sequence_length: usize) -> (usize, usize) {
        let low = match self.start_index {
            Some(index) => index + 1,
            None => 1,
        };
        let high = match self.end_index {
            Some(index) => index + 1,
            None => sequence_length,
        };
        match self.strand {
            Strand::Plus => (low, high),
            Strand::Minus => (sequence_length + 1 - high, sequence_length + 1 - low),
        }
    }
}
