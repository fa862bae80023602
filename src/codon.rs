//! Codon: an ordered triple of nucleotide symbols.
//!
//! A [`Codon`] is the unit the genetic-code table keys on. It can be built
//! from components, parsed from three characters, or read out of a symbol
//! buffer at an offset. Reading a whole frame is an explicit strided walk
//! ([`codons_in_frame`]); the behavior is identical to reinterpreting the
//! buffer in bulk, without the aliasing proof that would require.

use std::str::FromStr;

use crate::error::{FormatError, RangeError};
use crate::nucleotide::NucleotideSymbol;

/// An ordered triple of nucleotide symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Codon([NucleotideSymbol; 3]);

impl Codon {
    /// Creates a codon from its three positions.
    pub fn new(first: NucleotideSymbol, second: NucleotideSymbol, third: NucleotideSymbol) -> Self {
        Self([first, second, third])
    }

    /// Reads the codon starting at `start` in `buffer`.
    pub fn from_buffer(buffer: &[NucleotideSymbol], start: usize) -> Result<Self, RangeError> {
        if start + 3 > buffer.len() {
            return Err(RangeError::CodonOutOfBounds {
                start,
                length: buffer.len(),
            });
        }
        Ok(Self([buffer[start], buffer[start + 1], buffer[start + 2]]))
    }

    /// The symbol at position 0–2.
    pub fn at(self, index: usize) -> NucleotideSymbol {
        self.0[index]
    }

    /// True iff all three positions are unambiguous single bases.
    pub fn is_concrete(self) -> bool {
        self.0.iter().all(|symbol| symbol.is_concrete())
    }

    /// Lazily enumerates the concrete codons contained in this codon, the
    /// Cartesian product of each position's concrete-base set (at most 64,
    /// commonly one). The result is not deduplicated.
    pub fn decompose(self) -> impl Iterator<Item = Codon> {
        let [first, second, third] = self.0;
        first.decompose().flat_map(move |a| {
            second
                .decompose()
                .flat_map(move |b| third.decompose().map(move |c| Codon([a, b, c])))
        })
    }
}

impl FromStr for Codon {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, FormatError> {
        let mut chars = text.chars();
        let (Some(a), Some(b), Some(c), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return Err(FormatError::CodonLength(text.chars().count()));
        };
        Ok(Self([
            NucleotideSymbol::parse(a)?,
            NucleotideSymbol::parse(b)?,
            NucleotideSymbol::parse(c)?,
        ]))
    }
}

impl std::fmt::Display for Codon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Reads every complete codon of the frame starting at `offset`
/// (positions `offset`, `offset+3`, …). Trailing symbols that do not fill a
/// codon are dropped.
pub fn codons_in_frame(buffer: &[NucleotideSymbol], offset: usize) -> Vec<Codon> {
    if offset >= buffer.len() {
        return Vec::new();
    }
    buffer[offset..]
        .chunks_exact(3)
        .map(|chunk| Codon([chunk[0], chunk[1], chunk[2]]))
        .collect()
}
