//! Amino acid symbol alphabet.
//!
//! An [`AminoAcidSymbol`] stores its display byte directly: `b'A'`..`b'Z'`
//! for residues, `b'*'` for the stop marker and 0 for a gap. Unlike
//! nucleotides, amino-acid ambiguity letters (B, Z, J, X) are not bit unions
//! of the standard codes, so this alphabet carries no bitwise operators;
//! combining ambiguous translations is the table-driven fold in the
//! translator module.

use crate::error::FormatError;
use crate::sequence::Symbol;

/// A single amino acid residue, gap or stop marker, coded by display byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AminoAcidSymbol(u8);

impl AminoAcidSymbol {
    pub const GAP: Self = Self(0);
    pub const A: Self = Self(b'A');
    pub const C: Self = Self(b'C');
    pub const D: Self = Self(b'D');
    pub const E: Self = Self(b'E');
    pub const F: Self = Self(b'F');
    pub const G: Self = Self(b'G');
    pub const H: Self = Self(b'H');
    pub const I: Self = Self(b'I');
    pub const K: Self = Self(b'K');
    pub const L: Self = Self(b'L');
    pub const M: Self = Self(b'M');
    pub const N: Self = Self(b'N');
    pub const P: Self = Self(b'P');
    pub const Q: Self = Self(b'Q');
    pub const R: Self = Self(b'R');
    pub const S: Self = Self(b'S');
    pub const T: Self = Self(b'T');
    pub const V: Self = Self(b'V');
    pub const W: Self = Self(b'W');
    pub const Y: Self = Self(b'Y');
    /// Selenocysteine.
    pub const U: Self = Self(b'U');
    /// D or N.
    pub const B: Self = Self(b'B');
    /// E or Q.
    pub const Z: Self = Self(b'Z');
    /// I or L.
    pub const J: Self = Self(b'J');
    /// Any residue.
    pub const X: Self = Self(b'X');
    /// Translation stop, displayed as `*`.
    pub const STOP: Self = Self(b'*');

    /// All symbol values: gap, the 20 standard residues, selenocysteine,
    /// the ambiguity codes and the stop marker.
    pub fn values() -> [Self; 27] {
        [
            Self::GAP,
            Self::A,
            Self::C,
            Self::D,
            Self::E,
            Self::F,
            Self::G,
            Self::H,
            Self::I,
            Self::K,
            Self::L,
            Self::M,
            Self::N,
            Self::P,
            Self::Q,
            Self::R,
            Self::S,
            Self::T,
            Self::V,
            Self::W,
            Self::Y,
            Self::U,
            Self::B,
            Self::Z,
            Self::J,
            Self::X,
            Self::STOP,
        ]
    }

    /// Parses a single amino acid character (case-insensitive).
    ///
    /// Accepts `-` (gap), `*` (stop) and `A`–`Z` except `O`; `J` is accepted
    /// because it is the I/L ambiguity code translations can produce.
    pub fn parse(name: char) -> Result<Self, FormatError> {
        Self::try_parse(name).ok_or(FormatError::AminoAcid(name))
    }

    /// Non-failing variant of [`parse`](Self::parse).
    pub fn try_parse(name: char) -> Option<Self> {
        match name {
            '-' => Some(Self::GAP),
            '*' => Some(Self::STOP),
            'A'..='Z' if name != 'O' => Some(Self(name as u8)),
            'a'..='z' if name != 'o' => Some(Self(name.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }

    /// The display character for this symbol.
    pub fn to_char(self) -> char {
        if self.0 == 0 {
            '-'
        } else {
            self.0 as char
        }
    }
}

impl std::fmt::Display for AminoAcidSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Symbol for AminoAcidSymbol {
    const GAP: Self = Self::GAP;

    fn to_char(self) -> char {
        AminoAcidSymbol::to_char(self)
    }
}
