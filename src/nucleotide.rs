//! Nucleotide symbol alphabet.
//!
//! A [`NucleotideSymbol`] is a 4-bit mask over the concrete bases {A, U, G, C}.
//! The zero mask is a gap, the full mask is `N`, and every other mask is one
//! of the IUPAC ambiguity letters (e.g. `A|U = W`). This representation makes
//! the ambiguity algebra plain bit arithmetic: union, intersection and
//! complement all operate on the mask, and `complement(x | y)` equals
//! `complement(x) | complement(y)` by construction.
//!
//! `T` parses as `U`; the crate works in RNA space throughout.

use crate::error::{FormatError, RangeError};
use crate::sequence::Symbol;

const BIT_A: u8 = 0b0001;
const BIT_U: u8 = 0b0010;
const BIT_G: u8 = 0b0100;
const BIT_C: u8 = 0b1000;
const MASK: u8 = 0b1111;

/// A nucleotide base as a 4-bit presence mask over {A, U, G, C}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NucleotideSymbol(u8);

impl NucleotideSymbol {
    pub const GAP: Self = Self(0);
    pub const A: Self = Self(BIT_A);
    pub const U: Self = Self(BIT_U);
    pub const G: Self = Self(BIT_G);
    pub const C: Self = Self(BIT_C);
    /// A or U.
    pub const W: Self = Self(BIT_A | BIT_U);
    /// A or G.
    pub const R: Self = Self(BIT_A | BIT_G);
    /// A or C.
    pub const M: Self = Self(BIT_A | BIT_C);
    /// U or G.
    pub const K: Self = Self(BIT_U | BIT_G);
    /// U or C.
    pub const Y: Self = Self(BIT_U | BIT_C);
    /// G or C.
    pub const S: Self = Self(BIT_G | BIT_C);
    /// A, U or G.
    pub const D: Self = Self(BIT_A | BIT_U | BIT_G);
    /// A, U or C.
    pub const H: Self = Self(BIT_A | BIT_U | BIT_C);
    /// A, G or C.
    pub const V: Self = Self(BIT_A | BIT_G | BIT_C);
    /// U, G or C.
    pub const B: Self = Self(BIT_U | BIT_G | BIT_C);
    /// Any base.
    pub const N: Self = Self(MASK);

    /// All 16 symbol values, gap first, then by ascending mask.
    pub fn values() -> [Self; 16] {
        [
            Self::GAP,
            Self::A,
            Self::U,
            Self::G,
            Self::C,
            Self::W,
            Self::R,
            Self::M,
            Self::K,
            Self::Y,
            Self::S,
            Self::D,
            Self::H,
            Self::V,
            Self::B,
            Self::N,
        ]
    }

    /// Parses a single IUPAC nucleotide character (case-insensitive,
    /// `T` treated as `U`, `-` as gap).
    pub fn parse(name: char) -> Result<Self, FormatError> {
        Self::try_parse(name).ok_or(FormatError::Nucleotide(name))
    }

    /// Non-failing variant of [`parse`](Self::parse).
    pub fn try_parse(name: char) -> Option<Self> {
        let value = match name.to_ascii_uppercase() {
            '-' => 0,
            'A' => BIT_A,
            'U' | 'T' => BIT_U,
            'G' => BIT_G,
            'C' => BIT_C,
            'W' => BIT_A | BIT_U,
            'R' => BIT_A | BIT_G,
            'M' => BIT_A | BIT_C,
            'K' => BIT_U | BIT_G,
            'Y' => BIT_U | BIT_C,
            'S' => BIT_G | BIT_C,
            'D' => BIT_A | BIT_U | BIT_G,
            'H' => BIT_A | BIT_U | BIT_C,
            'V' => BIT_A | BIT_G | BIT_C,
            'B' => BIT_U | BIT_G | BIT_C,
            'N' => MASK,
            _ => return None,
        };
        Some(Self(value))
    }

    /// Reconstructs a symbol from a stored byte.
    ///
    /// Values built through the public API are always masked to 4 bits; this
    /// is the defensive entry point for bytes of unknown provenance.
    pub fn try_from_bits(bits: u8) -> Result<Self, RangeError> {
        if bits > MASK {
            return Err(RangeError::SymbolValue(bits));
        }
        Ok(Self(bits))
    }

    /// The raw 4-bit mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// The IUPAC character for this symbol.
    pub fn to_char(self) -> char {
        match self.0 {
            0 => '-',
            BIT_A => 'A',
            BIT_U => 'U',
            BIT_G => 'G',
            BIT_C => 'C',
            0b0011 => 'W',
            0b0101 => 'R',
            0b1001 => 'M',
            0b0110 => 'K',
            0b1010 => 'Y',
            0b1100 => 'S',
            0b0111 => 'D',
            0b1011 => 'H',
            0b1101 => 'V',
            0b1110 => 'B',
            _ => 'N',
        }
    }

    /// The complementary symbol: A↔U, G↔C, applied per mask bit.
    pub fn complement(self) -> Self {
        let mut out = 0;
        if self.0 & BIT_A != 0 {
            out |= BIT_U;
        }
        if self.0 & BIT_U != 0 {
            out |= BIT_A;
        }
        if self.0 & BIT_G != 0 {
            out |= BIT_C;
        }
        if self.0 & BIT_C != 0 {
            out |= BIT_G;
        }
        Self(out)
    }

    /// True if this symbol denotes exactly one concrete base.
    pub fn is_concrete(self) -> bool {
        self.0.count_ones() == 1
    }

    /// The concrete bases contained in this mask, in canonical A, U, G, C
    /// order. Empty for a gap.
    pub fn decompose(self) -> impl Iterator<Item = NucleotideSymbol> {
        [Self::A, Self::U, Self::G, Self::C]
            .into_iter()
            .filter(move |base| self.0 & base.0 != 0)
    }
}

impl std::ops::BitOr for NucleotideSymbol {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for NucleotideSymbol {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::BitXor for NucleotideSymbol {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self((self.0 ^ rhs.0) & MASK)
    }
}

impl std::ops::Not for NucleotideSymbol {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl std::fmt::Display for NucleotideSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Symbol for NucleotideSymbol {
    const GAP: Self = Self::GAP;

    fn to_char(self) -> char {
        NucleotideSymbol::to_char(self)
    }
}
