//! Growable typed symbol buffers.
//!
//! [`SequenceBuffer`] accumulates symbols without per-element overhead:
//! appends amortize to O(1) through geometric (×4) growth, `clear` keeps the
//! allocation so one buffer can be reused across records, and `to_shared`
//! snapshots the live region into an independently owned `Arc<[S]>` that ORF
//! records can hold views into after the buffer moves on.

use std::sync::Arc;

use crate::nucleotide::NucleotideSymbol;

/// A fixed-size symbol that can live in a [`SequenceBuffer`].
pub trait Symbol: Copy + Eq {
    /// The gap value, used to fill freshly grown storage.
    const GAP: Self;

    /// The display character for this symbol.
    fn to_char(self) -> char;
}

const DEFAULT_CAPACITY: usize = 4096;
const GROWTH_FACTOR: usize = 4;

/// An append-only buffer of symbols with a logical length ≤ capacity.
#[derive(Debug, Clone)]
pub struct SequenceBuffer<S: Symbol> {
    storage: Box<[S]>,
    length: usize,
}

impl<S: Symbol> SequenceBuffer<S> {
    /// Creates a buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![S::GAP; capacity].into_boxed_slice(),
            length: 0,
        }
    }

    /// The number of symbols currently stored.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True if no symbols are stored.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The current storage capacity. Never shrinks below [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Appends one symbol.
    pub fn push(&mut self, symbol: S) {
        self.grow_for(1);
        self.storage[self.length] = symbol;
        self.length += 1;
    }

    /// Appends a run of symbols.
    pub fn extend_from_slice(&mut self, symbols: &[S]) {
        self.grow_for(symbols.len());
        self.storage[self.length..self.length + symbols.len()].copy_from_slice(symbols);
        self.length += symbols.len();
    }

    /// Resets the logical length to zero without releasing storage.
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// The live region as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.storage[..self.length]
    }

    /// Snapshots the live region into an immutable, independently owned
    /// shared sequence.
    pub fn to_shared(&self) -> Arc<[S]> {
        Arc::from(self.as_slice())
    }

    /// The display text of the live region.
    pub fn text(&self) -> String {
        self.as_slice().iter().map(|symbol| symbol.to_char()).collect()
    }

    fn grow_for(&mut self, additional: usize) {
        let required = self.length + additional;
        if required <= self.storage.len() {
            return;
        }
        let grown = self.storage.len().max(1).saturating_mul(GROWTH_FACTOR);
        let mut next = vec![S::GAP; grown.max(required)].into_boxed_slice();
        next[..self.length].copy_from_slice(&self.storage[..self.length]);
        self.storage = next;
    }
}

impl<S: Symbol> Default for SequenceBuffer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuffer<NucleotideSymbol> {
    /// Builds the reverse-complement buffer of the live region.
    pub fn reverse_complement(&self) -> Self {
        let mut out = Self::with_capacity(self.length.max(1));
        for symbol in self.as_slice().iter().rev() {
            out.push(symbol.complement());
        }
        out
    }
}

/// Reverse-complements a plain symbol slice.
pub fn reverse_complement(symbols: &[NucleotideSymbol]) -> Vec<NucleotideSymbol> {
    symbols.iter().rev().map(|symbol| symbol.complement()).collect()
}
