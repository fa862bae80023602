//! orfscan - Six-Frame ORF Translator
//!
//! Translates nucleotide sequences into candidate open reading frames across
//! both strands and all three codon-phase offsets, honoring a configurable
//! genetic-code table and start-codon policy.
//!
//! The pipeline: FASTA records ([`fasta`]) are scanned by a [`translator::Translator`]
//! built from a [`genetic_code::GeneticCodeTable`] and validated
//! [`translator::TranslationOptions`], fanning out per record over a worker
//! pool ([`dispatch`]); the resulting [`orf::OrfRecord`]s are sorted and
//! written as FASTA-like report blocks ([`report`]).
//!
//! The library performs no logging and no I/O beyond what [`fasta`] and
//! [`report`] are handed.

pub mod amino_acid;
pub mod codon;
pub mod dispatch;
pub mod error;
pub mod fasta;
pub mod genetic_code;
pub mod nucleotide;
pub mod orf;
pub mod report;
pub mod sequence;
pub mod translator;
