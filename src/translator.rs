//! Codon translation and the six-frame ORF scan.
//!
//! The [`Translator`] binds a [`GeneticCodeTable`] to validated
//! [`TranslationOptions`] and runs the per-frame state machine over the six
//! (strand, offset) reading frames of an input record. Stop events trigger on
//! the nucleotide codon's membership in the table's derived stop set; the
//! clear-pending and leading-partial side effects key off the translated
//! amino acid equalling the stop symbol. The two conditions coincide for
//! concrete codons but the tests are kept separate because they answer
//! different questions about ambiguous input.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::amino_acid::AminoAcidSymbol;
use crate::codon::{codons_in_frame, Codon};
use crate::error::ConfigError;
use crate::genetic_code::GeneticCodeTable;
use crate::nucleotide::NucleotideSymbol;
use crate::orf::{OrfRecord, OrfState, Strand};
use crate::sequence::{reverse_complement, SequenceBuffer};

/// Start-codon policy for a translation run. Immutable once validated.
#[derive(Debug, Clone)]
pub struct TranslationOptions {
    start: HashSet<Codon>,
    alternative_start: HashSet<Codon>,
    output_all_starts: bool,
}

impl TranslationOptions {
    /// Validates a start-codon policy against a table.
    ///
    /// The primary set must be non-empty, both sets must be recognized start
    /// codons of `table`, and the sets must not overlap.
    pub fn new(
        table: &GeneticCodeTable,
        start: HashSet<Codon>,
        alternative_start: HashSet<Codon>,
        output_all_starts: bool,
    ) -> Result<Self, ConfigError> {
        if start.is_empty() {
            return Err(ConfigError::EmptyStartSet);
        }
        for codon in &start {
            if !table.starts().contains(codon) {
                return Err(ConfigError::StartNotInTable(codon.to_string()));
            }
        }
        for codon in &alternative_start {
            if !table.starts().contains(codon) {
                return Err(ConfigError::AltStartNotInTable(codon.to_string()));
            }
            if start.contains(codon) {
                return Err(ConfigError::OverlappingStarts(codon.to_string()));
            }
        }
        Ok(Self {
            start,
            alternative_start,
            output_all_starts,
        })
    }

    /// The primary start codons.
    pub fn start(&self) -> &HashSet<Codon> {
        &self.start
    }

    /// The alternative start codons.
    pub fn alternative_start(&self) -> &HashSet<Codon> {
        &self.alternative_start
    }

    /// True if every pending start yields its own record at a stop.
    pub fn output_all_starts(&self) -> bool {
        self.output_all_starts
    }
}

/// Folds two ambiguous-translation outcomes into one amino-acid symbol.
///
/// Commutative and idempotent; the gap is the fold identity and `X` absorbs.
/// The unordered pairs {D,N}, {I,L} and {E,Q} narrow to their IUPAC codes
/// B, J and Z; every other distinct pair widens to `X`.
pub fn combine(a: AminoAcidSymbol, b: AminoAcidSymbol) -> AminoAcidSymbol {
    if a == b {
        return a;
    }
    if a == AminoAcidSymbol::GAP {
        return b;
    }
    if b == AminoAcidSymbol::GAP {
        return a;
    }
    if a == AminoAcidSymbol::X || b == AminoAcidSymbol::X {
        return AminoAcidSymbol::X;
    }
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    match (low, high) {
        (AminoAcidSymbol::D, AminoAcidSymbol::N) => AminoAcidSymbol::B,
        (AminoAcidSymbol::I, AminoAcidSymbol::L) => AminoAcidSymbol::J,
        (AminoAcidSymbol::E, AminoAcidSymbol::Q) => AminoAcidSymbol::Z,
        _ => AminoAcidSymbol::X,
    }
}

/// A genetic-code table bound to a start-codon policy, ready to scan records.
#[derive(Debug, Clone)]
pub struct Translator {
    table: GeneticCodeTable,
    options: TranslationOptions,
    stops: HashSet<Codon>,
}

impl Translator {
    pub fn new(table: GeneticCodeTable, options: TranslationOptions) -> Self {
        let stops = table.ends();
        Self {
            table,
            options,
            stops,
        }
    }

    pub fn table(&self) -> &GeneticCodeTable {
        &self.table
    }

    pub fn options(&self) -> &TranslationOptions {
        &self.options
    }

    /// Translates one codon, resolving ambiguity through the combine fold.
    ///
    /// A concrete codon with a direct entry translates directly. Otherwise
    /// the codon decomposes into its concrete codons, each is looked up
    /// (missing entries contribute `X`), and the outcomes fold together. The
    /// all-gap codon decomposes to nothing and stays a gap.
    pub fn translate(&self, codon: Codon) -> AminoAcidSymbol {
        if let Some(amino_acid) = self.table.get(codon) {
            return amino_acid;
        }
        let mut seen: Vec<Codon> = Vec::new();
        let mut folded = AminoAcidSymbol::GAP;
        for concrete in codon.decompose() {
            if seen.contains(&concrete) {
                continue;
            }
            seen.push(concrete);
            let amino_acid = self.table.get(concrete).unwrap_or(AminoAcidSymbol::X);
            folded = combine(folded, amino_acid);
            if folded == AminoAcidSymbol::X {
                break;
            }
        }
        folded
    }

    /// Runs the full six-frame scan over a plus-strand record: plus offsets
    /// 0, 1, 2 then reverse-complement offsets 0, 1, 2, in that discovery
    /// order.
    pub fn translate_record(&self, buffer: &[NucleotideSymbol]) -> Vec<OrfRecord> {
        let mut records = Vec::new();
        for offset in 0..3 {
            records.extend(self.scan_frame(buffer, Strand::Plus, offset));
        }
        let minus = reverse_complement(buffer);
        for offset in 0..3 {
            records.extend(self.scan_frame(&minus, Strand::Minus, offset));
        }
        records
    }

    /// Scans one reading frame of an already strand-adjusted buffer.
    ///
    /// Indices in the yielded records are positions in `frame`'s own
    /// coordinates; strand reflection happens at formatting time.
    pub fn scan_frame(
        &self,
        frame: &[NucleotideSymbol],
        strand: Strand,
        offset: usize,
    ) -> Vec<OrfRecord> {
        let codons = codons_in_frame(frame, offset);
        if codons.is_empty() {
            return Vec::new();
        }

        let mut amino_acids = SequenceBuffer::with_capacity(codons.len());
        for codon in &codons {
            amino_acids.push(self.translate(*codon));
        }
        let translation: Arc<[AminoAcidSymbol]> = amino_acids.to_shared();

        // Ascending iteration over pending starts is load-bearing: records
        // must come out 5'-most first.
        let mut pending: BTreeSet<usize> = BTreeSet::new();
        let mut still_before_first_stop = true;
        let mut records = Vec::new();

        for (index, codon) in codons.iter().enumerate() {
            if self.stops.contains(codon) {
                let amino_acid = translation[index];
                if pending.is_empty() {
                    if still_before_first_stop {
                        records.push(OrfRecord {
                            strand,
                            offset,
                            start_codon: None,
                            start_index: None,
                            end_codon: Some(*codon),
                            end_index: Some(index * 3 + offset + 2),
                            state: OrfState::Partial5,
                            sequence: Arc::clone(&translation),
                            range: 0..index + 1,
                        });
                    }
                } else {
                    for &start in pending.iter() {
                        records.push(OrfRecord {
                            strand,
                            offset,
                            start_codon: Some(codons[start]),
                            start_index: Some(start * 3 + offset),
                            end_codon: Some(*codon),
                            end_index: Some(index * 3 + offset + 2),
                            state: OrfState::Complete,
                            sequence: Arc::clone(&translation),
                            range: start..index + 1,
                        });
                        if self.breaks_after(codons[start]) {
                            break;
                        }
                    }
                }
                if amino_acid == AminoAcidSymbol::STOP {
                    pending.clear();
                    still_before_first_stop = false;
                }
            } else if self.is_candidate_start(*codon) {
                pending.insert(index);
            }
        }

        if !pending.is_empty() {
            for &start in pending.iter() {
                records.push(OrfRecord {
                    strand,
                    offset,
                    start_codon: Some(codons[start]),
                    start_index: Some(start * 3 + offset),
                    end_codon: None,
                    end_index: None,
                    state: OrfState::Partial3,
                    sequence: Arc::clone(&translation),
                    range: start..codons.len(),
                });
                if self.breaks_after(codons[start]) {
                    break;
                }
            }
        } else if still_before_first_stop {
            records.push(OrfRecord {
                strand,
                offset,
                start_codon: None,
                start_index: None,
                end_codon: None,
                end_index: None,
                state: OrfState::Internal,
                sequence: translation,
                range: 0..codons.len(),
            });
        }

        records
    }

    fn is_candidate_start(&self, codon: Codon) -> bool {
        self.options.start.contains(&codon) || self.options.alternative_start.contains(&codon)
    }

    /// True if emitting a record for this start ends the pending-start walk.
    /// Only primary starts break, and only when not reporting all starts.
    fn breaks_after(&self, start: Codon) -> bool {
        !self.options.output_all_starts && self.options.start.contains(&start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codons(texts: &[&str]) -> HashSet<Codon> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn buffer(text: &str) -> Vec<NucleotideSymbol> {
        text.chars().map(|c| NucleotideSymbol::parse(c).unwrap()).collect()
    }

    fn default_translator() -> Translator {
        let table = GeneticCodeTable::default_table();
        let options =
            TranslationOptions::new(&table, codons(&["AUG"]), HashSet::new(), false).unwrap();
        Translator::new(table, options)
    }

    /// Standard code with UUG/CUG/AUG all recognized as table starts.
    fn ncbi_translator(
        start: &[&str],
        alternative: &[&str],
        output_all_starts: bool,
    ) -> Translator {
        let table = GeneticCodeTable::ncbi_table(1).unwrap();
        let options =
            TranslationOptions::new(&table, codons(start), codons(alternative), output_all_starts)
                .unwrap();
        Translator::new(table, options)
    }

    #[test]
    fn test_options_validation() {
        let table = GeneticCodeTable::default_table();
        assert!(matches!(
            TranslationOptions::new(&table, HashSet::new(), HashSet::new(), false),
            Err(ConfigError::EmptyStartSet)
        ));
        // GUG is not a recognized start of the default table
        assert!(matches!(
            TranslationOptions::new(&table, codons(&["GUG"]), HashSet::new(), false),
            Err(ConfigError::StartNotInTable(_))
        ));
        assert!(matches!(
            TranslationOptions::new(&table, codons(&["AUG"]), codons(&["GUG"]), false),
            Err(ConfigError::AltStartNotInTable(_))
        ));

        let table = GeneticCodeTable::ncbi_table(1).unwrap();
        assert!(matches!(
            TranslationOptions::new(&table, codons(&["AUG"]), codons(&["AUG", "CUG"]), false),
            Err(ConfigError::OverlappingStarts(_))
        ));
        assert!(
            TranslationOptions::new(&table, codons(&["AUG"]), codons(&["CUG", "UUG"]), false)
                .is_ok()
        );
    }

    #[test]
    fn test_combine_pairs() {
        use AminoAcidSymbol as Aa;
        assert_eq!(combine(Aa::D, Aa::N), Aa::B);
        assert_eq!(combine(Aa::I, Aa::L), Aa::J);
        assert_eq!(combine(Aa::E, Aa::Q), Aa::Z);
        assert_eq!(combine(Aa::X, Aa::M), Aa::X);
        assert_eq!(combine(Aa::GAP, Aa::A), Aa::A);
        assert_eq!(combine(Aa::K, Aa::R), Aa::X);
        assert_eq!(combine(Aa::STOP, Aa::W), Aa::X);
    }

    #[test]
    fn test_combine_commutative_and_idempotent() {
        for a in AminoAcidSymbol::values() {
            assert_eq!(combine(a, a), a);
            for b in AminoAcidSymbol::values() {
                assert_eq!(combine(a, b), combine(b, a));
            }
        }
    }

    #[test]
    fn test_translate_concrete_codons() {
        let translator = default_translator();
        assert_eq!(translator.translate("AUG".parse().unwrap()), AminoAcidSymbol::M);
        assert_eq!(translator.translate("UGA".parse().unwrap()), AminoAcidSymbol::STOP);
        assert_eq!(translator.translate("UUU".parse().unwrap()), AminoAcidSymbol::F);
    }

    #[test]
    fn test_translate_ambiguous_codons() {
        let translator = default_translator();
        // AUU/AUC/AUA are all Ile
        assert_eq!(translator.translate("AUH".parse().unwrap()), AminoAcidSymbol::I);
        // AAU = N, GAU = D
        assert_eq!(translator.translate("RAU".parse().unwrap()), AminoAcidSymbol::B);
        // UAA and UAG are both stops
        assert_eq!(translator.translate("UAR".parse().unwrap()), AminoAcidSymbol::STOP);
        // CUN is Leu across the board
        assert_eq!(translator.translate("CUN".parse().unwrap()), AminoAcidSymbol::L);
        assert_eq!(translator.translate("NNN".parse().unwrap()), AminoAcidSymbol::X);
        assert_eq!(translator.translate("---".parse().unwrap()), AminoAcidSymbol::GAP);
    }

    #[test]
    fn test_scan_frame_complete() {
        let translator = default_translator();
        let frame = buffer("AUGAAAUGA");
        let records = translator.scan_frame(&frame, Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        let orf = &records[0];
        assert_eq!(orf.state, OrfState::Complete);
        assert_eq!(orf.sequence_text(), "MK*");
        assert_eq!(orf.start_codon.unwrap().to_string(), "AUG");
        assert_eq!(orf.start_index, Some(0));
        assert_eq!(orf.end_codon.unwrap().to_string(), "UGA");
        assert_eq!(orf.end_index, Some(8));
    }

    #[test]
    fn test_scan_frame_leading_partial5() {
        let translator = default_translator();
        let frame = buffer("AUGAAAUGA");
        // offset 1 reads UGA then AAU: a stop with nothing pending
        let records = translator.scan_frame(&frame, Strand::Plus, 1);
        assert_eq!(records.len(), 1);
        let orf = &records[0];
        assert_eq!(orf.state, OrfState::Partial5);
        assert_eq!(orf.sequence_text(), "*");
        assert_eq!(orf.start_index, None);
        assert_eq!(orf.end_index, Some(3));
        assert_eq!(orf.region(9), (1, 4));
    }

    #[test]
    fn test_scan_frame_trailing_partial3() {
        let translator = default_translator();
        let frame = buffer("AUGAAAUGA");
        // offset 2 reads GAA then AUG: a start with no stop after it
        let records = translator.scan_frame(&frame, Strand::Plus, 2);
        assert_eq!(records.len(), 1);
        let orf = &records[0];
        assert_eq!(orf.state, OrfState::Partial3);
        assert_eq!(orf.sequence_text(), "M");
        assert_eq!(orf.start_index, Some(5));
        assert_eq!(orf.end_index, None);
        assert_eq!(orf.region(9), (6, 9));
    }

    #[test]
    fn test_scan_frame_single_stop_yields_one_partial5() {
        let translator = default_translator();
        let frame = buffer("AAAUGAAAA");
        let records = translator.scan_frame(&frame, Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, OrfState::Partial5);
        assert_eq!(records[0].sequence_text(), "K*");
    }

    #[test]
    fn test_scan_frame_internal_when_nothing_found() {
        let translator = default_translator();
        let frame = buffer("AAACCCGGG");
        let records = translator.scan_frame(&frame, Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        let orf = &records[0];
        assert_eq!(orf.state, OrfState::Internal);
        assert_eq!(orf.sequence_text(), "KPG");
        assert_eq!(orf.start_index, None);
        assert_eq!(orf.end_index, None);
    }

    #[test]
    fn test_scan_frame_too_short_yields_nothing() {
        let translator = default_translator();
        let frame = buffer("AU");
        assert!(translator.scan_frame(&frame, Strand::Plus, 0).is_empty());
        let frame = buffer("AUGA");
        assert!(translator.scan_frame(&frame, Strand::Plus, 2).is_empty());
    }

    #[test]
    fn test_translate_record_six_frames() {
        let translator = default_translator();
        let records = translator.translate_record(&buffer("AUGAAAUGA"));
        assert_eq!(records.len(), 6);

        // frame discovery order: plus 0,1,2 then minus 0,1,2
        assert_eq!(records[0].state, OrfState::Complete);
        assert_eq!(records[0].sequence_text(), "MK*");
        assert_eq!(records[1].state, OrfState::Partial5);
        assert_eq!(records[2].state, OrfState::Partial3);

        // minus strand of AUGAAAUGA is UCAUUUCAU: no starts, no stops
        for (orf, expected) in records[3..].iter().zip(["SFH", "HF", "IS"]) {
            assert_eq!(orf.strand, Strand::Minus);
            assert_eq!(orf.state, OrfState::Internal);
            assert_eq!(orf.sequence_text(), expected);
        }
        assert_eq!(records[3].region(9), (1, 9));
    }

    #[test]
    fn test_nested_primary_starts_break_rule() {
        let translator = default_translator();
        let frame = buffer("AUGAUGUAA");
        // 5'-most start wins, the nested one is suppressed
        let records = translator.scan_frame(&frame, Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence_text(), "MM*");
        assert_eq!(records[0].start_index, Some(0));
    }

    #[test]
    fn test_nested_primary_starts_output_all() {
        let table = GeneticCodeTable::default_table();
        let options =
            TranslationOptions::new(&table, codons(&["AUG"]), HashSet::new(), true).unwrap();
        let translator = Translator::new(table, options);
        let records = translator.scan_frame(&buffer("AUGAUGUAA"), Strand::Plus, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence_text(), "MM*");
        assert_eq!(records[1].sequence_text(), "M*");
    }

    #[test]
    fn test_alternative_start_does_not_break() {
        let translator = ncbi_translator(&["AUG"], &["CUG", "UUG"], false);
        let records = translator.scan_frame(&buffer("CUGAAAAUGUAA"), Strand::Plus, 0);
        // the alternative start emits and the walk continues to the primary
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence_text(), "LKM*");
        assert_eq!(records[0].start_codon.unwrap().to_string(), "CUG");
        assert_eq!(records[1].sequence_text(), "M*");
        assert_eq!(records[1].start_codon.unwrap().to_string(), "AUG");
    }

    #[test]
    fn test_primary_start_suppresses_later_alternative() {
        let translator = ncbi_translator(&["AUG"], &["CUG", "UUG"], false);
        let records = translator.scan_frame(&buffer("AUGAAACUGUAA"), Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence_text(), "MKL*");

        let translator = ncbi_translator(&["AUG"], &["CUG", "UUG"], true);
        let records = translator.scan_frame(&buffer("AUGAAACUGUAA"), Strand::Plus, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sequence_text(), "L*");
    }

    #[test]
    fn test_stop_resets_pending_starts() {
        let translator = default_translator();
        // two stop-bounded spans, each with its own start
        let records = translator.scan_frame(&buffer("AUGUAAAUGUGA"), Strand::Plus, 0);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence_text(), "M*");
        assert_eq!(records[0].start_index, Some(0));
        assert_eq!(records[1].sequence_text(), "M*");
        assert_eq!(records[1].start_index, Some(6));
    }

    #[test]
    fn test_second_leading_stop_is_silent() {
        let translator = default_translator();
        // UAA then UGA with no start in between: only the first emits
        let records = translator.scan_frame(&buffer("UAAUGAAAA"), Strand::Plus, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, OrfState::Partial5);
        assert_eq!(records[0].sequence_text(), "*");
    }
}
