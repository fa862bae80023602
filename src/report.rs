//! ORF report output.
//!
//! Each input record's ORFs print as FASTA-like blocks, numbered `.p0`,
//! `.p1`, … in their sorted order:
//!
//! ```text
//! >seq1.p0 type:complete offset:0 strand:(+) len:3 region:1-9 start-stop:AUG-UGA
//! MK*
//! ```
//!
//! Absent boundary codons print as the `XXX` sentinel.

use std::io::Write;

use crate::codon::Codon;
use crate::orf::OrfRecord;

/// Placeholder for a boundary codon an ORF does not have.
const ABSENT_CODON: &str = "XXX";

fn codon_text(codon: Option<Codon>) -> String {
    match codon {
        Some(codon) => codon.to_string(),
        None => ABSENT_CODON.to_string(),
    }
}

/// Writes one input record's ORF blocks.
///
/// `sequence_length` is the input record's nucleotide length, used to reflect
/// minus-strand regions into plus-strand coordinates.
pub fn write_record<W: Write>(
    writer: &mut W,
    title: &str,
    sequence_length: usize,
    orfs: &[OrfRecord],
) -> std::io::Result<()> {
    for (number, orf) in orfs.iter().enumerate() {
        let (low, high) = orf.region(sequence_length);
        writeln!(
            writer,
            ">{title}.p{number} type:{state} offset:{offset} strand:({strand}) len:{len} region:{low}-{high} start-stop:{start}-{stop}",
            state = orf.state.name(),
            offset = orf.offset,
            strand = orf.strand.symbol(),
            len = orf.len(),
            start = codon_text(orf.start_codon),
            stop = codon_text(orf.end_codon),
        )?;
        writeln!(writer, "{}", orf.sequence_text())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetic_code::GeneticCodeTable;
    use crate::nucleotide::NucleotideSymbol;
    use crate::translator::{TranslationOptions, Translator};
    use std::collections::HashSet;

    fn scan(text: &str) -> (Vec<OrfRecord>, usize) {
        let table = GeneticCodeTable::default_table();
        let start = ["AUG".parse().unwrap()].into_iter().collect();
        let options = TranslationOptions::new(&table, start, HashSet::new(), false).unwrap();
        let translator = Translator::new(table, options);
        let buffer: Vec<NucleotideSymbol> =
            text.chars().map(|c| NucleotideSymbol::parse(c).unwrap()).collect();
        (translator.translate_record(&buffer), buffer.len())
    }

    #[test]
    fn test_block_format() {
        let (orfs, length) = scan("AUGAAAUGA");
        let mut out = Vec::new();
        write_record(&mut out, "seq1", length, &orfs[..1]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">seq1.p0 type:complete offset:0 strand:(+) len:3 region:1-9 start-stop:AUG-UGA\nMK*\n"
        );
    }

    #[test]
    fn test_absent_codons_use_sentinel() {
        let (orfs, length) = scan("AUGAAAUGA");
        // frame order: the minus offset-0 frame is internal on both ends
        let internal = &orfs[3];
        let mut out = Vec::new();
        write_record(&mut out, "seq1", length, std::slice::from_ref(internal)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(">seq1.p0 type:internal offset:0 strand:(-)"));
        assert!(text.contains("start-stop:XXX-XXX"));
        assert!(text.contains("region:1-9"));
    }

    #[test]
    fn test_blocks_numbered_in_order() {
        let (orfs, length) = scan("AUGAAAUGA");
        let mut out = Vec::new();
        write_record(&mut out, "s", length, &orfs).unwrap();
        let text = String::from_utf8(out).unwrap();
        for number in 0..orfs.len() {
            assert!(text.contains(&format!(">s.p{number} ")));
        }
    }

    #[test]
    fn test_empty_orf_list_writes_nothing() {
        let mut out = Vec::new();
        write_record(&mut out, "s", 0, &[]).unwrap();
        assert!(out.is_empty());
    }
}
