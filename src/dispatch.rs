//! Parallel per-record translation with deterministic output.
//!
//! Records are independent units of work reading only the shared translator,
//! so they fan out over a rayon pool without locking. `par_iter().collect()`
//! restores input order regardless of worker completion order, and within a
//! record the ORFs are sorted by descending residue length with a stable sort
//! so ties keep their frame discovery order.

use rayon::prelude::*;
use thiserror::Error;

use crate::fasta::FastaRecord;
use crate::orf::OrfRecord;
use crate::translator::Translator;

/// Errors raised while setting up or running parallel translation.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to build the worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Sorts one record's ORFs by descending residue length.
///
/// The sort is stable, so equal-length ORFs keep their frame discovery order
/// (plus offsets 0, 1, 2 before minus offsets 0, 1, 2, 5'-most start first).
pub fn sort_by_length(orfs: &mut [OrfRecord]) {
    orfs.sort_by(|a, b| b.len().cmp(&a.len()));
}

/// Translates every record on a pool of `threads` workers (0 = all hardware
/// threads). The result is indexed like `records`, each entry holding that
/// record's sorted ORFs.
pub fn translate_all(
    translator: &Translator,
    records: &[FastaRecord],
    threads: usize,
) -> Result<Vec<Vec<OrfRecord>>, DispatchError> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let results = pool.install(|| {
        records
            .par_iter()
            .map(|record| {
                let mut orfs = translator.translate_record(record.sequence.as_slice());
                sort_by_length(&mut orfs);
                orfs
            })
            .collect()
    });
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fasta::read_records;
    use crate::genetic_code::GeneticCodeTable;
    use crate::orf::{OrfState, Strand};
    use crate::report::write_record;
    use crate::translator::TranslationOptions;
    use std::collections::HashSet;

    fn translator() -> Translator {
        let table = GeneticCodeTable::default_table();
        let start = ["AUG".parse().unwrap()].into_iter().collect();
        let options = TranslationOptions::new(&table, start, HashSet::new(), false).unwrap();
        Translator::new(table, options)
    }

    fn sample_records() -> Vec<FastaRecord> {
        let input = ">a\nAUGAAAUGA\n>b\nAUGAUGUAAAUGUGA\n>c\nAAACCCGGG\n>d\nUAAAUGAAA\n";
        read_records(input.as_bytes()).unwrap()
    }

    fn render(records: &[FastaRecord], results: &[Vec<OrfRecord>]) -> String {
        let mut out = Vec::new();
        for (record, orfs) in records.iter().zip(results) {
            write_record(&mut out, record.title(), record.sequence.len(), orfs).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sort_descending_length_stable_ties() {
        let translator = translator();
        let mut orfs = translator.translate_record(
            &"AUGAAAUGA"
                .chars()
                .map(|c| crate::nucleotide::NucleotideSymbol::parse(c).unwrap())
                .collect::<Vec<_>>(),
        );
        sort_by_length(&mut orfs);
        // lengths 3,3,3 (plus complete + three minus internals of 9nt/3aa
        // frames sort before the shorter partials), ties in discovery order
        assert_eq!(orfs[0].len(), 3);
        assert_eq!(orfs[0].state, OrfState::Complete);
        assert_eq!(orfs[0].strand, Strand::Plus);
        assert_eq!(orfs[1].state, OrfState::Internal);
        assert_eq!(orfs[1].offset, 0);
        assert!(orfs.windows(2).all(|pair| pair[0].len() >= pair[1].len()));
        assert_eq!(orfs.last().unwrap().len(), 1);
    }

    #[test]
    fn test_results_follow_input_order() {
        let records = sample_records();
        let results = translate_all(&translator(), &records, 1).unwrap();
        assert_eq!(results.len(), records.len());
        // record b's longest ORF is the minus offset-0 internal frame
        // (5 residues), ahead of its first stop-bounded span "MM*"
        assert_eq!(results[1][0].sequence_text(), "SHLHH");
        assert_eq!(results[1][0].state, OrfState::Internal);
        assert_eq!(results[1][0].strand, Strand::Minus);
        assert!(results[1].iter().any(|orf| orf.sequence_text() == "MM*"));
        // record c has no boundaries anywhere on the plus strand frame 0
        assert!(results[2].iter().all(|orf| orf.state != OrfState::Complete));
    }

    #[test]
    fn test_deterministic_across_thread_counts() {
        let records = sample_records();
        let translator = translator();
        let serial = translate_all(&translator, &records, 1).unwrap();
        let parallel = translate_all(&translator, &records, 4).unwrap();
        assert_eq!(render(&records, &serial), render(&records, &parallel));

        let all_cores = translate_all(&translator, &records, 0).unwrap();
        assert_eq!(render(&records, &serial), render(&records, &all_cores));
    }
}
