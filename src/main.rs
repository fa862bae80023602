//! orfscan - Six-Frame ORF Translator
//!
//! Scans nucleotide FASTA records across both strands and all three reading
//! frames, reporting candidate open reading frames as FASTA-like blocks.
//!
//! ## Usage
//!
//! ```bash
//! orfscan input.fasta                      # standard code, AUG starts
//! orfscan -t 2 input.fasta                 # NCBI table 2
//! orfscan -t my_code.txt input.fasta       # codon table file
//! orfscan --alt-start CUG --alt-start UUG -t 1 input.fasta
//! orfscan -j 0 -o orfs.txt input.fasta     # all cores, write to file
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use orfscan::codon::Codon;
use orfscan::dispatch;
use orfscan::fasta;
use orfscan::genetic_code::GeneticCodeTable;
use orfscan::report;
use orfscan::translator::{TranslationOptions, Translator};

/// orfscan - translate nucleotide sequences into six-frame ORF predictions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input FASTA file (reads stdin when absent)
    input: Option<PathBuf>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Genetic code: a built-in NCBI table ID (1-33, with gaps) or a path to
    /// a codon table file. An existing file wins over an ID.
    #[arg(short = 't', long = "table")]
    table: Option<String>,

    /// Primary start codon (repeatable)
    #[arg(long = "start", default_value = "AUG")]
    start: Vec<String>,

    /// Alternative start codon (repeatable). Must be a start the genetic
    /// code recognizes; does not suppress downstream primary starts.
    #[arg(long = "alt-start")]
    alt_start: Vec<String>,

    /// Report one ORF per nested start instead of stopping at the first
    /// primary start of each stop-bounded span
    #[arg(long = "output-all-starts")]
    output_all_starts: bool,

    /// Worker threads (0 = all hardware threads)
    #[arg(short = 'j', long = "threads", default_value = "1")]
    threads: usize,
}

/// Resolves -t/--table: an existing file parses as codon-table text,
/// otherwise the value must be a built-in NCBI table ID. Without the flag
/// the standard code applies, with AUG as its only start.
fn resolve_table(arg: Option<&str>) -> Result<GeneticCodeTable> {
    let Some(arg) = arg else {
        return Ok(GeneticCodeTable::default_table());
    };
    let path = Path::new(arg);
    if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read table file {}", path.display()))?;
        return GeneticCodeTable::from_text(&text)
            .with_context(|| format!("failed to parse table file {}", path.display()));
    }
    if let Ok(id) = arg.parse::<u8>() {
        return GeneticCodeTable::ncbi_table(id).context("unknown genetic code table");
    }
    anyhow::bail!("--table expects an NCBI table ID or a codon table file, got '{arg}'");
}

fn parse_codons(texts: &[String]) -> Result<HashSet<Codon>> {
    texts
        .iter()
        .map(|text| {
            text.parse::<Codon>()
                .with_context(|| format!("invalid codon '{text}'"))
        })
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = resolve_table(args.table.as_deref())?;
    let start = parse_codons(&args.start)?;
    let alternative = parse_codons(&args.alt_start)?;
    let options = TranslationOptions::new(&table, start, alternative, args.output_all_starts)
        .context("invalid start codon configuration")?;
    let translator = Translator::new(table, options);

    let records = match &args.input {
        Some(path) => fasta::read_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => fasta::read_records(io::stdin().lock()).context("failed to read stdin")?,
    };

    let results = dispatch::translate_all(&translator, &records, args.threads)?;

    let mut writer: Box<dyn Write> = if args.output == "-" {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("failed to create {}", args.output))?;
        Box::new(BufWriter::new(file))
    };
    for (record, orfs) in records.iter().zip(&results) {
        report::write_record(&mut writer, record.title(), record.sequence.len(), orfs)?;
    }
    writer.flush()?;

    if args.output != "-" {
        eprintln!("Wrote ORFs for {} records to {}", records.len(), args.output);
    }
    Ok(())
}
