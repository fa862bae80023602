//! Genetic code tables and their loaders.
//!
//! A [`GeneticCodeTable`] maps the 64 concrete codons to amino acids and
//! carries the set of codons recognized as translation starts. Tables come
//! from three sources:
//! - [`GeneticCodeTable::default_table`]: the standard code with `AUG` as the
//!   only start codon
//! - [`GeneticCodeTable::ncbi_table`]: the built-in NCBI translation tables
//!   (IDs 1–33, with gaps)
//! - [`GeneticCodeTable::from_text`]: the labeled text format with `AAs=`,
//!   `Starts=` and `Base1=`/`Base2=`/`Base3=` lines of 64 aligned characters
//!
//! The stop set is derived, not stored: a codon is a stop iff the table maps
//! it to `*`.

use std::collections::{HashMap, HashSet};

use crate::amino_acid::AminoAcidSymbol;
use crate::codon::Codon;
use crate::error::{ConfigError, FormatError, TableError};
use crate::nucleotide::NucleotideSymbol;

/// Number of entries in a complete table.
const COMPLETE_SIZE: usize = 64;

/// Codon position order used by the NCBI 64-character strings (first base
/// slowest): U, C, A, G.
const NCBI_BASE_ORDER: [NucleotideSymbol; 4] = [
    NucleotideSymbol::U,
    NucleotideSymbol::C,
    NucleotideSymbol::A,
    NucleotideSymbol::G,
];

/// A codon → amino-acid mapping plus the recognized start codons.
#[derive(Debug, Clone, Default)]
pub struct GeneticCodeTable {
    table: HashMap<Codon, AminoAcidSymbol>,
    starts: HashSet<Codon>,
}

impl GeneticCodeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            table: HashMap::with_capacity(COMPLETE_SIZE),
            starts: HashSet::new(),
        }
    }

    /// The standard genetic code with `AUG` as the only start codon.
    pub fn default_table() -> Self {
        let standard = &NCBI_CODES[0];
        Self::from_ncbi_strings(standard.ncbieaa, &["AUG"])
    }

    /// Looks up a built-in NCBI translation table by its ID.
    pub fn ncbi_table(id: u8) -> Result<Self, ConfigError> {
        let code = NCBI_CODES
            .iter()
            .find(|code| code.id == id)
            .ok_or(ConfigError::UnknownTable(id))?;
        Ok(Self::from_ncbi_strings(code.ncbieaa, code.starts))
    }

    /// The IDs of all built-in NCBI tables, ascending.
    pub fn ncbi_table_ids() -> Vec<u8> {
        NCBI_CODES.iter().map(|code| code.id).collect()
    }

    fn from_ncbi_strings(ncbieaa: &str, starts: &[&str]) -> Self {
        let mut result = Self::new();
        let mut amino_acids = ncbieaa.chars();
        for first in NCBI_BASE_ORDER {
            for second in NCBI_BASE_ORDER {
                for third in NCBI_BASE_ORDER {
                    let codon = Codon::new(first, second, third);
                    // Built-in strings are 64 valid amino-acid letters.
                    let amino_acid = amino_acids
                        .next()
                        .and_then(AminoAcidSymbol::try_parse)
                        .unwrap_or(AminoAcidSymbol::X);
                    result.table.insert(codon, amino_acid);
                }
            }
        }
        for text in starts {
            if let Ok(codon) = text.parse::<Codon>() {
                result.starts.insert(codon);
            }
        }
        result
    }

    /// Parses the labeled codon-table text format.
    ///
    /// Blank lines and lines starting with `#` are ignored; every other line
    /// is `label = 64 characters`, with the label being the text before the
    /// `=`. Required labels: `AAs`, `Starts`, `Base1`, `Base2`, `Base3`. Any
    /// malformed line, invalid symbol or duplicate codon surfaces as one
    /// wrapped [`FormatError::Table`].
    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        Self::from_text_inner(text).map_err(TableError::wrap)
    }

    fn from_text_inner(text: &str) -> Result<Self, TableError> {
        let mut lines: HashMap<&str, &str> = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((label, value)) = line.split_once('=') {
                lines.insert(label.trim(), value.trim());
            }
        }

        let amino_acids = required_line(&lines, "AAs")?;
        let start_flags = required_line(&lines, "Starts")?;
        let base1 = required_line(&lines, "Base1")?;
        let base2 = required_line(&lines, "Base2")?;
        let base3 = required_line(&lines, "Base3")?;

        let mut result = Self::new();
        let positions = amino_acids
            .chars()
            .zip(start_flags.chars())
            .zip(base1.chars().zip(base2.chars()).zip(base3.chars()));
        for ((amino_char, start_flag), ((b1, b2), b3)) in positions {
            let codon = Codon::new(
                NucleotideSymbol::parse(b1).map_err(TableError::Format)?,
                NucleotideSymbol::parse(b2).map_err(TableError::Format)?,
                NucleotideSymbol::parse(b3).map_err(TableError::Format)?,
            );
            let amino_acid = AminoAcidSymbol::parse(amino_char).map_err(TableError::Format)?;
            result.add(codon, amino_acid).map_err(TableError::Config)?;
            match start_flag {
                'M' => {
                    result.starts.insert(codon);
                }
                '-' | '*' => {}
                other => return Err(TableError::StartFlag(other)),
            }
        }
        Ok(result)
    }

    /// Assigns an amino acid to a codon, expanding ambiguous codons into
    /// every concrete codon they contain. Reassigning any resulting concrete
    /// codon is a data error.
    pub fn add(&mut self, codon: Codon, amino_acid: AminoAcidSymbol) -> Result<(), ConfigError> {
        for concrete in codon.decompose() {
            if self.table.contains_key(&concrete) {
                return Err(ConfigError::DuplicateCodon(concrete.to_string()));
            }
            self.table.insert(concrete, amino_acid);
        }
        Ok(())
    }

    /// The amino acid directly assigned to a codon, if any.
    pub fn get(&self, codon: Codon) -> Option<AminoAcidSymbol> {
        self.table.get(&codon).copied()
    }

    /// True if the codon has a direct entry.
    pub fn has_codon(&self, codon: Codon) -> bool {
        self.table.contains_key(&codon)
    }

    /// The number of codon entries.
    pub fn entry_count(&self) -> usize {
        self.table.len()
    }

    /// True if every one of the 64 concrete codons is assigned.
    pub fn is_complete(&self) -> bool {
        self.table.len() == COMPLETE_SIZE
    }

    /// The codons recognized as translation starts.
    pub fn starts(&self) -> &HashSet<Codon> {
        &self.starts
    }

    /// True if the codon is in the derived stop set, i.e. has a direct entry
    /// mapping to the stop symbol.
    pub fn is_stop(&self, codon: Codon) -> bool {
        self.table.get(&codon) == Some(&AminoAcidSymbol::STOP)
    }

    /// The derived stop set: all codons mapping to the stop symbol.
    pub fn ends(&self) -> HashSet<Codon> {
        self.table
            .iter()
            .filter(|(_, amino_acid)| **amino_acid == AminoAcidSymbol::STOP)
            .map(|(codon, _)| *codon)
            .collect()
    }
}

fn required_line<'a>(
    lines: &HashMap<&'a str, &'a str>,
    label: &'static str,
) -> Result<&'a str, TableError> {
    let value = lines.get(label).copied().ok_or(TableError::MissingLine(label))?;
    let length = value.chars().count();
    if length != COMPLETE_SIZE {
        return Err(TableError::LineLength { label, length });
    }
    Ok(value)
}

struct NcbiCode {
    id: u8,
    #[allow(dead_code)]
    name: &'static str,
    /// 64 amino-acid letters in NCBI codon order (first base slowest,
    /// bases ordered U, C, A, G).
    ncbieaa: &'static str,
    /// Start codons in RNA spelling.
    starts: &'static [&'static str],
}

const NCBI_CODES: &[NcbiCode] = &[
    NcbiCode {
        id: 1,
        name: "Standard",
        ncbieaa: "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["UUG", "CUG", "AUG"],
    },
    NcbiCode {
        id: 2,
        name: "Vertebrate Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
        starts: &["AUU", "AUC", "AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 3,
        name: "Yeast Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 4,
        name: "Mold/Protozoan/Coelenterate Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["UUA", "UUG", "CUG", "AUU", "AUC", "AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 5,
        name: "Invertebrate Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
        starts: &["UUG", "AUU", "AUC", "AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 6,
        name: "Ciliate/Dasycladacean/Hexamita Nuclear",
        ncbieaa: "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 9,
        name: "Echinoderm/Flatworm Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["AUG", "GUG"],
    },
    NcbiCode {
        id: 10,
        name: "Euplotid Nuclear",
        ncbieaa: "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 11,
        name: "Bacterial/Archaeal/Plant Plastid",
        ncbieaa: "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["UUG", "CUG", "AUU", "AUC", "AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 12,
        name: "Alternative Yeast Nuclear",
        ncbieaa: "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["CUG", "AUG"],
    },
    NcbiCode {
        id: 13,
        name: "Ascidian Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
        starts: &["UUG", "AUA", "AUG", "GUG"],
    },
    NcbiCode {
        id: 14,
        name: "Alternative Flatworm Mitochondrial",
        ncbieaa: "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 15,
        name: "Blepharisma Macronuclear",
        ncbieaa: "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 16,
        name: "Chlorophycean Mitochondrial",
        ncbieaa: "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 21,
        name: "Trematode Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["AUG", "GUG"],
    },
    NcbiCode {
        id: 22,
        name: "Scenedesmus obliquus Mitochondrial",
        ncbieaa: "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 23,
        name: "Thraustochytrium Mitochondrial",
        ncbieaa: "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUU", "AUG", "GUG"],
    },
    NcbiCode {
        id: 24,
        name: "Rhabdopleuridae Mitochondrial",
        ncbieaa: "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: &["UUG", "CUG", "AUG", "GUG"],
    },
    NcbiCode {
        id: 25,
        name: "Candidate Division SR1/Gracilibacteria",
        ncbieaa: "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["UUG", "AUG", "GUG"],
    },
    NcbiCode {
        id: 26,
        name: "Pachysolen tannophilus Nuclear",
        ncbieaa: "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["CUG", "AUG"],
    },
    NcbiCode {
        id: 27,
        name: "Karyorelict Nuclear",
        ncbieaa: "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 28,
        name: "Condylostoma Nuclear",
        ncbieaa: "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 29,
        name: "Mesodinium Nuclear",
        ncbieaa: "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 30,
        name: "Peritrich Nuclear",
        ncbieaa: "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 31,
        name: "Blastocrithidia Nuclear",
        ncbieaa: "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["AUG"],
    },
    NcbiCode {
        id: 32,
        name: "Balanophoraceae Plastid",
        ncbieaa: "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["UUG", "CUG", "AUG", "GUG"],
    },
    NcbiCode {
        id: 33,
        name: "Cephalodiscidae Mitochondrial",
        ncbieaa: "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: &["UUG", "CUG", "AUG", "GUG"],
    },
];
