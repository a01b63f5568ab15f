mod fasta;
mod fastq;

pub use fasta::FastaReader;
pub use fastq::FastqReader;

use super::core::{ProcessingStats, SequenceProcessor, SequenceReader};
use anyhow::{bail, Result};
use indicatif::ProgressBar;
use std::path::Path;

const COMPRESSION_SUFFIXES: &[&str] = &["gz", "bgz", "bz2", "xz", "zst"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Fastq,
}

impl SequenceFormat {
    /// Guess the format from the file name, looking past a compression suffix.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let mut parts = name.rsplit('.');
        let mut ext = parts.next().unwrap_or_default();
        if COMPRESSION_SUFFIXES.contains(&ext) {
            ext = parts.next().unwrap_or_default();
        }

        match ext {
            "fa" | "fasta" | "fna" | "fas" => Ok(SequenceFormat::Fasta),
            "fq" | "fastq" => Ok(SequenceFormat::Fastq),
            _ => bail!(
                "Unsupported file format for {}. Must be .fa, .fasta, .fna, .fas, .fq or .fastq (optionally compressed)",
                path.display()
            ),
        }
    }
}

/// A FASTA or FASTQ reader picked from the file name.
pub enum SequenceFile {
    Fasta(FastaReader),
    Fastq(FastqReader),
}

impl SequenceFile {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(match SequenceFormat::from_path(path)? {
            SequenceFormat::Fasta => SequenceFile::Fasta(FastaReader::new(path)?),
            SequenceFormat::Fastq => SequenceFile::Fastq(FastqReader::new(path)?),
        })
    }
}

impl SequenceReader for SequenceFile {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        match self {
            SequenceFile::Fasta(reader) => reader.read_sequences(processor, progress),
            SequenceFile::Fastq(reader) => reader.read_sequences(processor, progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        let cases = vec![
            ("reads.fq", SequenceFormat::Fastq),
            ("reads.FASTQ", SequenceFormat::Fastq),
            ("reads.fastq.gz", SequenceFormat::Fastq),
            ("genome.fa", SequenceFormat::Fasta),
            ("genome.fna.zst", SequenceFormat::Fasta),
            ("dir.v2/genome.fasta.bz2", SequenceFormat::Fasta),
        ];
        for (name, expected) in cases {
            assert_eq!(SequenceFormat::from_path(Path::new(name)).unwrap(), expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        for name in ["reads.bam", "reads.gz", "notes.txt", "noext"] {
            assert!(SequenceFormat::from_path(Path::new(name)).is_err(), "{name}");
        }
    }
}
