use crate::sequence_processor::core::reader::dispatch;
use crate::sequence_processor::core::*;
use anyhow::{Context, Result};
use bio::io::fasta::{self, FastaRead};
use indicatif::ProgressBar;
use niffler::get_reader;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub struct FastaReader {
    reader: fasta::Reader<BufReader<Box<dyn std::io::Read>>>,
    path: PathBuf,
}

impl FastaReader {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
        Ok(Self {
            reader: fasta::Reader::new(Box::new(BufReader::with_capacity(
                1024 * 1024,
                inner_reader,
            ))),
            path: path.to_path_buf(),
        })
    }
}

impl SequenceReader for FastaReader {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();
        let mut record = fasta::Record::new();

        loop {
            self.reader
                .read(&mut record)
                .with_context(|| format!("Malformed FASTA record in {}", self.path.display()))?;
            if record.is_empty() {
                break;
            }

            let sequence = Sequence::normalized(record.id(), record.seq());
            dispatch(processor, &mut stats, &sequence);
            progress.inc(1);
        }

        processor.finalize(&stats)?;
        Ok(stats)
    }
}
