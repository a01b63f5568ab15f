use crate::sequence_processor::core::reader::dispatch;
use crate::sequence_processor::core::*;
use anyhow::{anyhow, Context, Result};
use bio::io::fastq::{self, FastqRead};
use indicatif::ProgressBar;
use niffler::get_reader;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub struct FastqReader {
    reader: fastq::Reader<BufReader<Box<dyn std::io::Read>>>,
    path: PathBuf,
}

impl FastqReader {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))
            .with_context(|| format!("Failed to detect compression of {}", path.display()))?;
        Ok(Self {
            reader: fastq::Reader::new(Box::new(BufReader::with_capacity(
                1024 * 1024,
                inner_reader,
            ))),
            path: path.to_path_buf(),
        })
    }
}

impl SequenceReader for FastqReader {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();
        let mut record = fastq::Record::new();

        loop {
            self.reader
                .read(&mut record)
                .with_context(|| format!("Malformed FASTQ record in {}", self.path.display()))?;
            if record.is_empty() {
                break;
            }
            record.check().map_err(|msg| {
                anyhow!(
                    "Invalid FASTQ record '{}' in {}: {}",
                    record.id(),
                    self.path.display(),
                    msg
                )
            })?;

            let sequence = Sequence::normalized(record.id(), record.seq());
            dispatch(processor, &mut stats, &sequence);
            progress.inc(1);
        }

        processor.finalize(&stats)?;
        Ok(stats)
    }
}
