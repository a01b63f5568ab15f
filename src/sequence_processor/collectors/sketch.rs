use crate::sequence_processor::core::{ProcessingStats, Sequence, SequenceProcessor};
use crate::sketch::Fingerprint;
use anyhow::Result;
use tracing::debug;

/// Feeds every record of a file into one [`Fingerprint`].
#[derive(Debug, Clone)]
pub struct SketchCollector {
    fingerprint: Fingerprint,
    bases: u64,
}

impl SketchCollector {
    pub fn new(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            bases: 0,
        }
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn into_fingerprint(self) -> Fingerprint {
        self.fingerprint
    }

    pub fn bases(&self) -> u64 {
        self.bases
    }
}

impl SequenceProcessor for SketchCollector {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.fingerprint.sketch(&sequence.data);
        self.bases += sequence.data.len() as u64;
        Ok(())
    }

    fn get_min_length(&self) -> usize {
        self.fingerprint.kmer_size()
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        debug!(
            "{} sequences sketched, {}/{} slots filled",
            stats.processed,
            self.fingerprint.filled(),
            self.fingerprint.sketch_size()
        );
    }

    fn finalize(&mut self, stats: &ProcessingStats) -> Result<()> {
        debug!(
            "Sketched {} sequences ({} bp, {} too short) into {} slots",
            stats.processed,
            self.bases,
            stats.too_short,
            self.fingerprint.filled()
        );
        Ok(())
    }
}
