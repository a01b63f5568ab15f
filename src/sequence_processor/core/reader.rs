use super::processor::SequenceProcessor;
use super::stats::ProcessingStats;
use anyhow::Result;
use indicatif::ProgressBar;

/// How often, in records, readers report progress to the processor.
pub(crate) const PROGRESS_INTERVAL: u64 = 1000;

pub trait SequenceReader {
    fn read_sequences<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats>;
}

/// Hand one record to `processor`, keeping `stats` current.
pub(crate) fn dispatch<P: SequenceProcessor>(
    processor: &mut P,
    stats: &mut ProcessingStats,
    sequence: &super::Sequence,
) {
    if sequence.data.len() < processor.get_min_length() {
        stats.too_short += 1;
        return;
    }

    if let Err(e) = processor.process_sequence(sequence) {
        tracing::warn!("Error processing sequence {}: {:#}", sequence.id, e);
        stats.errors += 1;
    } else {
        stats.processed += 1;
        if stats.processed % PROGRESS_INTERVAL == 0 {
            processor.update_progress(stats);
        }
    }
}
