use super::stats::ProcessingStats;
use super::sequence::Sequence;
use anyhow::Result;

pub trait SequenceProcessor {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()>;
    fn get_min_length(&self) -> usize;
    fn update_progress(&mut self, stats: &ProcessingStats);
    fn finalize(&mut self, _stats: &ProcessingStats) -> Result<()> {
        Ok(())
    }
}
