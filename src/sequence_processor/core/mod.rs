pub(crate) mod processor;
pub(crate) mod sequence;
pub(crate) mod stats;
pub(crate) mod reader;

pub use processor::SequenceProcessor;
pub use reader::SequenceReader;
pub use sequence::Sequence;
pub use stats::ProcessingStats;
