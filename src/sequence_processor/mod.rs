pub mod core;
pub mod collectors;
pub mod readers;
pub mod threading;

// Re-export commonly used items
pub use collectors::SketchCollector;
pub use core::{ProcessingStats, Sequence, SequenceProcessor, SequenceReader};
pub use readers::{FastaReader, FastqReader, SequenceFile, SequenceFormat};
pub use threading::process_files;
