//! MinHash sketching and distance estimation for nucleotide sequences.
//!
//! The core lives in [`sketch`]: a [`Fingerprint`] keeps the bottom-k hashes
//! of every k-mer fed to it, and [`sketch::distance`] compares two of them.
//! The remaining modules wrap that core in a FASTA/FASTQ command-line tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod sequence_processor;
pub mod sketch;
mod utils;

pub use error::{SketchError, SketchResult};
pub use sketch::{distance, Fingerprint};
