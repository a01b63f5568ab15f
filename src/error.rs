use thiserror::Error;

pub type SketchResult<T> = Result<T, SketchError>;

/// Errors raised by fingerprint construction and comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SketchError {
    #[error("k-mer size must be at least 1")]
    InvalidKmerSize,

    #[error("cannot compare fingerprints built with different k-mer sizes ({left} vs {right})")]
    KmerSizeMismatch { left: usize, right: usize },

    #[error("cannot estimate distance from a zero-capacity sketch (sketch sizes {left} and {right})")]
    EmptyComparison { left: usize, right: usize },

    #[error("prebuilt sketch holds {len} values but capacity is {capacity}")]
    SketchOverflow { len: usize, capacity: usize },

    #[error("prebuilt sketch is not sorted ascending")]
    UnsortedSketch,

    #[error("prebuilt sketch repeats hash {0}")]
    DuplicateHash(u64),

    #[error("prebuilt sketch contains the reserved empty-slot value 0")]
    SentinelValue,
}
