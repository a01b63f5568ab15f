use super::bottom_k::BottomK;
use super::hasher::kmer_hashes;
use crate::error::{SketchError, SketchResult};
use sha2::{Digest, Sha256};

/// Bottom-k MinHash fingerprint of one or more sequences.
///
/// `kmer_size` and `sketch_size` are fixed at construction. The only way to
/// change the content afterwards is [`Fingerprint::sketch`], which adds the
/// k-mers of another sequence to what is already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    kmer_size: usize,
    sketch: BottomK,
}

impl Fingerprint {
    /// Create an empty fingerprint. A `sketch_size` of zero is accepted, but
    /// such a fingerprint can never be compared.
    pub fn new(kmer_size: usize, sketch_size: usize) -> SketchResult<Self> {
        if kmer_size == 0 {
            return Err(SketchError::InvalidKmerSize);
        }
        Ok(Self {
            kmer_size,
            sketch: BottomK::new(sketch_size),
        })
    }

    /// Create a fingerprint from an already computed sketch.
    ///
    /// `hashes` must be strictly ascending, non-zero, and hold at most
    /// `sketch_size` values.
    pub fn from_hashes(kmer_size: usize, sketch_size: usize, hashes: Vec<u64>) -> SketchResult<Self> {
        if kmer_size == 0 {
            return Err(SketchError::InvalidKmerSize);
        }
        Ok(Self {
            kmer_size,
            sketch: BottomK::from_sorted(sketch_size, hashes)?,
        })
    }

    /// Add every k-mer of `sequence`. Sequences shorter than the k-mer size
    /// leave the fingerprint untouched.
    pub fn sketch(&mut self, sequence: &[u8]) {
        self.sketch.extend(kmer_hashes(sequence, self.kmer_size));
    }

    pub fn kmer_size(&self) -> usize {
        self.kmer_size
    }

    pub fn sketch_size(&self) -> usize {
        self.sketch.capacity()
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.sketch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketch.is_empty()
    }

    /// Filled sketch values, ascending.
    pub fn hashes(&self) -> &[u64] {
        self.sketch.values()
    }

    /// The full fixed-length sketch, unfilled slots reported as zero.
    pub fn slots(&self) -> Vec<u64> {
        self.sketch.slots().collect()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.sketch.contains(hash)
    }

    /// See [`super::distance::distance`].
    pub fn distance(&self, other: &Fingerprint) -> SketchResult<f64> {
        super::distance::distance(self, other)
    }

    /// SHA-256 over the k-mer size and the filled sketch values.
    pub fn hexdigest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.kmer_size as u64).to_le_bytes());
        for hash in self.sketch.values() {
            hasher.update(hash.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}
