//! Bottom-k MinHash sketching of nucleotide sequences.

pub mod bottom_k;
pub mod distance;
pub mod fingerprint;
pub mod hasher;

pub use bottom_k::{BottomK, EMPTY_SLOT};
pub use distance::{compare, distance, symmetric_distance, Comparison};
pub use fingerprint::Fingerprint;
pub use hasher::{hash_kmer, kmer_hashes};
