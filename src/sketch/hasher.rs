use seahash::SeaHasher;
use std::hash::Hasher;

/// Hash a single k-mer window to a 64-bit value.
///
/// The bytes are hashed as given: there is no alphabet check and no
/// reverse-complement canonicalization, so a k-mer and its reverse complement
/// land on unrelated values. SeaHash uses fixed seeds, which keeps the output
/// stable across fingerprints, processes and runs.
pub fn hash_kmer(kmer: &[u8]) -> u64 {
    let mut hasher = SeaHasher::new();
    hasher.write(kmer);
    hasher.finish()
}

/// Iterate the hashes of every length-`ksize` window of `sequence`, left to right.
///
/// Yields nothing when the sequence is shorter than `ksize`.
pub fn kmer_hashes(sequence: &[u8], ksize: usize) -> impl Iterator<Item = u64> + '_ {
    // windows(0) panics, and a zero-length k-mer carries no content
    let windows = if ksize == 0 || sequence.len() < ksize {
        sequence[..0].windows(1)
    } else {
        sequence.windows(ksize)
    };
    windows.map(hash_kmer)
}
