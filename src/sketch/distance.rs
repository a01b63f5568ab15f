//! MinHash distance between two fingerprints.

use super::fingerprint::Fingerprint;
use crate::error::{SketchError, SketchResult};

/// Counts behind a single directional comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Query values also present in the reference sketch.
    pub matches: usize,
    /// Query values that were tested.
    pub compared: usize,
}

impl Comparison {
    /// Estimated similarity in `[0, 1]`. Nothing compared means nothing shared.
    pub fn similarity(&self) -> f64 {
        if self.compared == 0 {
            return 0.0;
        }
        self.matches as f64 / self.compared as f64
    }

    pub fn distance(&self) -> f64 {
        1.0 - self.similarity()
    }
}

/// Test the smallest values of `query` for membership in `reference`.
///
/// Only the first `min(query.sketch_size(), reference.sketch_size())` filled
/// values of `query` take part, while `reference` contributes its whole
/// sketch. Swapping the arguments can therefore change the result.
pub fn compare(query: &Fingerprint, reference: &Fingerprint) -> SketchResult<Comparison> {
    if query.kmer_size() != reference.kmer_size() {
        return Err(SketchError::KmerSizeMismatch {
            left: query.kmer_size(),
            right: reference.kmer_size(),
        });
    }

    let window = query.sketch_size().min(reference.sketch_size());
    if window == 0 {
        return Err(SketchError::EmptyComparison {
            left: query.sketch_size(),
            right: reference.sketch_size(),
        });
    }

    let hashes = query.hashes();
    let prefix = &hashes[..window.min(hashes.len())];
    let matches = prefix.iter().filter(|&&hash| reference.contains(hash)).count();

    Ok(Comparison {
        matches,
        compared: prefix.len(),
    })
}

/// Containment-style MinHash distance from `query` to `reference`.
///
/// 0 means the sketches indicate identical k-mer content, 1 means no shared
/// content was detected. Not symmetric; see [`symmetric_distance`].
pub fn distance(query: &Fingerprint, reference: &Fingerprint) -> SketchResult<f64> {
    compare(query, reference).map(|c| c.distance())
}

/// Mean of both directions of [`distance`].
pub fn symmetric_distance(a: &Fingerprint, b: &Fingerprint) -> SketchResult<f64> {
    Ok((distance(a, b)? + distance(b, a)?) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(kmer_size: usize, sketch_size: usize, hashes: &[u64]) -> Fingerprint {
        Fingerprint::from_hashes(kmer_size, sketch_size, hashes.to_vec()).unwrap()
    }

    #[test]
    fn test_identical_sketches() {
        let a = fp(21, 4, &[1, 2, 3, 4]);
        assert_eq!(distance(&a, &a.clone()).unwrap(), 0.0);
    }

    #[test]
    fn test_disjoint_sketches() {
        let a = fp(21, 4, &[1, 2, 3, 4]);
        let b = fp(21, 4, &[5, 6, 7, 8]);
        assert_eq!(distance(&a, &b).unwrap(), 1.0);
        assert_eq!(distance(&b, &a).unwrap(), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = fp(21, 4, &[1, 2, 3, 4]);
        let b = fp(21, 4, &[2, 4, 6, 8]);
        let c = compare(&a, &b).unwrap();
        assert_eq!(c, Comparison { matches: 2, compared: 4 });
        assert!((c.distance() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_prefix_is_limited_by_smaller_sketch() {
        // only [1, 2] of the larger sketch are tested
        let big = fp(21, 4, &[1, 2, 3, 4]);
        let small = fp(21, 2, &[1, 3]);
        assert_eq!(
            compare(&big, &small).unwrap(),
            Comparison { matches: 1, compared: 2 }
        );
        // both of small's values appear in big's full sketch
        assert_eq!(distance(&small, &big).unwrap(), 0.0);
    }

    #[test]
    fn test_partially_filled_query_compares_filled_slots_only() {
        let a = fp(21, 10, &[1, 2, 3]);
        let b = fp(21, 9, &[1, 2, 3]);
        assert_eq!(
            compare(&a, &b).unwrap(),
            Comparison { matches: 3, compared: 3 }
        );
        assert_eq!(distance(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_query_has_maximal_distance() {
        let empty = Fingerprint::new(21, 4).unwrap();
        let b = fp(21, 4, &[1, 2]);
        assert_eq!(distance(&empty, &b).unwrap(), 1.0);
        assert_eq!(distance(&b, &empty).unwrap(), 1.0);
    }

    #[test]
    fn test_kmer_size_mismatch() {
        let a = fp(21, 4, &[1]);
        let b = fp(17, 4, &[1]);
        assert_eq!(
            distance(&a, &b),
            Err(SketchError::KmerSizeMismatch { left: 21, right: 17 })
        );
    }

    #[test]
    fn test_zero_capacity_comparison() {
        let a = fp(21, 4, &[1]);
        let b = Fingerprint::new(21, 0).unwrap();
        assert_eq!(
            distance(&a, &b),
            Err(SketchError::EmptyComparison { left: 4, right: 0 })
        );
        assert!(distance(&b, &a).is_err());
    }

    #[test]
    fn test_symmetric_distance_averages_directions() {
        let big = fp(21, 4, &[1, 2, 3, 4]);
        let small = fp(21, 2, &[1, 3]);
        let d = symmetric_distance(&big, &small).unwrap();
        assert!((d - 0.25).abs() < 1e-12);
        assert_eq!(d, symmetric_distance(&small, &big).unwrap());
    }
}
