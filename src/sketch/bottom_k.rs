use crate::error::SketchError;

/// Value reported for slots that have not been filled yet.
pub const EMPTY_SLOT: u64 = 0;

/// Fixed-capacity set of the smallest distinct hash values seen so far.
///
/// Filled values are kept sorted ascending in `hashes`; the remaining
/// `capacity - hashes.len()` slots are unfilled and read back as
/// [`EMPTY_SLOT`]. Tracking the filled count separately means a slot is never
/// mistaken for a stored value. A hash of exactly zero is still rejected so
/// that the padded view stays unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomK {
    capacity: usize,
    hashes: Vec<u64>,
}

impl BottomK {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            hashes: Vec::with_capacity(capacity),
        }
    }

    /// Build from values that are already a valid bottom-k set: strictly
    /// ascending, free of [`EMPTY_SLOT`], and no more than `capacity` of them.
    pub fn from_sorted(capacity: usize, values: Vec<u64>) -> Result<Self, SketchError> {
        if values.len() > capacity {
            return Err(SketchError::SketchOverflow {
                len: values.len(),
                capacity,
            });
        }
        if values.contains(&EMPTY_SLOT) {
            return Err(SketchError::SentinelValue);
        }
        for pair in values.windows(2) {
            if pair[0] == pair[1] {
                return Err(SketchError::DuplicateHash(pair[0]));
            }
            if pair[0] > pair[1] {
                return Err(SketchError::UnsortedSketch);
            }
        }
        Ok(Self {
            capacity,
            hashes: values,
        })
    }

    /// Offer one hash. Returns true when the retained set changed.
    pub fn insert(&mut self, hash: u64) -> bool {
        if hash == EMPTY_SLOT || self.capacity == 0 {
            return false;
        }

        let pos = match self.hashes.binary_search(&hash) {
            Ok(_) => return false,
            Err(pos) => pos,
        };

        if self.hashes.len() < self.capacity {
            self.hashes.insert(pos, hash);
            return true;
        }

        // full: only a value below the current maximum gets in
        if pos < self.hashes.len() {
            self.hashes.pop();
            self.hashes.insert(pos, hash);
            return true;
        }

        false
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.hashes.len() == self.capacity
    }

    /// Filled values, ascending.
    pub fn values(&self) -> &[u64] {
        &self.hashes
    }

    /// Largest retained value, if any slot is filled.
    pub fn max(&self) -> Option<u64> {
        self.hashes.last().copied()
    }

    pub fn contains(&self, hash: u64) -> bool {
        hash != EMPTY_SLOT && self.hashes.binary_search(&hash).is_ok()
    }

    /// All `capacity` slots: filled values ascending, then [`EMPTY_SLOT`] padding.
    pub fn slots(&self) -> impl Iterator<Item = u64> + '_ {
        self.hashes
            .iter()
            .copied()
            .chain(std::iter::repeat(EMPTY_SLOT).take(self.capacity - self.hashes.len()))
    }
}

impl Extend<u64> for BottomK {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for hash in iter {
            self.insert(hash);
        }
    }
}
