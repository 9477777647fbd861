use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of pattern ids
///
/// Uses 0-based indexing matching the dense pattern ids of the catalog.
/// Provides O(1) membership testing and efficient set operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    bits: BitVec,
}

impl PatternSet {
    /// Create a set with no patterns present
    pub fn new(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![0; pattern_count],
        }
    }

    /// Create a set containing every pattern id
    pub fn all(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![1; pattern_count],
        }
    }

    /// Number of ids the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a pattern id, ignoring ids beyond the capacity
    pub fn insert(&mut self, id: usize) {
        if id < self.capacity() {
            self.bits.set(id, true);
        }
    }

    /// Remove a pattern id, returning whether it was present
    pub fn remove(&mut self, id: usize) -> bool {
        let present = self.contains(id);
        if present {
            self.bits.set(id, false);
        }
        present
    }

    /// Test pattern membership
    pub fn contains(&self, id: usize) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every id of another set in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no patterns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count patterns in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over present ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The smallest present id
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Extract all present ids as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternSet({} patterns: {:?})", self.count(), self.to_vec())
    }
}
