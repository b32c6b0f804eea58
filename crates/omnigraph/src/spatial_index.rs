//! A super-simple 2D spatial index.
//!
//! Objects are bucketed by the grid cell their coordinate falls into, so
//! "what's near here" is a single hash lookup. Same idea as bucketing
//! endpoints by cell when chaining lines, but generic over the stored
//! item.

use crate::error::{Error, Result};
use crate::geometry::Coordinate;
use std::collections::HashMap;

/// Large odd primes that spread cell coordinates across bucket keys.
const PRIME_X: i32 = 73_856_093;
const PRIME_Y: i32 = 19_349_663;

const DEFAULT_CELL_SIZE: i32 = 3;

/// Buckets of items keyed by hashed cell coordinates.
///
/// Distinct cells can hash to the same key, so a bucket may hold items
/// from more than one cell. Callers needing exact positions should store
/// them in the item.
#[derive(Debug, Clone)]
pub struct SpatialIndex<T> {
    cell_size: i32,
    index: HashMap<i32, Vec<T>>,
}

impl<T> Default for SpatialIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpatialIndex<T> {
    /// An empty index with 3x3 cells.
    pub fn new() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            index: HashMap::new(),
        }
    }

    /// An empty index with `cell_size` x `cell_size` cells.
    pub fn with_cell_size(cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(Error::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            index: HashMap::new(),
        })
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// The bucket `point` falls into. Empty if nothing is stored there.
    pub fn get(&self, point: Coordinate) -> &[T] {
        self.index
            .get(&self.hash(point))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn insert(&mut self, point: Coordinate, item: T) {
        let key = self.hash(point);
        self.index.entry(key).or_default().push(item);
    }

    /// Current bucket keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.index.keys().copied()
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Bucket key: floor each axis to its cell, then mix with the primes.
    fn hash(&self, point: Coordinate) -> i32 {
        let x = point.x.div_euclid(self.cell_size).wrapping_mul(PRIME_X);
        let y = point.y.div_euclid(self.cell_size).wrapping_mul(PRIME_Y);
        x ^ y
    }
}

impl<T: PartialEq> SpatialIndex<T> {
    /// Remove the first item equal to `item` from `point`'s bucket.
    ///
    /// Buckets left empty are dropped. Returns whether anything was removed.
    pub fn remove(&mut self, point: Coordinate, item: &T) -> bool {
        let key = self.hash(point);
        let Some(position) = self.position(key, item) else {
            return false;
        };
        self.remove_at(key, position);
        true
    }

    /// Move `item` from `from`'s bucket to `to`'s bucket.
    ///
    /// The item is inserted at `to` first and then the first equal item
    /// is removed from `from`. Returns whether the old entry was found.
    pub fn relocate(&mut self, from: Coordinate, to: Coordinate, item: T) -> bool {
        let old_key = self.hash(from);
        let new_key = self.hash(to);
        self.insert(to, item);

        // When both coordinates share a bucket, the item just inserted is a
        // candidate for removal too.
        let position = self
            .index
            .get(&new_key)
            .and_then(|bucket| bucket.last())
            .and_then(|moved| self.position(old_key, moved));

        match position {
            Some(position) => {
                self.remove_at(old_key, position);
                true
            }
            None => false,
        }
    }

    fn position(&self, key: i32, item: &T) -> Option<usize> {
        self.index.get(&key)?.iter().position(|other| other == item)
    }

    fn remove_at(&mut self, key: i32, position: usize) {
        if let Some(bucket) = self.index.get_mut(&key) {
            bucket.remove(position);
            if bucket.is_empty() {
                self.index.remove(&key);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
