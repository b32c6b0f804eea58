//! Breadth-first flood fill over a 2D grid.

use crate::geometry::Coordinate;
use crate::oracle::Oracle;
use log::debug;
use std::collections::{HashSet, VecDeque};

const NORTH: Coordinate = Coordinate::new(0, 1);
const SOUTH: Coordinate = Coordinate::new(0, -1);
const EAST: Coordinate = Coordinate::new(1, 0);
const WEST: Coordinate = Coordinate::new(-1, 0);

/// Fills every coordinate the oracle accepts that is reachable from a
/// start point.
///
/// Visited coordinates are remembered for the life of the fill, across
/// calls to [`fill`](FloodFill::fill): the oracle is never asked about the
/// same coordinate twice, so it can safely mark cells as it accepts them.
pub struct FloodFill<O> {
    oracle: O,
    queue: VecDeque<Coordinate>,
    visited: HashSet<Coordinate>,
}

impl<O: Oracle> FloodFill<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            queue: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Fill outward from `start`, returning how many coordinates were
    /// accepted (including `start` itself if it is accepted).
    pub fn fill(&mut self, start: Coordinate) -> usize {
        let mut filled = 0;
        self.check(start);

        while let Some(point) = self.queue.pop_front() {
            filled += 1;

            for step in [NORTH, SOUTH, EAST, WEST] {
                self.check(point + step);
            }
        }

        debug!("flood fill from {start}: {filled} filled");
        filled
    }

    /// Queue `point` if it's new and the oracle accepts it.
    fn check(&mut self, point: Coordinate) {
        if self.visited.insert(point) && self.oracle.check(point) {
            self.queue.push_back(point);
        }
    }

    /// Number of coordinates examined so far, accepted or not.
    pub fn visited(&self) -> usize {
        self.visited.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
