//! A straight run of occupied cells.

use crate::geometry::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A straight line traced across the grid.
///
/// `step` is the unit direction the trace walked from `start` to `end`.
/// Orphan lines have an endpoint no other line touches: a dead end
/// rather than a corner of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
    step: Coordinate,
    orphan: bool,
}

impl Line {
    pub fn new(start: Coordinate, end: Coordinate, step: Coordinate) -> Self {
        Self { start, end, step, orphan: false }
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Coordinate {
        self.end
    }

    #[inline]
    pub fn step(&self) -> Coordinate {
        self.step
    }

    /// Whether either endpoint is a dead end.
    ///
    /// Only meaningful on lines returned by a finished
    /// [`LineDetection`](crate::LineDetection); freshly built lines are
    /// never orphans.
    #[inline]
    pub fn is_orphan(&self) -> bool {
        self.orphan
    }

    pub(crate) fn mark_orphan(&mut self) {
        self.orphan = true;
    }

    /// Squared distance between the endpoints.
    #[inline]
    pub fn distance(&self) -> i64 {
        self.start.distance_squared(self.end)
    }

    /// Whether `point` is collinear with `start` and `end`.
    ///
    /// This tests the infinite line, not the segment: points beyond either
    /// end still count. A zero-length line contains every point.
    pub fn contains_point(&self, point: Coordinate) -> bool {
        let (s, e, p) = (self.start, self.end, point);
        let cross = i64::from(e.x - s.x) * i64::from(p.y - s.y)
            - i64::from(e.y - s.y) * i64::from(p.x - s.x);
        cross == 0
    }

    /// Every point from `start` to `end` inclusive, walking by `step`.
    pub fn points(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let span = self.end - self.start;
        let stride = self.step.x.abs() + self.step.y.abs();
        let count = if stride == 0 {
            0
        } else {
            (span.x.abs() + span.y.abs()) / stride
        };

        (0..=count).map(move |i| self.start + self.step * i)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} step: {}", self.start, self.end, self.step)
    }
}

// ============================================================================
// TESTS
// ============================================================================
