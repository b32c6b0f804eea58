//! A closed loop of grid coordinates.

use crate::error::{Error, Result};
use crate::geometry::{Coordinate, Triangle};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A complete "cycle" or "shape": an ordered, closed walk over the grid.
///
/// The first and last point are always the same coordinate. Cycles are
/// never mutated once built.
///
/// Serializes as its plain point list; deserializing goes back through
/// [`Cycle::new`] so the invariants hold for loaded cycles too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Cycle {
    points: Vec<Coordinate>,
    /// Points where the walk changes direction.
    vertices: Vec<Coordinate>,
    /// Distinct points, for equality and containment checks.
    members: HashSet<Coordinate>,
}

impl Cycle {
    /// Build a cycle from a closed list of points.
    ///
    /// Fails if the walk doesn't return to its first point, or visits
    /// fewer than four distinct coordinates (the smallest loop possible
    /// with 4-way steps is a 2x2 block).
    pub fn new(points: Vec<Coordinate>) -> Result<Self> {
        if points.first() != points.last() || points.len() < 2 {
            return Err(Error::OpenCycle);
        }

        let cycle = Self::from_closed(points);
        if cycle.members.len() < 4 {
            return Err(Error::DegenerateCycle { distinct: cycle.members.len() });
        }
        Ok(cycle)
    }

    /// Build a cycle the detector already knows is closed.
    pub(crate) fn from_closed(points: Vec<Coordinate>) -> Self {
        let vertices = direction_changes(&points);
        let members = points.iter().copied().collect();
        Self { points, vertices, members }
    }

    /// All points in walk order, including the repeated closing point.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Points where the incoming and outgoing steps differ (the corners).
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// A triangle made from the first three vertices.
    ///
    /// Its centroid is a cheap marker for roughly where the shape sits.
    /// `None` if the cycle has fewer than three corners.
    pub fn triangle_sample(&self) -> Option<Triangle> {
        match self.vertices.as_slice() {
            [a, b, c, ..] => Some(Triangle::new(*a, *b, *c)),
            _ => None,
        }
    }

    /// Number of points, counting the closing point.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a cycle holds at least its closing pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct coordinates on the loop.
    pub fn distinct_len(&self) -> usize {
        self.members.len()
    }

    /// Whether the loop passes through `point`.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.members.contains(&point)
    }
}

/// Collect the points where the walk turns.
///
/// The closing point duplicates the first, so the step into point 0 is
/// taken from the second-to-last point.
fn direction_changes(points: &[Coordinate]) -> Vec<Coordinate> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    (0..n - 1)
        .filter(|&i| {
            let prev = if i == 0 { points[n - 2] } else { points[i - 1] };
            let next = points[i + 1];
            points[i] - prev != next - points[i]
        })
        .map(|i| points[i])
        .collect()
}

/// Two cycles are equal when they cover the same set of coordinates,
/// regardless of where they start or which way they run.
impl PartialEq for Cycle {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self.members.iter().all(|p| other.members.contains(p))
    }
}

impl Eq for Cycle {}

impl TryFrom<Vec<Coordinate>> for Cycle {
    type Error = Error;

    fn try_from(points: Vec<Coordinate>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Cycle> for Vec<Coordinate> {
    fn from(cycle: Cycle) -> Self {
        cycle.points
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
