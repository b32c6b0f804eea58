//! Line detection - split an occupied region into maximal straight lines.
//!
//! ## Algorithm
//!
//! 1. **Trace**: from a start point, walk in one direction while the
//!    oracle accepts each point. At every point along the way, look at
//!    the four neighbours. An occupied neighbour that isn't on any line
//!    found so far, and isn't on the line being traced, is a *candidate*
//!    for a new trace in that neighbour's direction.
//! 2. **Expand**: after a trace, trace again from each of its candidates,
//!    depth first, until nothing new turns up.
//! 3. **Classify**: once every line is known, mark a line as an orphan if
//!    either endpoint is touched by fewer than two lines (itself included).
//!
//! Tracing first and classifying afterwards separates dangling "antenna"
//! segments from the edges of real polygons in one pass over the lines.

use crate::geometry::{Coordinate, STEPS};
use crate::line::Line;
use crate::oracle::Oracle;
use log::{debug, trace};

/// A point and direction queued to seed another trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    start: Coordinate,
    step: Coordinate,
}

/// Detects individual straight lines in a 2D grid.
///
/// # Example
/// ```
/// use omnigraph::{Coordinate, Grid, LineDetection};
///
/// let grid = Grid::parse("
///     111
///     101
///     111
/// ").unwrap();
///
/// let detection = LineDetection::new(Coordinate::new(0, 0), grid.oracle());
/// assert_eq!(detection.lines().len(), 4);
/// assert!(detection.lines().iter().all(|line| !line.is_orphan()));
/// ```
pub struct LineDetection<O> {
    origin: Coordinate,
    oracle: O,
    steps: [Coordinate; 4],
    lines: Vec<Line>,
}

impl<O: Oracle> LineDetection<O> {
    /// Create a detector, find every line reachable from `origin` and
    /// classify orphans.
    pub fn new(origin: Coordinate, oracle: O) -> Self {
        let mut detection = Self {
            origin,
            oracle,
            steps: STEPS,
            lines: Vec::new(),
        };
        detection.find_lines();
        detection.classify_orphans();

        debug!(
            "line scan from {}: {} line(s), {} orphan(s)",
            detection.origin,
            detection.lines.len(),
            detection.orphans().count()
        );
        detection
    }

    /// Trace from the origin in every direction, then from every
    /// candidate those traces turn up.
    fn find_lines(&mut self) {
        // Last in, first out. Pushing in reverse keeps the processing
        // order identical to tracing each candidate recursively.
        let mut pending: Vec<Candidate> = self
            .steps
            .iter()
            .rev()
            .map(|&step| Candidate { start: self.origin, step })
            .collect();

        while let Some(candidate) = pending.pop() {
            let found = self.trace_line(candidate);
            pending.extend(found.into_iter().rev());
        }
    }

    /// Walk one line and return the candidates found along it.
    fn trace_line(&mut self, Candidate { start, step }: Candidate) -> Vec<Candidate> {
        if self.is_traced(start, step) {
            return Vec::new();
        }

        let mut candidates: Vec<Candidate> = Vec::new();
        let mut end = start;
        let mut point = start;

        while self.oracle.check(point) {
            let current = Line::new(start, point, step);

            for neighbor_step in self.steps {
                let neighbor = point + neighbor_step;

                if self.on_any_line(neighbor) || current.contains_point(neighbor) {
                    continue;
                }

                if self.oracle.check(neighbor) {
                    let candidate = Candidate { start: point, step: neighbor_step };
                    if !candidates.contains(&candidate) {
                        candidates.push(candidate);
                    }
                }
            }

            end = point;
            point = point + step;
        }

        // Single points aren't lines, but their candidates still count.
        if end != start {
            let line = Line::new(start, end, step);
            trace!("line found: {line}");
            self.lines.push(line);
        }

        candidates
    }

    /// Whether some line already runs through `point` along `step`, in
    /// either direction.
    fn is_traced(&self, point: Coordinate, step: Coordinate) -> bool {
        self.lines.iter().any(|line| {
            line.contains_point(point) && (line.step() == step || line.step() == -step)
        })
    }

    fn on_any_line(&self, point: Coordinate) -> bool {
        self.lines.iter().any(|line| line.contains_point(point))
    }

    /// Whether fewer than two lines touch `point`.
    fn is_orphaned(&self, point: Coordinate) -> bool {
        self.lines
            .iter()
            .filter(|line| line.contains_point(point))
            .take(2)
            .count()
            < 2
    }

    fn classify_orphans(&mut self) {
        let orphaned: Vec<bool> = self
            .lines
            .iter()
            .map(|line| self.is_orphaned(line.start()) || self.is_orphaned(line.end()))
            .collect();

        for (line, orphan) in self.lines.iter_mut().zip(orphaned) {
            if orphan {
                line.mark_orphan();
            }
        }
    }

    /// The starting position of the scan.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// All lines, in the order they were found.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines with a dead-end endpoint.
    pub fn orphans(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_orphan())
    }

    /// Lines whose endpoints are both shared with another line.
    pub fn edges(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| !line.is_orphan())
    }

    /// Consume the detector, keeping only the lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

// ============================================================================
// TESTS
// ============================================================================
