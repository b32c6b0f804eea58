//! Cycle detection - find every closed loop reachable from an origin.
//!
//! ## Algorithm
//!
//! A branching depth-first walk. Each branch carries a *trail* of the
//! coordinates it has visited:
//!
//! 1. If the next coordinate is already on the trail, the branch has
//!    closed a loop. Record it and stop the branch.
//! 2. Otherwise extend the trail and branch into every occupied
//!    neighbour, except the one we just came from.
//! 3. A recorded trail may start with a "strand" leading up to the loop.
//!    The strand is cut off, then the loop is kept unless an equal cycle
//!    was already found.
//!
//! Sibling branches each get their own copy of the trail, so they never
//! see each other's steps.
//!
//! # Performance
//!
//! Exponential in the number of junctions: every simple path is walked.
//! Fine for the small wall outlines this is meant for. The occupied region
//! must be finite or the walk never ends.

use crate::cycle::Cycle;
use crate::geometry::{Coordinate, STEPS};
use crate::oracle::Oracle;
use log::{debug, trace};

/// Detects cycles/shapes in a 2D grid.
///
/// The scan runs as part of [`CycleDetection::new`]; afterwards the
/// result is read with [`cycles`](CycleDetection::cycles).
///
/// # Example
/// ```
/// use omnigraph::{Coordinate, CycleDetection, Grid};
///
/// let grid = Grid::parse("
///     111
///     101
///     111
/// ").unwrap();
///
/// let detection = CycleDetection::new(Coordinate::new(0, 0), grid.oracle());
/// assert_eq!(detection.cycles().len(), 1);
/// assert_eq!(detection.cycles()[0].len(), 9);
/// ```
pub struct CycleDetection<O> {
    origin: Coordinate,
    oracle: O,
    steps: [Coordinate; 4],
    cycles: Vec<Cycle>,
}

/// One branch of the walk, waiting to try its next neighbour.
struct Frame {
    trail: Vec<Coordinate>,
    next_step: usize,
}

impl Frame {
    fn head(&self) -> Coordinate {
        // Frames are only created after pushing onto the trail.
        self.trail[self.trail.len() - 1]
    }

    /// Stepping straight back onto the previous cell would "close" a
    /// two-point loop.
    fn is_backtrack(&self, neighbor: Coordinate) -> bool {
        let n = self.trail.len();
        n >= 2 && self.trail[n - 2] == neighbor
    }
}

impl<O: Oracle> CycleDetection<O> {
    /// Create a detector and immediately scan from `origin`.
    pub fn new(origin: Coordinate, oracle: O) -> Self {
        let mut detection = Self {
            origin,
            oracle,
            steps: STEPS,
            cycles: Vec::new(),
        };
        detection.scan();
        detection
    }

    /// Clear previous results and scan again.
    pub fn scan(&mut self) {
        self.cycles.clear();

        if !self.oracle.check(self.origin) {
            debug!("cycle scan from {}: origin not occupied", self.origin);
            return;
        }

        // ## Rust Lesson #25: Explicit Stacks Instead of Recursion
        //
        // A recursive walk is the obvious way to write this, but every
        // step would be a stack frame, and big shapes can overflow the
        // call stack. A Vec of frames lives on the heap instead. Each
        // frame remembers which neighbour to try next, so the oracle is
        // asked in exactly the same order recursion would ask it.
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.visit(Vec::new(), self.origin) {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&step) = self.steps.get(frame.next_step) else {
                stack.pop();
                continue;
            };
            frame.next_step += 1;

            let neighbor = frame.head() + step;
            if frame.is_backtrack(neighbor) || !self.oracle.check(neighbor) {
                continue;
            }

            let trail = frame.trail.clone();
            if let Some(child) = self.visit(trail, neighbor) {
                stack.push(child);
            }
        }

        debug!("cycle scan from {}: {} cycle(s)", self.origin, self.cycles.len());
    }

    /// Move onto `point`. Returns the new frame, or `None` if the move
    /// closed a loop.
    fn visit(&mut self, mut trail: Vec<Coordinate>, point: Coordinate) -> Option<Frame> {
        let closes_loop = trail.contains(&point);
        trail.push(point);

        if closes_loop {
            self.add_cycle(trail);
            None
        } else {
            Some(Frame { trail, next_step: 0 })
        }
    }

    /// Trim the strand off a closed trail and keep it if it's new.
    fn add_cycle(&mut self, mut trail: Vec<Coordinate>) {
        // The loop closed on some earlier trail point, not necessarily the
        // first. Everything before that point's first appearance is strand.
        let closing = trail[trail.len() - 1];
        let entry = trail.iter().position(|&p| p == closing).unwrap_or(0);
        trail.drain(..entry);

        let cycle = Cycle::from_closed(trail);
        if !self.cycles.contains(&cycle) {
            trace!("cycle found: {cycle}");
            self.cycles.push(cycle);
        }
    }

    /// The starting position of the scan.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Distinct cycles, in the order they were found.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Consume the detector, keeping only the cycles.
    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}

// ============================================================================
// TESTS
// ============================================================================
