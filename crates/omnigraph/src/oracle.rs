//! The membership test that tells a detector which cells are occupied.
//!
//! ## Rust Lesson #24: Traits as Capabilities
//!
//! In JS you'd pass a callback `(p) => map[p.x][p.y] === 1`. Rust closures
//! work the same way, but each closure has its own anonymous type. The
//! blanket impl below makes *every* closure with the right signature an
//! `Oracle`, so detectors never need to know how the grid is stored
//! (array, sparse set, procedural generator...).

use crate::geometry::Coordinate;

/// Answers whether a coordinate is occupied.
///
/// Takes `&mut self` so an oracle may record what it has been asked
/// (e.g. mark cells visited). Detectors don't cache answers, and they
/// don't assume asking twice gives the same answer.
pub trait Oracle {
    fn check(&mut self, point: Coordinate) -> bool;
}

impl<F> Oracle for F
where
    F: FnMut(Coordinate) -> bool,
{
    #[inline]
    fn check(&mut self, point: Coordinate) -> bool {
        self(point)
    }
}
