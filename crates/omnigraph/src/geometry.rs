//! Core geometry types for omnigraph.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! A grid coordinate is two integers. Deriving `Copy` means it is passed
//! around by value like a JS number, never by reference:
//! - `Eq` + `Hash` = usable as a `HashMap`/`HashSet` key
//! - `Serialize`/`Deserialize` = serde can turn it into JSON and back

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// The four axis-aligned unit steps, in traversal order.
///
/// Both detectors walk neighbours in this order, so it decides the order
/// in which shapes are reported.
pub const STEPS: [Coordinate; 4] = [
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(0, -1),
];

/// A triangle described by three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Coordinate,
    pub b: Coordinate,
    pub c: Coordinate,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Coordinate {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate.
    ///
    /// Computed in `i64`, so squaring never overflows the `i32` range.
    #[inline]
    pub fn distance_squared(&self, other: Coordinate) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// The four axis-aligned neighbours, in [`STEPS`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        STEPS.into_iter().map(move |step| self + step)
    }
}

// ## Rust Lesson #26: Operator Overloading
//
// JS can't overload `+`. Rust can, by implementing the `std::ops` traits.
// `a + b` is sugar for `Add::add(a, b)`.

impl Add for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }
}

/// The inverse of a step: `-Coordinate::new(1, 0)` walks the other way.
impl Neg for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn neg(self) -> Coordinate {
        Coordinate::new(-self.x, -self.y)
    }
}

/// Scale a step by a number of cells.
impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn mul(self, factor: i32) -> Coordinate {
        Coordinate::new(self.x * factor, self.y * factor)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Triangle {
    #[inline]
    pub fn new(a: Coordinate, b: Coordinate, c: Coordinate) -> Self {
        Self { a, b, c }
    }

    /// The centroid, rounded to the nearest grid coordinate.
    ///
    /// Only a cheap "the shape is roughly here" fingerprint. It is not
    /// guaranteed to fall inside the shape the triangle was sampled from.
    pub fn centroid(&self) -> Coordinate {
        let x = (f64::from(self.a.x) + f64::from(self.b.x) + f64::from(self.c.x)) / 3.0;
        let y = (f64::from(self.a.y) + f64::from(self.b.y) + f64::from(self.c.y)) / 3.0;
        Coordinate::new(x.round() as i32, y.round() as i32)
    }
}

// ============================================================================
// TESTS
// ============================================================================
