//! Error type for the fallible edges of the crate.
//!
//! The detectors never fail: an origin outside the occupied region simply
//! yields no shapes. Errors come from parsing grids, building cycles by
//! hand, configuring a spatial index, and rendering SVG.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid text contained no rows.
    EmptyGrid,
    /// Grid text contained a character that is neither occupied nor empty.
    InvalidCell { row: usize, column: usize, found: char },
    /// Cycle points don't end where they start.
    OpenCycle,
    /// Cycle has fewer than four distinct points.
    DegenerateCycle { distinct: usize },
    /// Spatial index cell size must be positive.
    InvalidCellSize(i32),
    /// No cycles or lines were handed to the renderer.
    NothingToRender,
    /// The SVG writer failed.
    Xml(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "grid has no rows"),
            Error::InvalidCell { row, column, found } => {
                write!(f, "invalid cell {found:?} at row {row}, column {column}")
            }
            Error::OpenCycle => write!(f, "cycle must end on its first point"),
            Error::DegenerateCycle { distinct } => {
                write!(f, "cycle needs at least 4 distinct points, got {distinct}")
            }
            Error::InvalidCellSize(size) => write!(f, "cell size must be positive, got {size}"),
            Error::NothingToRender => write!(f, "no cycles or lines to render"),
            Error::Xml(msg) => write!(f, "SVG write error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
