//! # omnigraph
//!
//! Shape recognition on 2D tile grids.
//!
//! The grid is never handed over as an array. Callers supply an *oracle*,
//! a closure answering "is this coordinate occupied?", and the detectors
//! walk outward from an origin asking it questions:
//!
//! - [`CycleDetection`] finds every closed loop (wall outline, room...)
//! - [`LineDetection`] splits the region into maximal straight lines and
//!   flags dead-end "orphan" lines
//!
//! [`FloodFill`] and [`SpatialIndex`] are small helpers that pair well
//! with them, [`Grid`] sketches maps from text, and [`render_svg`] draws
//! what was found.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod cycle;
pub mod cycle_detection;
pub mod error;
pub mod flood_fill;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod line_detection;
pub mod oracle;
pub mod spatial_index;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use cycle::Cycle;
pub use cycle_detection::CycleDetection;
pub use error::{Error, Result};
pub use flood_fill::FloodFill;
pub use geometry::{Coordinate, STEPS, Triangle};
pub use grid::Grid;
pub use line::Line;
pub use line_detection::LineDetection;
pub use oracle::Oracle;
pub use spatial_index::SpatialIndex;
pub use svg::{SvgStyle, render_svg};
