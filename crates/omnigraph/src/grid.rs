//! A small owned tile grid, handy for building oracles.
//!
//! The detectors never need this: any closure will do. It exists so
//! callers (and tests) can sketch a map as text:
//!
//! ```text
//! ###
//! #.#
//! ###
//! ```
//!
//! Row `i` of the text is `x = i`, column `j` is `y = j`.

use crate::error::{Error, Result};
use crate::geometry::Coordinate;

/// A boolean grid of occupied tiles. Rows may have different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Parse a grid from text.
    ///
    /// `#` or `1` is occupied, `.` or `0` is empty. Blank lines are
    /// skipped and each line is trimmed, so indented string literals work.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>>>()?;

        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Whether `point` is occupied. Anything outside the grid is empty.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.cell(point).is_some_and(|&occupied| occupied)
    }

    /// Set a tile. Returns false (and does nothing) outside the grid.
    pub fn set(&mut self, point: Coordinate, occupied: bool) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
            return false;
        };
        match self.rows.get_mut(x).and_then(|row| row.get_mut(y)) {
            Some(cell) => {
                *cell = occupied;
                true
            }
            None => false,
        }
    }

    /// Every occupied coordinate, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &occupied)| occupied)
                .map(move |(y, _)| Coordinate::new(x as i32, y as i32))
        })
    }

    /// A membership test over this grid, ready for any detector.
    pub fn oracle(&self) -> impl Fn(Coordinate) -> bool + '_ {
        move |point: Coordinate| self.contains(point)
    }

    fn cell(&self, point: Coordinate) -> Option<&bool> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        self.rows.get(x)?.get(y)
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<bool>> {
    line.chars()
        .enumerate()
        .map(|(column, c)| match c {
            '#' | '1' => Ok(true),
            '.' | '0' => Ok(false),
            found => Err(Error::InvalidCell { row, column, found }),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
