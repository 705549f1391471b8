//! Occupancy grids built from text.
//!
//! One character per cell, one line per row: `'#'` is [`Cell::BLOCKED`] and
//! `'.'` is [`Cell::FREE`]. Surrounding whitespace is trimmed from every
//! line, so maps can be indented inside string literals:
//!
//! ```
//! use anyangle_core::{OccupancyGrid, Point};
//!
//! let grid = OccupancyGrid::from_ascii(
//!     "
//!     ...
//!     .#.
//!     ...",
//! )
//! .unwrap();
//! assert!(grid.is_blocked(Point::new(1, 1)));
//! ```

use std::fmt;

use crate::geom::Point;
use crate::grid::{Cell, OccupancyGrid};

const BLOCKED_CHAR: char = '#';
const FREE_CHAR: char = '.';

impl OccupancyGrid {
    /// Parse a grid from ASCII art.
    ///
    /// Every line must have the same width and contain only `'#'` and `'.'`.
    /// Blank lines at the start and end are ignored.
    pub fn from_ascii(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .collect();
        if rows.iter().all(|r| r.is_empty()) {
            return Err(MapError::Empty);
        }

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let w = row.chars().count();
            if w != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: w,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    BLOCKED_CHAR => Cell::BLOCKED,
                    FREE_CHAR => Cell::FREE,
                    _ => {
                        return Err(MapError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(cell);
            }
        }

        Self::from_cells(width as i32, rows.len() as i32, cells).ok_or(MapError::Empty)
    }

    /// Render the grid back to the format accepted by
    /// [`from_ascii`](Self::from_ascii), without a trailing newline.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                let ch = if self.is_blocked(Point::new(x, y)) {
                    BLOCKED_CHAR
                } else {
                    FREE_CHAR
                };
                out.push(ch);
            }
        }
        out
    }
}

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input contained no cells.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `'#'` or `'.'` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        ####
        #..#
        #..#
        ####";

    #[test]
    fn parse_and_size() {
        let g = OccupancyGrid::from_ascii(ROOM).unwrap();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.count(Cell::BLOCKED), 12);
        assert!(g.is_free(Point::new(1, 2)));
    }

    #[test]
    fn ascii_round_trip() {
        let g = OccupancyGrid::from_ascii(ROOM).unwrap();
        let text = g.to_ascii();
        assert_eq!(text, "####\n#..#\n#..#\n####");
        assert_eq!(OccupancyGrid::from_ascii(&text).unwrap(), g);
    }

    #[test]
    fn inconsistent_width_error() {
        let err = OccupancyGrid::from_ascii("..\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn invalid_char_error() {
        let err = OccupancyGrid::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(OccupancyGrid::from_ascii("  \n "), Err(MapError::Empty));
    }
}
