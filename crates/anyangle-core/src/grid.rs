//! An occupancy grid for map representation.
//!
//! [`Cell`] is a newtype over `i32` holding an occupancy value. Any value
//! other than [`Cell::BLOCKED`] is traversable; the actual number is left to
//! whatever produced the map (terrain classes, image intensities, ...).
//! [`OccupancyGrid`] stores one cell per coordinate of its [`Range`].

use crate::geom::{Point, Range};

/// An occupancy value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// A free, traversable cell.
    pub const FREE: Cell = Cell(0);

    /// The impassable sentinel. Both the neighbor policy and the visibility
    /// test treat exactly this value as an obstacle.
    pub const BLOCKED: Cell = Cell(9);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this is the impassable sentinel.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        self.0 == Self::BLOCKED.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A 2D grid of [`Cell`] occupancy values addressed by `(x, y)`.
///
/// The grid covers `[0, width) x [0, height)`. Reads are `&self` only, so a
/// grid can be shared by any number of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl OccupancyGrid {
    /// Create a new grid filled with [`Cell::FREE`].
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::FREE; bounds.len()],
            bounds,
        }
    }

    /// Create a grid from row-major cell values.
    ///
    /// Returns `None` if `cells.len()` does not match `width * height`.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Option<Self> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if cells.len() != bounds.len() {
            return None;
        }
        Some(Self { cells, bounds })
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the grid.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index_of(p) {
            self.cells[i] = cell;
        }
    }

    /// Whether `p` is impassable. Points outside the grid count as blocked.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_none_or(Cell::is_blocked)
    }

    /// Whether `p` is inside the grid and traversable.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Set every cell of `rng` (clipped to the grid) to `cell`.
    pub fn fill_range(&mut self, rng: Range, cell: Cell) {
        for p in rng.iter() {
            self.set(p, cell);
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = OccupancyGrid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.count(Cell::FREE), 50);
    }

    #[test]
    fn set_and_at() {
        let mut g = OccupancyGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Cell(42));
        assert_eq!(g.at(p), Some(Cell(42)));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::FREE));
        assert_eq!(g.at(Point::new(10, 10)), None);
        // Out of range writes are ignored.
        g.set(Point::new(-1, 0), Cell::BLOCKED);
        assert_eq!(g.count(Cell::BLOCKED), 0);
    }

    #[test]
    fn only_the_sentinel_blocks() {
        let mut g = OccupancyGrid::new(3, 1);
        g.set(Point::new(0, 0), Cell(255));
        g.set(Point::new(1, 0), Cell::BLOCKED);
        assert!(g.is_free(Point::new(0, 0)));
        assert!(g.is_blocked(Point::new(1, 0)));
        assert!(g.is_free(Point::new(2, 0)));
    }

    #[test]
    fn outside_is_blocked() {
        let g = OccupancyGrid::new(2, 2);
        assert!(g.is_blocked(Point::new(-1, 0)));
        assert!(g.is_blocked(Point::new(2, 1)));
        assert!(g.is_blocked(Point::new(0, 2)));
    }

    #[test]
    fn fill_range_clips() {
        let mut g = OccupancyGrid::new(5, 5);
        g.fill_range(Range::new(3, 3, 8, 8), Cell::BLOCKED);
        assert_eq!(g.count(Cell::BLOCKED), 4);
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(OccupancyGrid::from_cells(2, 2, vec![Cell::FREE; 3]).is_none());
        let g = OccupancyGrid::from_cells(2, 1, vec![Cell::FREE, Cell::BLOCKED]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items[1], (Point::new(1, 0), Cell::BLOCKED));
    }
}
