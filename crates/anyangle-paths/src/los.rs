//! Line of sight between grid cells.
//!
//! The segment joins the centers of two cells. It is walked cell by cell
//! along its dominant axis with an integer error term, so results are exact
//! and do not depend on the direction of travel.

use anyangle_core::{OccupancyGrid, Point};

/// Whether the straight segment between the centers of `a` and `b` crosses
/// no blocked cell.
///
/// Every cell the segment touches is tested, both endpoints included, so a
/// blocked or out-of-range endpoint hides the other one. Where the segment
/// passes exactly through a grid corner, the two cells touching that corner
/// off the segment are tested as well, and either one being blocked hides
/// `b`: a line may not slip between two diagonal obstacles.
///
/// `line_of_sight(grid, a, b) == line_of_sight(grid, b, a)` for all cells,
/// and `line_of_sight(grid, a, a)` is always `true`.
pub fn line_of_sight(grid: &OccupancyGrid, a: Point, b: Point) -> bool {
    if a == b {
        return true;
    }
    let blocked = |p: Point| grid.is_blocked(p);
    if blocked(a) {
        return false;
    }

    let (dx, sx) = magnitude_and_sign(b.x - a.x);
    let (dy, sy) = magnitude_and_sign(b.y - a.y);

    let mut p = a;
    if dx >= dy {
        // The error is kept in doubled units: before the k-th column boundary
        // with j row boundaries already crossed, f = dy(2k+1) - dx(2j+1).
        // f > 0: the next row boundary comes first. f == 0: both at once.
        let mut f = dy - dx;
        while p.x != b.x {
            if f > 0 {
                p.y += sy;
                f -= 2 * dx;
                if blocked(p) {
                    return false;
                }
            } else if f == 0 && dy != 0 {
                if grid.is_blocked(p.shift(sx, 0)) || grid.is_blocked(p.shift(0, sy)) {
                    return false;
                }
                p.y += sy;
                f -= 2 * dx;
            }
            p.x += sx;
            f += 2 * dy;
            if blocked(p) {
                return false;
            }
        }
    } else {
        let mut f = dx - dy;
        while p.y != b.y {
            if f > 0 {
                p.x += sx;
                f -= 2 * dy;
                if blocked(p) {
                    return false;
                }
            } else if f == 0 && dx != 0 {
                if grid.is_blocked(p.shift(sx, 0)) || grid.is_blocked(p.shift(0, sy)) {
                    return false;
                }
                p.x += sx;
                f -= 2 * dy;
            }
            p.y += sy;
            f += 2 * dx;
            if blocked(p) {
                return false;
            }
        }
    }
    true
}

/// Whether every consecutive pair of waypoints in `path` is in line of sight.
///
/// Paths produced on grids with [`DiagonalPolicy::Always`] may contain
/// diagonal steps between two blocked cells; those fail this check.
///
/// [`DiagonalPolicy::Always`]: crate::DiagonalPolicy::Always
pub fn path_is_visible(grid: &OccupancyGrid, path: &[Point]) -> bool {
    path.windows(2).all(|w| line_of_sight(grid, w[0], w[1]))
}

#[inline]
fn magnitude_and_sign(d: i32) -> (i32, i32) {
    if d < 0 { (-d, -1) } else { (d, 1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyangle_core::Cell;
    use rand::{Rng, RngExt};

    fn map(s: &str) -> OccupancyGrid {
        OccupancyGrid::from_ascii(s).unwrap()
    }

    #[test]
    fn degenerate_segment_is_visible() {
        let mut grid = OccupancyGrid::new(3, 3);
        grid.set(Point::new(1, 1), Cell::BLOCKED);
        for p in grid.bounds() {
            assert!(line_of_sight(&grid, p, p));
        }
    }

    #[test]
    fn open_grid_sees_everything() {
        let grid = OccupancyGrid::new(6, 6);
        for a in grid.bounds() {
            for b in grid.bounds() {
                assert!(line_of_sight(&grid, a, b), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn blocked_row_and_column_hide() {
        let grid = map(
            "
            .....
            .....
            #####
            .....
            .....",
        );
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(4, 4)));
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(0, 4)));
        assert!(!line_of_sight(&grid, Point::new(4, 1), Point::new(0, 3)));
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(4, 1)));
        assert!(line_of_sight(&grid, Point::new(0, 3), Point::new(4, 4)));

        let grid = map(
            "
            ..#..
            ..#..
            ..#..",
        );
        assert!(!line_of_sight(&grid, Point::new(0, 1), Point::new(4, 1)));
        assert!(!line_of_sight(&grid, Point::new(1, 0), Point::new(3, 2)));
    }

    #[test]
    fn no_squeezing_between_diagonal_obstacles() {
        let grid = map(
            "
            .#
            #.",
        );
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(1, 1)));

        // One wall beside the corner is enough.
        let grid = map(
            "
            ..
            #.",
        );
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(1, 1)));
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(1, 0)));
    }

    #[test]
    fn shallow_and_steep_segments_around_a_pillar() {
        let grid = map(
            "
            ...
            .#.
            ...",
        );
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(2, 2)));
        assert!(!line_of_sight(&grid, Point::new(0, 1), Point::new(2, 1)));
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(2, 1)));
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(1, 2)));
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(2, 0)));
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(0, 2)));
    }

    #[test]
    fn long_shallow_segment_clears_wall_end() {
        let grid = map(
            "
            ..........
            ..........
            ....#.....",
        );
        assert!(line_of_sight(&grid, Point::new(0, 0), Point::new(9, 2)));
        assert!(!line_of_sight(&grid, Point::new(0, 2), Point::new(9, 2)));
        assert!(line_of_sight(&grid, Point::new(0, 1), Point::new(9, 1)));
    }

    #[test]
    fn blocked_endpoints_hide() {
        let grid = map("#..#");
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(3, 0)));
        assert!(!line_of_sight(&grid, Point::new(3, 0), Point::new(0, 0)));
        assert!(!line_of_sight(&grid, Point::new(1, 0), Point::new(3, 0)));
        assert!(line_of_sight(&grid, Point::new(1, 0), Point::new(2, 0)));

        let grid = map(
            "
            .....
            .....
            #####
            .....
            .....",
        );
        // Into, out of and along the wall.
        assert!(!line_of_sight(&grid, Point::new(0, 1), Point::new(0, 2)));
        assert!(!line_of_sight(&grid, Point::new(0, 2), Point::new(0, 4)));
        assert!(!line_of_sight(&grid, Point::new(0, 2), Point::new(4, 2)));
        assert!(!line_of_sight(&grid, Point::new(1, 1), Point::new(3, 2)));
    }

    #[test]
    fn outside_endpoints_hide() {
        let grid = OccupancyGrid::new(3, 3);
        assert!(!line_of_sight(&grid, Point::new(-1, 0), Point::new(2, 0)));
        assert!(!line_of_sight(&grid, Point::new(0, 0), Point::new(0, 3)));
    }

    #[test]
    fn path_validation() {
        let grid = map(
            "
            .....
            .#...
            .....",
        );
        let around = [Point::new(0, 0), Point::new(0, 2), Point::new(4, 2)];
        assert!(path_is_visible(&grid, &around));
        let through = [Point::new(0, 1), Point::new(4, 1)];
        assert!(!path_is_visible(&grid, &through));
        assert!(path_is_visible(&grid, &[Point::new(2, 2)]));
    }

    fn random_grid(rng: &mut impl Rng) -> OccupancyGrid {
        let w = rng.random_range(1..14);
        let h = rng.random_range(1..14);
        let mut grid = OccupancyGrid::new(w, h);
        for p in grid.bounds() {
            if rng.random_range(0..10) < 3 {
                grid.set(p, Cell::BLOCKED);
            }
        }
        grid
    }

    fn random_cell(rng: &mut impl Rng, grid: &OccupancyGrid) -> Point {
        Point::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        )
    }

    #[test]
    fn symmetric_on_random_grids() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let grid = random_grid(&mut rng);
            for _ in 0..20 {
                let a = random_cell(&mut rng, &grid);
                let b = random_cell(&mut rng, &grid);
                assert_eq!(
                    line_of_sight(&grid, a, b),
                    line_of_sight(&grid, b, a),
                    "asymmetric {a} <-> {b} on\n{}",
                    grid.to_ascii()
                );
            }
        }
    }

    #[test]
    fn unblocking_cells_never_hides() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let grid = random_grid(&mut rng);
            let mut open = grid.clone();
            open.fill(Cell::FREE);
            for _ in 0..20 {
                let a = random_cell(&mut rng, &grid);
                let b = random_cell(&mut rng, &grid);
                if line_of_sight(&grid, a, b) {
                    assert!(line_of_sight(&open, a, b));
                }
            }
        }
    }
}
