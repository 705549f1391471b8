use anyangle_core::{DIRECTIONS_8, OccupancyGrid, Point};

/// How diagonal moves interact with the two orthogonal cells they pass
/// between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalPolicy {
    /// Diagonal moves are allowed whenever the target cell is free.
    #[default]
    Always,
    /// A diagonal move is dropped when both orthogonal cells are blocked,
    /// so paths cannot squeeze between two diagonal obstacles.
    NoSqueeze,
    /// A diagonal move is dropped when either orthogonal cell is blocked.
    NoCornerCutting,
}

impl DiagonalPolicy {
    /// Whether a diagonal step from `p` by `d` is permitted.
    fn allows(self, grid: &OccupancyGrid, p: Point, d: Point) -> bool {
        if d.x == 0 || d.y == 0 {
            return true;
        }
        let side_x = grid.is_blocked(p.shift(d.x, 0));
        let side_y = grid.is_blocked(p.shift(0, d.y));
        match self {
            Self::Always => true,
            Self::NoSqueeze => !(side_x && side_y),
            Self::NoCornerCutting => !(side_x || side_y),
        }
    }
}

/// Append the free 8-neighbors of `p` into `buf`.
///
/// Neighbors outside the grid and cells holding the blocked sentinel are
/// skipped, so an interior cell yields up to 8 neighbors, an edge cell up to
/// 5 and a corner cell up to 3. Order follows [`DIRECTIONS_8`]: orthogonal
/// neighbors first, then diagonals.
pub fn grid_neighbors(
    grid: &OccupancyGrid,
    p: Point,
    policy: DiagonalPolicy,
    buf: &mut Vec<Point>,
) {
    for d in DIRECTIONS_8 {
        let n = p + d;
        if grid.is_blocked(n) || !policy.allows(grid, p, d) {
            continue;
        }
        buf.push(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(grid: &OccupancyGrid, p: Point, policy: DiagonalPolicy) -> Vec<Point> {
        let mut buf = Vec::new();
        grid_neighbors(grid, p, policy, &mut buf);
        buf
    }

    #[test]
    fn boundary_classes() {
        let grid = OccupancyGrid::new(5, 5);
        let all = DiagonalPolicy::Always;
        assert_eq!(collect(&grid, Point::new(2, 2), all).len(), 8);
        // Left, right, top and bottom edges.
        assert_eq!(collect(&grid, Point::new(0, 2), all).len(), 5);
        assert_eq!(collect(&grid, Point::new(4, 2), all).len(), 5);
        assert_eq!(collect(&grid, Point::new(2, 0), all).len(), 5);
        assert_eq!(collect(&grid, Point::new(2, 4), all).len(), 5);
        // Corners.
        for p in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(collect(&grid, Point::from(p), all).len(), 3);
        }
    }

    #[test]
    fn fixed_order() {
        let grid = OccupancyGrid::new(3, 3);
        let got = collect(&grid, Point::new(0, 0), DiagonalPolicy::Always);
        assert_eq!(
            got,
            vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn blocked_cells_are_filtered() {
        let grid = OccupancyGrid::from_ascii(
            "
            .#.
            #..
            ...",
        )
        .unwrap();
        let got = collect(&grid, Point::new(1, 1), DiagonalPolicy::Always);
        assert_eq!(got.len(), 6);
        assert!(!got.contains(&Point::new(1, 0)));
        assert!(!got.contains(&Point::new(0, 1)));
        // Always lets the NW diagonal through the gap between two walls.
        assert!(got.contains(&Point::new(0, 0)));
    }

    #[test]
    fn diagonal_policies() {
        let grid = OccupancyGrid::from_ascii(
            "
            .#.
            #..
            ...",
        )
        .unwrap();
        let squeeze = collect(&grid, Point::new(1, 1), DiagonalPolicy::NoSqueeze);
        assert!(!squeeze.contains(&Point::new(0, 0)));
        // Only one wall beside the NE and SW diagonals.
        assert!(squeeze.contains(&Point::new(2, 0)));
        assert!(squeeze.contains(&Point::new(0, 2)));

        let strict = collect(&grid, Point::new(1, 1), DiagonalPolicy::NoCornerCutting);
        assert!(!strict.contains(&Point::new(0, 0)));
        assert!(!strict.contains(&Point::new(2, 0)));
        assert!(!strict.contains(&Point::new(0, 2)));
        assert!(strict.contains(&Point::new(2, 2)));
    }
}
