use anyangle_core::Point;

/// A heuristic estimate of the remaining cost from a position to the goal.
///
/// Heuristics are plain functions so they can be stored in a
/// [`HeuristicRegistry`](crate::HeuristicRegistry) and copied freely.
pub type Heuristic = fn(Point, Point) -> f64;

/// Uninformed heuristic: always zero. Turns the search into Dijkstra.
#[inline]
pub fn naive(_a: Point, _b: Point) -> f64 {
    0.0
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    f64::from((a.x - b.x).abs().max((a.y - b.y).abs()))
}

/// Euclidean (L2) distance between two points. Also the edge cost between
/// any two nodes.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Octile distance: the length of the shortest 8-connected path on an empty
/// grid with diagonal steps costing √2.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    f64::from(hi - lo) + f64::from(lo) * std::f64::consts::SQRT_2
}

/// Total Euclidean length of a polyline through `path`.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distances_between_points() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert!((euclidean(a, b) - 5.0).abs() < EPS);
        assert!((octile(a, b) - (1.0 + 3.0 * std::f64::consts::SQRT_2)).abs() < EPS);
        assert_eq!(naive(a, b), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_octile() {
        for x in -4..=4 {
            for y in -4..=4 {
                let p = Point::new(x, y);
                assert!(euclidean(Point::ZERO, p) <= octile(Point::ZERO, p) + EPS);
                assert!(chebyshev(Point::ZERO, p) <= euclidean(Point::ZERO, p) + EPS);
            }
        }
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [Point::new(0, 0), Point::new(3, 4), Point::new(3, 6)];
        assert!((path_length(&path) - 7.0).abs() < EPS);
        assert_eq!(path_length(&path[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}
