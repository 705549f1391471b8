use std::fmt::Debug;

use anyangle_core::Point;

use crate::distance::euclidean;

/// Minimal search-space interface: node indexing and neighbor enumeration.
///
/// Every node maps to a dense index in `0..node_count()`; the search keeps
/// its per-node state in a table addressed by that index.
pub trait Pather {
    /// Node handle, e.g. a grid [`Point`] or a mesh node id.
    type Node: Copy + Eq + Debug;

    /// Size of the index space.
    fn node_count(&self) -> usize;

    /// Dense index of `node`, or `None` if it is not part of the space.
    fn index(&self, node: Self::Node) -> Option<usize>;

    /// Inverse of [`index`](Self::index).
    fn node(&self, idx: usize) -> Self::Node;

    /// Grid coordinate of `node`, fed to heuristics and edge costs.
    fn position(&self, node: Self::Node) -> Point;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of a direct edge from `from` to `to`. Must be >= 0.
    ///
    /// Defaults to the Euclidean distance between the node positions, which
    /// is what makes long line-of-sight edges priced correctly.
    fn move_cost(&self, from: Self::Node, to: Self::Node) -> f64 {
        euclidean(self.position(from), self.position(to))
    }
}

/// Pather that can answer visibility queries, as required by Theta*.
pub trait AnyAnglePather: WeightedPather {
    /// Whether a straight, unobstructed edge joins `from` and `to`.
    ///
    /// Must be symmetric for the search to be direction-independent.
    fn line_of_sight(&self, from: Self::Node, to: Self::Node) -> bool;
}
