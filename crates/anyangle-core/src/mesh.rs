//! Navigation meshes with explicit adjacency.
//!
//! A [`NavMesh`] is a graph of [`MeshNode`]s. Each node sits on a grid
//! coordinate (so that visibility between nodes can be tested on the grid
//! the mesh was derived from) and owns a map from neighbor key to adjacent
//! node. Searches read adjacency straight off the nodes; nothing here is
//! geometric.

use std::collections::BTreeMap;
use std::fmt;

use crate::geom::{DIRECTIONS_8, Point};
use crate::grid::{Cell, OccupancyGrid};

/// Stable identifier of a node inside one [`NavMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshNodeId(pub u32);

impl MeshNodeId {
    /// Dense index of this node in its mesh.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MeshNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex of a [`NavMesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshNode {
    /// Grid coordinate of the node.
    pub pos: Point,
    /// Occupancy of the node.
    pub cell: Cell,
    /// Adjacent nodes keyed by a caller-chosen link key. Iteration follows
    /// key order, which fixes the order neighbors are expanded in.
    pub neighbors: BTreeMap<u32, MeshNodeId>,
}

impl MeshNode {
    /// Whether the node is the impassable sentinel.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.cell.is_blocked()
    }
}

/// A graph of [`MeshNode`]s indexed by [`MeshNodeId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavMesh {
    nodes: Vec<MeshNode>,
}

impl NavMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unconnected node and return its id.
    pub fn add_node(&mut self, pos: Point, cell: Cell) -> MeshNodeId {
        let id = MeshNodeId(self.nodes.len() as u32);
        self.nodes.push(MeshNode {
            pos,
            cell,
            neighbors: BTreeMap::new(),
        });
        id
    }

    /// Add a directed link `from -> to` under `key`, replacing any link
    /// previously stored under that key.
    ///
    /// Returns `false` (and changes nothing) if either id is unknown.
    pub fn link(&mut self, from: MeshNodeId, key: u32, to: MeshNodeId) -> bool {
        if self.node(to).is_none() {
            return false;
        }
        match self.nodes.get_mut(from.index()) {
            Some(n) => {
                n.neighbors.insert(key, to);
                true
            }
            None => false,
        }
    }

    /// Link `a` and `b` both ways, each keyed by the other node's id.
    pub fn connect(&mut self, a: MeshNodeId, b: MeshNodeId) -> bool {
        if self.node(a).is_none() || self.node(b).is_none() {
            return false;
        }
        self.link(a, b.0, b) && self.link(b, a.0, a)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the mesh has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node with the given id, if any.
    #[inline]
    pub fn node(&self, id: MeshNodeId) -> Option<&MeshNode> {
        self.nodes.get(id.index())
    }

    /// Adjacent node ids of `id` in key order. Empty for unknown ids.
    pub fn neighbors(&self, id: MeshNodeId) -> impl Iterator<Item = MeshNodeId> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.neighbors.values().copied())
    }

    /// Iterate over `(id, node)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (MeshNodeId, &MeshNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (MeshNodeId(i as u32), n))
    }

    /// First node located at `pos`, if any.
    pub fn find(&self, pos: Point) -> Option<MeshNodeId> {
        self.iter().find(|(_, n)| n.pos == pos).map(|(id, _)| id)
    }

    /// Build a mesh with one node per free cell of `grid`, each linked to
    /// its free 8-neighbors.
    ///
    /// Link keys are indices into [`DIRECTIONS_8`], so neighbors come out in
    /// the same order as the grid neighbor policy produces them.
    pub fn from_grid(grid: &OccupancyGrid) -> Self {
        let mut mesh = Self::new();
        let bounds = grid.bounds();
        let mut ids: Vec<Option<MeshNodeId>> = vec![None; bounds.len()];

        for (p, cell) in grid.iter() {
            if cell.is_blocked() {
                continue;
            }
            if let Some(i) = bounds.index_of(p) {
                ids[i] = Some(mesh.add_node(p, cell));
            }
        }

        for (i, from) in ids.iter().enumerate() {
            let Some(from) = *from else {
                continue;
            };
            let p = bounds.point_at(i);
            for (key, d) in DIRECTIONS_8.iter().enumerate() {
                let Some(j) = bounds.index_of(p + *d) else {
                    continue;
                };
                if let Some(to) = ids[j] {
                    mesh.link(from, key as u32, to);
                }
            }
        }
        mesh
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn mesh_round_trip() {
        let grid = OccupancyGrid::from_ascii("..#\n...").unwrap();
        let mesh = NavMesh::from_grid(&grid);
        let json = serde_json::to_string(&mesh).unwrap();
        let back: NavMesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
    }
}
