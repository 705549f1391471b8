use anyangle_core::{MeshNodeId, NavMesh, OccupancyGrid, Point};

use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::los::line_of_sight;
use crate::search::{MeshSearch, SearchResult};
use crate::traits::{AnyAnglePather, Pather, WeightedPather};

/// How visibility between two mesh nodes is decided.
#[derive(Debug, Clone, Copy)]
pub enum MeshVisibility<'a> {
    /// Straight-line visibility between the node positions on a grid,
    /// usually the one the mesh was built from.
    Grid(&'a OccupancyGrid),
    /// Only linked nodes see each other. Vertex updates then never skip a
    /// node, and paths follow mesh links.
    Adjacency,
}

/// Search space over the nodes of a [`NavMesh`].
///
/// Neighbors are the node's stored links in key order, minus nodes holding
/// the blocked sentinel.
#[derive(Debug, Clone, Copy)]
pub struct MeshPather<'a> {
    mesh: &'a NavMesh,
    visibility: MeshVisibility<'a>,
}

impl<'a> MeshPather<'a> {
    pub fn new(mesh: &'a NavMesh, visibility: MeshVisibility<'a>) -> Self {
        Self { mesh, visibility }
    }

    pub fn mesh(&self) -> &'a NavMesh {
        self.mesh
    }
}

impl Pather for MeshPather<'_> {
    type Node = MeshNodeId;

    fn node_count(&self) -> usize {
        self.mesh.len()
    }

    fn index(&self, node: MeshNodeId) -> Option<usize> {
        self.mesh.node(node).map(|_| node.index())
    }

    fn node(&self, idx: usize) -> MeshNodeId {
        MeshNodeId(idx as u32)
    }

    fn position(&self, node: MeshNodeId) -> Point {
        self.mesh.node(node).map_or(Point::ZERO, |n| n.pos)
    }

    fn neighbors(&self, node: MeshNodeId, buf: &mut Vec<MeshNodeId>) {
        buf.extend(
            self.mesh
                .neighbors(node)
                .filter(|&id| self.mesh.node(id).is_some_and(|n| !n.is_blocked())),
        );
    }
}

impl WeightedPather for MeshPather<'_> {}

impl AnyAnglePather for MeshPather<'_> {
    fn line_of_sight(&self, from: MeshNodeId, to: MeshNodeId) -> bool {
        match self.visibility {
            MeshVisibility::Grid(grid) => {
                line_of_sight(grid, self.position(from), self.position(to))
            }
            MeshVisibility::Adjacency => {
                from == to
                    || self.mesh.neighbors(from).any(|id| id == to)
                    || self.mesh.neighbors(to).any(|id| id == from)
            }
        }
    }
}

impl MeshSearch {
    /// Theta* over `mesh` from node `from` to node `to`.
    ///
    /// Fails with [`SearchError::InvalidStart`] / [`SearchError::InvalidGoal`]
    /// for ids the mesh does not contain.
    pub fn mesh_path(
        &mut self,
        mesh: &NavMesh,
        visibility: MeshVisibility<'_>,
        from: MeshNodeId,
        to: MeshNodeId,
        heuristic: Heuristic,
    ) -> Result<SearchResult<MeshNodeId>, SearchError> {
        self.search(&MeshPather::new(mesh, visibility), from, to, heuristic)
    }
}
