//! Method dispatch: run a search chosen by identifier.

use anyangle_core::{NavMesh, OccupancyGrid, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::grid::GridPather;
use crate::mesh::{MeshPather, MeshVisibility};
use crate::registry::{HeuristicRegistry, SearchMethod};
use crate::search::{GridSearch, MeshSearch, SearchResult};

/// A space a [`Planner`] can search.
#[derive(Debug, Clone, Copy)]
pub enum SearchSpace<'a> {
    /// Searched by [`SearchMethod::Grid`].
    Grid(&'a OccupancyGrid),
    /// Searched by [`SearchMethod::Mesh`].
    Mesh {
        mesh: &'a NavMesh,
        visibility: MeshVisibility<'a>,
    },
}

/// Runs searches by method identifier with heuristics looked up by name.
///
/// Endpoints and waypoints are grid coordinates for both methods; on a
/// mesh, each endpoint is the first node located at that coordinate.
#[derive(Default)]
pub struct Planner {
    heuristics: HeuristicRegistry,
    grid: GridSearch,
    mesh: MeshSearch,
}

impl Planner {
    /// A planner with the built-in heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// A planner resolving heuristic names through `heuristics`.
    pub fn with_heuristics(heuristics: HeuristicRegistry) -> Self {
        Self {
            heuristics,
            ..Self::default()
        }
    }

    pub fn heuristics(&self) -> &HeuristicRegistry {
        &self.heuristics
    }

    pub fn heuristics_mut(&mut self) -> &mut HeuristicRegistry {
        &mut self.heuristics
    }

    /// Run the method registered as `method` (`"T*"` or `"T* mesh"`).
    pub fn plan_named(
        &mut self,
        method: &str,
        space: SearchSpace<'_>,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Result<SearchResult<Point>, SearchError> {
        let method: SearchMethod = method.parse()?;
        self.plan(method, space, from, to, config)
    }

    /// Run `method` over `space` from `from` to `to`.
    ///
    /// The heuristic is resolved before anything else, so an unknown name
    /// fails with [`SearchError::InvalidHeuristic`] even when the space is
    /// wrong. A method given the other kind of space fails with
    /// [`SearchError::UnsupportedSpace`].
    pub fn plan(
        &mut self,
        method: SearchMethod,
        space: SearchSpace<'_>,
        from: Point,
        to: Point,
        config: &SearchConfig,
    ) -> Result<SearchResult<Point>, SearchError> {
        let heuristic = self.heuristics.resolve(&config.heuristic)?;
        log::debug!("planner: {method} from {from} to {to} with {}", config.heuristic);

        match (method, space) {
            (SearchMethod::Grid, SearchSpace::Grid(grid)) => {
                let pather = GridPather::new(grid).with_diagonal(config.diagonal);
                self.grid.search(&pather, from, to, heuristic)
            }
            (SearchMethod::Mesh, SearchSpace::Mesh { mesh, visibility }) => {
                let start = mesh.find(from).ok_or(SearchError::InvalidStart)?;
                let goal = mesh.find(to).ok_or(SearchError::InvalidGoal)?;
                let pather = MeshPather::new(mesh, visibility);
                let res = self.mesh.search(&pather, start, goal, heuristic)?;
                Ok(SearchResult {
                    path: res
                        .path
                        .iter()
                        .filter_map(|&id| mesh.node(id).map(|n| n.pos))
                        .collect(),
                    cost: res.cost,
                    expanded: res.expanded,
                })
            }
            (method, _) => Err(SearchError::UnsupportedSpace(method.identifier())),
        }
    }
}
