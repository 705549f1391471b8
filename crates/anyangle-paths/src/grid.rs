use anyangle_core::{OccupancyGrid, Point};

use crate::config::SearchConfig;
use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::los::line_of_sight;
use crate::neighbors::{DiagonalPolicy, grid_neighbors};
use crate::registry::HeuristicRegistry;
use crate::search::{GridSearch, SearchResult};
use crate::traits::{AnyAnglePather, Pather, WeightedPather};

/// Search space over the cells of an [`OccupancyGrid`].
///
/// Nodes are cell coordinates, indexed row-major over the grid bounds.
/// Neighbors come from [`grid_neighbors`] and visibility from
/// [`line_of_sight`].
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a OccupancyGrid,
    diagonal: DiagonalPolicy,
}

impl<'a> GridPather<'a> {
    /// Pather over `grid` with the default [`DiagonalPolicy`].
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self {
            grid,
            diagonal: DiagonalPolicy::default(),
        }
    }

    /// Set the diagonal move policy.
    pub fn with_diagonal(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// The searched grid.
    pub fn grid(&self) -> &'a OccupancyGrid {
        self.grid
    }

    /// The diagonal move policy in use.
    pub fn diagonal(&self) -> DiagonalPolicy {
        self.diagonal
    }
}

impl Pather for GridPather<'_> {
    type Node = Point;

    fn node_count(&self) -> usize {
        self.grid.bounds().len()
    }

    fn index(&self, node: Point) -> Option<usize> {
        self.grid.bounds().index_of(node)
    }

    fn node(&self, idx: usize) -> Point {
        self.grid.bounds().point_at(idx)
    }

    fn position(&self, node: Point) -> Point {
        node
    }

    fn neighbors(&self, node: Point, buf: &mut Vec<Point>) {
        grid_neighbors(self.grid, node, self.diagonal, buf);
    }
}

impl WeightedPather for GridPather<'_> {}

impl AnyAnglePather for GridPather<'_> {
    fn line_of_sight(&self, from: Point, to: Point) -> bool {
        line_of_sight(self.grid, from, to)
    }
}

impl GridSearch {
    /// Theta* over `grid` from `from` to `to`, with 8-connected moves and
    /// no corner-cutting restriction.
    ///
    /// Both endpoints must lie inside the grid. A blocked start is expanded
    /// like any other cell; a blocked goal is never reached.
    pub fn grid_path(
        &mut self,
        grid: &OccupancyGrid,
        from: Point,
        to: Point,
        heuristic: Heuristic,
    ) -> Result<SearchResult<Point>, SearchError> {
        self.search(&GridPather::new(grid), from, to, heuristic)
    }

    /// Like [`grid_path`](Self::grid_path), with the heuristic named by
    /// `config` resolved through `registry` and its diagonal policy applied.
    ///
    /// An unknown heuristic name fails with
    /// [`SearchError::InvalidHeuristic`] before any search work is done.
    pub fn grid_path_with(
        &mut self,
        grid: &OccupancyGrid,
        from: Point,
        to: Point,
        config: &SearchConfig,
        registry: &HeuristicRegistry,
    ) -> Result<SearchResult<Point>, SearchError> {
        let heuristic = registry.resolve(&config.heuristic)?;
        let pather = GridPather::new(grid).with_diagonal(config.diagonal);
        self.search(&pather, from, to, heuristic)
    }
}
