//! Any-angle path search for grid-based maps and navigation meshes.
//!
//! This crate implements Theta*, an A* variant that checks line of sight to
//! a node's grandparent while relaxing edges. When the grandparent can see a
//! neighbor directly, the neighbor is re-parented to it and the intermediate
//! waypoint drops out of the path, producing shorter routes that are not
//! tied to the eight grid directions.
//!
//! - **Grid search** ([`ThetaStar::grid_path`], method id `"T*"`) over an
//!   [`OccupancyGrid`](anyangle_core::OccupancyGrid) with 8-connected moves.
//! - **Mesh search** ([`ThetaStar::mesh_path`], method id `"T* mesh"`) over a
//!   [`NavMesh`](anyangle_core::NavMesh) using its stored adjacency.
//! - **Dispatch** ([`Planner`]) runs either variant by method identifier,
//!   with heuristics looked up by name.
//! - **Line of sight** ([`line_of_sight`]) between two grid cells, also used
//!   to validate finished paths ([`path_is_visible`]).
//!
//! [`ThetaStar`] owns the per-node search state (costs, parents, open and
//! closed flags) so the grid or mesh being searched is never mutated, and
//! repeated queries reuse the same buffers.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | node indexing, positions, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AnyAnglePather`] : [`WeightedPather`] | visibility between nodes |

mod config;
mod distance;
mod error;
mod grid;
mod los;
mod mesh;
mod neighbors;
mod planner;
mod registry;
mod search;
mod traits;

pub use config::SearchConfig;
pub use distance::{Heuristic, chebyshev, euclidean, manhattan, naive, octile, path_length};
pub use error::SearchError;
pub use grid::GridPather;
pub use los::{line_of_sight, path_is_visible};
pub use mesh::{MeshPather, MeshVisibility};
pub use neighbors::{DiagonalPolicy, grid_neighbors};
pub use planner::{Planner, SearchSpace};
pub use registry::{HeuristicRegistry, SearchMethod};
pub use search::{GridSearch, MeshSearch, SearchResult, ThetaStar};
pub use traits::{AnyAnglePather, Pather, WeightedPather};
