//! **anyangle-core**: spatial data consumed by the any-angle search engine.
//!
//! This crate provides the topology the searches in `anyangle-paths` run
//! over: integer geometry, an occupancy grid addressed by cell coordinates,
//! a navigation mesh with explicit adjacency, and a small ASCII map format
//! for building grids by hand.
//!
//! All types here are plain owned data. A search never mutates them, so a
//! single grid or mesh can be shared read-only between searches running on
//! different threads.

pub mod ascii;
pub mod geom;
pub mod grid;
pub mod mesh;

pub use ascii::MapError;
pub use geom::{DIRECTIONS_8, Point, Range};
pub use grid::{Cell, OccupancyGrid};
pub use mesh::{MeshNode, MeshNodeId, NavMesh};
