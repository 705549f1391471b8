//! Name-based lookup of heuristics and search methods.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::distance::{Heuristic, chebyshev, euclidean, manhattan, naive, octile};
use crate::error::SearchError;

/// Maps heuristic names to functions.
///
/// The default registry holds the built-ins: `"naive"`, `"manhattan"`,
/// `"euclidean"`, `"octile"` and `"chebyshev"`.
#[derive(Debug, Clone)]
pub struct HeuristicRegistry {
    entries: BTreeMap<String, Heuristic>,
}

impl Default for HeuristicRegistry {
    fn default() -> Self {
        let mut reg = Self::empty();
        reg.register("naive", naive);
        reg.register("manhattan", manhattan);
        reg.register("euclidean", euclidean);
        reg.register("octile", octile);
        reg.register("chebyshev", chebyshev);
        reg
    }
}

impl HeuristicRegistry {
    /// A registry with the built-in heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no heuristics at all.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `heuristic` under `name`, returning the function it replaces.
    pub fn register(&mut self, name: impl Into<String>, heuristic: Heuristic) -> Option<Heuristic> {
        self.entries.insert(name.into(), heuristic)
    }

    /// The heuristic registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Heuristic, SearchError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| SearchError::InvalidHeuristic(name.to_owned()))
    }

    /// Whether a heuristic is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// The search variants, addressable by identifier. A
/// [`Planner`](crate::Planner) runs the variant an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    /// Theta* over an occupancy grid, `"T*"`.
    Grid,
    /// Theta* over a navigation mesh, `"T* mesh"`.
    Mesh,
}

impl SearchMethod {
    pub const ALL: [SearchMethod; 2] = [SearchMethod::Grid, SearchMethod::Mesh];

    /// Registration identifier.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Grid => "T*",
            Self::Mesh => "T* mesh",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SearchMethod {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.identifier() == s)
            .ok_or_else(|| SearchError::UnknownMethod(s.to_owned()))
    }
}
