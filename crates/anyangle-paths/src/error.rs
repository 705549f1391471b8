use std::fmt;

/// Errors returned by path searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The open set ran dry before the goal was reached: start and goal are
    /// disconnected.
    NoPathFound,
    /// No heuristic is registered under the given name.
    InvalidHeuristic(String),
    /// No search method is registered under the given identifier.
    UnknownMethod(String),
    /// The start node is not part of the searched grid or mesh.
    InvalidStart,
    /// The goal node is not part of the searched grid or mesh.
    InvalidGoal,
    /// The named search method cannot run over the given kind of space.
    UnsupportedSpace(&'static str),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound => write!(f, "no path found"),
            Self::InvalidHeuristic(name) => {
                write!(f, "unknown heuristic \u{201c}{name}\u{201d}")
            }
            Self::UnknownMethod(name) => {
                write!(f, "unknown search method \u{201c}{name}\u{201d}")
            }
            Self::InvalidStart => write!(f, "start is outside the search space"),
            Self::InvalidGoal => write!(f, "goal is outside the search space"),
            Self::UnsupportedSpace(method) => {
                write!(f, "search method \u{201c}{method}\u{201d} cannot run on this space")
            }
        }
    }
}

impl std::error::Error for SearchError {}
