use crate::neighbors::DiagonalPolicy;

/// Search parameters that can be stored alongside a map.
///
/// The heuristic is kept by name and resolved through a
/// [`HeuristicRegistry`](crate::HeuristicRegistry) when a search runs.
/// The default is `"euclidean"`; pass `"naive"` for an uninformed
/// (zero) heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Registered heuristic name.
    pub heuristic: String,
    /// Diagonal move policy for grid searches.
    pub diagonal: DiagonalPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: "euclidean".to_owned(),
            diagonal: DiagonalPolicy::Always,
        }
    }
}

impl SearchConfig {
    pub fn with_heuristic(mut self, name: impl Into<String>) -> Self {
        self.heuristic = name.into();
        self
    }

    pub fn with_diagonal(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }
}
