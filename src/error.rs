use thiserror::Error;

/// Structural faults reported by [`SkipList::check`](crate::SkipList::check).
///
/// Lookups and deletions of absent values are not errors; they return `None`
/// or `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("level {level} is not strictly ascending")]
    Unordered { level: usize },

    #[error("level {level} links to a freed or missing node")]
    DanglingLink { level: usize },

    #[error("level {level} holds {found} nodes, {expected} nodes are tall enough for it")]
    LevelCount {
        level: usize,
        expected: usize,
        found: usize,
    },

    #[error("global height {height} is below an element of height {element}")]
    TooShort { height: usize, element: usize },

    #[error("top level of a list of height {height} is empty")]
    EmptyTopLevel { height: usize },

    #[error("list reports {expected} distinct values, level 0 holds {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("list reports {expected} insertions, multiplicities sum to {found}")]
    TotalMismatch { expected: usize, found: usize },
}
