use thiserror::Error;

/// Failure to turn a string into a version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The numeric prefix did not hold the required number of components
    #[error("expected {expected} version components, found {found}")]
    WrongComponentCount { expected: usize, found: usize },
    #[error("version component `{component}` is not a number")]
    NotANumber { component: String },
    /// Only reachable for generic versions whose delimiter set leaves a
    /// leading `-` inside a fragment
    #[error("version component `{component}` is negative")]
    NegativeValue { component: String },
    /// The injected version source had nothing to offer
    #[error("no version reported by {source_name}")]
    Unavailable { source_name: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
