use std::fmt;

/// Errors returned by the path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A coordinate had the wrong number of components or a component
    /// outside `0..=7`. Reported before any search work.
    InvalidPosition,
    /// The search queue ran dry without reaching the target.
    NoPathFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition => {
                write!(f, "invalid position: coordinates must be between 0 and 7")
            }
            Self::NoPathFound => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for PathError {}
