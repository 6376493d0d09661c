use thiserror::Error;

use crate::parse::ParseError;

/// Failure to obtain a router config from a file or document.
///
/// Returned by [`ConditionRouterConfig::from_file()`](crate::ConditionRouterConfig::from_file)
/// and by [`FileLoader`](crate::FileLoader).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
