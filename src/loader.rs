use std::path::Path;

use tracing::debug;

use crate::{ConditionRouterConfig, LoadError};

/// Produces a fresh [`ConditionRouterConfig`] from some source.
///
/// Errors are handed back to the caller of
/// [`RouterInitializer::initialize()`](crate::RouterInitializer::initialize)
/// unchanged.
pub trait ConfigLoader {
    type Source: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load a config.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the source cannot be read or understood.
    fn load(&self, source: &Self::Source) -> Result<ConditionRouterConfig, Self::Error>;
}

/// Loads router config files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl ConfigLoader for FileLoader {
    type Source = Path;
    type Error = LoadError;

    fn load(&self, source: &Path) -> Result<ConditionRouterConfig, LoadError> {
        debug!(path = %source.display(), "loading router config");
        ConditionRouterConfig::from_file(source)
    }
}
