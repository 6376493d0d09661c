use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use crate::{ConditionRouterConfig, ConfigLoader, Directory};

/// Whether a [`RouterInitializer`] has published a config yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

/// Loads a router config, compiles it, and registers the resulting
/// descriptor with a [`Directory`].
///
/// The current config is owned by this value rather than by the process.
/// Concurrent [`initialize()`](Self::initialize) calls on one initializer are
/// serialized, so the published config always comes from exactly one
/// successful load.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use condroute::{ConditionRouterConfig, ConfigLoader, MemoryDirectory, RouterInitializer};
///
/// struct Fixed;
///
/// impl ConfigLoader for Fixed {
///     type Source = str;
///     type Error = Infallible;
///
///     fn load(&self, source: &str) -> Result<ConditionRouterConfig, Infallible> {
///         Ok(ConditionRouterConfig::new(1, false, [source]))
///     }
/// }
///
/// let init = RouterInitializer::new(Fixed, MemoryDirectory::new());
/// init.initialize("host = a => host = b").unwrap();
///
/// let routers = init.directory().routers();
/// assert_eq!(routers[0].decoded_rule().unwrap(), "host = a => host = b");
/// ```
#[derive(Debug)]
pub struct RouterInitializer<L, D> {
    loader: L,
    directory: D,
    init_lock: Mutex<()>,
    current: RwLock<Option<Arc<ConditionRouterConfig>>>,
}

impl<L, D> RouterInitializer<L, D>
where
    L: ConfigLoader,
    D: Directory,
{
    pub fn new(loader: L, directory: D) -> Self {
        Self {
            loader,
            directory,
            init_lock: Mutex::new(()),
            current: RwLock::new(None),
        }
    }

    /// Load a config from `source`, publish it, and register its descriptor.
    ///
    /// Returns the config that is now current.
    ///
    /// # Errors
    ///
    /// Returns the loader's error unchanged. Nothing is published or
    /// registered in that case.
    ///
    /// The directory may read [`config()`](Self::config) and
    /// [`state()`](Self::state) while registering, and sees the config being
    /// registered. Calling `initialize` again from inside the loader or the
    /// directory deadlocks.
    pub fn initialize(&self, source: &L::Source) -> Result<Arc<ConditionRouterConfig>, L::Error> {
        let _serial = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let config = Arc::new(self.loader.load(source)?);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&config));
        debug!(?config, "router config published");

        let rule = crate::compile::compile(config.conditions()).to_string();
        let descriptor = crate::build::build_descriptor(&config, &rule);
        self.directory.add_router_descriptors(vec![descriptor]);

        Ok(config)
    }

    #[must_use]
    pub fn state(&self) -> InitState {
        if self.config().is_some() {
            InitState::Initialized
        } else {
            InitState::Uninitialized
        }
    }

    /// The most recently published config, if any.
    #[must_use]
    pub fn config(&self) -> Option<Arc<ConditionRouterConfig>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}
