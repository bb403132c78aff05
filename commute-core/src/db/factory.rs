use std::collections::HashMap;

use async_trait::async_trait;

use super::repository::{RepositoryError, ScenarioStore};

/// Backend-agnostic connection configuration.
///
/// `backend` must match the [`StoreFactory::backend_name`] of a registered
/// factory. `connection_string` is handed to that factory as-is and only
/// means something to the backend.
///
/// | backend    | connection_string examples          |
/// |------------|-------------------------------------|
/// | `sqlite`   | `commute.db`, `:memory:`            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"sqlite"`).
    pub backend: String,
    pub connection_string: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        }
    }
}

/// One implementation per storage backend. Each backend crate exports a
/// unit struct implementing this trait, registered with a
/// [`StoreRegistry`] at startup.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open (or create) the store. Migrations run here.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn ScenarioStore>, RepositoryError>;
}

/// [`StoreFactory`] instances keyed by backend name.
pub struct StoreRegistry {
    factories: HashMap<&'static str, Box<dyn StoreFactory>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn StoreFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory matching `config.backend`.
    ///
    /// # Errors
    /// * [`RepositoryError::Configuration`] when no factory is registered
    ///   under the requested name.
    /// * Any error the chosen factory returns.
    pub async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn ScenarioStore>, RepositoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                RepositoryError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
