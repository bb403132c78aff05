use async_trait::async_trait;
use commute_core::db::{DbConfig, RepositoryError, ScenarioStore, StoreFactory};
use tracing::info;

use crate::repository::SqliteScenarioStore;

/// [`StoreFactory`] for SQLite.
///
/// Register this with a [`commute_core::db::StoreRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use commute_core::db::StoreRegistry;
/// use commute_db_sqlite::SqliteStoreFactory;
///
/// let mut registry = StoreRegistry::new();
/// registry.register(Box::new(SqliteStoreFactory));
/// ```
pub struct SqliteStoreFactory;

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and bring
    /// its schema up to date.
    ///
    /// Accepted values:
    /// * A bare file path, e.g. `"commute.db"`. Created if missing.
    /// * `":memory:"` for a throwaway database.
    /// * A full `sqlite:` URL.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn ScenarioStore>, RepositoryError> {
        let store = SqliteScenarioStore::new(&config.connection_string)
            .await
            .map_err(|e| RepositoryError::Connection(format!("{e:#}")))?;
        store
            .run_migrations()
            .await
            .map_err(|e| RepositoryError::Database(format!("{e:#}")))?;

        info!(database = %config.connection_string, "SQLite store ready");
        Ok(Box::new(store))
    }
}

#[cfg(test)]
mod tests {
    use commute_core::db::{DbConfig, StoreFactory, StoreRegistry};

    use super::SqliteStoreFactory;

    #[test]
    fn backend_name_is_sqlite() {
        assert_eq!(SqliteStoreFactory.backend_name(), "sqlite");
    }

    #[tokio::test]
    async fn creates_migrated_in_memory_store() {
        let store = SqliteStoreFactory
            .create(&DbConfig::default())
            .await
            .expect("failed to create in-memory store");

        let scenarios = store.list_scenarios().await;

        assert!(scenarios.is_ok(), "schema missing: {:#?}", scenarios.err());
        assert!(scenarios.unwrap().is_empty());
    }

    #[tokio::test]
    async fn registry_dispatches_to_sqlite() {
        let mut registry = StoreRegistry::new();
        registry.register(Box::new(SqliteStoreFactory));

        let result = registry.create(&DbConfig::default()).await;

        assert!(result.is_ok(), "expected a store, got {:#?}", result.err());
    }

    #[tokio::test]
    async fn unreachable_path_is_connection_error() {
        let config = DbConfig {
            backend: "sqlite".to_string(),
            connection_string: "/nonexistent-dir/for/sure/commute.db".to_string(),
        };

        let result = SqliteStoreFactory.create(&config).await;

        assert!(matches!(
            result,
            Err(commute_core::RepositoryError::Connection(_))
        ));
    }
}
