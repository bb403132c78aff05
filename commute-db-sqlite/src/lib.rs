//! SQLite storage for scenarios and their comparison history.

mod decimal;
mod factory;
mod repository;

pub use factory::SqliteStoreFactory;
pub use repository::SqliteScenarioStore;
