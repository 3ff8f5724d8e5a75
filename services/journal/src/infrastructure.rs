// Infrastructure layer modules
pub mod config;
pub mod entry_repository;
pub mod logging;

// Re-exports
pub use config::{DynamoDbConfig, DynamoDbConfigError};
pub use entry_repository::{DynamoEntryRepository, EntryRepository, RepositoryError};
pub use logging::init_logging;
#[cfg(test)]
pub use logging::init_test_logging;
