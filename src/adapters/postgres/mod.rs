//! PostgreSQL store implementation

pub mod store;

pub use store::PostgresStore;
