pub mod db;
pub mod models;
pub mod repos;
pub mod store;

pub use store::{EntityStore, InMemoryStore, PgStore, StoreError, StoreResult};
