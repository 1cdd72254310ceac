//! # Task Board Infrastructure
//! 
//! Record store adapters: PostgreSQL (sqlx) and an in-process memory store.
//! Both implement the repository traits of `taskboard-core`.

pub mod database;
pub mod memory;

pub use database::{create_pool, postgres_repositories, run_migrations};
pub use memory::MemoryStore;
