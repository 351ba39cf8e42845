//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.

pub mod pg_url_map_repository;

pub use pg_url_map_repository::PgUrlMapRepository;
