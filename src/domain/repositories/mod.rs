//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod url_map_repository;

pub use url_map_repository::UrlMapRepository;

#[cfg(test)]
pub use url_map_repository::MockUrlMapRepository;
