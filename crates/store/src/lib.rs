//! `itemservice-store` — the repository collaborator.
//!
//! The repository is an opaque key-by-identifier store; its concurrency
//! guarantees are its own concern, not the domain's.

pub mod repository;

pub use repository::{InMemoryItemRepository, ItemRepository};
