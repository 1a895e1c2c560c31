//! Storage collaborators
//!
//! In-memory implementations of the storage traits defined in
//! [`crate::core::traits`].

pub mod memory;

pub use memory::{InMemoryBalanceStore, InMemoryHistoryStore};
