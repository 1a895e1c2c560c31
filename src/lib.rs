//! Points Ledger Library
//! # Overview
//!
//! This library maintains a per-account point balance and an append-only
//! transaction history, supporting concurrent charge and use requests while
//! preserving per-account correctness and full parallelism across unrelated
//! accounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::lock_registry`] - Keyed fair read/write locks, one registry
//!     per lock domain (balance, history)
//!   - [`core::validator`] - Stateless charge/use business-rule checks
//!   - [`core::service`] - Orchestration of locks, stores, and validation
//! - [`store`] - In-memory storage collaborators behind the trait seams in
//!   [`core::traits`]
//!
//! # Operations
//!
//! [`LedgerService`] exposes four operations to the API layer:
//!
//! - **get_balance**: Read an account's balance snapshot
//! - **get_history**: Read an account's transactions in append order
//! - **charge**: Credit points, bounded by the charge limit (1,000,000)
//! - **use_points**: Debit points (requires sufficient balance)
//!
//! # Concurrency
//!
//! Write operations are serialized per account by a fair keyed write lock;
//! operations on distinct accounts never contend. Balance mutation and
//! history append run in two separate critical sections (independent lock
//! domains), so a reader may briefly observe a new balance before the
//! matching history entry is visible. No operation holds two locks at
//! once.

// Module declarations
pub mod core;
pub mod store;
pub mod types;

pub use crate::core::{
    BalanceLocks, BalanceStore, HistoryLocks, HistoryStore, LedgerService, LockRegistry,
    CHARGE_LIMIT,
};
pub use store::{InMemoryBalanceStore, InMemoryHistoryStore};
pub use types::{Account, AccountId, LedgerError, Transaction, TransactionId, TransactionKind};
