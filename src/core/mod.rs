//! Core business logic module
//!
//! This module contains the concurrency-control layer and orchestration:
//! - `lock_registry` - Keyed fair read/write locks per account
//! - `validator` - Stateless charge/use business-rule checks
//! - `traits` - Storage trait seams consumed by the service
//! - `service` - Ledger orchestration over locks, stores, and validation

pub mod lock_registry;
pub mod service;
pub mod traits;
pub mod validator;

pub use lock_registry::{BalanceLocks, HistoryLocks, LockRegistry};
pub use service::LedgerService;
pub use traits::{BalanceStore, HistoryStore};
pub use validator::{validate_chargeable, validate_useable, CHARGE_LIMIT};
