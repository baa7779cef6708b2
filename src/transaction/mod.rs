//! Transaction management for the finance application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, the closed `TransactionKind` enumeration and
//!   the `TransactionBuilder` used to validate records at ingestion
//! - Pure helpers for filtering and ordering a snapshot

mod core;
pub mod query;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionKind};
