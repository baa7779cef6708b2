//! Core library for a personal-finance application.
//!
//! The heart of the crate is the aggregation engine in [analytics]: pure
//! functions that take a snapshot of transactions plus query parameters and
//! deterministically produce totals by type, chart breakdowns, a running
//! balance series and paginated views. Nothing in the engine mutates its
//! input or performs I/O, so the dashboard, analytics and transaction manager
//! surfaces can all query the same snapshot independently.
//!
//! Around the engine sit the ingestion boundaries ([csv_import] and the
//! validation in [transaction]) and the snapshot stores ([stores]) that
//! callers load from and commit to.

#![warn(missing_docs)]

pub mod analytics;
pub mod csv_import;
pub mod dashboard;
mod error;
pub mod goal;
pub mod pagination;
pub mod stores;
pub mod transaction;

pub use error::Error;
