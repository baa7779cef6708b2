//! Snapshot stores: the repository interfaces the engine's callers inject,
//! plus SQLite and JSON-file backed implementations.
//!
//! The aggregation functions never touch a store. A presentation surface
//! loads a snapshot with [TransactionStore::get_all], passes it to the
//! engine, and commits mutations back through the same store.

mod json;
mod sqlite;

pub use json::JsonFileStore;
pub use sqlite::SqliteStore;

use crate::{
    Error,
    goal::{Goal, GoalBuilder, GoalId},
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Handles the creation, retrieval and mutation of transactions.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] or [Error::EmptyDescription] if the
    /// builder fails validation; nothing enters the snapshot in that case.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Replace the transaction with `id` with the fields in `builder`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if no transaction has `id`,
    /// or a validation error as for [TransactionStore::create].
    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error>;

    /// Delete the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if no transaction has `id`.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `id`.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Retrieve the current snapshot, in insertion order.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Import many transactions, e.g. the accepted rows of a CSV batch.
    ///
    /// All-or-nothing: if any builder fails validation, nothing is stored.
    fn import(&mut self, builders: Vec<TransactionBuilder>) -> Result<Vec<Transaction>, Error>;
}

/// Handles the creation, retrieval and mutation of savings goals.
pub trait GoalStore {
    /// Create a new goal in the store.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] or [Error::EmptyDescription] if the
    /// builder fails validation.
    fn create_goal(&mut self, builder: GoalBuilder) -> Result<Goal, Error>;

    /// Replace the goal with `id` with the fields in `builder`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingGoal] if no goal has `id`.
    fn update_goal(&mut self, id: GoalId, builder: GoalBuilder) -> Result<Goal, Error>;

    /// Delete the goal with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingGoal] if no goal has `id`.
    fn delete_goal(&mut self, id: GoalId) -> Result<(), Error>;

    /// Retrieve all goals, in insertion order.
    fn get_all_goals(&self) -> Result<Vec<Goal>, Error>;
}
