//! A JSON-file snapshot store.
//!
//! Persists transactions and goals as flat JSON arrays, one file each, in
//! the same layout the web client this library grew out of kept in browser
//! local storage. Every mutation rewrites the whole file, which is fine for
//! the size of a personal data set.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error,
    goal::{Goal, GoalBuilder, GoalId},
    stores::{GoalStore, TransactionStore},
    transaction::{Transaction, TransactionBuilder, TransactionId},
};

/// Stores transactions and goals as JSON files in a directory.
pub struct JsonFileStore {
    transactions_path: PathBuf,
    goals_path: PathBuf,
}

impl JsonFileStore {
    /// Open a store over `directory`. The files are created lazily on the
    /// first write; a missing file reads as an empty snapshot.
    pub fn new(directory: &Path) -> Self {
        Self {
            transactions_path: directory.join("transactions.json"),
            goals_path: directory.join("goals.json"),
        }
    }

    /// Load the transaction snapshot, skipping records that no longer parse.
    ///
    /// Records written by older clients may carry a `type` string that is not
    /// one of the three recognized kinds. Rather than failing the whole load
    /// or guessing a direction for the money, such records are skipped and
    /// logged at the `warn` level so the data loss is visible.
    fn load_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let rows: Vec<serde_json::Value> = read_json_array(&self.transactions_path)?;

        let mut transactions = Vec::with_capacity(rows.len());

        for row in rows {
            match serde_json::from_value::<Transaction>(row.clone()) {
                Ok(transaction) => transactions.push(transaction),
                Err(error) => {
                    tracing::warn!("skipping unreadable transaction record {row}: {error}");
                }
            }
        }

        Ok(transactions)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), Error> {
        write_json_array(&self.transactions_path, transactions)
    }

    fn load_goals(&self) -> Result<Vec<Goal>, Error> {
        read_json_array(&self.goals_path)
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<(), Error> {
        write_json_array(&self.goals_path, goals)
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path).map_err(|error| Error::IoError(error.to_string()))?;

    serde_json::from_str(&text).map_err(|error| Error::JsonSerializationError(error.to_string()))
}

fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(records)
        .map_err(|error| Error::JsonSerializationError(error.to_string()))?;

    fs::write(path, text).map_err(|error| Error::IoError(error.to_string()))
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

impl TransactionStore for JsonFileStore {
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        builder.validate()?;

        let mut transactions = self.load_transactions()?;
        let id = next_id(transactions.iter().map(|t| t.id));

        let transaction = builder.into_transaction(id);
        transactions.push(transaction.clone());
        self.save_transactions(&transactions)?;

        Ok(transaction)
    }

    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        builder.validate()?;

        let mut transactions = self.load_transactions()?;
        let index = transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::UpdateMissingTransaction)?;

        let transaction = builder.into_transaction(id);
        transactions[index] = transaction.clone();
        self.save_transactions(&transactions)?;

        Ok(transaction)
    }

    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let mut transactions = self.load_transactions()?;
        let count_before = transactions.len();

        transactions.retain(|t| t.id != id);

        if transactions.len() == count_before {
            return Err(Error::DeleteMissingTransaction);
        }

        self.save_transactions(&transactions)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.load_transactions()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.load_transactions()
    }

    fn import(&mut self, builders: Vec<TransactionBuilder>) -> Result<Vec<Transaction>, Error> {
        for builder in &builders {
            builder.validate()?;
        }

        let mut transactions = self.load_transactions()?;
        let mut id = next_id(transactions.iter().map(|t| t.id));

        let mut imported = Vec::with_capacity(builders.len());
        for builder in builders {
            let transaction = builder.into_transaction(id);
            id += 1;
            transactions.push(transaction.clone());
            imported.push(transaction);
        }

        self.save_transactions(&transactions)?;

        Ok(imported)
    }
}

impl GoalStore for JsonFileStore {
    fn create_goal(&mut self, builder: GoalBuilder) -> Result<Goal, Error> {
        builder.validate()?;

        let mut goals = self.load_goals()?;
        let id = next_id(goals.iter().map(|g| g.id));

        let goal = builder.into_goal(id);
        goals.push(goal.clone());
        self.save_goals(&goals)?;

        Ok(goal)
    }

    fn update_goal(&mut self, id: GoalId, builder: GoalBuilder) -> Result<Goal, Error> {
        builder.validate()?;

        let mut goals = self.load_goals()?;
        let index = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or(Error::UpdateMissingGoal)?;

        let goal = builder.into_goal(id);
        goals[index] = goal.clone();
        self.save_goals(&goals)?;

        Ok(goal)
    }

    fn delete_goal(&mut self, id: GoalId) -> Result<(), Error> {
        let mut goals = self.load_goals()?;
        let count_before = goals.len();

        goals.retain(|g| g.id != id);

        if goals.len() == count_before {
            return Err(Error::DeleteMissingGoal);
        }

        self.save_goals(&goals)
    }

    fn get_all_goals(&self) -> Result<Vec<Goal>, Error> {
        self.load_goals()
    }
}
