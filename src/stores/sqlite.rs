//! SQLite-backed transaction and goal store.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    goal::{Goal, GoalBuilder, GoalId},
    stores::{GoalStore, TransactionStore},
    transaction::{Transaction, TransactionBuilder, TransactionId, TransactionKind},
};

/// Stores transactions and goals in a SQLite database.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Open a store over `connection`, creating the tables if needed.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the tables cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_tables(&connection)?;

        Ok(Self { connection })
    }
}

fn create_tables(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL,
            kind TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL,
            note TEXT
            )",
        (),
    )?;

    connection.execute(
        "CREATE TABLE IF NOT EXISTS goal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            target REAL NOT NULL,
            description TEXT NOT NULL,
            deadline_days INTEGER NOT NULL,
            completed INTEGER NOT NULL
            )",
        (),
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> rusqlite::Result<Transaction> {
    let kind_text: String = row.get(2)?;
    let kind = kind_text.parse::<TransactionKind>().map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            error.to_string().into(),
        )
    })?;

    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        kind,
        date: row.get(3)?,
        description: row.get(4)?,
        note: row.get(5)?,
    })
}

fn map_goal_row(row: &Row) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        target: row.get(1)?,
        description: row.get(2)?,
        deadline_days: row.get(3)?,
        completed: row.get(4)?,
    })
}

fn insert_transaction(
    builder: &TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    builder.validate()?;

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, kind, date, description, note)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, amount, kind, date, description, note",
        )?
        .query_row(
            (
                builder.amount,
                builder.kind.as_str(),
                builder.date,
                &builder.description,
                &builder.note,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

impl TransactionStore for SqliteStore {
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        insert_transaction(&builder, &self.connection)
    }

    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        builder.validate()?;

        self.connection
            .prepare(
                "UPDATE \"transaction\"
                 SET amount = ?1, kind = ?2, date = ?3, description = ?4, note = ?5
                 WHERE id = ?6
                 RETURNING id, amount, kind, date, description, note",
            )?
            .query_row(
                (
                    builder.amount,
                    builder.kind.as_str(),
                    builder.date,
                    &builder.description,
                    &builder.note,
                    id,
                ),
                map_transaction_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
                error => error.into(),
            })
    }

    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        if rows_deleted == 0 {
            Err(Error::DeleteMissingTransaction)
        } else {
            Ok(())
        }
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .prepare(
                "SELECT id, amount, kind, date, description, note
                 FROM \"transaction\" WHERE id = ?1",
            )?
            .query_row([id], map_transaction_row)?;

        Ok(transaction)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .prepare(
                "SELECT id, amount, kind, date, description, note
                 FROM \"transaction\" ORDER BY id ASC",
            )?
            .query_map([], map_transaction_row)?
            .map(|result| result.map_err(Error::from))
            .collect()
    }

    fn import(&mut self, builders: Vec<TransactionBuilder>) -> Result<Vec<Transaction>, Error> {
        let tx = self.connection.unchecked_transaction()?;

        let mut imported = Vec::with_capacity(builders.len());
        for builder in &builders {
            imported.push(insert_transaction(builder, &tx)?);
        }

        tx.commit()?;

        Ok(imported)
    }
}

impl GoalStore for SqliteStore {
    fn create_goal(&mut self, builder: GoalBuilder) -> Result<Goal, Error> {
        builder.validate()?;

        let goal = self
            .connection
            .prepare(
                "INSERT INTO goal (target, description, deadline_days, completed)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, target, description, deadline_days, completed",
            )?
            .query_row(
                (
                    builder.target,
                    &builder.description,
                    builder.deadline_days,
                    builder.completed,
                ),
                map_goal_row,
            )?;

        Ok(goal)
    }

    fn update_goal(&mut self, id: GoalId, builder: GoalBuilder) -> Result<Goal, Error> {
        builder.validate()?;

        self.connection
            .prepare(
                "UPDATE goal
                 SET target = ?1, description = ?2, deadline_days = ?3, completed = ?4
                 WHERE id = ?5
                 RETURNING id, target, description, deadline_days, completed",
            )?
            .query_row(
                (
                    builder.target,
                    &builder.description,
                    builder.deadline_days,
                    builder.completed,
                    id,
                ),
                map_goal_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingGoal,
                error => error.into(),
            })
    }

    fn delete_goal(&mut self, id: GoalId) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .execute("DELETE FROM goal WHERE id = ?1", [id])?;

        if rows_deleted == 0 {
            Err(Error::DeleteMissingGoal)
        } else {
            Ok(())
        }
    }

    fn get_all_goals(&self) -> Result<Vec<Goal>, Error> {
        self.connection
            .prepare(
                "SELECT id, target, description, deadline_days, completed
                 FROM goal ORDER BY id ASC",
            )?
            .query_map([], map_goal_row)?
            .map(|result| result.map_err(Error::from))
            .collect()
    }
}
