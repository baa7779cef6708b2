//! Defines the core transaction data model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Alias for the ID type assigned to transactions by a store.
pub type TransactionId = i64;

/// The direction of a transaction.
///
/// This is a closed enumeration: aggregation code matches on it
/// exhaustively, so an unrecognized legacy string can only be rejected at an
/// ingestion boundary, never silently fall out of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned. Adds to the balance.
    Income,
    /// Money spent. Subtracts from the balance.
    Expense,
    /// A projected expense that has not been realized yet. Tracked for
    /// display but never moves the balance.
    #[serde(rename = "Upcoming Expense")]
    UpcomingExpense,
}

impl TransactionKind {
    /// All kinds, in the order charts display them.
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Income,
        TransactionKind::Expense,
        TransactionKind::UpcomingExpense,
    ];

    /// The exact string this kind is persisted as.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::UpcomingExpense => "Upcoming Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    /// Parse a persisted kind string. Matching is case-sensitive and exact.
    ///
    /// # Errors
    /// Returns [Error::UnknownTransactionKind] for anything other than
    /// `"Income"`, `"Expense"` or `"Upcoming Expense"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            "Upcoming Expense" => Ok(Self::UpcomingExpense),
            other => Err(Error::UnknownTransactionKind(other.to_owned())),
        }
    }
}

/// A single dated financial event with a direction and a non-negative
/// magnitude.
///
/// To create a new `Transaction`, use [Transaction::build] and pass the
/// builder to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store it was created in
    /// and never reused.
    pub id: TransactionId,
    /// The amount of money involved. Always a non-negative magnitude; the
    /// direction comes from `kind`.
    pub amount: f64,
    /// The direction of the transaction.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// When the transaction happened, or will happen for upcoming expenses.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Optional free-text note, usually carried over from a CSV import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        amount: f64,
        kind: TransactionKind,
        date: Date,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            kind,
            date,
            description: description.to_owned(),
            note: None,
        }
    }
}

/// A transaction that has not been admitted into a store yet.
///
/// Manual entry and CSV import both produce builders; a store validates the
/// builder and assigns the ID. Validation fails closed: a record that does
/// not pass [TransactionBuilder::validate] never enters the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The non-negative monetary amount of the transaction.
    pub amount: f64,
    /// The direction of the transaction.
    pub kind: TransactionKind,
    /// The date when the transaction occurred.
    ///
    /// Future dates are allowed: upcoming expenses are projected events.
    pub date: Date,
    /// A human-readable description of the transaction.
    pub description: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

impl TransactionBuilder {
    /// Set the note for the transaction.
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Check that the builder describes a well-formed transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is negative or not finite,
    /// - or [Error::EmptyDescription] if the description is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(())
    }

    /// Attach a store-assigned ID to produce the final record.
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            description: self.description,
            note: self.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{Transaction, TransactionKind};

    #[test]
    fn kind_parses_exact_strings() {
        assert_eq!("Income".parse(), Ok(TransactionKind::Income));
        assert_eq!("Expense".parse(), Ok(TransactionKind::Expense));
        assert_eq!(
            "Upcoming Expense".parse(),
            Ok(TransactionKind::UpcomingExpense)
        );
    }

    #[test]
    fn kind_rejects_inexact_strings() {
        for text in ["income", "EXPENSE", "upcoming expense", "wire", ""] {
            let got = text.parse::<TransactionKind>();

            assert_eq!(
                got,
                Err(Error::UnknownTransactionKind(text.to_owned())),
                "expected \"{text}\" to be rejected"
            );
        }
    }

    #[test]
    fn kind_round_trips_through_serde() {
        for kind in TransactionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();

            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(serde_json::from_str::<TransactionKind>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn transaction_deserializes_legacy_layout() {
        let json = r#"{
            "id": 3,
            "amount": 150.0,
            "type": "Upcoming Expense",
            "date": "2024-01-10",
            "description": "Car insurance"
        }"#;

        let got: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(got.kind, TransactionKind::UpcomingExpense);
        assert_eq!(got.date, date!(2024 - 01 - 10));
        assert_eq!(got.note, None);
    }

    #[test]
    fn validate_accepts_well_formed_builder() {
        let builder = Transaction::build(
            42.5,
            TransactionKind::Expense,
            date!(2024 - 01 - 15),
            "Groceries",
        );

        assert_eq!(builder.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let builder = Transaction::build(
            -1.0,
            TransactionKind::Income,
            date!(2024 - 01 - 15),
            "Salary",
        );

        assert_eq!(builder.validate(), Err(Error::InvalidAmount(-1.0)));
    }

    #[test]
    fn validate_rejects_non_finite_amount() {
        for amount in [f64::NAN, f64::INFINITY] {
            let builder = Transaction::build(
                amount,
                TransactionKind::Income,
                date!(2024 - 01 - 15),
                "Salary",
            );

            assert!(matches!(
                builder.validate(),
                Err(Error::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn validate_rejects_blank_description() {
        let builder =
            Transaction::build(10.0, TransactionKind::Expense, date!(2024 - 01 - 15), "  ");

        assert_eq!(builder.validate(), Err(Error::EmptyDescription));
    }
}
