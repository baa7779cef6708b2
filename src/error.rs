//! Defines the crate-level error type.

/// The errors that may occur in the library.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A string did not match any of the three transaction kinds.
    ///
    /// Kind matching is case-sensitive and exact: an unrecognized value is
    /// rejected at the ingestion boundary rather than silently excluded from
    /// totals further down.
    #[error("\"{0}\" is not a recognized transaction type")]
    UnknownTransactionKind(String),

    /// An amount was negative or not a finite number.
    ///
    /// Amounts are stored as non-negative magnitudes; the direction of a
    /// transaction comes from its kind, never from the sign of the amount.
    #[error("amounts must be finite and non-negative, got {0}")]
    InvalidAmount(f64),

    /// An empty string was used as a description.
    #[error("the description cannot be empty")]
    EmptyDescription,

    /// The requested record could not be found in the store.
    #[error("the requested record could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to update a goal that does not exist.
    #[error("tried to update a goal that is not in the store")]
    UpdateMissingGoal,

    /// Tried to delete a goal that does not exist.
    #[error("tried to delete a goal that is not in the store")]
    DeleteMissingGoal,

    /// The CSV had issues that prevented it from being read at all.
    ///
    /// Individual bad rows do not produce this error; they are reported per
    /// row so a batch import can run to completion.
    #[error("could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A record could not be serialized to or deserialized from JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerializationError(String),

    /// The store file could not be read or written.
    #[error("could not access the store file: {0}")]
    IoError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}
