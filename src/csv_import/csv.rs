//! Functions to normalize bank-export CSV rows into transactions.
//!
//! Expects the columns `date created`, `type` (`debit` or `credit`),
//! `amount`, `description` and an optional `note`. Bad rows are not fatal: a
//! batch import runs to completion, collecting accepted and rejected rows
//! side by side so the caller can report exactly what was dropped and why.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    transaction::{Transaction, TransactionBuilder, TransactionKind},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

const REQUIRED_COLUMNS: [&str; 4] = ["date created", "type", "amount", "description"];

/// One raw CSV row before validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "date created")]
    date_created: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    description: String,
    #[serde(default)]
    note: Option<String>,
}

/// Why a CSV row was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowRejection {
    /// The `type` column was neither `debit` nor `credit`.
    ///
    /// Unknown values are rejected rather than defaulted: silently
    /// miscategorizing money is worse than losing the row.
    #[error("invalid type \"{0}\", expected \"debit\" or \"credit\"")]
    InvalidKind(String),

    /// The `date created` column could not be parsed as a calendar date.
    #[error("invalid date \"{0}\", expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The `amount` column was not a finite, non-negative number.
    #[error("invalid amount \"{0}\"")]
    InvalidAmount(String),

    /// The `description` column was blank.
    #[error("missing description")]
    MissingDescription,

    /// The row could not be read as CSV at all.
    #[error("malformed row: {0}")]
    MalformedRow(String),
}

/// A row that failed validation, with where it came from and why.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// The 1-based physical line the row started on, counting the header as
    /// line 1. Quoted fields may span several physical lines, so this can
    /// grow faster than the record count.
    pub line: u64,
    /// Why the row was rejected.
    pub reason: RowRejection,
}

/// The outcome of normalizing a CSV batch.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Rows that validated, in input order.
    pub accepted: Vec<TransactionBuilder>,
    /// Rows that failed validation, with reasons.
    pub rejected: Vec<RejectedRow>,
}

/// Parses CSV text and validates each row into a [TransactionBuilder].
///
/// `debit` rows become expenses and `credit` rows become income. Row
/// failures do not abort the batch; they are collected in
/// [ImportSummary::rejected] so the caller can surface a
/// "N rows failed to import" message and continue.
///
/// # Errors
/// Returns [Error::InvalidCsv] if the text cannot be read as CSV at all or
/// is missing one of the required columns.
pub fn normalize_csv(text: &str) -> Result<ImportSummary, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| Error::InvalidCsv(error.to_string()))?
        .clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == required) {
            return Err(Error::InvalidCsv(format!(
                "missing column \"{required}\""
            )));
        }
    }

    let mut summary = ImportSummary::default();

    for record_result in reader.records() {
        let record = match record_result {
            Ok(record) => record,
            Err(error) => {
                let line = error.position().map_or(0, csv::Position::line);
                tracing::debug!("could not read CSV row on line {line}: {error}");
                summary.rejected.push(RejectedRow {
                    line,
                    reason: RowRejection::MalformedRow(error.to_string()),
                });
                continue;
            }
        };

        // Quoted fields may span physical lines, so the record's own start
        // position is the only reliable line number.
        let line = record.position().map_or(0, csv::Position::line);

        let row = match record.deserialize::<CsvRow>(Some(&headers)) {
            Ok(row) => row,
            Err(error) => {
                tracing::debug!("could not read CSV row on line {line}: {error}");
                summary.rejected.push(RejectedRow {
                    line,
                    reason: RowRejection::MalformedRow(error.to_string()),
                });
                continue;
            }
        };

        match normalize_row(row) {
            Ok(builder) => summary.accepted.push(builder),
            Err(reason) => {
                tracing::debug!("rejected CSV row on line {line}: {reason}");
                summary.rejected.push(RejectedRow { line, reason });
            }
        }
    }

    Ok(summary)
}

fn normalize_row(row: CsvRow) -> Result<TransactionBuilder, RowRejection> {
    let kind = match row.kind.as_str() {
        "debit" => TransactionKind::Expense,
        "credit" => TransactionKind::Income,
        other => return Err(RowRejection::InvalidKind(other.to_owned())),
    };

    let date = Date::parse(&row.date_created, &DATE_FORMAT)
        .map_err(|_| RowRejection::InvalidDate(row.date_created.clone()))?;

    let amount: f64 = row
        .amount
        .parse()
        .map_err(|_| RowRejection::InvalidAmount(row.amount.clone()))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(RowRejection::InvalidAmount(row.amount));
    }

    // Catch blank descriptions here so every accepted builder is guaranteed
    // to pass store validation; one bad row must never poison the batch.
    if row.description.trim().is_empty() {
        return Err(RowRejection::MissingDescription);
    }

    let note = row.note.filter(|note| !note.is_empty());

    Ok(Transaction::build(amount, kind, date, &row.description).note(note))
}
