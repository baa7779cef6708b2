//! CSV import boundary: parsing and normalizing bank-export rows into
//! transaction builders.

mod csv;

pub use csv::{ImportSummary, RejectedRow, RowRejection, normalize_csv};
