//! The aggregation engine: pure computations over a transaction snapshot.
//!
//! Every function here takes the snapshot by reference and derives a view
//! model without mutating it or performing I/O. The functions may be called
//! independently and concurrently; they share no state.

mod breakdown;
mod history;
mod totals;

pub use breakdown::{BreakdownSlice, breakdown_by_description, breakdown_by_kind};
pub use history::{BalancePoint, balance_history, default_history_range};
pub use totals::{Totals, calculate_totals};
