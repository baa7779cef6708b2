//! Pure helpers for filtering and ordering a transaction snapshot.
//!
//! None of these functions mutate their input; each returns a new vector, so
//! multiple presentation surfaces can query the same snapshot concurrently.

use super::{Transaction, TransactionKind};

/// Returns the transactions matching `kind`, or a copy of the whole snapshot
/// when no filter is set.
///
/// `None` is the first-class "no filter" state the UI toggles back to when
/// the same filter is selected twice. Filtering an already-filtered result
/// with the same kind yields the same result again.
pub fn filter_by_kind(
    transactions: &[Transaction],
    kind: Option<TransactionKind>,
) -> Vec<Transaction> {
    match kind {
        Some(kind) => transactions
            .iter()
            .filter(|transaction| transaction.kind == kind)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}

/// Returns the snapshot sorted by date, earliest first.
///
/// The sort is stable: transactions on the same date keep their original
/// relative order.
pub fn sorted_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

/// Returns the `count` most recent transactions, newest first.
///
/// Used for "latest N" views such as the dashboard's recent-transactions
/// list. The sort is stable, so same-date transactions keep their snapshot
/// order.
pub fn latest(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);
    sorted
}
