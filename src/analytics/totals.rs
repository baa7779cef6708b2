//! Per-kind totals over a transaction snapshot.

use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// Income, expense and upcoming-expense totals for a snapshot.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of all income amounts.
    pub income: f64,
    /// Sum of all realized expense amounts.
    pub expense: f64,
    /// Sum of all projected expense amounts.
    pub upcoming_expense: f64,
    /// `income - expense`.
    ///
    /// Upcoming expenses are projected, not yet realized, so they never
    /// reduce the balance.
    pub balance: f64,
}

/// Sums transaction amounts by kind.
///
/// An empty snapshot produces all zeros. The result is independent of the
/// order of `transactions`.
pub fn calculate_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => totals.income += transaction.amount,
            TransactionKind::Expense => totals.expense += transaction.amount,
            TransactionKind::UpcomingExpense => totals.upcoming_expense += transaction.amount,
        }
    }

    totals.balance = totals.income - totals.expense;

    totals
}
