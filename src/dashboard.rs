//! View-model assembly for the dashboard surface.

use serde::Serialize;

use crate::{
    analytics::{Totals, calculate_totals},
    goal::Goal,
    transaction::{Transaction, query::latest},
};

/// Everything the dashboard renders above the fold: headline totals, the
/// most recent transactions, and the goals still being worked towards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Income, expense, upcoming-expense totals and the realized balance.
    pub totals: Totals,
    /// The most recent transactions, newest first.
    pub recent: Vec<Transaction>,
    /// Goals that have not been completed yet, in snapshot order.
    pub active_goals: Vec<Goal>,
}

/// Builds the dashboard view model from a snapshot.
///
/// Pure function of its inputs; the snapshot and goals are never mutated.
pub fn build_summary(
    transactions: &[Transaction],
    goals: &[Goal],
    recent_count: usize,
) -> DashboardSummary {
    DashboardSummary {
        totals: calculate_totals(transactions),
        recent: latest(transactions, recent_count),
        active_goals: goals
            .iter()
            .filter(|goal| !goal.completed)
            .cloned()
            .collect(),
    }
}
