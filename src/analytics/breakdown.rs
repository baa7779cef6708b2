//! Proportional breakdowns of a snapshot for pie-chart style views.

use std::collections::HashMap;

use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

use super::totals::calculate_totals;

/// Colors for the per-kind breakdown, in [TransactionKind::ALL] order.
const KIND_COLORS: [&str; 3] = ["#4CAF50", "#F44336", "#FF9800"];

/// The palette cycled through for description breakdown slices.
const PALETTE: [&str; 8] = [
    "#4F46E5", "#10B981", "#F59E0B", "#EF4444", "#6366F1", "#8B5CF6", "#EC4899", "#0EA5E9",
];

/// One slice of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    /// The grouping key: a kind name or a transaction description.
    pub label: String,
    /// The summed amount for this group.
    pub value: f64,
    /// This group's share of the grand total, rounded to the nearest
    /// integer percent.
    pub percent: i64,
    /// The hex color the chart should render this slice with.
    pub color: &'static str,
}

/// Breaks the snapshot down by transaction kind.
///
/// Always emits exactly three slices in [TransactionKind::ALL] order, even
/// when a kind has no transactions, so charts keep stable category identity
/// across renders.
pub fn breakdown_by_kind(transactions: &[Transaction]) -> Vec<BreakdownSlice> {
    let totals = calculate_totals(transactions);
    let values = [totals.income, totals.expense, totals.upcoming_expense];
    let grand_total: f64 = values.iter().sum();

    TransactionKind::ALL
        .into_iter()
        .zip(values)
        .zip(KIND_COLORS)
        .map(|((kind, value), color)| BreakdownSlice {
            label: kind.as_str().to_owned(),
            value,
            percent: percent_of(value, grand_total),
            color,
        })
        .collect()
}

/// Breaks the snapshot down by description, highest share first.
///
/// The grand total is the sum of all transaction amounts regardless of kind.
/// Groups with equal percentages stay in the order their description was
/// first seen, and colors are assigned in that order, cycling the palette.
/// A grand total of zero yields no slices rather than a division by zero.
pub fn breakdown_by_description(transactions: &[Transaction]) -> Vec<BreakdownSlice> {
    let grand_total: f64 = transactions.iter().map(|t| t.amount).sum();

    if grand_total == 0.0 {
        return Vec::new();
    }

    // Group totals keyed by description, preserving first-seen order.
    let mut labels: Vec<&str> = Vec::new();
    let mut group_totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        let description = transaction.description.as_str();

        if !group_totals.contains_key(description) {
            labels.push(description);
        }

        *group_totals.entry(description).or_insert(0.0) += transaction.amount;
    }

    let mut slices: Vec<BreakdownSlice> = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| BreakdownSlice {
            label: label.to_owned(),
            value: group_totals[label],
            percent: percent_of(group_totals[label], grand_total),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect();

    slices.sort_by(|a, b| b.percent.cmp(&a.percent));

    slices
}

fn percent_of(value: f64, total: f64) -> i64 {
    if total == 0.0 {
        0
    } else {
        (value / total * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::transaction::{Transaction, TransactionKind};

    use super::{breakdown_by_description, breakdown_by_kind};

    fn transaction(amount: f64, kind: TransactionKind, description: &str) -> Transaction {
        Transaction::build(amount, kind, date!(2024 - 01 - 15), description).into_transaction(0)
    }

    fn dated(amount: f64, kind: TransactionKind, date: Date) -> Transaction {
        Transaction::build(amount, kind, date, "transaction").into_transaction(0)
    }

    #[test]
    fn kind_breakdown_always_emits_three_slices() {
        let got = breakdown_by_kind(&[]);

        let want_labels = ["Income", "Expense", "Upcoming Expense"];
        assert_eq!(got.len(), 3);
        for (slice, want_label) in got.iter().zip(want_labels) {
            assert_eq!(slice.label, want_label);
            assert_eq!(slice.value, 0.0);
            assert_eq!(slice.percent, 0);
        }
    }

    #[test]
    fn kind_breakdown_sums_amounts_per_kind() {
        let transactions = vec![
            dated(1000.0, TransactionKind::Income, date!(2024 - 01 - 01)),
            dated(300.0, TransactionKind::Expense, date!(2024 - 01 - 05)),
            dated(150.0, TransactionKind::UpcomingExpense, date!(2024 - 01 - 10)),
            dated(50.0, TransactionKind::Expense, date!(2024 - 01 - 12)),
        ];

        let got = breakdown_by_kind(&transactions);

        assert_eq!(got[0].value, 1000.0);
        assert_eq!(got[1].value, 350.0);
        assert_eq!(got[2].value, 150.0);
        assert_eq!(got[0].color, "#4CAF50");
        assert_eq!(got[1].color, "#F44336");
        assert_eq!(got[2].color, "#FF9800");
    }

    #[test]
    fn description_breakdown_sorts_by_share_descending() {
        let transactions = vec![
            transaction(200.0, TransactionKind::Expense, "Food"),
            transaction(700.0, TransactionKind::Expense, "Housing"),
            transaction(100.0, TransactionKind::Expense, "Transport"),
        ];

        let got = breakdown_by_description(&transactions);

        let labels: Vec<&str> = got.iter().map(|slice| slice.label.as_str()).collect();
        assert_eq!(labels, vec!["Housing", "Food", "Transport"]);
        assert_eq!(got[0].percent, 70);
        assert_eq!(got[1].percent, 20);
        assert_eq!(got[2].percent, 10);
    }

    #[test]
    fn description_breakdown_merges_repeated_descriptions() {
        let transactions = vec![
            transaction(30.0, TransactionKind::Expense, "Food"),
            transaction(70.0, TransactionKind::Expense, "Rent"),
            transaction(20.0, TransactionKind::Expense, "Food"),
        ];

        let got = breakdown_by_description(&transactions);

        let food = got.iter().find(|slice| slice.label == "Food").unwrap();
        assert_eq!(food.value, 50.0);
        assert_eq!(food.percent, 42);
    }

    #[test]
    fn description_breakdown_counts_all_kinds_in_grand_total() {
        // The observed behavior in the app this replaces: income rows are
        // part of the grand total even in the spending view.
        let transactions = vec![
            transaction(500.0, TransactionKind::Income, "Salary"),
            transaction(500.0, TransactionKind::Expense, "Rent"),
        ];

        let got = breakdown_by_description(&transactions);

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].percent, 50);
        assert_eq!(got[1].percent, 50);
    }

    #[test]
    fn description_breakdown_percentages_sum_to_roughly_100() {
        let transactions = vec![
            transaction(33.0, TransactionKind::Expense, "A"),
            transaction(33.0, TransactionKind::Expense, "B"),
            transaction(34.0, TransactionKind::Expense, "C"),
        ];

        let got = breakdown_by_description(&transactions);

        let sum: i64 = got.iter().map(|slice| slice.percent).sum();
        assert!((99..=101).contains(&sum), "got {sum}");
    }

    #[test]
    fn description_breakdown_ties_keep_encounter_order() {
        let transactions = vec![
            transaction(50.0, TransactionKind::Expense, "Zebra"),
            transaction(50.0, TransactionKind::Expense, "Alpha"),
        ];

        let got = breakdown_by_description(&transactions);

        assert_eq!(got[0].label, "Zebra");
        assert_eq!(got[1].label, "Alpha");
    }

    #[test]
    fn description_breakdown_cycles_palette_in_encounter_order() {
        let transactions: Vec<Transaction> = (0..10)
            .map(|i| {
                transaction(
                    100.0 - i as f64,
                    TransactionKind::Expense,
                    &format!("category #{i}"),
                )
            })
            .collect();

        let got = breakdown_by_description(&transactions);

        assert_eq!(got.len(), 10);
        // Descending amounts mean encounter order survives the sort, so the
        // ninth slice wraps back to the first palette entry.
        assert_eq!(got[8].color, got[0].color);
        assert_eq!(got[9].color, got[1].color);
    }

    #[test]
    fn zero_grand_total_yields_empty_breakdown() {
        assert!(breakdown_by_description(&[]).is_empty());

        let zero_amounts = vec![transaction(0.0, TransactionKind::Expense, "Nothing")];
        assert!(breakdown_by_description(&zero_amounts).is_empty());
    }
}
