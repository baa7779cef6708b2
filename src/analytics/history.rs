//! Cumulative balance history over a snapshot.

use std::ops::RangeInclusive;

use serde::Serialize;
use time::{Date, Month};

use crate::transaction::{Transaction, TransactionKind, query::sorted_by_date};

/// One point on the balance history line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancePoint {
    /// The date of the transaction this point corresponds to. A day with
    /// several transactions yields several points at that date.
    pub date: Date,
    /// The balance accumulated over all transactions up to and including
    /// this one.
    pub balance: f64,
}

/// Computes the running balance, one point per transaction.
///
/// Points are ordered by date ascending; same-date transactions keep their
/// original relative order. Income adds `+amount` to the running balance,
/// expenses add `-amount`, and upcoming expenses contribute nothing at every
/// step, so the final point of an unbounded history equals the balance from
/// [calculate_totals](super::calculate_totals).
///
/// The running sum always starts from the beginning of the snapshot; `range`
/// only selects which points are returned, so the first in-range point
/// carries the balance accrued before the range.
pub fn balance_history(
    transactions: &[Transaction],
    range: Option<&RangeInclusive<Date>>,
) -> Vec<BalancePoint> {
    let sorted = sorted_by_date(transactions);

    let mut points = Vec::with_capacity(sorted.len());
    let mut balance = 0.0;

    for transaction in &sorted {
        balance += match transaction.kind {
            TransactionKind::Income => transaction.amount,
            TransactionKind::Expense => -transaction.amount,
            TransactionKind::UpcomingExpense => 0.0,
        };

        points.push(BalancePoint {
            date: transaction.date,
            balance,
        });
    }

    match range {
        Some(range) => points
            .into_iter()
            .filter(|point| range.contains(&point.date))
            .collect(),
        None => points,
    }
}

/// The default window callers pass to [balance_history] when the user has
/// not picked one: one calendar month before `today` through `today`.
///
/// The start day is clamped to the length of the previous month, so the
/// month before March 31st starts on the last day of February.
pub fn default_history_range(today: Date) -> RangeInclusive<Date> {
    let month = today.month().previous();
    let year = if month == Month::December {
        today.year() - 1
    } else {
        today.year()
    };
    let day = today.day().min(month.length(year));

    let start = Date::from_calendar_date(year, month, day)
        .expect("day is clamped to the month length");

    start..=today
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::{
        analytics::calculate_totals,
        transaction::{Transaction, TransactionKind},
    };

    use super::{BalancePoint, balance_history, default_history_range};

    fn transaction(id: i64, amount: f64, kind: TransactionKind, date: Date) -> Transaction {
        Transaction::build(amount, kind, date, &format!("transaction #{id}")).into_transaction(id)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            transaction(1, 1000.0, TransactionKind::Income, date!(2024 - 01 - 01)),
            transaction(2, 300.0, TransactionKind::Expense, date!(2024 - 01 - 05)),
            transaction(
                3,
                150.0,
                TransactionKind::UpcomingExpense,
                date!(2024 - 01 - 10),
            ),
        ]
    }

    #[test]
    fn produces_one_point_per_transaction_in_date_order() {
        let want = vec![
            BalancePoint {
                date: date!(2024 - 01 - 01),
                balance: 1000.0,
            },
            BalancePoint {
                date: date!(2024 - 01 - 05),
                balance: 700.0,
            },
            BalancePoint {
                date: date!(2024 - 01 - 10),
                balance: 700.0,
            },
        ];

        let got = balance_history(&sample(), None);

        assert_eq!(want, got);
    }

    #[test]
    fn upcoming_expenses_never_move_the_line() {
        let transactions = vec![
            transaction(1, 500.0, TransactionKind::Income, date!(2024 - 02 - 01)),
            transaction(
                2,
                9999.0,
                TransactionKind::UpcomingExpense,
                date!(2024 - 02 - 02),
            ),
        ];

        let got = balance_history(&transactions, None);

        assert_eq!(got[0].balance, 500.0);
        assert_eq!(got[1].balance, 500.0);
    }

    #[test]
    fn unbounded_history_ends_at_the_totals_balance() {
        let transactions = sample();

        let got = balance_history(&transactions, None);
        let totals = calculate_totals(&transactions);

        assert_eq!(got.last().unwrap().balance, totals.balance);
    }

    #[test]
    fn input_order_does_not_change_the_series() {
        let mut transactions = sample();
        let forward = balance_history(&transactions, None);

        transactions.reverse();
        let backward = balance_history(&transactions, None);

        assert_eq!(forward, backward);
    }

    #[test]
    fn range_filters_points_but_keeps_prior_balance() {
        let transactions = sample();
        let range = date!(2024 - 01 - 05)..=date!(2024 - 01 - 31);

        let got = balance_history(&transactions, Some(&range));

        // The income on January 1st is out of range but still accrued.
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].date, date!(2024 - 01 - 05));
        assert_eq!(got[0].balance, 700.0);
    }

    #[test]
    fn same_date_points_keep_input_order() {
        let transactions = vec![
            transaction(1, 100.0, TransactionKind::Income, date!(2024 - 03 - 01)),
            transaction(2, 40.0, TransactionKind::Expense, date!(2024 - 03 - 01)),
        ];

        let got = balance_history(&transactions, None);

        assert_eq!(got[0].balance, 100.0);
        assert_eq!(got[1].balance, 60.0);
    }

    #[test]
    fn empty_snapshot_yields_empty_series() {
        assert!(balance_history(&[], None).is_empty());
    }

    #[test]
    fn default_range_spans_one_month_back() {
        let range = default_history_range(date!(2024 - 04 - 15));

        assert_eq!(*range.start(), date!(2024 - 03 - 15));
        assert_eq!(*range.end(), date!(2024 - 04 - 15));
    }

    #[test]
    fn default_range_clamps_to_shorter_months() {
        let range = default_history_range(date!(2024 - 03 - 31));

        assert_eq!(*range.start(), date!(2024 - 02 - 29));
    }

    #[test]
    fn default_range_wraps_the_year_in_january() {
        let range = default_history_range(date!(2024 - 01 - 10));

        assert_eq!(*range.start(), date!(2023 - 12 - 10));
    }
}
