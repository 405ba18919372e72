//! Aggregate statistics over entity snapshots
//!
//! Pure reductions: callers hand in a collection snapshot, nothing here
//! fetches or mutates.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::ApiResult,
    models::{
        book::Book,
        loan::{Loan, LoanStatus},
        penalty::{Penalty, PenaltyStatus},
        reservation::{Reservation, ReservationStatus},
    },
    rules::loans::is_overdue,
};

/// Loan counts derived from a loan collection snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanStatistics {
    pub total: usize,
    pub active: usize,
    pub overdue: usize,
    pub completed: usize,
}

impl LoanStatistics {
    /// Overdue counts come from the due date, not the snapshot status, so a
    /// stale `en_cours` past its date still counts as overdue.
    pub fn compute(loans: &[Loan], today: NaiveDate) -> ApiResult<Self> {
        let mut stats = LoanStatistics {
            total: loans.len(),
            active: 0,
            overdue: 0,
            completed: 0,
        };
        for loan in loans {
            if loan.status == LoanStatus::Completed {
                stats.completed += 1;
                continue;
            }
            stats.active += 1;
            if is_overdue(loan, today)? {
                stats.overdue += 1;
            }
        }
        Ok(stats)
    }
}

/// Penalty counts and amounts derived from a penalty collection snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PenaltyStatistics {
    pub total: usize,
    pub unpaid: usize,
    pub unpaid_amount: i64,
    pub paid_amount: i64,
}

impl PenaltyStatistics {
    pub fn compute(penalties: &[Penalty]) -> Self {
        let mut stats = PenaltyStatistics {
            total: penalties.len(),
            unpaid: 0,
            unpaid_amount: 0,
            paid_amount: 0,
        };
        for penalty in penalties {
            match penalty.status {
                PenaltyStatus::Unpaid => {
                    stats.unpaid += 1;
                    stats.unpaid_amount += penalty.amount;
                }
                PenaltyStatus::Paid => stats.paid_amount += penalty.amount,
                PenaltyStatus::Cancelled => {}
            }
        }
        stats
    }
}

/// Per-status reservation counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReservationStatistics {
    pub total: usize,
    pub waiting: usize,
    pub available: usize,
    pub expired: usize,
    pub cancelled: usize,
}

impl ReservationStatistics {
    pub fn compute(reservations: &[Reservation]) -> Self {
        let mut stats = ReservationStatistics {
            total: reservations.len(),
            waiting: 0,
            available: 0,
            expired: 0,
            cancelled: 0,
        };
        for reservation in reservations {
            match reservation.status {
                ReservationStatus::Waiting => stats.waiting += 1,
                ReservationStatus::Available => stats.available += 1,
                ReservationStatus::Expired => stats.expired += 1,
                ReservationStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// Fraction of all copies currently out on loan, in [0, 1].
pub fn occupancy_rate(books: &[Book]) -> f64 {
    let total: i64 = books.iter().map(Book::total_copies).sum();
    if total <= 0 {
        return 0.0;
    }
    let available: i64 = books.iter().map(Book::available_copies).sum();
    (total - available) as f64 / total as f64
}
