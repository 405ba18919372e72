//! Derived-state rules
//!
//! Pure functions over entity snapshots: overdue detection, extension
//! eligibility, availability ratios, quota accounting and aggregate
//! statistics. Every consumer shares these instead of re-deriving them;
//! nothing here performs I/O.

pub mod availability;
pub mod loans;
pub mod stats;

pub use availability::{availability_level, availability_ratio, AvailabilityLevel};
pub use loans::{
    can_extend, days_overdue, days_remaining, due_date, extensions_remaining, is_overdue,
    quota_remaining,
};
pub use stats::{occupancy_rate, LoanStatistics, PenaltyStatistics, ReservationStatistics};
