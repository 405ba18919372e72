//! Data models for the Bibliotheca client
//!
//! All entities are immutable snapshots of backend state. Field names follow
//! the backend's French wire contract through serde renames; code-side names
//! are English.

pub mod book;
pub mod loan;
pub mod notification;
pub mod penalty;
pub mod reservation;
pub mod response;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookSummary, Category};
pub use loan::{Loan, LoanStatus, MyLoans, MAX_EXTENSIONS};
pub use notification::{Notification, NotificationKind};
pub use penalty::{Penalty, PenaltyStatus};
pub use reservation::{Reservation, ReservationStatus};
pub use response::{ApiEnvelope, AuthSession, Page};
pub use user::{Credentials, ReaderProfile, ReaderStatus, Role, User};
