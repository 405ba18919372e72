//! Loan-lifecycle rules: overdue detection and extension eligibility

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{
    error::{ApiError, ApiResult},
    models::loan::{Loan, LoanStatus, MAX_EXTENSIONS},
};

/// Parse a backend date string. The backend is not consistent here: list
/// endpoints send plain dates, detail endpoints full timestamps.
pub(crate) fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Scheduled return date of a loan.
///
/// An unparsable date is a malformed snapshot and surfaces as
/// `ApiError::MalformedEntity`; every date-based rule goes through here.
pub fn due_date(loan: &Loan) -> ApiResult<NaiveDate> {
    parse_wire_date(&loan.due_date).ok_or_else(|| {
        ApiError::MalformedEntity(format!(
            "loan {} has unparsable due date '{}'",
            loan.id, loan.due_date
        ))
    })
}

/// True iff the loan is not completed and its due date has passed.
pub fn is_overdue(loan: &Loan, today: NaiveDate) -> ApiResult<bool> {
    if loan.status == LoanStatus::Completed {
        return Ok(false);
    }
    Ok(today > due_date(loan)?)
}

/// Whole days until the due date. Negative when overdue; never clamped, the
/// negative value is the overdue count seen from the other side.
pub fn days_remaining(loan: &Loan, today: NaiveDate) -> ApiResult<i64> {
    Ok((due_date(loan)? - today).num_days())
}

/// Whole days past the due date, floored at zero.
pub fn days_overdue(loan: &Loan, today: NaiveDate) -> ApiResult<i64> {
    Ok((today - due_date(loan)?).num_days().max(0))
}

/// Extension eligibility: never on a completed loan, and at most
/// `MAX_EXTENSIONS` per loan.
pub fn can_extend(loan: &Loan) -> bool {
    loan.status != LoanStatus::Completed && loan.extension_count < MAX_EXTENSIONS
}

/// Extensions still available for this loan.
pub fn extensions_remaining(loan: &Loan) -> u8 {
    MAX_EXTENSIONS.saturating_sub(loan.extension_count)
}

/// Loans a reader may still take out. Deliberately not floored at zero:
/// a negative value is an over-quota inconsistency to surface, not hide.
pub fn quota_remaining(quota: i64, active_loan_count: i64) -> i64 {
    quota - active_loan_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::BookSummary;

    fn loan_due(due: &str, status: LoanStatus, extensions: u8) -> Loan {
        Loan {
            id: 1,
            borrower: None,
            book: BookSummary {
                id: 1,
                title: "Candide".to_string(),
                author: "Voltaire".to_string(),
                cover_url: None,
            },
            copy: None,
            loan_date: "2026-08-01".to_string(),
            due_date: due.to_string(),
            returned_date: None,
            status,
            extension_count: extensions,
            created_at: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn three_days_past_due_is_overdue_by_three() {
        let loan = loan_due("2026-08-12", LoanStatus::Ongoing, 0);
        let today = day("2026-08-15");
        assert!(is_overdue(&loan, today).unwrap());
        assert_eq!(days_overdue(&loan, today).unwrap(), 3);
        assert_eq!(days_remaining(&loan, today).unwrap(), -3);
    }

    #[test]
    fn due_today_is_not_overdue() {
        let loan = loan_due("2026-08-15", LoanStatus::Ongoing, 0);
        let today = day("2026-08-15");
        assert!(!is_overdue(&loan, today).unwrap());
        assert_eq!(days_remaining(&loan, today).unwrap(), 0);
        assert_eq!(days_overdue(&loan, today).unwrap(), 0);
    }

    #[test]
    fn completed_loan_is_never_overdue() {
        let mut loan = loan_due("2026-08-01", LoanStatus::Completed, 0);
        loan.returned_date = Some("2026-08-20".to_string());
        assert!(!is_overdue(&loan, day("2026-08-30")).unwrap());
    }

    #[test]
    fn overdue_status_with_future_date_follows_the_date() {
        // Status is a backend snapshot; the rule recomputes from the date.
        let loan = loan_due("2026-09-01", LoanStatus::Overdue, 0);
        assert!(!is_overdue(&loan, day("2026-08-15")).unwrap());
    }

    #[test]
    fn accepts_all_backend_date_formats() {
        for due in [
            "2026-08-12",
            "2026-08-12 00:00:00",
            "2026-08-12T00:00:00+00:00",
        ] {
            let loan = loan_due(due, LoanStatus::Ongoing, 0);
            assert_eq!(due_date(&loan).unwrap(), day("2026-08-12"), "{}", due);
        }
    }

    #[test]
    fn unparsable_due_date_is_malformed() {
        let loan = loan_due("demain", LoanStatus::Ongoing, 0);
        assert!(matches!(
            is_overdue(&loan, day("2026-08-15")),
            Err(ApiError::MalformedEntity(_))
        ));
        assert!(days_remaining(&loan, day("2026-08-15")).is_err());
    }

    #[test]
    fn extension_eligibility_tracks_count_and_status() {
        assert!(can_extend(&loan_due("2026-08-20", LoanStatus::Ongoing, 0)));
        assert!(can_extend(&loan_due("2026-08-20", LoanStatus::Overdue, 1)));
        assert!(!can_extend(&loan_due("2026-08-20", LoanStatus::Ongoing, 2)));
        assert!(!can_extend(&loan_due("2026-08-20", LoanStatus::Completed, 0)));
    }

    #[test]
    fn extensions_remaining_saturates() {
        assert_eq!(
            extensions_remaining(&loan_due("2026-08-20", LoanStatus::Ongoing, 0)),
            2
        );
        assert_eq!(
            extensions_remaining(&loan_due("2026-08-20", LoanStatus::Ongoing, 2)),
            0
        );
    }

    #[test]
    fn each_extension_decrements_eligibility() {
        let mut loan = loan_due("2026-08-20", LoanStatus::Ongoing, 0);
        assert!(can_extend(&loan));
        loan.extension_count += 1;
        assert!(can_extend(&loan));
        loan.extension_count += 1;
        // Third attempt must be ineligible, never silently allowed.
        assert!(!can_extend(&loan));
    }

    #[test]
    fn quota_remaining_surfaces_over_quota() {
        assert_eq!(quota_remaining(5, 2), 3);
        assert_eq!(quota_remaining(5, 5), 0);
        assert_eq!(quota_remaining(5, 6), -1);
    }
}
