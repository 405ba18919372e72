//! Book availability rules

use serde::Serialize;

use crate::models::book::Book;

/// Display bucket for a book's availability ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityLevel {
    None,
    Low,
    Medium,
    High,
}

impl AvailabilityLevel {
    /// Bucket a ratio at the 0 / 0.3 / 0.7 thresholds.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.0 {
            AvailabilityLevel::None
        } else if ratio < 0.3 {
            AvailabilityLevel::Low
        } else if ratio < 0.7 {
            AvailabilityLevel::Medium
        } else {
            AvailabilityLevel::High
        }
    }
}

/// Fraction of a book's copies currently available, in [0, 1].
/// A book with no copies at all has ratio 0.
pub fn availability_ratio(book: &Book) -> f64 {
    let total = book.total_copies();
    if total <= 0 {
        return 0.0;
    }
    book.available_copies() as f64 / total as f64
}

/// Availability bucket for a book.
pub fn availability_level(book: &Book) -> AvailabilityLevel {
    AvailabilityLevel::from_ratio(availability_ratio(book))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(available: i64, total: i64) -> Book {
        Book {
            id: 1,
            title: "La Peste".to_string(),
            author: "Albert Camus".to_string(),
            isbn: "978-2-07-036042-2".to_string(),
            publisher: None,
            publication_year: None,
            page_count: None,
            language: None,
            summary: None,
            cover_url: None,
            category: None,
            total_copies: Some(total),
            available_copies: Some(available),
            is_available: Some(available > 0),
            created_at: None,
        }
    }

    #[test]
    fn ratio_stays_within_unit_interval() {
        for (available, total) in [(0, 0), (0, 4), (1, 4), (4, 4)] {
            let r = availability_ratio(&book(available, total));
            assert!((0.0..=1.0).contains(&r), "{}/{} -> {}", available, total, r);
        }
    }

    #[test]
    fn zero_available_means_zero_ratio_and_vice_versa() {
        assert_eq!(availability_ratio(&book(0, 5)), 0.0);
        assert_eq!(availability_ratio(&book(0, 0)), 0.0);
        assert!(availability_ratio(&book(1, 5)) > 0.0);
    }

    #[test]
    fn buckets_at_thresholds() {
        assert_eq!(availability_level(&book(0, 10)), AvailabilityLevel::None);
        assert_eq!(availability_level(&book(2, 10)), AvailabilityLevel::Low);
        assert_eq!(availability_level(&book(3, 10)), AvailabilityLevel::Medium);
        assert_eq!(availability_level(&book(6, 10)), AvailabilityLevel::Medium);
        assert_eq!(availability_level(&book(7, 10)), AvailabilityLevel::High);
        assert_eq!(availability_level(&book(10, 10)), AvailabilityLevel::High);
    }

    #[test]
    fn book_without_copy_counts_is_unavailable() {
        let mut b = book(0, 0);
        b.total_copies = None;
        b.available_copies = None;
        assert_eq!(availability_ratio(&b), 0.0);
        assert_eq!(availability_level(&b), AvailabilityLevel::None);
    }
}
