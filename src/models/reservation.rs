//! Reservation model and related types

use serde::{Deserialize, Serialize};

/// Reservation status, matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "en_attente")]
    Waiting,
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "expiree")]
    Expired,
    #[serde(rename = "annulee")]
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Waiting => "en_attente",
            ReservationStatus::Available => "disponible",
            ReservationStatus::Expired => "expiree",
            ReservationStatus::Cancelled => "annulee",
        }
    }

    /// Expired and cancelled reservations never change again; an available
    /// reservation only leaves this state by being converted to a loan
    /// server-side.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Expired | ReservationStatus::Cancelled)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reservation snapshot.
///
/// Queue position is a server-side computation and is deliberately absent:
/// the client never fabricates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(rename = "lecteur_id")]
    pub reader_id: i64,
    #[serde(rename = "livre_id")]
    pub book_id: i64,
    #[serde(rename = "date_reservation")]
    pub reservation_date: String,
    #[serde(rename = "statut")]
    pub status: ReservationStatus,
    #[serde(rename = "livre")]
    pub book: Option<super::book::BookSummary>,
    pub created_at: Option<String>,
}

/// Reserve request payload
#[derive(Debug, Clone, Serialize)]
pub struct ReserveRequest {
    #[serde(rename = "livre_id")]
    pub book_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(ReservationStatus::Expired.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
        assert!(!ReservationStatus::Waiting.is_terminal());
        assert!(!ReservationStatus::Available.is_terminal());
    }

    #[test]
    fn status_uses_wire_values() {
        let s: ReservationStatus = serde_json::from_str("\"expiree\"").unwrap();
        assert_eq!(s, ReservationStatus::Expired);
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Waiting).unwrap(),
            "\"en_attente\""
        );
    }
}
