//! Backend response envelope and pagination types

use serde::Deserialize;
use std::collections::HashMap;

use super::penalty::Penalty;
use super::user::User;

/// Uniform backend envelope: `{success, message?, data?, errors?}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Field-level validation messages, keyed by field name
    pub errors: Option<HashMap<String, Vec<String>>>,
}

/// Laravel-style page: `{data: [...], current_page, last_page, ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.current_page >= self.last_page
    }
}

/// Successful authentication payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

/// Server-computed loan statistics (GET /emprunts/statistiques)
#[derive(Debug, Clone, Deserialize)]
pub struct LoanStatsPayload {
    #[serde(rename = "total_emprunts")]
    pub total: i64,
    #[serde(rename = "emprunts_en_cours")]
    pub active: i64,
    #[serde(rename = "emprunts_en_retard")]
    pub overdue: i64,
    #[serde(rename = "taux_occupation")]
    pub occupancy_rate: Option<f64>,
}

/// Server-computed reservation statistics (GET /reservations/statistiques)
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationStatsPayload {
    #[serde(rename = "total_reservations")]
    pub total: i64,
    #[serde(rename = "reservations_en_attente")]
    pub waiting: i64,
    #[serde(rename = "reservations_disponibles")]
    pub available: i64,
    #[serde(rename = "reservations_expirees")]
    pub expired: i64,
    #[serde(rename = "reservations_annulees")]
    pub cancelled: i64,
}

/// Server-computed penalty statistics (GET /penalites/statistiques)
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyStatsPayload {
    #[serde(rename = "total_penalites")]
    pub total: i64,
    #[serde(rename = "penalites_impayees")]
    pub unpaid: i64,
    #[serde(rename = "montant_total_impaye")]
    pub unpaid_amount: i64,
    #[serde(rename = "montant_total_paye")]
    pub paid_amount: i64,
    #[serde(rename = "derniere_penalite")]
    pub latest: Option<Penalty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;

    #[test]
    fn decodes_paginated_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "data": [],
                "current_page": 2,
                "last_page": 2,
                "per_page": 15,
                "total": 23,
                "from": 16,
                "to": 23
            }
        }"#;
        let envelope: ApiEnvelope<Page<Book>> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        let page = envelope.data.unwrap();
        assert_eq!(page.total, 23);
        assert!(page.is_last());
    }

    #[test]
    fn decodes_failure_envelope_with_field_errors() {
        let json = r#"{
            "success": false,
            "message": "Les données fournies sont invalides",
            "errors": {"isbn": ["Le format ISBN est invalide"]}
        }"#;
        let envelope: ApiEnvelope<Book> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.unwrap()["isbn"].len(), 1);
    }
}
