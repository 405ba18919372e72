//! Penalty (penalite) model and related types

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Penalty status, matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyStatus {
    #[serde(rename = "impayee")]
    Unpaid,
    #[serde(rename = "payee")]
    Paid,
    #[serde(rename = "annulee")]
    Cancelled,
}

impl PenaltyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PenaltyStatus::Unpaid => "impayee",
            PenaltyStatus::Paid => "payee",
            PenaltyStatus::Cancelled => "annulee",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PenaltyStatus::Paid | PenaltyStatus::Cancelled)
    }
}

impl std::fmt::Display for PenaltyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Penalty snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub id: i64,
    #[serde(rename = "lecteur_id")]
    pub reader_id: i64,
    #[serde(rename = "emprunt_id")]
    pub loan_id: i64,
    /// Amount in whole currency units
    #[serde(rename = "montant")]
    pub amount: i64,
    #[serde(rename = "motif")]
    pub reason: String,
    #[serde(rename = "date_creation")]
    pub creation_date: String,
    #[serde(rename = "date_paiement")]
    pub payment_date: Option<String>,
    #[serde(rename = "statut")]
    pub status: PenaltyStatus,
    pub created_at: Option<String>,
}

impl Penalty {
    /// Check penalty invariants: non-negative amount, payment date present
    /// exactly on paid penalties.
    pub fn validate(&self) -> ApiResult<()> {
        if self.amount < 0 {
            return Err(ApiError::MalformedEntity(format!(
                "penalty {} has negative amount {}",
                self.id, self.amount
            )));
        }
        if self.status == PenaltyStatus::Paid && self.payment_date.is_none() {
            return Err(ApiError::MalformedEntity(format!(
                "penalty {} is paid but has no payment date",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn penalty(status: PenaltyStatus, amount: i64) -> Penalty {
        Penalty {
            id: 5,
            reader_id: 42,
            loan_id: 11,
            amount,
            reason: "Retard de 3 jours".to_string(),
            creation_date: "2026-08-20".to_string(),
            payment_date: if status == PenaltyStatus::Paid {
                Some("2026-08-25".to_string())
            } else {
                None
            },
            status,
            created_at: None,
        }
    }

    #[test]
    fn valid_penalty_passes() {
        assert!(penalty(PenaltyStatus::Unpaid, 300).validate().is_ok());
        assert!(penalty(PenaltyStatus::Paid, 300).validate().is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(penalty(PenaltyStatus::Unpaid, -1).validate().is_err());
    }

    #[test]
    fn paid_without_payment_date_is_rejected() {
        let mut p = penalty(PenaltyStatus::Paid, 100);
        p.payment_date = None;
        assert!(p.validate().is_err());
    }
}
