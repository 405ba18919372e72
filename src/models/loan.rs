//! Loan (emprunt) model and related types

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Maximum number of extensions a loan may receive
pub const MAX_EXTENSIONS: u8 = 2;

/// Loan status, matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    #[serde(rename = "en_cours")]
    Ongoing,
    #[serde(rename = "termine")]
    Completed,
    #[serde(rename = "en_retard")]
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Ongoing => "en_cours",
            LoanStatus::Completed => "termine",
            LoanStatus::Overdue => "en_retard",
        }
    }

    /// Completed is the only terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoanStatus::Completed)
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrower summary embedded in loan payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerSummary {
    pub id: i64,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "numero_carte")]
    pub card_number: String,
}

/// Physical copy reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyRef {
    pub id: i64,
    #[serde(rename = "numero_exemplaire")]
    pub copy_number: String,
}

/// Loan snapshot as returned by the backend.
///
/// Dates are kept as raw wire strings; parsing happens in `rules` so that an
/// unparsable date surfaces as `MalformedEntity` at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    #[serde(rename = "lecteur")]
    pub borrower: Option<BorrowerSummary>,
    #[serde(rename = "livre")]
    pub book: super::book::BookSummary,
    #[serde(rename = "exemplaire")]
    pub copy: Option<CopyRef>,
    #[serde(rename = "date_emprunt")]
    pub loan_date: String,
    #[serde(rename = "date_retour_prevue")]
    pub due_date: String,
    #[serde(rename = "date_retour_effective")]
    pub returned_date: Option<String>,
    #[serde(rename = "statut")]
    pub status: LoanStatus,
    #[serde(rename = "nombre_prolongations")]
    pub extension_count: u8,
    pub created_at: Option<String>,
}

impl Loan {
    /// Check loan invariants: extension count within the policy maximum and a
    /// return date present exactly on completed loans.
    pub fn validate(&self) -> ApiResult<()> {
        if self.extension_count > MAX_EXTENSIONS {
            return Err(ApiError::MalformedEntity(format!(
                "loan {} reports {} extensions (max {})",
                self.id, self.extension_count, MAX_EXTENSIONS
            )));
        }
        if self.status == LoanStatus::Completed && self.returned_date.is_none() {
            return Err(ApiError::MalformedEntity(format!(
                "loan {} is completed but has no return date",
                self.id
            )));
        }
        Ok(())
    }
}

/// Borrow request: the backend expects the physical copy identifier
#[derive(Debug, Clone, Serialize)]
pub struct BorrowRequest {
    #[serde(rename = "exemplaire_id")]
    pub copy_id: i64,
}

/// Payload of GET /mes-emprunts: current loans plus the reader's quota
#[derive(Debug, Clone, Deserialize)]
pub struct MyLoans {
    #[serde(rename = "emprunts")]
    pub loans: Vec<Loan>,
    pub total: i64,
    #[serde(rename = "quota")]
    pub quota: i64,
}
