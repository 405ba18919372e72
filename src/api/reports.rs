//! Report download endpoints
//!
//! Authenticated GET requests returning binary payloads (PDF/CSV/XLSX).
//! Saving to disk is the caller's concern; this facade only fetches bytes.

use crate::error::ApiResult;

use super::ApiClient;

/// Report endpoints exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Reader's own loan history (PDF)
    MyHistory,
    /// Reader's own penalties (PDF)
    MyPenalties,
    /// Monthly loan report for a given month/year (PDF, admin)
    MonthlyLoans { month: u32, year: i32 },
    /// Overdue loans and related penalties (PDF, admin)
    OverduePenalties,
    /// Annual report for a given year (PDF, admin)
    Annual { year: i32 },
    /// Full inventory export (XLSX, admin)
    InventoryExport,
    /// Loan export (CSV, admin)
    LoansCsv,
}

impl Report {
    fn path(&self) -> &'static str {
        match self {
            Report::MyHistory => "/rapports/mon-historique",
            Report::MyPenalties => "/rapports/mes-penalites",
            Report::MonthlyLoans { .. } => "/rapports/mensuel-emprunts",
            Report::OverduePenalties => "/rapports/retards-penalites",
            Report::Annual { .. } => "/rapports/annuel",
            Report::InventoryExport => "/rapports/export/inventaire",
            Report::LoansCsv => "/rapports/export/emprunts-csv",
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Report::MonthlyLoans { month, year } => vec![
                ("mois", month.to_string()),
                ("annee", year.to_string()),
            ],
            Report::Annual { year } => vec![("annee", year.to_string())],
            _ => Vec::new(),
        }
    }
}

#[derive(Clone)]
pub struct ReportsClient {
    client: ApiClient,
}

impl ReportsClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a report as raw bytes
    pub async fn download(&self, report: Report) -> ApiResult<Vec<u8>> {
        self.client.get_bytes(report.path(), &report.query()).await
    }
}
