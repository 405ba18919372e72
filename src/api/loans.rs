//! Loan endpoints

use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        loan::{BorrowRequest, Loan, MyLoans},
        response::{LoanStatsPayload, Page},
    },
};

use super::{map_policy_rejection, ApiClient};

/// Listing filter for the administrative loan view
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoanFilter {
    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Clone)]
pub struct LoansClient {
    client: ApiClient,
}

impl LoansClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Borrow a physical copy. The backend expects the copy (exemplaire)
    /// identifier, not the book identifier.
    pub async fn borrow(&self, copy_id: i64) -> ApiResult<Loan> {
        let request = BorrowRequest { copy_id };
        let loan: Loan = self
            .client
            .post("/emprunts", &request)
            .await
            .map_err(|e| map_policy_rejection(e, ApiError::QuotaExceeded))?;
        loan.validate()?;
        Ok(loan)
    }

    /// Current reader's active loans plus quota
    pub async fn my_loans(&self) -> ApiResult<MyLoans> {
        let mine: MyLoans = self.client.get("/mes-emprunts").await?;
        for loan in &mine.loans {
            loan.validate()?;
        }
        Ok(mine)
    }

    /// Current reader's past loans, paginated
    pub async fn history(&self, page: i64) -> ApiResult<Page<Loan>> {
        self.client
            .get_with_query("/historique-emprunts", &[("page", page)])
            .await
    }

    /// Defer the due date. At most two extensions per loan; a third attempt
    /// fails as `NotExtendable`.
    pub async fn extend(&self, loan_id: i64) -> ApiResult<Loan> {
        let loan: Loan = self
            .client
            .post_empty(&format!("/emprunts/{}/prolonger", loan_id))
            .await
            .map_err(|e| map_policy_rejection(e, ApiError::NotExtendable))?;
        loan.validate()?;
        Ok(loan)
    }

    /// Record the return of a borrowed copy
    pub async fn return_loan(&self, loan_id: i64) -> ApiResult<Loan> {
        let loan: Loan = self
            .client
            .post_empty(&format!("/emprunts/{}/retourner", loan_id))
            .await?;
        loan.validate()?;
        Ok(loan)
    }

    /// All loans (librarian/administrator view)
    pub async fn list_loans(&self, filter: &LoanFilter) -> ApiResult<Page<Loan>> {
        let page: Page<Loan> = self.client.get_with_query("/emprunts", filter).await?;
        for loan in &page.data {
            loan.validate()?;
        }
        Ok(page)
    }

    /// Server-computed loan statistics
    pub async fn statistics(&self) -> ApiResult<LoanStatsPayload> {
        self.client.get("/emprunts/statistiques").await
    }
}
