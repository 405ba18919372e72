//! Penalty endpoints

use serde::Serialize;

use crate::{
    error::ApiResult,
    models::{
        penalty::Penalty,
        response::{Page, PenaltyStatsPayload},
    },
};

use super::ApiClient;

/// Listing filter for penalties
#[derive(Debug, Clone, Default, Serialize)]
pub struct PenaltyFilter {
    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Clone)]
pub struct PenaltiesClient {
    client: ApiClient,
}

impl PenaltiesClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &PenaltyFilter) -> ApiResult<Page<Penalty>> {
        let page: Page<Penalty> = self.client.get_with_query("/penalites", filter).await?;
        for penalty in &page.data {
            penalty.validate()?;
        }
        Ok(page)
    }

    pub async fn get(&self, id: i64) -> ApiResult<Penalty> {
        let penalty: Penalty = self.client.get(&format!("/penalites/{}", id)).await?;
        penalty.validate()?;
        Ok(penalty)
    }

    /// Record a payment; the backend sets the payment date
    pub async fn pay(&self, id: i64) -> ApiResult<Penalty> {
        self.client
            .post_empty(&format!("/penalites/{}/payer", id))
            .await
    }

    /// Waive a penalty (admin)
    pub async fn cancel(&self, id: i64) -> ApiResult<Penalty> {
        self.client
            .post_empty(&format!("/penalites/{}/annuler", id))
            .await
    }

    /// Server-computed penalty statistics
    pub async fn statistics(&self) -> ApiResult<PenaltyStatsPayload> {
        self.client.get("/penalites/statistiques").await
    }

    /// Trigger server-side recalculation of overdue penalties (admin)
    pub async fn recalculate(&self) -> ApiResult<()> {
        self.client
            .post_unit("/penalites/calculer", &serde_json::json!({}))
            .await
    }
}
