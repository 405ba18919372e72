//! Reservation endpoints

use serde::Serialize;

use crate::{
    error::ApiResult,
    models::{
        reservation::{Reservation, ReserveRequest},
        response::{Page, ReservationStatsPayload},
    },
};

use super::ApiClient;

/// Listing filter for reservations
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReservationFilter {
    #[serde(rename = "statut", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

#[derive(Clone)]
pub struct ReservationsClient {
    client: ApiClient,
}

impl ReservationsClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &ReservationFilter) -> ApiResult<Page<Reservation>> {
        self.client.get_with_query("/reservations", filter).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Reservation> {
        self.client.get(&format!("/reservations/{}", id)).await
    }

    /// Place a standing request for a book
    pub async fn reserve(&self, book_id: i64) -> ApiResult<Reservation> {
        self.client
            .post("/reservations", &ReserveRequest { book_id })
            .await
    }

    /// Cancel a waiting or available reservation (reader or admin)
    pub async fn cancel(&self, id: i64) -> ApiResult<Reservation> {
        self.client
            .post_empty(&format!("/reservations/{}/annuler", id))
            .await
    }

    /// Mark a reservation as having a copy ready (admin)
    pub async fn mark_available(&self, id: i64) -> ApiResult<Reservation> {
        self.client
            .post_empty(&format!("/reservations/{}/disponible", id))
            .await
    }

    /// Expire a reservation whose pickup window lapsed (admin)
    pub async fn mark_expired(&self, id: i64) -> ApiResult<Reservation> {
        self.client
            .post_empty(&format!("/reservations/{}/expirer", id))
            .await
    }

    /// Server-computed reservation statistics
    pub async fn statistics(&self) -> ApiResult<ReservationStatsPayload> {
        self.client.get("/reservations/statistiques").await
    }
}
