//! Notification endpoints

use async_trait::async_trait;

use crate::{
    error::ApiResult,
    models::{
        notification::{Notification, UnreadCount},
        response::Page,
    },
};

use super::ApiClient;

/// Unread-count source consumed by the notification watcher
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnreadSource: Send + Sync {
    async fn unread_count(&self) -> ApiResult<u64>;
}

#[derive(Clone)]
pub struct NotificationsClient {
    client: ApiClient,
}

impl NotificationsClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: i64) -> ApiResult<Page<Notification>> {
        self.client
            .get_with_query("/notifications", &[("page", page)])
            .await
    }

    pub async fn mark_read(&self, id: i64) -> ApiResult<Notification> {
        self.client
            .post_empty(&format!("/notifications/{}/lue", id))
            .await
    }

    pub async fn mark_all_read(&self) -> ApiResult<()> {
        self.client
            .post_unit("/notifications/marquer-toutes-lues", &serde_json::json!({}))
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/notifications/{}", id)).await
    }
}

#[async_trait]
impl UnreadSource for NotificationsClient {
    async fn unread_count(&self) -> ApiResult<u64> {
        let payload: UnreadCount = self.client.get("/notifications/non-lues").await?;
        Ok(payload.count)
    }
}
