//! Bibliotheca Library Management System client SDK
//!
//! Typed access to the Bibliotheca REST backend: catalog browsing, the loan
//! lifecycle, reservations and penalties, plus a session store and the pure
//! derived-state rules (overdue detection, extension eligibility, availability
//! ratios, quota accounting) shared by every consumer.

use std::sync::{Arc, RwLock};
use std::time::Duration;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
pub mod services;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

use api::{
    auth::AuthClient, catalog::CatalogClient, loans::LoansClient,
    notifications::NotificationsClient, penalties::PenaltiesClient, reports::ReportsClient,
    reservations::ReservationsClient, ApiClient, TokenCell,
};
use services::{FileStorage, NotificationWatcher, SessionStore};

/// Fully wired client: one facade per backend area sharing a single HTTP
/// client and credential slot, plus the session store that owns that slot.
pub struct Client {
    pub config: Arc<ClientConfig>,
    pub session: Arc<SessionStore>,
    pub catalog: CatalogClient,
    pub loans: LoansClient,
    pub reservations: ReservationsClient,
    pub penalties: PenaltiesClient,
    pub notifications: NotificationsClient,
    pub reports: ReportsClient,
}

impl Client {
    /// Wire all facades and restore any persisted session.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let token: TokenCell = Arc::new(RwLock::new(None));
        let api = ApiClient::new(&config.api, token.clone())?;

        let storage = Arc::new(FileStorage::new(config.session.storage_path.clone()));
        let session = Arc::new(SessionStore::new(
            Arc::new(AuthClient::new(api.clone())),
            storage,
            token,
        )?);

        Ok(Self {
            session,
            catalog: CatalogClient::new(api.clone()),
            loans: LoansClient::new(api.clone()),
            reservations: ReservationsClient::new(api.clone()),
            penalties: PenaltiesClient::new(api.clone()),
            notifications: NotificationsClient::new(api.clone()),
            reports: ReportsClient::new(api),
            config: Arc::new(config),
        })
    }

    /// Background unread-count poller at the configured interval.
    /// Call `spawn()` on the result to start polling.
    pub fn notification_watcher(&self) -> NotificationWatcher {
        NotificationWatcher::new(
            Arc::new(self.notifications.clone()),
            Duration::from_secs(self.config.notifications.poll_interval_seconds),
        )
    }
}
