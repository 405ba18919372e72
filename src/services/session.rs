//! Session/Identity store
//!
//! Single source of truth for "who is signed in" and the bearer credential
//! every outbound request carries. The current principal is published through
//! a watch channel: one writer (this store), any number of passive readers.
//! Every mutation writes through to durable storage before publishing, so a
//! process restart never loses the state established by the last successful
//! call.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    api::{auth::AuthApi, TokenCell},
    error::ApiResult,
    models::user::{Credentials, RegisterRequest, Role, UpdateProfileRequest, User},
    services::storage::{PersistedSession, SessionStorage},
};

pub struct SessionStore {
    auth: Arc<dyn AuthApi>,
    storage: Arc<dyn SessionStorage>,
    token: TokenCell,
    principal_tx: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Build the store, restoring any persisted session from storage.
    pub fn new(
        auth: Arc<dyn AuthApi>,
        storage: Arc<dyn SessionStorage>,
        token: TokenCell,
    ) -> ApiResult<Self> {
        let persisted = storage.load()?;
        *token.write().expect("token lock poisoned") = persisted.token;
        let (principal_tx, _) = watch::channel(persisted.principal);
        Ok(Self {
            auth,
            storage,
            token,
            principal_tx,
        })
    }

    /// Authenticate and establish a session. The credential and principal hit
    /// durable storage before the principal is published.
    pub async fn sign_in(&self, credentials: &Credentials) -> ApiResult<User> {
        let session = self.auth.sign_in(credentials).await?;
        self.establish(session.token, session.user.clone())?;
        Ok(session.user)
    }

    /// Register a new reader account; the backend signs the account in as part
    /// of registration, so the returned session is established the same way.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        let session = self.auth.register(request).await?;
        self.establish(session.token, session.user.clone())?;
        Ok(session.user)
    }

    /// End the session. The remote invalidation is best-effort: a network
    /// failure is logged and swallowed, local state is cleared regardless.
    pub async fn sign_out(&self) -> ApiResult<()> {
        if let Err(e) = self.auth.sign_out().await {
            tracing::warn!(error = %e, "remote sign-out failed, clearing local session anyway");
        }
        *self.token.write().expect("token lock poisoned") = None;
        self.principal_tx.send_replace(None);
        self.storage.clear()
    }

    /// Push a profile update. The server's returned copy is authoritative; the
    /// local patch is never applied optimistically.
    pub async fn update_profile(&self, patch: &UpdateProfileRequest) -> ApiResult<User> {
        let user = self.auth.update_profile(patch).await?;
        let token = self.token.read().expect("token lock poisoned").clone();
        self.storage.store(&PersistedSession {
            token,
            principal: Some(user.clone()),
        })?;
        self.principal_tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Re-fetch the principal from the backend and republish it.
    pub async fn refresh_profile(&self) -> ApiResult<User> {
        let user = self.auth.fetch_profile().await?;
        let token = self.token.read().expect("token lock poisoned").clone();
        self.storage.store(&PersistedSession {
            token,
            principal: Some(user.clone()),
        })?;
        self.principal_tx.send_replace(Some(user.clone()));
        Ok(user)
    }

    /// Synchronous read of the last published principal.
    pub fn current_principal(&self) -> Option<User> {
        self.principal_tx.borrow().clone()
    }

    /// Watch the principal stream; receivers see every subsequent publish.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.principal_tx.subscribe()
    }

    /// The same stream as [`subscribe`](Self::subscribe), as a `Stream` for
    /// `select!`-style consumers.
    pub fn principal_stream(&self) -> tokio_stream::wrappers::WatchStream<Option<User>> {
        tokio_stream::wrappers::WatchStream::new(self.principal_tx.subscribe())
    }

    /// True iff a non-empty credential token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .expect("token lock poisoned")
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.current_principal()
            .map(|user| user.role == role)
            .unwrap_or(false)
    }

    pub fn is_reader(&self) -> bool {
        self.has_role(Role::Reader)
    }

    pub fn is_librarian(&self) -> bool {
        self.has_role(Role::Librarian)
    }

    pub fn is_administrator(&self) -> bool {
        self.has_role(Role::Administrator)
    }

    fn establish(&self, token: String, user: User) -> ApiResult<()> {
        self.storage.store(&PersistedSession {
            token: Some(token.clone()),
            principal: Some(user.clone()),
        })?;
        *self.token.write().expect("token lock poisoned") = Some(token);
        self.principal_tx.send_replace(Some(user));
        Ok(())
    }
}
