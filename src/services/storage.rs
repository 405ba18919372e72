//! Durable client-side session storage
//!
//! Two named slots: the opaque credential token and the last-known principal.
//! Read once at startup to restore the session, written synchronously on every
//! sign-in/update, cleared on sign-out.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, models::user::User};

/// On-disk session snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: Option<String>,
    #[serde(rename = "currentUser")]
    pub principal: Option<User>,
}

/// Storage seam for session state. Synchronous: session mutations must hit
/// durable storage before the new principal is published.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> ApiResult<PersistedSession>;
    fn store(&self, session: &PersistedSession) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// JSON-file-backed storage
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> ApiResult<PersistedSession> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(PersistedSession::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, session: &PersistedSession) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write-then-rename so a crash mid-write never leaves a torn file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<PersistedSession>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> ApiResult<PersistedSession> {
        Ok(self.inner.lock().expect("storage lock poisoned").clone())
    }

    fn store(&self, session: &PersistedSession) -> ApiResult<()> {
        *self.inner.lock().expect("storage lock poisoned") = session.clone();
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.inner.lock().expect("storage lock poisoned") = PersistedSession::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{ReaderProfile, ReaderStatus, Role};

    fn principal() -> User {
        User {
            id: 42,
            last_name: "Martin".to_string(),
            first_name: "Claire".to_string(),
            email: "claire.martin@example.org".to_string(),
            phone: None,
            role: Role::Reader,
            reader: Some(ReaderProfile {
                id: Some(7),
                card_number: "BIB-000123".to_string(),
                birth_date: None,
                status: ReaderStatus::Active,
                loan_quota: 5,
                active_loans: Some(0),
                unpaid_penalties: Some(0),
            }),
            librarian: None,
            administrator: None,
            created_at: None,
        }
    }

    #[test]
    fn file_storage_round_trips_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        let session = PersistedSession {
            token: Some("tok-123".to_string()),
            principal: Some(principal()),
        };
        storage.store(&session).unwrap();

        let restored = storage.load().unwrap();
        assert_eq!(restored.token.as_deref(), Some("tok-123"));
        assert_eq!(restored.principal.unwrap(), principal());
    }

    #[test]
    fn missing_file_loads_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));
        let session = storage.load().unwrap();
        assert!(session.token.is_none());
        assert!(session.principal.is_none());
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage
            .store(&PersistedSession {
                token: Some("t".to_string()),
                principal: None,
            })
            .unwrap();
        storage.clear().unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().token.is_none());
    }
}
