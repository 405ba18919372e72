//! Stateful client services: session store, durable storage, notification poller

pub mod notifications;
pub mod session;
pub mod storage;

pub use notifications::NotificationWatcher;
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, PersistedSession, SessionStorage};
