//! Notification model

use serde::{Deserialize, Serialize};

/// Notification kind, matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "rappel")]
    Reminder,
    #[serde(rename = "retard")]
    Overdue,
    #[serde(rename = "disponibilite")]
    Availability,
    #[serde(rename = "information")]
    Information,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Reminder => "rappel",
            NotificationKind::Overdue => "retard",
            NotificationKind::Availability => "disponibilite",
            NotificationKind::Information => "information",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "destinataire_id")]
    pub recipient_id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "contenu")]
    pub body: String,
    #[serde(rename = "lu")]
    pub read: bool,
    #[serde(rename = "date_lecture")]
    pub read_date: Option<String>,
    #[serde(rename = "date_envoi")]
    pub sent_date: String,
    pub created_at: Option<String>,
}

/// Payload of GET /notifications/non-lues
#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}
