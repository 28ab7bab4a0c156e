use serde::{Deserialize, Serialize};

/// Response from rebuilding the root document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResponse {
    /// Path of the document that was written
    pub readme_path: String,
    /// Number of notes listed in the index
    pub notes_indexed: usize,
    /// Number of topics, synthesized parents included
    pub topics: usize,
    /// Whether the document content changed
    pub document_changed: bool,
    /// Time taken in milliseconds
    pub duration_ms: u64,
}

/// Response from announcing newly added notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyResponse {
    /// Relative paths of the notes that were added between the two commits
    pub added_notes: Vec<String>,
    /// Whether a message was posted to the webhook
    pub notification_sent: bool,
    /// Time taken in milliseconds
    pub duration_ms: u64,
}

impl NotifyResponse {
    /// Human-readable outcome of a notify run
    pub fn summary(&self) -> &'static str {
        if self.notification_sent {
            "New TILs. Notification sent."
        } else {
            "No new TILs. No notification required."
        }
    }
}
