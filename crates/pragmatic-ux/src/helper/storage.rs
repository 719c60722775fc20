use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::evaluation::Recommendation;
use super::wizard::WizardState;

/// Identifier of one wizard session's storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable form of the wizard state. One blob per session slot, overwritten
/// wholesale on every save; no partial updates, no versioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub current_question_index: usize,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Recommendation>,
    pub results_visible: bool,
    pub editing: bool,
    pub updated_at: DateTime<Utc>,
}

impl WizardSnapshot {
    pub fn capture(state: &WizardState) -> Self {
        Self {
            current_question_index: state.current_question_index,
            answers: state.answers.clone(),
            result: state.result.clone(),
            results_visible: state.results_visible,
            editing: state.editing,
            updated_at: Utc::now(),
        }
    }

    pub fn into_state(self) -> WizardState {
        WizardState {
            current_question_index: self.current_question_index,
            answers: self.answers,
            result: self.result,
            results_visible: self.results_visible,
            editing: self.editing,
        }
    }
}

/// Storage abstraction for wizard state so the service can be exercised with
/// files, an embedded store, or an in-memory map. All I/O through this trait
/// is best-effort from the wizard's perspective: the in-memory state stays
/// authoritative for the session whatever these calls return.
pub trait StateStore: Send + Sync {
    fn load(&self, session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError>;
    fn save(&self, session: &SessionId, snapshot: &WizardSnapshot) -> Result<(), StorageError>;
    fn clear(&self, session: &SessionId) -> Result<(), StorageError>;
}

/// Error enumeration for state store failures. All variants are non-fatal and
/// recovered locally: a failed read starts a fresh session, a failed write
/// leaves the in-memory state authoritative.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("state read failed: {0}")]
    Read(String),
    #[error("state write failed: {0}")]
    Write(String),
    #[error("stored state is corrupt: {0}")]
    Corrupt(String),
}
