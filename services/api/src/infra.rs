use metrics_exporter_prometheus::PrometheusHandle;
use pragmatic_ux::helper::{SessionId, StateStore, StorageError, WizardSnapshot};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Volatile session store for demos and tests. Sessions vanish with the
/// process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStateStore {
    slots: Arc<Mutex<HashMap<String, WizardSnapshot>>>,
}

impl StateStore for InMemoryStateStore {
    fn load(&self, session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
        let guard = self.slots.lock().expect("state mutex poisoned");
        Ok(guard.get(session.as_str()).cloned())
    }

    fn save(&self, session: &SessionId, snapshot: &WizardSnapshot) -> Result<(), StorageError> {
        let mut guard = self.slots.lock().expect("state mutex poisoned");
        guard.insert(session.as_str().to_string(), snapshot.clone());
        Ok(())
    }

    fn clear(&self, session: &SessionId) -> Result<(), StorageError> {
        let mut guard = self.slots.lock().expect("state mutex poisoned");
        guard.remove(session.as_str());
        Ok(())
    }
}

/// Durable session store keeping one JSON document per session under a spool
/// directory. The directory is created lazily on the first save.
pub(crate) struct FileStateStore {
    root: PathBuf,
}

impl FileStateStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, session: &SessionId) -> PathBuf {
        self.root
            .join(format!("{}.json", slot_name(session.as_str())))
    }
}

/// Session ids come straight off the URL, so the slot name keeps only
/// filesystem-safe characters. Anything that would escape the spool
/// directory collapses to a plain dash.
fn slot_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

impl StateStore for FileStateStore {
    fn load(&self, session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
        let path = self.slot_path(session);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    fn save(&self, session: &SessionId, snapshot: &WizardSnapshot) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|err| StorageError::Write(err.to_string()))?;
        let payload = serde_json::to_vec_pretty(snapshot)
            .map_err(|err| StorageError::Write(err.to_string()))?;
        fs::write(self.slot_path(session), payload)
            .map_err(|err| StorageError::Write(err.to_string()))
    }

    fn clear(&self, session: &SessionId) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(session)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write(err.to_string())),
        }
    }
}
