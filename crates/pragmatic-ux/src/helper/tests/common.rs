use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::content::{MethodCatalog, Principle, PrincipleCatalog};
use crate::helper::catalog::{
    CatalogDocument, CatalogMeta, Consequence, DecisionCatalog, Question, QuestionOption, Rule,
};
use crate::helper::service::DecisionHelperService;
use crate::helper::storage::{SessionId, StateStore, StorageError, WizardSnapshot};
use crate::helper::wizard::Wizard;

pub(super) fn question(id: &str, values: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        label: format!("Label for {id}"),
        options: values
            .iter()
            .map(|value| QuestionOption {
                value: value.to_string(),
                label: format!("Option {value}"),
            })
            .collect(),
    }
}

pub(super) fn rule(condition: &[(&str, &str)], principles: &[&str], methods: &[&str]) -> Rule {
    Rule {
        condition: condition
            .iter()
            .map(|(question_id, value)| (question_id.to_string(), value.to_string()))
            .collect(),
        consequence: Consequence {
            principles: principles.iter().map(|id| id.to_string()).collect(),
            methods: methods.iter().map(|name| name.to_string()).collect(),
        },
    }
}

pub(super) fn catalog(questions: Vec<Question>, rules: Vec<Rule>) -> Arc<DecisionCatalog> {
    let document = CatalogDocument {
        version: "0.0.0-test".to_string(),
        meta: CatalogMeta::default(),
        questions,
        rules,
    };
    Arc::new(DecisionCatalog::from_document(document).expect("valid catalog fixture"))
}

/// Two questions, two independent single-condition rules. Enough surface for
/// the wizard and service transitions without drowning the assertions.
pub(super) fn two_question_catalog() -> Arc<DecisionCatalog> {
    catalog(
        vec![
            question("goal", &["speed", "quality"]),
            question("team", &["solo", "group"]),
        ],
        vec![
            rule(&[("goal", "speed")], &["p1", "p2"], &["m1"]),
            rule(&[("team", "solo")], &["p2", "p3"], &["m2"]),
        ],
    )
}

pub(super) fn principles_catalog() -> Arc<PrincipleCatalog> {
    let principles = ["p1", "p2", "p3"]
        .iter()
        .enumerate()
        .map(|(index, id)| Principle {
            id: id.to_string(),
            order: index as u32 + 1,
            slug: format!("slug-{id}"),
            title: format!("Principle {id}"),
            summary: format!("Summary of {id}."),
        })
        .collect();
    Arc::new(PrincipleCatalog::from_principles(principles))
}

pub(super) fn methods_catalog() -> Arc<MethodCatalog> {
    let raw = r#"{
        "m1": {
            "description": "Fixture method one.",
            "steps": ["Step one", "Step two"],
            "tips": ["Tip one"]
        },
        "m2": {
            "description": "Fixture method two.",
            "steps": ["Step one"],
            "tips": []
        }
    }"#;
    Arc::new(MethodCatalog::from_json(raw).expect("valid methods fixture"))
}

pub(super) fn session(name: &str) -> SessionId {
    SessionId(name.to_string())
}

/// A wizard on the fixture catalog with every question answered, sitting on
/// the results view.
pub(super) fn completed_wizard(catalog: Arc<DecisionCatalog>) -> Wizard {
    let mut wizard = Wizard::new(catalog);
    assert!(wizard.answer("goal", "speed"));
    assert!(wizard.answer("team", "solo"));
    assert!(wizard.state().results_visible);
    wizard
}

pub(super) fn build_service(
    catalog: Arc<DecisionCatalog>,
) -> (
    Arc<DecisionHelperService<MemoryStateStore>>,
    Arc<MemoryStateStore>,
) {
    let store = Arc::new(MemoryStateStore::default());
    let service = Arc::new(DecisionHelperService::new(
        catalog,
        principles_catalog(),
        methods_catalog(),
        store.clone(),
    ));
    (service, store)
}

#[derive(Default)]
pub(super) struct MemoryStateStore {
    slots: Mutex<HashMap<String, WizardSnapshot>>,
    saves: Mutex<usize>,
}

impl MemoryStateStore {
    pub(super) fn snapshot(&self, session: &SessionId) -> Option<WizardSnapshot> {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .get(session.as_str())
            .cloned()
    }

    pub(super) fn seed(&self, session: &SessionId, snapshot: WizardSnapshot) {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .insert(session.as_str().to_string(), snapshot);
    }

    pub(super) fn save_count(&self) -> usize {
        *self.saves.lock().expect("store mutex poisoned")
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
        Ok(self.snapshot(session))
    }

    fn save(&self, session: &SessionId, snapshot: &WizardSnapshot) -> Result<(), StorageError> {
        *self.saves.lock().expect("store mutex poisoned") += 1;
        self.seed(session, snapshot.clone());
        Ok(())
    }

    fn clear(&self, session: &SessionId) -> Result<(), StorageError> {
        self.slots
            .lock()
            .expect("store mutex poisoned")
            .remove(session.as_str());
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Every read blows up, as a crashed or unreachable backing store would.
pub(super) struct UnreadableStateStore;

impl StateStore for UnreadableStateStore {
    fn load(&self, _session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
        Err(StorageError::Read("backing store offline".to_string()))
    }

    fn save(&self, _session: &SessionId, _snapshot: &WizardSnapshot) -> Result<(), StorageError> {
        Ok(())
    }

    fn clear(&self, _session: &SessionId) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Reads succeed (always empty) but every write and clear fails.
pub(super) struct ReadOnlyStateStore;

impl StateStore for ReadOnlyStateStore {
    fn load(&self, _session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
        Ok(None)
    }

    fn save(&self, _session: &SessionId, _snapshot: &WizardSnapshot) -> Result<(), StorageError> {
        Err(StorageError::Write("store is read only".to_string()))
    }

    fn clear(&self, _session: &SessionId) -> Result<(), StorageError> {
        Err(StorageError::Write("store is read only".to_string()))
    }
}
