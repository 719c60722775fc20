//! Integration specifications for the decision helper questionnaire flow.
//!
//! Scenarios run against the bundled catalogs through the public service
//! facade and HTTP router, so they validate the shipped content together with
//! the evaluation and persistence behavior without reaching into private
//! modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use pragmatic_ux::content::{MethodCatalog, PrincipleCatalog};
    use pragmatic_ux::helper::{
        DecisionCatalog, DecisionHelperService, SessionId, StateStore, StorageError,
        WizardSnapshot,
    };

    #[derive(Default)]
    pub(super) struct MemoryStateStore {
        slots: Mutex<HashMap<String, WizardSnapshot>>,
    }

    impl StateStore for MemoryStateStore {
        fn load(&self, session: &SessionId) -> Result<Option<WizardSnapshot>, StorageError> {
            Ok(self
                .slots
                .lock()
                .expect("store mutex poisoned")
                .get(session.as_str())
                .cloned())
        }

        fn save(&self, session: &SessionId, snapshot: &WizardSnapshot) -> Result<(), StorageError> {
            self.slots
                .lock()
                .expect("store mutex poisoned")
                .insert(session.as_str().to_string(), snapshot.clone());
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

    pub(super) fn bundled_service(
        store: Arc<MemoryStateStore>,
    ) -> DecisionHelperService<MemoryStateStore> {
        let catalog = Arc::new(DecisionCatalog::bundled().expect("bundled catalog"));
        let principles = Arc::new(PrincipleCatalog::bundled().expect("bundled principles"));
        let methods = Arc::new(MethodCatalog::bundled().expect("bundled methods"));
        DecisionHelperService::new(catalog, principles, methods, store)
    }

    /// One answer per bundled question, in presentation order.
    pub(super) const WALKTHROUGH: [(&str, &str); 4] = [
        ("primary_goal", "conversion"),
        ("team_setup", "solo"),
        ("time_budget", "days"),
        ("ux_maturity", "starting"),
    ];
}

use std::collections::HashSet;
use std::sync::Arc;

use common::{bundled_service, MemoryStateStore, WALKTHROUGH};
use pragmatic_ux::helper::{SessionId, MAX_METHODS, MAX_PRINCIPLES};

#[test]
fn bundled_walkthrough_ends_on_a_bounded_recommendation() {
    let service = bundled_service(Arc::new(MemoryStateStore::default()));
    let session = SessionId("walkthrough".to_string());

    let mut view = service.state(&session);
    assert_eq!(view.progress.total, 4);

    for (question_id, value) in WALKTHROUGH {
        assert_eq!(
            view.question.as_ref().map(|question| question.id.as_str()),
            Some(question_id)
        );
        view = service.answer(&session, question_id, value);
    }

    assert!(view.results_visible);
    let recommendation = view.recommendation.expect("recommendation must be present");

    assert!(!recommendation.principles.is_empty());
    assert!(recommendation.principles.len() <= MAX_PRINCIPLES);
    assert!(recommendation.methods.len() <= MAX_METHODS);

    let principle_ids: HashSet<_> = recommendation
        .principles
        .iter()
        .map(|principle| principle.id.as_str())
        .collect();
    assert_eq!(principle_ids.len(), recommendation.principles.len());

    let method_names: HashSet<_> = recommendation
        .methods
        .iter()
        .map(|method| method.name.as_str())
        .collect();
    assert_eq!(method_names.len(), recommendation.methods.len());

    // Bundled rules only reference bundled content, so hydration never falls
    // back to a synthesized card.
    for principle in &recommendation.principles {
        assert_ne!(principle.summary, "A pragmatic UX principle.");
        assert!(!principle.title.is_empty());
    }
    for method in &recommendation.methods {
        assert!(!method.details.steps.is_empty());
    }
}

#[test]
fn identical_answer_sets_get_identical_recommendations() {
    let service = bundled_service(Arc::new(MemoryStateStore::default()));
    let first = SessionId("first".to_string());
    let second = SessionId("second".to_string());

    for (question_id, value) in WALKTHROUGH {
        service.answer(&first, question_id, value);
        service.answer(&second, question_id, value);
    }

    let left = service
        .state(&first)
        .recommendation
        .expect("recommendation must be present");
    let right = service
        .state(&second)
        .recommendation
        .expect("recommendation must be present");

    assert_eq!(left.principles, right.principles);
    let left_names: Vec<_> = left.methods.iter().map(|method| &method.name).collect();
    let right_names: Vec<_> = right.methods.iter().map(|method| &method.name).collect();
    assert_eq!(left_names, right_names);
}

#[test]
fn a_session_survives_a_service_restart() {
    let store = Arc::new(MemoryStateStore::default());
    let session = SessionId("durable".to_string());

    {
        let service = bundled_service(store.clone());
        service.answer(&session, "primary_goal", "insight");
        service.answer(&session, "team_setup", "embedded");
    }

    let service = bundled_service(store);
    let view = service.state(&session);

    assert_eq!(view.progress.answered, 2);
    assert_eq!(
        view.question.as_ref().map(|question| question.id.as_str()),
        Some("time_budget")
    );
}

#[test]
fn restart_discards_the_finished_questionnaire() {
    let service = bundled_service(Arc::new(MemoryStateStore::default()));
    let session = SessionId("again".to_string());

    for (question_id, value) in WALKTHROUGH {
        service.answer(&session, question_id, value);
    }
    assert!(service.state(&session).results_visible);

    let view = service.restart(&session);

    assert!(!view.results_visible);
    assert_eq!(view.progress.answered, 0);
    assert_eq!(
        view.question.as_ref().map(|question| question.id.as_str()),
        Some("primary_goal")
    );
}

#[test]
fn revising_one_answer_reevaluates_the_recommendation() {
    let service = bundled_service(Arc::new(MemoryStateStore::default()));
    let session = SessionId("revise".to_string());

    for (question_id, value) in WALKTHROUGH {
        service.answer(&session, question_id, value);
    }

    let view = service.edit_answer(&session, "time_budget");
    assert!(view.editing);
    assert_eq!(
        view.question.as_ref().map(|question| question.id.as_str()),
        Some("time_budget")
    );
    assert_eq!(
        view.question
            .as_ref()
            .and_then(|question| question.selected.as_deref()),
        Some("days")
    );

    let view = service.answer(&session, "time_budget", "ongoing");
    assert!(view.results_visible);
    assert!(view.editing);
    assert!(view.recommendation.is_some());
}
