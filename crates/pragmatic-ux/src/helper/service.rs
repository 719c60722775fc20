use std::sync::Arc;

use tracing::{debug, warn};

use crate::content::{MethodCatalog, PrincipleCatalog};

use super::catalog::DecisionCatalog;
use super::storage::{SessionId, StateStore, WizardSnapshot};
use super::view::WizardStateView;
use super::wizard::Wizard;

/// Session facade composing the catalog, the content collaborators, and a
/// state store. Each call loads (or freshly initializes) the session's
/// wizard, applies one transition, persists best-effort, and returns the
/// resulting view.
///
/// Persistence is a side channel: a failed read degrades to a fresh session
/// and a failed write is logged and ignored, so no storage failure ever
/// surfaces to the caller.
pub struct DecisionHelperService<S> {
    catalog: Arc<DecisionCatalog>,
    principles: Arc<PrincipleCatalog>,
    methods: Arc<MethodCatalog>,
    store: Arc<S>,
}

impl<S> DecisionHelperService<S>
where
    S: StateStore + 'static,
{
    pub fn new(
        catalog: Arc<DecisionCatalog>,
        principles: Arc<PrincipleCatalog>,
        methods: Arc<MethodCatalog>,
        store: Arc<S>,
    ) -> Self {
        Self {
            catalog,
            principles,
            methods,
            store,
        }
    }

    pub fn catalog(&self) -> &DecisionCatalog {
        &self.catalog
    }

    /// Current view of a session, resuming from storage when a usable
    /// snapshot exists.
    pub fn state(&self, session: &SessionId) -> WizardStateView {
        let wizard = self.load_wizard(session);
        self.view(session, &wizard)
    }

    pub fn answer(&self, session: &SessionId, question_id: &str, value: &str) -> WizardStateView {
        self.transition(session, "answer", |wizard| wizard.answer(question_id, value))
    }

    pub fn back(&self, session: &SessionId) -> WizardStateView {
        self.transition(session, "back", |wizard| wizard.back())
    }

    pub fn edit_answer(&self, session: &SessionId, question_id: &str) -> WizardStateView {
        self.transition(session, "edit_answer", |wizard| {
            wizard.edit_answer(question_id)
        })
    }

    pub fn return_to_results(&self, session: &SessionId) -> WizardStateView {
        self.transition(session, "return_to_results", |wizard| {
            wizard.return_to_results()
        })
    }

    /// Reset the session and erase its stored slot.
    pub fn restart(&self, session: &SessionId) -> WizardStateView {
        let mut wizard = self.load_wizard(session);
        wizard.restart();
        if let Err(error) = self.store.clear(session) {
            warn!(%session, %error, "failed to clear stored wizard state");
        }
        self.view(session, &wizard)
    }

    fn transition<F>(&self, session: &SessionId, name: &str, apply: F) -> WizardStateView
    where
        F: FnOnce(&mut Wizard) -> bool,
    {
        let mut wizard = self.load_wizard(session);
        let changed = apply(&mut wizard);
        if changed {
            debug!(%session, transition = name, "wizard transition applied");
            self.persist(session, &wizard);
        } else {
            debug!(%session, transition = name, "wizard transition ignored");
        }
        self.view(session, &wizard)
    }

    fn load_wizard(&self, session: &SessionId) -> Wizard {
        let snapshot = match self.store.load(session) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(%session, %error, "failed to load wizard state, starting fresh");
                None
            }
        };

        match snapshot {
            Some(snapshot) => {
                match Wizard::restore(self.catalog.clone(), snapshot.into_state()) {
                    Some(wizard) => wizard,
                    None => {
                        warn!(%session, "stored wizard state inconsistent with catalog, starting fresh");
                        Wizard::new(self.catalog.clone())
                    }
                }
            }
            None => Wizard::new(self.catalog.clone()),
        }
    }

    fn persist(&self, session: &SessionId, wizard: &Wizard) {
        let snapshot = WizardSnapshot::capture(wizard.state());
        if let Err(error) = self.store.save(session, &snapshot) {
            warn!(%session, %error, "failed to persist wizard state, continuing in memory");
        }
    }

    fn view(&self, session: &SessionId, wizard: &Wizard) -> WizardStateView {
        WizardStateView::project(session.as_str(), wizard, &self.principles, &self.methods)
    }
}
