use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{DecisionCatalog, Question};
use super::evaluation::{evaluate, Recommendation};

/// The wizard's full in-memory state. `results_visible` is true only when
/// every question has an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_question_index: usize,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Recommendation>,
    pub results_visible: bool,
    pub editing: bool,
}

/// State machine coordinating the question pointer, edit mode, and the
/// transition between answering and reviewing results.
///
/// Each transition method returns whether it changed the state; calls that
/// violate a transition's preconditions are ignored rather than raised.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: Arc<DecisionCatalog>,
    state: WizardState,
}

impl Wizard {
    pub fn new(catalog: Arc<DecisionCatalog>) -> Self {
        Self {
            catalog,
            state: WizardState::default(),
        }
    }

    /// Rebuild a wizard from previously persisted state. Returns `None` when
    /// the state is inconsistent with the catalog (index out of range, or a
    /// visible result without a complete answer set), in which case callers
    /// should fall back to a fresh wizard.
    pub fn restore(catalog: Arc<DecisionCatalog>, state: WizardState) -> Option<Self> {
        if state.current_question_index >= catalog.question_count() {
            return None;
        }
        if state.results_visible && !state.answers.is_complete(catalog.questions()) {
            return None;
        }
        Some(Self { catalog, state })
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &DecisionCatalog {
        &self.catalog
    }

    pub fn current_question(&self) -> &Question {
        &self.catalog.questions()[self.state.current_question_index]
    }

    fn is_complete(&self) -> bool {
        self.state.answers.is_complete(self.catalog.questions())
    }

    /// Record an answer. Completing the questionnaire evaluates the rules and
    /// moves to the results view (leaving `editing` untouched so an editing
    /// user can keep revising); otherwise the wizard advances to the next
    /// question unless the user is editing, in which case it stays put so
    /// they can pick the next question to revisit themselves.
    pub fn answer(&mut self, question_id: &str, value: &str) -> bool {
        if self.catalog.question_position(question_id).is_none() {
            return false;
        }

        self.state.answers.set(question_id, value);

        if self.is_complete() {
            self.state.result = Some(evaluate(&self.state.answers, &self.catalog));
            self.state.results_visible = true;
        } else if !self.state.editing
            && self.state.current_question_index + 1 < self.catalog.question_count()
        {
            self.state.current_question_index += 1;
        }
        true
    }

    /// Step back one question and unset the answer of the question being
    /// departed from, so it must be re-answered rather than re-displayed with
    /// a stale selection. No-op at the first question or while reviewing.
    pub fn back(&mut self) -> bool {
        if self.state.current_question_index == 0 || self.state.results_visible {
            return false;
        }
        self.state.current_question_index -= 1;
        let question_id = self.catalog.questions()[self.state.current_question_index]
            .id
            .clone();
        self.state.answers.unset(&question_id);
        true
    }

    /// From the results view, jump back to a question to revise it. The
    /// existing answer is kept as the current selection until overwritten.
    pub fn edit_answer(&mut self, question_id: &str) -> bool {
        if !self.state.results_visible {
            return false;
        }
        let Some(position) = self.catalog.question_position(question_id) else {
            return false;
        };
        self.state.current_question_index = position;
        self.state.results_visible = false;
        self.state.editing = true;
        true
    }

    /// Return from an editing session to the results view, re-evaluating the
    /// rules since answers may have changed. Requires a complete answer set.
    pub fn return_to_results(&mut self) -> bool {
        if !self.state.editing || !self.is_complete() {
            return false;
        }
        self.state.result = Some(evaluate(&self.state.answers, &self.catalog));
        self.state.results_visible = true;
        true
    }

    /// Reset to the initial state: first question, no answers, no result.
    pub fn restart(&mut self) -> bool {
        self.state = WizardState::default();
        true
    }
}
