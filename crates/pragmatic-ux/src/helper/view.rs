use serde::Serialize;

use crate::content::{MethodCatalog, MethodDetails, Principle, PrincipleCatalog};

use super::catalog::DecisionCatalog;
use super::evaluation::Recommendation;
use super::wizard::Wizard;

/// A recommendation hydrated against the static content catalogs, ready for
/// display. Order follows the recommendation exactly.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub principles: Vec<Principle>,
    pub methods: Vec<MethodCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodCard {
    pub name: String,
    #[serde(flatten)]
    pub details: MethodDetails,
}

impl RecommendationView {
    pub fn hydrate(
        recommendation: &Recommendation,
        principles: &PrincipleCatalog,
        methods: &MethodCatalog,
    ) -> Self {
        Self {
            principles: recommendation
                .principles
                .iter()
                .map(|id| principles.card(id))
                .collect(),
            methods: recommendation
                .methods
                .iter()
                .map(|name| MethodCard {
                    name: name.clone(),
                    details: methods.instructions(name),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

/// The active question as presented to the user, including any previously
/// selected value when a question is being revisited.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub label: String,
    pub options: Vec<OptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressView {
    pub answered: usize,
    pub total: usize,
}

/// One entry of the "your situation" summary shown alongside results.
#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuestionView {
    pub question_id: String,
    pub question_label: String,
    pub value: String,
    pub answer_label: String,
}

/// JSON shape of a wizard session as returned by the HTTP surface.
#[derive(Debug, Clone, Serialize)]
pub struct WizardStateView {
    pub session_id: String,
    pub results_visible: bool,
    pub editing: bool,
    pub progress: ProgressView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<Vec<AnsweredQuestionView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationView>,
}

impl WizardStateView {
    pub fn project(
        session_id: &str,
        wizard: &Wizard,
        principles: &PrincipleCatalog,
        methods: &MethodCatalog,
    ) -> Self {
        let catalog = wizard.catalog();
        let state = wizard.state();
        let progress = ProgressView {
            answered: state.answers.len(),
            total: catalog.question_count(),
        };

        if state.results_visible {
            let situation = state
                .answers
                .iter()
                .map(|(question_id, value)| answered_view(catalog, question_id, value))
                .collect();
            let recommendation = state
                .result
                .as_ref()
                .map(|result| RecommendationView::hydrate(result, principles, methods));
            return Self {
                session_id: session_id.to_string(),
                results_visible: true,
                editing: state.editing,
                progress,
                question: None,
                situation: Some(situation),
                recommendation,
            };
        }

        let question = wizard.current_question();
        let question_view = QuestionView {
            id: question.id.clone(),
            label: question.label.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                })
                .collect(),
            selected: state.answers.get(&question.id).map(str::to_string),
        };

        Self {
            session_id: session_id.to_string(),
            results_visible: false,
            editing: state.editing,
            progress,
            question: Some(question_view),
            situation: None,
            recommendation: None,
        }
    }
}

fn answered_view(catalog: &DecisionCatalog, question_id: &str, value: &str) -> AnsweredQuestionView {
    let question_label = catalog
        .question(question_id)
        .map(|question| question.label.clone())
        .unwrap_or_else(|| question_id.to_string());
    // Falls back to the raw value for answers the catalog does not recognize.
    let answer_label = catalog
        .option_label(question_id, value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    AnsweredQuestionView {
        question_id: question_id.to_string(),
        question_label,
        value: value.to_string(),
        answer_label,
    }
}
