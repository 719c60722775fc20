//! The decision helper core: question/rule catalog, answer tracking, pure
//! rule evaluation, the wizard state machine, and the persistence contract.
//!
//! The flow is: user input drives the [`wizard::Wizard`]; once the answer set
//! is complete the wizard evaluates the catalog's rules into a bounded
//! [`evaluation::Recommendation`]; the session facade persists every real
//! transition through a [`storage::StateStore`] and hydrates results against
//! the static content catalogs for display.

pub mod answers;
pub mod catalog;
pub mod evaluation;
pub mod router;
pub mod service;
pub mod storage;
pub mod view;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{
    CatalogDocument, CatalogMeta, Consequence, DataIntegrityError, DecisionCatalog, Question,
    QuestionOption, Rule,
};
pub use evaluation::{evaluate, Recommendation, MAX_METHODS, MAX_PRINCIPLES};
pub use router::helper_router;
pub use service::DecisionHelperService;
pub use storage::{SessionId, StateStore, StorageError, WizardSnapshot};
pub use view::{
    AnsweredQuestionView, MethodCard, OptionView, ProgressView, QuestionView, RecommendationView,
    WizardStateView,
};
pub use wizard::{Wizard, WizardState};
