use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Question;

/// The user's progress through the questionnaire: one selected value per
/// answered question. Values are opaque tokens and are never validated against
/// the catalog; an unrecognized value simply matches no rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any prior selection for the question.
    pub fn set(&mut self, question_id: &str, value: &str) {
        self.entries
            .insert(question_id.to_string(), value.to_string());
    }

    /// Remove the answer for a question, if present.
    pub fn unset(&mut self, question_id: &str) {
        self.entries.remove(question_id);
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    /// True iff every question in the given sequence has an answer.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions
            .iter()
            .all(|question| self.entries.contains_key(&question.id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(question_id, value)| (question_id.as_str(), value.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
