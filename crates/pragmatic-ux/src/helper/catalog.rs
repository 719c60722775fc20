use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../../data/decision_tree.json");

/// One selectable answer within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

/// A single questionnaire step. The label is opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub label: String,
    pub options: Vec<QuestionOption>,
}

/// The principles and methods a rule contributes when its condition matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consequence {
    #[serde(default)]
    pub principles: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
}

/// A condition→consequence pair. The condition is a conjunction: every
/// question listed must have been answered with exactly the required value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "if")]
    pub condition: BTreeMap<String, String>,
    #[serde(rename = "then", default)]
    pub consequence: Consequence,
}

/// Descriptive metadata carried alongside the catalog. Opaque to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub description: String,
}

/// Wire shape of a decision catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub meta: CatalogMeta,
    pub questions: Vec<Question>,
    pub rules: Vec<Rule>,
}

/// Fatal, load-time-only failures of the catalog content. Once a catalog has
/// been constructed these conditions cannot occur mid-session.
#[derive(Debug, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog defines no questions")]
    NoQuestions,
    #[error("duplicate question id '{id}'")]
    DuplicateQuestionId { id: String },
    #[error("question '{question}' repeats option value '{value}'")]
    DuplicateOptionValue { question: String, value: String },
    #[error("rule {rule} references unknown question '{question}'")]
    UnknownQuestion { rule: usize, question: String },
    #[error("rule {rule} requires value '{value}' that question '{question}' does not offer")]
    UnknownOptionValue {
        rule: usize,
        question: String,
        value: String,
    },
}

/// Immutable, validated catalog of questions and if/then rules. Loaded once
/// at startup; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DecisionCatalog {
    version: String,
    meta: CatalogMeta,
    questions: Vec<Question>,
    rules: Vec<Rule>,
    positions: HashMap<String, usize>,
}

impl DecisionCatalog {
    pub fn from_json(raw: &str) -> Result<Self, DataIntegrityError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    /// The decision tree shipped with the crate.
    pub fn bundled() -> Result<Self, DataIntegrityError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_document(document: CatalogDocument) -> Result<Self, DataIntegrityError> {
        let CatalogDocument {
            version,
            meta,
            questions,
            rules,
        } = document;

        if questions.is_empty() {
            return Err(DataIntegrityError::NoQuestions);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if positions.insert(question.id.clone(), index).is_some() {
                return Err(DataIntegrityError::DuplicateQuestionId {
                    id: question.id.clone(),
                });
            }

            let mut seen_values = HashSet::with_capacity(question.options.len());
            for option in &question.options {
                if !seen_values.insert(option.value.as_str()) {
                    return Err(DataIntegrityError::DuplicateOptionValue {
                        question: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        for (rule_index, rule) in rules.iter().enumerate() {
            for (question_id, value) in &rule.condition {
                let Some(&position) = positions.get(question_id) else {
                    return Err(DataIntegrityError::UnknownQuestion {
                        rule: rule_index,
                        question: question_id.clone(),
                    });
                };
                let question = &questions[position];
                if !question.options.iter().any(|option| option.value == *value) {
                    return Err(DataIntegrityError::UnknownOptionValue {
                        rule: rule_index,
                        question: question_id.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(Self {
            version,
            meta,
            questions,
            rules,
            positions,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Rules in definition order. Definition order is a de facto priority:
    /// earlier rules' consequences survive truncation first.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based position of a question within the questionnaire.
    pub fn question_position(&self, question_id: &str) -> Option<usize> {
        self.positions.get(question_id).copied()
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.question_position(question_id)
            .map(|position| &self.questions[position])
    }

    /// Display label of an option value, if the question defines it.
    pub fn option_label(&self, question_id: &str, value: &str) -> Option<&str> {
        self.question(question_id)?
            .options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}
