use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ContentError;

const BUNDLED_METHODS: &str = include_str!("../../data/methods.json");

/// Practical instructions for one UX method, keyed by the method's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDetails {
    pub description: String,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

impl MethodDetails {
    /// Generic record returned for methods the catalog does not document.
    pub fn fallback() -> Self {
        Self {
            description: "A practical method to improve your UX process.".to_string(),
            steps: vec![
                "Define your specific goals".to_string(),
                "Gather relevant data".to_string(),
                "Apply the method systematically".to_string(),
                "Measure results and iterate".to_string(),
            ],
            tips: vec![
                "Start small and focused".to_string(),
                "Involve stakeholders early".to_string(),
                "Document your process and learnings".to_string(),
            ],
        }
    }
}

/// Lookup table from method name to its instruction record.
#[derive(Debug, Clone)]
pub struct MethodCatalog {
    by_name: HashMap<String, MethodDetails>,
}

impl MethodCatalog {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let by_name: HashMap<String, MethodDetails> = serde_json::from_str(raw)?;
        Ok(Self { by_name })
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_METHODS)
    }

    pub fn get(&self, name: &str) -> Option<&MethodDetails> {
        self.by_name.get(name)
    }

    /// Instructions for a method name, falling back to a generic record for
    /// unknown names rather than failing.
    pub fn instructions(&self, name: &str) -> MethodDetails {
        self.by_name
            .get(name)
            .cloned()
            .unwrap_or_else(MethodDetails::fallback)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
