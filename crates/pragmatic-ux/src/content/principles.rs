use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ContentError;

const BUNDLED_PRINCIPLES: &str = include_str!("../../data/principles.json");

/// A named UX guideline entry in the static content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub id: String,
    pub order: u32,
    pub slug: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct PrinciplesDocument {
    principles: Vec<Principle>,
}

/// Lookup table from principle id to its display record.
#[derive(Debug, Clone)]
pub struct PrincipleCatalog {
    by_id: HashMap<String, Principle>,
}

impl PrincipleCatalog {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let document: PrinciplesDocument = serde_json::from_str(raw)?;
        Ok(Self::from_principles(document.principles))
    }

    pub fn from_principles(principles: Vec<Principle>) -> Self {
        let by_id = principles
            .into_iter()
            .map(|principle| (principle.id.clone(), principle))
            .collect();
        Self { by_id }
    }

    /// The catalog shipped with the crate (the eight core principles).
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_PRINCIPLES)
    }

    pub fn get(&self, id: &str) -> Option<&Principle> {
        self.by_id.get(id)
    }

    /// Resolve a principle id to a display record, synthesizing a fallback
    /// card for ids the catalog does not know.
    pub fn card(&self, id: &str) -> Principle {
        self.by_id.get(id).cloned().unwrap_or_else(|| Principle {
            id: id.to_string(),
            order: 0,
            slug: id.to_string(),
            title: id.to_string(),
            summary: "A pragmatic UX principle.".to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
