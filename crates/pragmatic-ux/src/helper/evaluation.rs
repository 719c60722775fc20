use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{DecisionCatalog, Rule};

/// At most this many principles survive into a recommendation.
pub const MAX_PRINCIPLES: usize = 3;
/// At most this many methods survive into a recommendation.
pub const MAX_METHODS: usize = 6;

/// A bounded, deduplicated, order-preserving recommendation set. Created
/// fresh on every evaluation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub principles: Vec<String>,
    pub methods: Vec<String>,
}

/// Map an answer set to a recommendation against the catalog's rules.
///
/// Pure and deterministic: identical inputs always produce an identical
/// result, and evaluation never mutates its inputs. Matching is monotonic:
/// each matching rule only appends to the accumulators (its principles first,
/// then its methods, atomically per rule), so rule definition order decides
/// which entries survive the truncation caps. Zero matching rules yield an
/// empty recommendation, not an error.
pub fn evaluate(answers: &AnswerSet, catalog: &DecisionCatalog) -> Recommendation {
    let mut principles = Vec::new();
    let mut methods = Vec::new();

    for rule in catalog.rules() {
        if !rule_matches(rule, answers) {
            continue;
        }
        principles.extend(rule.consequence.principles.iter().cloned());
        methods.extend(rule.consequence.methods.iter().cloned());
    }

    Recommendation {
        principles: dedup_truncate(principles, MAX_PRINCIPLES),
        methods: dedup_truncate(methods, MAX_METHODS),
    }
}

/// A rule matches iff every condition pair equals the recorded answer. A
/// missing answer is a non-match, never a wildcard; an empty condition
/// matches unconditionally.
fn rule_matches(rule: &Rule, answers: &AnswerSet) -> bool {
    rule.condition
        .iter()
        .all(|(question_id, required)| answers.get(question_id) == Some(required.as_str()))
}

/// First-seen-order dedup followed by truncation. A stable seen-set scan,
/// not a sort.
fn dedup_truncate(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut kept = Vec::with_capacity(cap);
    for item in items {
        if kept.len() == cap {
            break;
        }
        if seen.insert(item.clone()) {
            kept.push(item);
        }
    }
    kept
}
