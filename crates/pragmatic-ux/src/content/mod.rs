//! Static content catalogs the decision helper hydrates its results against.
//!
//! Both catalogs are read-only lookup tables loaded once at startup. Unknown
//! keys never fail a lookup; they resolve to a generic fallback record so a
//! catalog/content drift degrades to a bland card instead of an error.

mod methods;
mod principles;

pub use methods::{MethodCatalog, MethodDetails};
pub use principles::{Principle, PrincipleCatalog};

/// Error raised when an embedded content document cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("embedded content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
