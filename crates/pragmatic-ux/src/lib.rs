//! Engine and content catalogs behind the Pragmatic UX Design decision helper.
//!
//! The `helper` module holds the interactive core: the question/rule catalog,
//! the answer set, the pure rule evaluator, the wizard state machine, and the
//! persistence contract. The `content` module holds the static principle and
//! method catalogs the results are hydrated against.

pub mod config;
pub mod content;
pub mod error;
pub mod helper;
pub mod telemetry;
