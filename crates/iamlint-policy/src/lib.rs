//! # iamlint-policy — IAM Policy Document Validation
//!
//! Validates a single JSON document against the fixed shape of a cloud IAM
//! policy and reports whether its resource scope is overly permissive.
//!
//! ## Pipeline
//!
//! Three dependency-ordered stages, each short-circuiting on first failure:
//!
//! 1. [`loader`] — path existence, `.json` extension, JSON parse.
//! 2. [`structure`] — required/allowed key sets at each nesting level of
//!    the fixed policy shape.
//! 3. [`semantic`] — wildcard scan over every statement's `Resource`.
//!
//! The outcome is tri-state: `Ok(Verdict::Valid)`,
//! `Ok(Verdict::ValidWithWildcard)` for a well-formed document whose scope
//! grants everything, or `Err(PolicyError)` for a document that fails
//! loading or shape checks.
//!
//! ## Crate Policy
//!
//! - JSON stays dynamically typed (`serde_json::Value`) with explicit
//!   narrowing at each check; the document is never deserialized into
//!   structs.
//! - One document per run; nothing is cached or mutated after parse.
//! - No `unwrap()` or `panic!()` outside tests. Business outcomes
//!   (wildcard scope) are values, never errors.

pub mod error;
pub mod loader;
pub mod semantic;
pub mod structure;

use std::path::Path;

use serde_json::Value;

pub use error::{KeyContext, PolicyError};
pub use loader::load_document;

/// Outcome of validating a well-formed policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The document is valid and every resource scope is bounded.
    Valid,
    /// The document is valid but at least one statement grants the
    /// wildcard resource scope `"*"`.
    ValidWithWildcard,
}

/// Validate an already-parsed JSON value.
///
/// Runs the structural and semantic stages; the loader stage is skipped
/// since the value is already in memory. Because no stage mutates the
/// value, re-serializing and re-parsing it yields the identical outcome.
///
/// # Errors
///
/// Returns the first `PolicyError` encountered by either stage.
pub fn validate_value(value: &Value) -> Result<Verdict, PolicyError> {
    structure::check_document(value)?;

    // check_document guarantees both levels of indexing exist.
    let statements = structure::statement_entries(&value["PolicyDocument"]["Statement"]);
    semantic::check_resources(&statements)
}

/// Validate the policy document at `path`.
///
/// The full pipeline: load, structural checks, semantic checks.
///
/// # Errors
///
/// Returns the first `PolicyError` encountered by any stage.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Verdict, PolicyError> {
    let value = loader::load_document(path.as_ref())?;
    validate_value(&value)
}
