//! # Error Types — Closed Validation Taxonomy
//!
//! Every way a policy document can fail validation is one variant of
//! [`PolicyError`]. The set is closed and callers match on it exhaustively;
//! there are no free-form string errors anywhere in the pipeline.
//!
//! ## Design
//!
//! - Loader failures carry the offending path.
//! - Structural failures carry the context (which level of the document)
//!   and the offending key or key list.
//! - Semantic failures carry the index of the statement that failed.
//!
//! A wildcard resource scope is NOT an error — it is an ordinary
//! [`Verdict`](crate::Verdict) value. Errors here are strictly the cases
//! where validation cannot produce a verdict at all.

use thiserror::Error;

/// A validation failure. The first failure encountered is returned;
/// errors are never aggregated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The input path does not exist on the filesystem.
    #[error("file {path} does not exist")]
    FileNotFound {
        /// The path that was checked.
        path: String,
    },

    /// The input path does not carry a `.json` extension.
    /// Raised before the file contents are ever read.
    #[error("file {path} is not a JSON file")]
    NotJsonExtension {
        /// The path that was checked.
        path: String,
    },

    /// The file contents could not be parsed as JSON.
    #[error("file {path} is not in valid JSON format: {reason}")]
    MalformedJson {
        /// The path that was parsed.
        path: String,
        /// Parser diagnostic for the malformed input.
        reason: String,
    },

    /// The top-level JSON value is not an object.
    #[error("document does not contain a JSON object at the top level")]
    NotAnObject,

    /// The root object has no `PolicyDocument` key.
    #[error("document has no PolicyDocument key")]
    MissingPolicyDocument,

    /// The inner policy document has no `Statement` key.
    #[error("policy document has no Statement key")]
    MissingStatement,

    /// One or more required keys are absent from an object.
    #[error("required keys {missing:?} are missing in {context}")]
    MissingRequiredKeys {
        /// Which level of the document failed (root, policy document,
        /// or a statement).
        context: KeyContext,
        /// The required keys that were absent, in schema order.
        missing: Vec<String>,
    },

    /// A key outside the allowed set is present in an object.
    #[error("key {key} is not allowed in {context}")]
    DisallowedKey {
        /// Which level of the document failed.
        context: KeyContext,
        /// The first disallowed key encountered.
        key: String,
    },

    /// A statement is not an object or has no `Resource` key.
    #[error("statement {index} has no Resource")]
    MissingResource {
        /// Zero-based index into the statement list.
        index: usize,
    },

    /// A statement's `Resource` is neither a string nor an array of strings.
    #[error("statement {index} has a Resource that is not a string or array of strings")]
    InvalidResourceType {
        /// Zero-based index into the statement list.
        index: usize,
    },
}

/// The nesting level at which a key-set check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The root policy object (`PolicyName` / `PolicyDocument` level).
    Root,
    /// The inner document under the `PolicyDocument` key.
    PolicyDocument,
    /// A statement entry, identified by its zero-based index.
    Statement(usize),
}

impl std::fmt::Display for KeyContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyContext::Root => write!(f, "the policy root"),
            KeyContext::PolicyDocument => write!(f, "the policy document"),
            KeyContext::Statement(i) => write!(f, "statement {i}"),
        }
    }
}
