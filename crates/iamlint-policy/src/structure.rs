//! # Structural Checker — Fixed-Schema Key-Set Validation
//!
//! Second stage of the pipeline. Verifies that the parsed value is an
//! object and that each nesting level of the expected policy shape carries
//! all of its required keys and none outside its allowed set.
//!
//! ## Key-Set Semantics
//!
//! The two checks are deliberately asymmetric:
//!
//! - [`check_required_keys`] with an empty required set is vacuously
//!   satisfied — nothing is demanded, nothing can be missing.
//! - [`check_allowed_keys`] with an empty allowed set rejects any
//!   non-empty object — no key is ever allowed. It is NOT vacuously true.
//!
//! This asymmetry is a documented contract of the checker, covered by
//! dedicated tests, and must not be "fixed" silently.
//!
//! ## Error Ordering
//!
//! The checker stops at the first violation. The dedicated
//! `MissingPolicyDocument` and `MissingStatement` errors fire before the
//! generic required-key check at their respective levels, so a document
//! missing only those keys reports the specific error, not the generic one.

use serde_json::{Map, Value};

use crate::error::{KeyContext, PolicyError};

/// Keys every policy root must carry. The root has no allowed-key
/// restriction; extra keys beside these two are tolerated.
pub const ROOT_REQUIRED_KEYS: [&str; 2] = ["PolicyName", "PolicyDocument"];

/// Keys the inner policy document must carry.
pub const DOCUMENT_REQUIRED_KEYS: [&str; 2] = ["Version", "Statement"];

/// The closed key set of the inner policy document.
pub const DOCUMENT_ALLOWED_KEYS: [&str; 3] = ["Version", "Statement", "Id"];

/// Keys every statement must carry.
pub const STATEMENT_REQUIRED_KEYS: [&str; 3] = ["Effect", "Action", "Resource"];

/// The closed key set of a statement.
pub const STATEMENT_ALLOWED_KEYS: [&str; 11] = [
    "Effect",
    "Action",
    "Resource",
    "Condition",
    "Sid",
    "NotAction",
    "NotResource",
    "Principal",
    "NotPrincipal",
    "Version",
    "Statement",
];

/// Verify that every key in `required` is present in `obj`.
///
/// An empty `required` set is vacuously satisfied.
///
/// # Errors
///
/// Returns `PolicyError::MissingRequiredKeys` listing every absent key,
/// in the order they appear in `required`.
pub fn check_required_keys(
    obj: &Map<String, Value>,
    required: &[&str],
    context: KeyContext,
) -> Result<(), PolicyError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|key| !obj.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PolicyError::MissingRequiredKeys { context, missing })
    }
}

/// Verify that every key present in `obj` is in the `allowed` set.
///
/// An empty `allowed` set fails for any non-empty object — unlike the
/// required-key check, this one is not vacuously true.
///
/// # Errors
///
/// Returns `PolicyError::DisallowedKey` for the first key found outside
/// the allowed set.
pub fn check_allowed_keys(
    obj: &Map<String, Value>,
    allowed: &[&str],
    context: KeyContext,
) -> Result<(), PolicyError> {
    for key in obj.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(PolicyError::DisallowedKey {
                context,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

/// View a `Statement` value as a list of statement entries.
///
/// The schema shows `Statement` as an array, but a single-object
/// `Statement` is accepted and treated as a one-element list. Any other
/// value type also comes back as a one-element list; the per-entry checks
/// then reject the non-object entry.
pub fn statement_entries(statement: &Value) -> Vec<&Value> {
    match statement {
        Value::Array(entries) => entries.iter().collect(),
        other => vec![other],
    }
}

/// Run the full structural pass over a parsed document.
///
/// Checks, in order: top-level value is an object; `PolicyDocument` key is
/// present; root required keys; inner document required and allowed keys
/// (with the dedicated `MissingStatement` error for an absent `Statement`);
/// required and allowed keys on every statement entry. Stops at the first
/// violation — errors are never aggregated.
///
/// # Errors
///
/// Returns the first `PolicyError` encountered, per the ordering above.
pub fn check_document(value: &Value) -> Result<(), PolicyError> {
    let root = value.as_object().ok_or(PolicyError::NotAnObject)?;

    if !root.contains_key("PolicyDocument") {
        return Err(PolicyError::MissingPolicyDocument);
    }
    check_required_keys(root, &ROOT_REQUIRED_KEYS, KeyContext::Root)?;

    let document = match root["PolicyDocument"].as_object() {
        Some(document) => document,
        // A non-object PolicyDocument carries no keys at all.
        None => {
            return Err(PolicyError::MissingRequiredKeys {
                context: KeyContext::PolicyDocument,
                missing: DOCUMENT_REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
            })
        }
    };

    if !document.contains_key("Statement") {
        return Err(PolicyError::MissingStatement);
    }
    check_required_keys(document, &DOCUMENT_REQUIRED_KEYS, KeyContext::PolicyDocument)?;
    check_allowed_keys(document, &DOCUMENT_ALLOWED_KEYS, KeyContext::PolicyDocument)?;

    for (index, entry) in statement_entries(&document["Statement"]).into_iter().enumerate() {
        let context = KeyContext::Statement(index);
        let statement = match entry.as_object() {
            Some(statement) => statement,
            None => {
                return Err(PolicyError::MissingRequiredKeys {
                    context,
                    missing: STATEMENT_REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
                })
            }
        };
        check_required_keys(statement, &STATEMENT_REQUIRED_KEYS, context)?;
        check_allowed_keys(statement, &STATEMENT_ALLOWED_KEYS, context)?;
    }

    Ok(())
}
