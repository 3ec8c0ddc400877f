//! # Semantic Checker — Resource Scope Analysis
//!
//! Final stage of the pipeline. Runs only on structurally valid statement
//! lists and inspects each statement's `Resource` value for the wildcard
//! scope `"*"`.
//!
//! Every statement is inspected, not just the first: a wildcard buried in
//! the third statement of an otherwise tight policy is exactly the case
//! this tool exists to catch. A wildcard is reported as
//! [`Verdict::ValidWithWildcard`], never as an error — the document is
//! well-formed, its scope is merely overly permissive.

use serde_json::Value;

use crate::error::PolicyError;
use crate::Verdict;

/// The resource scope that grants access to everything.
const WILDCARD: &str = "*";

/// Inspect the `Resource` of every statement and report the verdict.
///
/// A `Resource` may be a single string or an array of strings; the
/// wildcard verdict fires if any of them is the literal `"*"`.
///
/// # Errors
///
/// Returns `PolicyError::MissingResource` if a statement is not an object
/// or has no `Resource` key, and `PolicyError::InvalidResourceType` if a
/// `Resource` is neither a string nor an array of strings.
pub fn check_resources(statements: &[&Value]) -> Result<Verdict, PolicyError> {
    let mut verdict = Verdict::Valid;

    for (index, statement) in statements.iter().enumerate() {
        let resource = statement
            .as_object()
            .and_then(|obj| obj.get("Resource"))
            .ok_or(PolicyError::MissingResource { index })?;

        if resource_is_wildcard(resource, index)? {
            verdict = Verdict::ValidWithWildcard;
        }
    }

    Ok(verdict)
}

/// Narrow a `Resource` value to its string scopes and test for `"*"`.
fn resource_is_wildcard(resource: &Value, index: usize) -> Result<bool, PolicyError> {
    match resource {
        Value::String(scope) => Ok(scope == WILDCARD),
        Value::Array(scopes) => {
            let mut wildcard = false;
            for scope in scopes {
                match scope.as_str() {
                    Some(s) => wildcard |= s == WILDCARD,
                    None => return Err(PolicyError::InvalidResourceType { index }),
                }
            }
            Ok(wildcard)
        }
        _ => Err(PolicyError::InvalidResourceType { index }),
    }
}
