//! # Report — Outcome to Message and Exit Code
//!
//! Maps the validator's tri-state outcome onto the CLI contract: one fixed
//! human-readable line on stdout and a process exit code. The exit-code
//! policy lives only here; the validator library returns verdicts and
//! errors, never codes.

use iamlint_policy::{PolicyError, Verdict};

/// Exit code for a valid document with bounded resource scopes.
pub const EXIT_VALID: u8 = 0;

/// Exit code for a well-formed document with a wildcard resource scope.
pub const EXIT_WILDCARD: u8 = 1;

/// Exit code for a document that fails loading or shape checks.
pub const EXIT_INVALID: u8 = 2;

/// The fixed message line for a validation outcome.
pub fn message(path: &str, outcome: &Result<Verdict, PolicyError>) -> String {
    match outcome {
        Ok(Verdict::Valid) => format!("File {path} is a valid policy document."),
        Ok(Verdict::ValidWithWildcard) => {
            format!("File {path} is valid, but contains '*' in Resource.")
        }
        Err(err) => format!("File {path} is not a valid policy document: {err}."),
    }
}

/// The process exit code for a validation outcome.
pub fn exit_code(outcome: &Result<Verdict, PolicyError>) -> u8 {
    match outcome {
        Ok(Verdict::Valid) => EXIT_VALID,
        Ok(Verdict::ValidWithWildcard) => EXIT_WILDCARD,
        Err(_) => EXIT_INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message() {
        let msg = message("policy.json", &Ok(Verdict::Valid));
        assert_eq!(msg, "File policy.json is a valid policy document.");
    }

    #[test]
    fn test_wildcard_message() {
        let msg = message("policy.json", &Ok(Verdict::ValidWithWildcard));
        assert_eq!(msg, "File policy.json is valid, but contains '*' in Resource.");
    }

    #[test]
    fn test_invalid_message_names_the_reason() {
        let outcome = Err(PolicyError::MissingPolicyDocument);
        let msg = message("policy.json", &outcome);
        assert!(msg.starts_with("File policy.json is not a valid policy document:"));
        assert!(msg.contains("PolicyDocument"));
    }

    #[test]
    fn test_exit_codes_are_distinct_per_outcome() {
        assert_eq!(exit_code(&Ok(Verdict::Valid)), EXIT_VALID);
        assert_eq!(exit_code(&Ok(Verdict::ValidWithWildcard)), EXIT_WILDCARD);
        assert_eq!(exit_code(&Err(PolicyError::NotAnObject)), EXIT_INVALID);
    }
}
