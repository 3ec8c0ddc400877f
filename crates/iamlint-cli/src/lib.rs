//! # iamlint-cli — Policy Validator Command-Line Interface
//!
//! Thin wrapper around `iamlint-policy`. The binary parses one file path,
//! runs the validation pipeline, prints one of three fixed messages, and
//! sets the process exit code.
//!
//! ## Crate Policy
//!
//! - No validation logic here — everything delegates to `iamlint-policy`.
//! - The three result messages and the exit-code mapping are the CLI's
//!   contract and live in [`report`]; the library knows nothing about
//!   exit codes.

pub mod report;
