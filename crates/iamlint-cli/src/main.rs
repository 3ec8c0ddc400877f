//! # iamlint CLI Entry Point
//!
//! Parses arguments, runs the validation pipeline, and reports the verdict.

use std::process::ExitCode;

use clap::Parser;

use iamlint_cli::report;

/// Validate an IAM policy document and flag wildcard resource scopes.
///
/// Checks that the file exists, is JSON, matches the fixed policy shape,
/// and that no statement grants the `*` resource scope.
#[derive(Parser, Debug)]
#[command(name = "iamlint", version, about)]
struct Cli {
    /// Path to the policy JSON file.
    policy_file: String,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = iamlint_policy::validate_file(&cli.policy_file);
    if let Err(err) = &outcome {
        tracing::debug!(path = %cli.policy_file, error = %err, "validation failed");
    }

    println!("{}", report::message(&cli.policy_file, &outcome));
    ExitCode::from(report::exit_code(&outcome))
}
