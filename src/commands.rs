//! CLI command definitions and handlers
//!
//! One module per command group, mirroring the CLI surface: `app` for
//! application management, `job` for batch jobs, `cost` for cost analysis,
//! `base` for base images, and `config` for configuration generation.

pub mod app;
pub mod base;
pub mod config_gen;
pub mod cost;
pub mod job;

/// Print a command error to stderr with context about what was being done.
pub fn print_error(context: &str, err: &dyn std::fmt::Display) {
    eprintln!("Error {}: {}", context, err);
}

/// Serialize a value as pretty JSON to stdout, for `--format json` output.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            print_error("serializing output", &e);
            std::process::exit(1);
        }
    }
}
