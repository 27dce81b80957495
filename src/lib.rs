//! cloudhpc: a CLI front-end for running HPC applications on cloud batch
//! infrastructure
//!
//! Applications are described declaratively in an `app.yaml` specification
//! covering variants, CPU architectures, containers, storage, environments,
//! and cost parameters. The `config` module loads and validates that
//! specification; the `commands` module implements the CLI surface on top
//! of it.

pub mod commands;
pub mod config;
pub mod generator;
pub mod version;

// Re-exports for convenience
pub use config::{APP_SPEC_FILE, Application, Architecture, ConfigError, Environment, Variant};
pub use generator::GeneratorDefaults;
pub use version::VersionInfo;
