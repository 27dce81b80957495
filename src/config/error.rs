//! Error types for application specification loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, validating, or querying an application
/// specification.
///
/// The variants are deliberately coarse: callers need to distinguish an
/// unreadable path from a malformed document from a document that parsed but
/// violates the schema, and nothing finer than that.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The specification file could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The specification file is not valid YAML for the schema.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed but violates one or more schema invariants.
    /// Every violation found in a single validation pass is included,
    /// in declaration order.
    #[error("invalid application specification: {}", .errors.join("; "))]
    Validation {
        /// All violations found, in order
        errors: Vec<String>,
    },

    /// A lookup by name matched no entry.
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// Entity kind that was searched (e.g. "architecture")
        kind: &'static str,
        /// The name that was requested
        name: String,
    },
}

impl ConfigError {
    /// Validation violations, if this is a validation error.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            ConfigError::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}
