//! Configuration file generation from templates
//!
//! Applications ship runtime configuration templates containing `{{KEY}}`
//! placeholders. This module substitutes those placeholders from a variable
//! map and optionally sanity-checks the generated YAML. It is a plain text
//! facility with no knowledge of the application specification schema.

use std::collections::HashMap;
use std::env;
use std::thread;

use anyhow::{Context, Result, bail};

/// Default substitution variables, resolved from the process environment
/// once at startup and passed down explicitly from there.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorDefaults {
    /// Input data directory (INPUT_DIR)
    pub input_dir: String,
    /// Output data directory (OUTPUT_DIR)
    pub output_dir: String,
    /// Worker thread count (NUM_THREADS)
    pub num_threads: String,
    /// Application version (VERSION)
    pub version: String,
}

impl GeneratorDefaults {
    /// Resolve defaults from the environment. NUM_THREADS falls back to the
    /// machine's available parallelism when OMP_NUM_THREADS is unset.
    pub fn from_env() -> GeneratorDefaults {
        let default_threads = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .to_string();
        GeneratorDefaults {
            input_dir: env_or("APP_DATA", "/data/input"),
            output_dir: env_or("APP_OUTPUT", "/data/output"),
            num_threads: env_or("OMP_NUM_THREADS", &default_threads),
            version: env_or("APP_VERSION", "1.0.0"),
        }
    }

    /// Expand into the substitution variable map.
    pub fn into_variables(self) -> HashMap<String, String> {
        HashMap::from([
            ("INPUT_DIR".to_string(), self.input_dir),
            ("OUTPUT_DIR".to_string(), self.output_dir),
            ("NUM_THREADS".to_string(), self.num_threads),
            ("VERSION".to_string(), self.version),
        ])
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Apply `key=value` override arguments on top of a variable map.
/// Keys are upper-cased, so `num_threads=8` overrides `NUM_THREADS`.
/// Arguments without `=` are ignored.
pub fn apply_overrides(variables: &mut HashMap<String, String>, overrides: &[String]) {
    for arg in overrides {
        if let Some((key, value)) = arg.split_once('=') {
            variables.insert(key.to_uppercase(), value.to_string());
        }
    }
}

/// Replace every `{{KEY}}` placeholder with its value from the variable map.
/// Placeholders with no matching variable are left untouched.
pub fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Sanity-check a generated configuration document: it must be valid YAML
/// whose top-level mapping contains `input_dir` and `output_dir`.
pub fn validate_generated(content: &str) -> Result<()> {
    let config: serde_yaml::Value =
        serde_yaml::from_str(content).context("invalid YAML")?;

    let Some(mapping) = config.as_mapping() else {
        bail!("configuration is not a mapping");
    };
    for key in ["input_dir", "output_dir"] {
        if !mapping.contains_key(&serde_yaml::Value::String(key.to_string())) {
            bail!("{} not specified", key);
        }
    }
    Ok(())
}
