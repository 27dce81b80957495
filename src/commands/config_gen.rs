//! `config` subcommands: generate runtime configuration files from templates

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use log::debug;

use crate::commands::print_error;
use crate::generator::{self, GeneratorDefaults};

#[derive(Subcommand)]
#[command(after_long_help = "\
EXAMPLES:
    # Generate a run configuration from a template
    cloudhpc config generate \\
        --template applications/geos-chem/config-template.yaml \\
        --output run/config.yaml

    # Override variables and validate the result
    cloudhpc config generate \\
        --template config-template.yaml \\
        --output run/config.yaml \\
        --validate \\
        NUM_THREADS=16 INPUT_DIR=/scratch/input
")]
pub enum ConfigCommands {
    /// Generate a configuration file from a template
    Generate {
        /// Path to the configuration template file
        #[arg(long)]
        template: PathBuf,
        /// Path to the output configuration file
        #[arg(long)]
        output: PathBuf,
        /// Validate the generated configuration
        #[arg(long)]
        validate: bool,
        /// Variable overrides as KEY=VALUE pairs
        #[arg(value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },
}

pub fn handle_config_commands(command: &ConfigCommands, defaults: GeneratorDefaults) {
    match command {
        ConfigCommands::Generate {
            template,
            output,
            validate,
            overrides,
        } => {
            if let Err(e) = generate(template, output, *validate, overrides, defaults) {
                print_error("generating configuration", &e);
                std::process::exit(1);
            }
        }
    }
}

fn generate(
    template: &Path,
    output: &Path,
    validate: bool,
    overrides: &[String],
    defaults: GeneratorDefaults,
) -> Result<()> {
    let template_content = fs::read_to_string(template)
        .with_context(|| format!("failed to read template file {}", template.display()))?;

    let mut variables = defaults.into_variables();
    generator::apply_overrides(&mut variables, overrides);
    debug!("Substituting {} variables", variables.len());

    let config_content = generator::substitute(&template_content, &variables);

    if validate {
        generator::validate_generated(&config_content)
            .context("configuration validation failed")?;
        println!("Configuration validation: PASSED");
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    fs::write(output, &config_content)
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    println!("Configuration generated: {}", output.display());

    let mut keys: Vec<&String> = variables.keys().collect();
    keys.sort();
    println!("\nConfiguration variables:");
    for key in keys {
        println!("  {}: {}", key, variables[key]);
    }

    Ok(())
}
