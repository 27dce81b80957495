use clap::{Parser, Subcommand, builder::styling};
use log::LevelFilter;

use cloudhpc::commands::app::{AppCommands, handle_app_commands};
use cloudhpc::commands::base::{BaseCommands, handle_base_commands};
use cloudhpc::commands::config_gen::{ConfigCommands, handle_config_commands};
use cloudhpc::commands::cost::{CostCommands, handle_cost_commands};
use cloudhpc::commands::job::{JobCommands, handle_job_commands};
use cloudhpc::commands::print_json;
use cloudhpc::generator::GeneratorDefaults;
use cloudhpc::version::{VERSION, VersionInfo};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "cloudhpc")]
#[command(version = VERSION)]
#[command(styles = STYLES)]
#[command(about = "Manage HPC applications on cloud batch infrastructure")]
#[command(long_about = "\
cloudhpc is a flexible framework for running scientific computing
applications on cloud batch infrastructure with architecture-specific
optimizations.

Supports:
  - Multiple CPU architectures (AMD, Intel, ARM Graviton)
  - Container-based deployments
  - Batch job management
  - S3 integration for data
  - Cost optimization")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage applications
    App {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Manage jobs
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Cost analysis and estimation
    Cost {
        #[command(subcommand)]
        command: CostCommands,
    },
    /// Manage base images
    Base {
        #[command(subcommand)]
        command: BaseCommands,
    },
    /// Generate configuration files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .try_init()
        .ok();

    match &cli.command {
        Commands::App { command } => handle_app_commands(command, &cli.format, cli.verbose),
        Commands::Job { command } => handle_job_commands(command),
        Commands::Cost { command } => handle_cost_commands(command),
        Commands::Base { command } => handle_base_commands(command),
        Commands::Config { command } => {
            // Environment defaults are resolved once here and passed down.
            handle_config_commands(command, GeneratorDefaults::from_env())
        }
        Commands::Version => {
            let info = VersionInfo::current();
            if cli.format == "json" {
                print_json(&info);
                return;
            }
            println!("cloudhpc version {}", info.version);
            println!("API version: {}", info.api_version);
            if let Some(commit) = info.git_commit {
                println!("Git commit: {}", commit);
            }
            if let Some(date) = info.build_date {
                println!("Build date: {}", date);
            }
        }
    }
}
