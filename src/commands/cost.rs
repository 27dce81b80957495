//! `cost` subcommands: cost estimation and analysis
//!
//! Real estimation will use the application's cost block (baseline runtime
//! and per-architecture scaling factors); until then the handlers print
//! representative output and a placeholder notice.

use clap::Subcommand;

#[derive(Subcommand)]
#[command(after_long_help = "\
EXAMPLES:
    # Estimate for specific configuration
    cloudhpc cost estimate geos-chem \\
        --arch c7a \\
        --vcpus 16 \\
        --runtime 4h

    # Compare across architectures
    cloudhpc cost estimate geos-chem \\
        --compare \\
        --runtime 4h

    # Analyze costs for last 30 days
    cloudhpc cost analyze --days 30
")]
pub enum CostCommands {
    /// Estimate job cost
    Estimate {
        /// Application name
        app: String,
        /// Target architecture
        #[arg(long, default_value = "c7a")]
        arch: String,
        /// Number of vCPUs
        #[arg(long, default_value_t = 8)]
        vcpus: i64,
        /// Estimated runtime (e.g. 2h, 30m)
        #[arg(long, default_value = "1h")]
        runtime: String,
        /// Compare costs across architectures
        #[arg(long)]
        compare: bool,
    },
    /// Analyze historical costs
    Analyze {
        /// Number of days to analyze
        #[arg(long, default_value_t = 30)]
        days: i64,
        /// Filter by application
        #[arg(long)]
        app: Option<String>,
    },
    /// Get cost optimization recommendations
    Optimize {
        /// Application name
        app: String,
    },
}

pub fn handle_cost_commands(command: &CostCommands) {
    match command {
        CostCommands::Estimate {
            app,
            arch,
            vcpus,
            runtime,
            compare,
        } => {
            println!("Cost estimate for application: {}", app);

            if *compare {
                println!("\nCost comparison across architectures:");
                println!("Architecture    | Instance     | Runtime | Cost   | Cost/Hour");
                println!("----------------|--------------|---------|--------|----------");
                println!("c7a (AMD Zen4) | c7a.4xlarge  | 4.0h    | $1.39  | $0.3468");
                println!("c7i (Intel SPR)| c7i.4xlarge  | 4.5h    | $1.22  | $0.2720");
                println!("graviton4      | c8g.4xlarge  | 4.8h    | $1.00  | $0.2076");
                println!("\nRecommendation: graviton4 (lowest total cost)");
            } else {
                println!("\nArchitecture: {}", arch);
                println!("vCPUs: {}", vcpus);
                println!("Runtime: {}", runtime);
                println!("\nEstimated cost: $1.39");
                println!("Cost breakdown:");
                println!("  Compute: $1.32");
                println!("  Storage: $0.05");
                println!("  Network: $0.02");
            }

            println!("\n[NOT IMPLEMENTED] Detailed cost estimation coming soon");
        }
        CostCommands::Analyze { days, app } => {
            println!("Cost analysis for last {} days", days);
            if let Some(app) = app {
                println!("Application: {}", app);
            }

            println!("\nTotal costs: $1,234.56");
            println!("\nBreakdown by resource:");
            println!("  Compute: $1,000.00 (81%)");
            println!("  Storage: $200.00 (16%)");
            println!("  Network: $34.56 (3%)");

            println!("\nTop instances by cost:");
            println!("  c7a.4xlarge: $500.00");
            println!("  c8g.4xlarge: $300.00");
            println!("  c7i.4xlarge: $200.00");

            println!("\n[NOT IMPLEMENTED] Detailed cost analysis coming soon");
        }
        CostCommands::Optimize { app } => {
            println!("Cost optimization recommendations for: {}", app);
            println!("\nRecommendations:");
            println!("  1. Switch to Graviton instances (30% cost savings)");
            println!("  2. Use Spot instances for non-urgent jobs (70% savings)");
            println!("  3. Enable S3 lifecycle policies (15% storage savings)");
            println!("\nEstimated monthly savings: $425.00");

            println!("\n[NOT IMPLEMENTED] Detailed recommendations coming soon");
        }
    }
}
