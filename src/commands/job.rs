//! `job` subcommands: submit, monitor, and manage batch jobs
//!
//! Submission and monitoring against the batch backend are not wired up yet;
//! the handlers print what would be done and a placeholder notice.

use clap::Subcommand;

#[derive(Subcommand)]
#[command(after_long_help = "\
EXAMPLES:
    # Submit with S3 input/output
    cloudhpc job submit geos-chem \\
        --env benchmark \\
        --input s3://bucket/input/ \\
        --output s3://bucket/output/

    # Submit with custom architecture
    cloudhpc job submit geos-chem \\
        --arch graviton4 \\
        --vcpus 16 \\
        --memory 32768 \\
        --input s3://bucket/input/ \\
        --output s3://bucket/output/
")]
pub enum JobCommands {
    /// Submit a job
    Submit {
        /// Application name
        app: String,
        /// Environment name (benchmark, production, etc.)
        #[arg(long, default_value = "")]
        env: String,
        /// Target architecture
        #[arg(long)]
        arch: Option<String>,
        /// S3 input path
        #[arg(long)]
        input: String,
        /// S3 output path
        #[arg(long)]
        output: String,
        /// Number of vCPUs
        #[arg(long, default_value_t = 8)]
        vcpus: i64,
        /// Memory in MB
        #[arg(long, default_value_t = 16384)]
        memory: i64,
    },
    /// Check job status
    Status {
        /// Job identifier
        job_id: String,
    },
    /// View job logs
    Logs {
        /// Job identifier
        job_id: String,
        /// Follow log output
        #[arg(short, long)]
        follow: bool,
    },
    /// List jobs
    List {
        /// Filter by status (RUNNING, SUCCEEDED, FAILED, all)
        #[arg(long, default_value = "all")]
        status: String,
        /// Maximum number of jobs to list
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Cancel a job
    Cancel {
        /// Job identifier
        job_id: String,
    },
}

pub fn handle_job_commands(command: &JobCommands) {
    match command {
        JobCommands::Submit {
            app,
            env,
            arch,
            input,
            output,
            vcpus,
            memory,
        } => {
            println!("Submitting job for application: {}", app);
            println!("Environment: {}", env);
            if let Some(arch) = arch {
                println!("Architecture: {}", arch);
            }
            println!("vCPUs: {}", vcpus);
            println!("Memory: {} MB", memory);
            println!("Input: {}", input);
            println!("Output: {}", output);

            println!("\n[NOT IMPLEMENTED] Job submission functionality coming soon");
            println!("Job ID: job-12345678-abcd-1234-5678-abcdef123456");
        }
        JobCommands::Status { job_id } => {
            println!("Job ID: {}", job_id);
            println!("Status: RUNNING");
            println!("Started: 2025-10-18 14:30:00");
            println!("Runtime: 45 minutes");

            println!("\n[NOT IMPLEMENTED] Job status functionality coming soon");
        }
        JobCommands::Logs { job_id, follow } => {
            println!("Logs for job: {}", job_id);
            if *follow {
                println!("Following logs (Ctrl+C to stop)...");
            }

            println!("\n[NOT IMPLEMENTED] Job logs functionality coming soon");
        }
        JobCommands::List { status, limit } => {
            println!("Listing jobs (status: {}, limit: {})", status, limit);

            println!("\n[NOT IMPLEMENTED] Job listing functionality coming soon");
        }
        JobCommands::Cancel { job_id } => {
            println!("Canceling job: {}", job_id);

            println!("\n[NOT IMPLEMENTED] Job cancellation functionality coming soon");
        }
    }
}
