//! `base` subcommands: build and inspect HPC base container images

use clap::Subcommand;

#[derive(Subcommand)]
#[command(after_long_help = "\
EXAMPLES:
    # Build specific architecture
    cloudhpc base build amd/zen4

    # Build all images in a family
    cloudhpc base build amd/all

    # Build all base images
    cloudhpc base build all
")]
pub enum BaseCommands {
    /// List available base images
    List,
    /// Build a base image
    Build {
        /// Build target as family/generation (e.g. amd/zen4), family/all, or all
        target: String,
        /// Push to registry after build
        #[arg(long)]
        push: bool,
    },
    /// Show base image information
    Info {
        /// Base image reference
        image: String,
    },
}

pub fn handle_base_commands(command: &BaseCommands) {
    match command {
        BaseCommands::List => {
            println!("Available base images:");
            println!("\nAMD:");
            println!("  hpc-base-amd-zen4:20251018    - AMD EPYC Genoa (Zen 4)");
            println!("  hpc-base-amd-zen3:20251018    - AMD EPYC Milan (Zen 3)");
            println!("  hpc-base-amd-zen2:20251018    - AMD EPYC Rome (Zen 2)");
            println!("\nIntel:");
            println!("  hpc-base-intel-spr:20251018   - Intel Sapphire Rapids");
            println!("  hpc-base-intel-icl:20251018   - Intel Ice Lake");
            println!("  hpc-base-intel-clk:20251018   - Intel Cascade Lake");
            println!("\nARM:");
            println!("  hpc-base-arm-graviton4:20251018 - AWS Graviton 4 (Neoverse V2)");
            println!("  hpc-base-arm-graviton3:20251018 - AWS Graviton 3 (Neoverse V1)");
            println!("  hpc-base-arm-graviton2:20251018 - AWS Graviton 2 (Neoverse N1)");

            println!("\n[NOT IMPLEMENTED] Registry query functionality coming soon");
        }
        BaseCommands::Build { target, push } => {
            println!("Building base image: {}", target);
            if *push {
                println!("Will push to registry after build");
            }

            println!("\n[NOT IMPLEMENTED] Base image build functionality coming soon");
        }
        BaseCommands::Info { image } => {
            println!("Base Image: {}", image);
            println!("\nIncluded libraries:");
            println!("  - GCC 11.5.0");
            println!("  - Spack v0.23.1");
            println!("  - AMD AOCL 4.2 (BLIS + libFLAME)");
            println!("  - OpenMPI 4.1.6");
            println!("  - HDF5 1.14.3");
            println!("  - NetCDF-C 4.9.2");
            println!("  - NetCDF-Fortran 4.6.1");

            println!("\nCompiler flags:");
            println!("  CFLAGS:   -march=znver4 -mavx512f -O3");
            println!("  FCFLAGS:  -march=znver4 -mavx512f -O3 -fopenmp");

            println!("\nTarget instances:");
            println!("  - c7a.xlarge, c7a.2xlarge, c7a.4xlarge, c7a.8xlarge");

            println!("\n[NOT IMPLEMENTED] Image metadata query coming soon");
        }
    }
}
