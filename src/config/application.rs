//! Application specification data model
//!
//! An application is described by an `app.yaml` document in its directory.
//! This module deserializes that document into a typed, immutable tree and
//! enforces the structural invariants the rest of the platform relies on:
//! required identity fields, at least one variant and architecture, complete
//! architecture entries, and unique variant/architecture names.
//!
//! Validation collects every violation in a single pass rather than stopping
//! at the first one, so a user fixing a spec sees the whole picture at once.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Name of the specification document inside an application directory
pub const APP_SPEC_FILE: &str = "app.yaml";

/// A complete application specification
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    /// Canonical application name (e.g. "geos-chem")
    pub name: String,
    /// Human-readable display name
    pub display_name: String,
    /// Application version
    pub version: String,
    /// Minimum platform version this spec is written against
    pub platform_version: String,
    /// Descriptive metadata
    pub metadata: ApplicationMetadata,
    /// Build/run flavors of the application
    pub variants: Vec<Variant>,
    /// Compute requirements
    pub compute: ComputeSpec,
    /// Container build configuration
    pub containers: ContainerSpec,
    /// Storage requirements
    pub storage: StorageSpec,
    /// Deployment environments
    pub environments: Vec<Environment>,
    /// Cost estimation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostSpec>,
    /// License requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licensing: Option<LicensingSpec>,
    /// GPU requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<GpuSpec>,
    /// Networking requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<NetworkingSpec>,
}

/// Descriptive metadata for an application
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationMetadata {
    /// Free-text description
    pub description: String,
    /// Project homepage URL
    pub homepage: String,
    /// Documentation URL
    pub documentation: String,
    /// Source repository URL
    pub repository: String,
    /// License identifier
    pub license: String,
    /// People responsible for this application
    pub maintainers: Vec<Maintainer>,
    /// Search tags
    pub tags: Vec<String>,
}

/// An application maintainer
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    /// Maintainer name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// Parallelism model of an application variant
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parallelism {
    /// Shared-memory threading within one node
    Openmp,
    /// Message passing across nodes
    Mpi,
    /// No parallelism
    #[default]
    Serial,
    /// GPU-accelerated
    Gpu,
}

impl std::fmt::Display for Parallelism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Parallelism::Openmp => "openmp",
            Parallelism::Mpi => "mpi",
            Parallelism::Serial => "serial",
            Parallelism::Gpu => "gpu",
        };
        write!(f, "{}", s)
    }
}

/// A build/run flavor of an application (e.g. single-node vs multi-node)
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Variant name, unique within the application
    pub name: String,
    /// Human-readable display name
    pub display_name: String,
    /// Free-text description
    pub description: String,
    /// Node topology (single-node, multi-node)
    #[serde(rename = "type")]
    pub variant_type: String,
    /// Parallelism model
    pub parallelism: Parallelism,
    /// Version of the upstream software this variant builds
    pub upstream_version: String,
}

/// Compute requirements for an application
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeSpec {
    /// Supported CPU architectures
    pub architectures: Vec<Architecture>,
    /// Batch scheduling configuration
    pub batch: BatchConfig,
}

/// A CPU architecture target
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Architecture {
    /// Architecture name, unique within the application (e.g. "c7a")
    pub name: String,
    /// CPU family (amd, intel, arm)
    pub family: String,
    /// CPU generation (zen4, sapphirerapids, neoverse-v2)
    pub generation: String,
    /// Instance types backed by this architecture
    pub instance_types: Vec<String>,
    /// Compiler flags for architecture-specific optimization
    pub compiler_flags: Vec<String>,
    /// Math library to link against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math_library: Option<MathLibrary>,
    /// Base container image providing compilers and libraries
    pub base_image: String,
}

/// Math library configuration for an architecture
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathLibrary {
    /// Library name (e.g. "aocl", "mkl", "armpl")
    pub name: String,
    /// Library version
    pub version: String,
    /// BLAS implementation
    pub blas: String,
    /// LAPACK implementation
    pub lapack: String,
}

/// Batch scheduling configuration
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Minimum vCPUs to keep provisioned
    pub min_vcpus: i64,
    /// Maximum vCPUs to scale to
    pub max_vcpus: i64,
    /// Maximum spot bid as a percentage of on-demand price
    pub spot_bid_percentage: i64,
    /// Job queues, highest priority first
    pub queues: Vec<Queue>,
}

/// A job queue
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    /// Queue name
    pub name: String,
    /// Scheduling priority (higher is scheduled first)
    pub priority: i64,
    /// Compute environments this queue dispatches to
    pub compute_environments: Vec<ComputeEnvironment>,
}

/// A compute environment within a queue
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeEnvironment {
    /// Capacity type (spot, on-demand)
    #[serde(rename = "type")]
    pub environment_type: String,
    /// Architecture names this environment serves
    pub architectures: Vec<String>,
    /// Maximum vCPUs for this environment
    pub max_vcpus: i64,
}

/// Container build configuration
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSpec {
    /// Target registry (ecr, dockerhub)
    pub registry: String,
    /// Repository name within the registry
    pub repository: String,
    /// Build system (docker-buildx)
    pub build_system: String,
    /// Per-variant build configuration, keyed by variant name
    pub variants: HashMap<String, ContainerVariant>,
    /// Packages the container build depends on
    pub dependencies: Vec<String>,
}

/// Build configuration for one container variant
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerVariant {
    /// Path to the Dockerfile
    pub dockerfile: String,
    /// Build context directory
    pub context: String,
    /// Build arguments passed to the build
    pub build_args: HashMap<String, String>,
}

/// Storage requirements for an application
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSpec {
    /// Where input data is read from
    pub input: StorageLocation,
    /// Where output data is written to
    pub output: StorageLocation,
    /// Node-local scratch space
    pub scratch: ScratchStorage,
    /// Shared filesystem mounted across nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<SharedStorage>,
}

/// A storage location for input or output data
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageLocation {
    /// Storage backend (s3, efs, fsx-lustre)
    #[serde(rename = "type")]
    pub location_type: String,
    /// Bucket name for object storage
    pub bucket: String,
    /// Key prefix within the bucket
    pub prefix: String,
    /// Object lifecycle rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<LifecyclePolicy>,
}

/// Object lifecycle thresholds, in days
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecyclePolicy {
    /// Days until transition to infrequent-access storage
    pub transition_ia: i64,
    /// Days until transition to archive storage
    pub transition_glacier: i64,
    /// Days until expiration
    pub expiration: i64,
}

/// Node-local scratch storage
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchStorage {
    /// Storage backing (ebs, instance-store)
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Volume type for block storage (gp3, io2)
    pub volume_type: String,
    /// Volume size in GB
    pub size_gb: i64,
    /// Provisioned IOPS
    pub iops: i64,
}

/// Shared filesystem mounted on all nodes of a job
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedStorage {
    /// Filesystem type (efs, fsx-lustre)
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Filesystem size in GB
    pub size_gb: i64,
    /// Throughput mode (bursting, provisioned)
    pub throughput_mode: String,
}

/// A deployment environment profile
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Environment name, referenced at job submission (e.g. "benchmark")
    pub name: String,
    /// Configuration identifier this environment uses
    pub config: String,
    /// Free-text description
    pub description: String,
}

/// Cost estimation parameters
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSpec {
    /// Estimation method identifier
    pub estimate_method: String,
    /// Measured baseline to scale from
    pub baseline: BaselineCost,
    /// Per-architecture runtime scaling factors relative to the baseline
    pub scaling_factors: HashMap<String, f64>,
}

/// A measured baseline run used for cost scaling
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineCost {
    /// Architecture the baseline was measured on
    pub architecture: String,
    /// Measured runtime in hours
    pub runtime_hours: f64,
    /// Instance cost per hour in USD
    pub cost_per_hour: f64,
}

/// License requirements
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingSpec {
    /// License server type (none, flexlm, rlm, custom)
    #[serde(rename = "type")]
    pub license_type: String,
    /// License server address
    pub server: String,
    /// Licensed feature name
    pub feature: String,
    /// License tokens consumed per job
    pub tokens_per_job: i64,
}

/// GPU requirements
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuSpec {
    /// Whether a GPU is required to run
    pub required: bool,
    /// Acceptable GPU types (e.g. "a100", "h100")
    pub types: Vec<String>,
    /// GPUs per job
    pub count: i64,
    /// Minimum GPU memory in GB
    pub memory_gb: i64,
}

/// Networking requirements
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkingSpec {
    /// Whether Elastic Fabric Adapter is required
    pub efa: bool,
    /// Whether instances must share a placement group
    pub placement_group: bool,
}

impl Application {
    /// Load and validate the application specification from `app.yaml` in
    /// the given directory.
    ///
    /// The three failure kinds are distinguishable to the caller: an
    /// unreadable path is `ConfigError::Read`, a syntactically invalid
    /// document is `ConfigError::Parse`, and a document that parsed but
    /// violates schema invariants is `ConfigError::Validation` carrying
    /// every violation found.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Application, ConfigError> {
        let path = dir.as_ref().join(APP_SPEC_FILE);

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let app: Application =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;

        app.validate()?;
        Ok(app)
    }

    /// Validate the specification against its schema invariants.
    ///
    /// Unlike a fail-fast validator, this reports the complete set of
    /// violations from a single pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation { errors })
        }
    }

    /// Collect every schema violation, in declaration order.
    ///
    /// An empty result means the specification is valid. Architecture-level
    /// violations name the offending architecture, falling back to its
    /// position when the name itself is missing.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push("name is required".to_string());
        }
        if self.version.is_empty() {
            errors.push("version is required".to_string());
        }
        if self.platform_version.is_empty() {
            errors.push("platform_version is required".to_string());
        }

        if self.variants.is_empty() {
            errors.push("at least one variant is required".to_string());
        }
        for name in duplicate_names(self.variants.iter().map(|v| v.name.as_str())) {
            errors.push(format!("duplicate variant name '{}'", name));
        }

        if self.compute.architectures.is_empty() {
            errors.push("at least one architecture is required".to_string());
        }
        for (index, arch) in self.compute.architectures.iter().enumerate() {
            let label = if arch.name.is_empty() {
                format!("architecture at index {}", index)
            } else {
                format!("architecture '{}'", arch.name)
            };
            for violation in arch.validation_errors() {
                errors.push(format!("{}: {}", label, violation));
            }
        }
        for name in duplicate_names(self.compute.architectures.iter().map(|a| a.name.as_str())) {
            errors.push(format!("duplicate architecture name '{}'", name));
        }

        errors
    }

    /// Look up an architecture by exact name.
    pub fn get_architecture(&self, name: &str) -> Result<&Architecture, ConfigError> {
        self.compute
            .architectures
            .iter()
            .find(|arch| arch.name == name)
            .ok_or_else(|| ConfigError::NotFound {
                kind: "architecture",
                name: name.to_string(),
            })
    }

    /// Look up a variant by exact name.
    pub fn get_variant(&self, name: &str) -> Result<&Variant, ConfigError> {
        self.variants
            .iter()
            .find(|variant| variant.name == name)
            .ok_or_else(|| ConfigError::NotFound {
                kind: "variant",
                name: name.to_string(),
            })
    }

    /// Look up an environment by exact name.
    pub fn get_environment(&self, name: &str) -> Result<&Environment, ConfigError> {
        self.environments
            .iter()
            .find(|env| env.name == name)
            .ok_or_else(|| ConfigError::NotFound {
                kind: "environment",
                name: name.to_string(),
            })
    }
}

impl Architecture {
    /// Collect schema violations for this architecture entry.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("name is required".to_string());
        }
        if self.family.is_empty() {
            errors.push("family is required".to_string());
        }
        if self.instance_types.is_empty() {
            errors.push("at least one instance type is required".to_string());
        }
        if self.base_image.is_empty() {
            errors.push("base_image is required".to_string());
        }
        errors
    }
}

/// Names that appear more than once, reported once each, in first-occurrence
/// order. Empty names are skipped since the missing-name violation is
/// reported separately.
fn duplicate_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for name in names {
        if name.is_empty() {
            continue;
        }
        if seen.contains(&name) {
            if !duplicates.contains(&name) {
                duplicates.push(name);
            }
        } else {
            seen.push(name);
        }
    }
    duplicates
}
