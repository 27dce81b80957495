//! Application specification loading and validation
//!
//! The core of the platform: a typed model of the `app.yaml` specification
//! document, a loader that distinguishes read, parse, and content failures,
//! and name-based lookups over the loaded tree.

pub mod application;
pub mod error;

pub use application::{
    APP_SPEC_FILE, Application, ApplicationMetadata, Architecture, BaselineCost, BatchConfig,
    ComputeEnvironment, ComputeSpec, ContainerSpec, ContainerVariant, CostSpec, Environment,
    GpuSpec, LicensingSpec, LifecyclePolicy, Maintainer, MathLibrary, NetworkingSpec, Parallelism,
    Queue, ScratchStorage, SharedStorage, StorageLocation, StorageSpec, Variant,
};
pub use error::ConfigError;
