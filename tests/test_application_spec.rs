//! Tests for application specification loading, validation, and lookups

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use cloudhpc::config::{Application, ConfigError, Parallelism};

const MINIMAL_SPEC: &str = r#"
name: geos-chem
version: 1.0.0
platform_version: 0.1.0
variants:
  - name: classic
compute:
  architectures:
    - name: c7a
      family: amd
      instance_types: [c7a.xlarge]
      base_image: hpc-base-amd-zen4:20251018
"#;

fn write_spec(dir: &Path, content: &str) {
    fs::write(dir.join("app.yaml"), content).unwrap();
}

// ============== Load Tests ==============

#[rstest]
fn test_load_minimal_spec() {
    let temp_dir = TempDir::new().unwrap();
    write_spec(temp_dir.path(), MINIMAL_SPEC);

    let app = Application::load(temp_dir.path()).unwrap();
    assert_eq!(app.name, "geos-chem");
    assert_eq!(app.version, "1.0.0");
    assert_eq!(app.platform_version, "0.1.0");
    assert_eq!(app.variants.len(), 1);
    assert_eq!(app.compute.architectures.len(), 1);

    // Absent optional fields take defaults
    assert_eq!(app.display_name, "");
    assert!(app.environments.is_empty());
    assert!(app.cost.is_none());
    assert!(app.licensing.is_none());
    assert!(app.gpu.is_none());
    assert!(app.networking.is_none());
    assert!(app.storage.shared.is_none());
    assert!(app.compute.architectures[0].math_library.is_none());
    assert_eq!(app.variants[0].parallelism, Parallelism::Serial);
}

#[rstest]
fn test_load_missing_file_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("app.yaml"));
}

#[rstest]
fn test_load_malformed_yaml_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    write_spec(temp_dir.path(), "name: [unclosed\nversion: 1.0.0\n");

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[rstest]
fn test_load_wrong_type_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    // variants must be a sequence
    write_spec(
        temp_dir.path(),
        "name: x\nversion: 1.0.0\nplatform_version: 0.1.0\nvariants: not-a-list\n",
    );

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[rstest]
fn test_load_ignores_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let spec = format!("{}\nfuture_field: ignored\n", MINIMAL_SPEC);
    write_spec(temp_dir.path(), &spec);

    assert!(Application::load(temp_dir.path()).is_ok());
}

#[rstest]
fn test_load_invalid_spec_is_a_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    write_spec(
        temp_dir.path(),
        "name: geos-chem\nversion: 1.0.0\nplatform_version: 0.1.0\n",
    );

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert_eq!(
        err.validation_errors().unwrap().to_vec(),
        vec![
            "at least one variant is required",
            "at least one architecture is required",
        ]
    );
}

// ============== Validation Tests ==============

#[rstest]
#[case::missing_name("name", "name is required")]
#[case::missing_version("version", "version is required")]
#[case::missing_platform_version("platform_version", "platform_version is required")]
fn test_missing_required_field_is_reported(#[case] field: &str, #[case] expected: &str) {
    let temp_dir = TempDir::new().unwrap();
    let spec: String = MINIMAL_SPEC
        .lines()
        .filter(|line| !line.starts_with(&format!("{}:", field)))
        .collect::<Vec<_>>()
        .join("\n");
    write_spec(temp_dir.path(), &spec);

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert_eq!(err.validation_errors().unwrap().to_vec(), vec![expected]);
}

#[rstest]
#[case::missing_family(
    "    - name: c7a\n      instance_types: [c7a.xlarge]\n      base_image: img\n",
    "architecture 'c7a': family is required"
)]
#[case::missing_instance_types(
    "    - name: c7a\n      family: amd\n      base_image: img\n",
    "architecture 'c7a': at least one instance type is required"
)]
#[case::missing_base_image(
    "    - name: c7a\n      family: amd\n      instance_types: [c7a.xlarge]\n",
    "architecture 'c7a': base_image is required"
)]
#[case::missing_name(
    "    - family: amd\n      instance_types: [c7a.xlarge]\n      base_image: img\n",
    "architecture at index 0: name is required"
)]
fn test_incomplete_architecture_is_reported(#[case] arch_yaml: &str, #[case] expected: &str) {
    let temp_dir = TempDir::new().unwrap();
    let spec = format!(
        "name: x\nversion: 1.0.0\nplatform_version: 0.1.0\n\
         variants:\n  - name: classic\n\
         compute:\n  architectures:\n{}",
        arch_yaml
    );
    write_spec(temp_dir.path(), &spec);

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert_eq!(err.validation_errors().unwrap().to_vec(), vec![expected]);
}

#[rstest]
fn test_all_violations_reported_in_one_pass() {
    let app = Application::default();
    let err = app.validate().unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 5);
    assert_eq!(errors[0], "name is required");
    assert_eq!(errors[4], "at least one architecture is required");
}

#[rstest]
fn test_duplicate_names_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let spec = r#"
name: x
version: 1.0.0
platform_version: 0.1.0
variants:
  - name: classic
  - name: classic
compute:
  architectures:
    - name: c7a
      family: amd
      instance_types: [c7a.xlarge]
      base_image: img
    - name: c7a
      family: amd
      instance_types: [c7a.2xlarge]
      base_image: img
"#;
    write_spec(temp_dir.path(), spec);

    let err = Application::load(temp_dir.path()).unwrap_err();
    assert_eq!(
        err.validation_errors().unwrap().to_vec(),
        vec![
            "duplicate variant name 'classic'",
            "duplicate architecture name 'c7a'",
        ]
    );
}

// ============== Lookup Tests ==============

#[rstest]
fn test_lookups_match_exact_names_only() {
    let temp_dir = TempDir::new().unwrap();
    write_spec(temp_dir.path(), MINIMAL_SPEC);
    let app = Application::load(temp_dir.path()).unwrap();

    let arch = app.get_architecture("c7a").unwrap();
    assert_eq!(arch.family, "amd");
    assert_eq!(arch.instance_types, ["c7a.xlarge"]);
    assert_eq!(arch.base_image, "hpc-base-amd-zen4:20251018");

    for missing in ["c7i", "C7A", "c7", ""] {
        let err = app.get_architecture(missing).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("architecture '{}' not found", missing)
        );
    }

    assert!(app.get_variant("classic").is_ok());
    assert!(app.get_variant("Classic").is_err());
    assert_eq!(
        app.get_environment("benchmark").unwrap_err().to_string(),
        "environment 'benchmark' not found"
    );
}

// ============== Full Example Tests ==============

fn example_app_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("applications")
        .join("geos-chem")
}

#[rstest]
fn test_load_full_example_spec() {
    let app = Application::load(example_app_dir()).unwrap();

    assert_eq!(app.name, "geos-chem");
    assert_eq!(app.display_name, "GEOS-Chem");
    assert_eq!(app.metadata.maintainers.len(), 1);
    assert_eq!(app.variants.len(), 2);
    assert_eq!(app.get_variant("gchp").unwrap().parallelism, Parallelism::Mpi);

    let arch = app.get_architecture("c7a").unwrap();
    assert_eq!(arch.generation, "zen4");
    assert_eq!(arch.instance_types.len(), 3);
    assert_eq!(arch.math_library.as_ref().unwrap().name, "aocl");
    assert!(app.get_architecture("graviton4").unwrap().math_library.is_none());

    assert_eq!(app.compute.batch.max_vcpus, 256);
    assert_eq!(app.compute.batch.queues.len(), 2);
    assert_eq!(
        app.compute.batch.queues[1].compute_environments[0].environment_type,
        "on-demand"
    );

    assert_eq!(app.containers.variants["classic"].build_args["GC_VERSION"], "14.4.1");
    assert_eq!(app.storage.input.lifecycle.as_ref().unwrap().transition_ia, 30);
    assert_eq!(app.storage.scratch.volume_type, "gp3");
    assert_eq!(app.storage.shared.as_ref().unwrap().storage_type, "fsx-lustre");

    assert_eq!(app.get_environment("production").unwrap().config, "production.yaml");

    let cost = app.cost.as_ref().unwrap();
    assert_eq!(cost.baseline.architecture, "c7a");
    assert_eq!(cost.scaling_factors["graviton4"], 1.20);
    assert!(app.networking.as_ref().unwrap().efa);
    assert!(app.gpu.is_none());
}

#[rstest]
fn test_full_example_round_trips_through_yaml() {
    let app = Application::load(example_app_dir()).unwrap();

    let serialized = serde_yaml::to_string(&app).unwrap();
    let reloaded: Application = serde_yaml::from_str(&serialized).unwrap();
    assert_eq!(app, reloaded);
}
