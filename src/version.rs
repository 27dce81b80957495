//! Platform version constants and reporting

use serde::Serialize;

/// Platform version (semantic versioning)
pub const VERSION: &str = "1.0.0-dev";

/// API compatibility version. Bump on breaking API changes.
pub const API_VERSION: &str = "v1";

/// Minimum `app.yaml` platform_version supported
pub const MIN_APP_SPEC_VERSION: &str = "0.1.0";

/// Detailed version information for the `version` subcommand
#[derive(Clone, Debug, Serialize)]
pub struct VersionInfo {
    /// Platform version
    pub version: &'static str,
    /// API compatibility version
    pub api_version: &'static str,
    /// Git commit the binary was built from, when set at build time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<&'static str>,
    /// Build date, when set at build time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_date: Option<&'static str>,
}

impl VersionInfo {
    /// Version information for this build. Commit and date come from
    /// CLOUDHPC_GIT_COMMIT / CLOUDHPC_BUILD_DATE set by CI, if present.
    pub fn current() -> VersionInfo {
        VersionInfo {
            version: VERSION,
            api_version: API_VERSION,
            git_commit: option_env!("CLOUDHPC_GIT_COMMIT"),
            build_date: option_env!("CLOUDHPC_BUILD_DATE"),
        }
    }
}
