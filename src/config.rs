use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RepoError, Result};
use crate::generator::ReleaseTarget;

/// Release-target configuration.
///
/// Loaded from `repogen.toml` when present, falling back to the built-in
/// release table. The list is always handed to the generator explicitly so
/// the same logic can run against arbitrary targets in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "release", default = "default_releases")]
    pub releases: Vec<ReleaseTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            releases: default_releases(),
        }
    }
}

impl Config {
    /// Resolution order: explicit `--config` path, then the `REPOGEN_CONFIG`
    /// environment variable, then `repogen.toml` under the repository root,
    /// then built-in defaults.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("REPOGEN_CONFIG").ok().map(PathBuf::from));

        let path = match explicit {
            Some(path) => path,
            None => root.join("repogen.toml"),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|err| RepoError::Config(format!("read config {}: {err}", path.display())))?;
        let config = toml::from_str(&raw)
            .map_err(|err| RepoError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(config)
    }
}

/// The stock release channels this repository publishes.
fn default_releases() -> Vec<ReleaseTarget> {
    vec![
        ReleaseTarget {
            release: "Matrix".to_string(),
            target_dir: "matrix".to_string(),
            runtime_version: Some("3.0.0".to_string()),
        },
        ReleaseTarget {
            release: "Leia".to_string(),
            target_dir: "leia".to_string(),
            runtime_version: Some("2.26.0".to_string()),
        },
    ]
}
