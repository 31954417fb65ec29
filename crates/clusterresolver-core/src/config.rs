//! Resolver configuration (optional TOML file).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESOLVER_NAME: &str = "clusterresolver";
pub const DEFAULT_LOOKUP_NAMESPACE: &str = "tekton-cluster-scoped-resources";
pub const LABEL_KEY_RESOLVER_TYPE: &str = "resolution.tekton.dev/type";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("selector must contain at least one label")]
    EmptySelector,

    #[error("lookup_namespace must not be empty")]
    EmptyNamespace,

    #[error("lookup_namespace {0:?} must be a single path segment")]
    InvalidNamespace(String),
}

/// A name that can be used as one directory component: non-empty, no
/// separators or NUL, no leading `.`.
pub fn is_plain_segment(segment: &str) -> bool {
    !(segment.is_empty()
        || segment.starts_with('.')
        || segment.contains(['/', '\\'])
        || segment.contains('\0'))
}

/// Everything about the resolver that is fixed at startup.
///
/// Missing fields fall back to the defaults below, so an empty file is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Name reported to the framework for registration and logs.
    pub name: String,
    /// Labels a request must carry to be routed here.
    pub selector: BTreeMap<String, String>,
    /// The only namespace lookups are made in.
    pub lookup_namespace: String,
    /// Strip metadata other than `name` before serializing.
    pub simplify_resources: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let mut selector = BTreeMap::new();
        selector.insert(
            LABEL_KEY_RESOLVER_TYPE.to_string(),
            DEFAULT_RESOLVER_NAME.to_string(),
        );
        Self {
            name: DEFAULT_RESOLVER_NAME.to_string(),
            selector,
            lookup_namespace: DEFAULT_LOOKUP_NAMESPACE.to_string(),
            simplify_resources: false,
        }
    }
}

impl ResolverConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.is_empty() {
            return Err(ConfigError::EmptySelector);
        }
        if self.lookup_namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        if !is_plain_segment(&self.lookup_namespace) {
            return Err(ConfigError::InvalidNamespace(self.lookup_namespace.clone()));
        }
        Ok(())
    }
}
