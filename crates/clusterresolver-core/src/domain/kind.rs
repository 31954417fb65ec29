//! ResourceKind - 解決対象リソースの種類
//!
//! 文字列の `kind` パラメータはここで一度だけ正規化（trim + lowercase）され、
//! 以降は enum として扱われます。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of cluster-scoped resources this resolver can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Task,
    Pipeline,
}

/// Returned when a `kind` string is not one of the supported literals.
///
/// Carries the normalized value so callers can report what was compared.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource kind {0:?}")]
pub struct UnknownKind(pub String);

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Task, ResourceKind::Pipeline];

    /// Lowercase literal used in request params and storage paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Task => "task",
            ResourceKind::Pipeline => "pipeline",
        }
    }

    /// Trim and lowercase a raw `kind` value.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = Self::normalize(s);
        match normalized.as_str() {
            "task" => Ok(ResourceKind::Task),
            "pipeline" => Ok(ResourceKind::Pipeline),
            _ => Err(UnknownKind(normalized)),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
