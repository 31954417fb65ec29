//! DirectoryResourceStore - ディレクトリ上の JSON ファイルを読むストア
//!
//! レイアウト: `<root>/<namespace>/<kind>s/<name>.json`
//!
//! 例: `<root>/tekton-cluster-scoped-resources/tasks/git-clone.json`

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

use crate::config::is_plain_segment;
use crate::domain::{ResourceKind, StoredResource};
use crate::ports::{ResourceStore, StoreError};

pub struct DirectoryResourceStore {
    root: PathBuf,
}

impl DirectoryResourceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a resource would live at. Rejects names that could escape the
    /// namespace directory.
    pub fn path_for(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<PathBuf, StoreError> {
        check_segment(namespace)?;
        check_segment(name)?;
        Ok(self
            .root
            .join(namespace)
            .join(format!("{}s", kind.as_str()))
            .join(format!("{name}.json")))
    }
}

fn check_segment(segment: &str) -> Result<(), StoreError> {
    if !is_plain_segment(segment) {
        return Err(StoreError::InvalidName(segment.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ResourceStore for DirectoryResourceStore {
    async fn ready(&self) -> Result<(), StoreError> {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StoreError::Unavailable(format!(
                "{} is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(StoreError::Unavailable(format!(
                "{}: {e}",
                self.root.display()
            ))),
        }
    }

    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<StoredResource, StoreError> {
        let path = self.path_for(kind, namespace, name)?;
        tracing::debug!(path = %path.display(), "reading resource file");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    kind,
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed { path, source })
    }
}
