//! InMemoryResourceStore - テスト・デモ用のストア
//!
//! (kind, namespace, name) をキーに StoredResource を保持します。

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{ResourceKind, StoredResource};
use crate::ports::{ResourceStore, StoreError};

type Key = (ResourceKind, String, String);

/// InMemoryResourceStore は HashMap ベースのストア
///
/// # 使用例
/// ```ignore
/// let store = InMemoryResourceStore::new();
/// store.insert(ResourceKind::Task, "tekton-cluster-scoped-resources", task);
/// ```
#[derive(Default)]
pub struct InMemoryResourceStore {
    resources: RwLock<HashMap<Key, StoredResource>>,
    unavailable: Option<String>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `ready()` always fails with the given reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            resources: RwLock::default(),
            unavailable: Some(reason.into()),
        }
    }

    /// Insert (or replace) a resource under its `metadata.name`.
    pub fn insert(&self, kind: ResourceKind, namespace: impl Into<String>, resource: StoredResource) {
        let key = (kind, namespace.into(), resource.metadata.name.clone());
        self.resources
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, resource);
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn ready(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<StoredResource, StoreError> {
        let key = (kind, namespace.to_string(), name.to_string());
        self.resources
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind,
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}
