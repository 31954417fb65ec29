//! Resource model: what the store hands back and what the resolver returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ANNOTATION_CONTENT_TYPE: &str = "content-type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Object metadata, mirroring the subset of Kubernetes `ObjectMeta` the
/// resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A Task or Pipeline object as stored in the lookup namespace.
///
/// `spec` is kept as opaque JSON; the resolver never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResource {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: serde_json::Value,
}

impl StoredResource {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        spec: serde_json::Value,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            metadata: ObjectMeta {
                name: name.into(),
                ..ObjectMeta::default()
            },
            spec,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.annotations.insert(key.into(), value.into());
        self
    }

    /// Keep only `apiVersion`, `kind`, `metadata.name` and `spec`.
    ///
    /// Drops cluster bookkeeping such as
    /// `kubectl.kubernetes.io/last-applied-configuration`.
    pub fn simplified(&self) -> Self {
        Self {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            metadata: ObjectMeta {
                name: self.metadata.name.clone(),
                ..ObjectMeta::default()
            },
            spec: self.spec.clone(),
        }
    }
}

/// The immutable result of a successful resolution: bytes plus annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    data: Vec<u8>,
    annotations: BTreeMap<String, String>,
}

impl ResolvedResource {
    /// Wrap a JSON payload; the content-type annotation is always set.
    pub fn json(data: Vec<u8>) -> Self {
        let mut annotations = BTreeMap::new();
        annotations.insert(
            ANNOTATION_CONTENT_TYPE.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );
        Self { data, annotations }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    pub fn content_type(&self) -> Option<&str> {
        self.annotations.get(ANNOTATION_CONTENT_TYPE).map(String::as_str)
    }
}
