//! ClusterResolver: fetches Tasks and Pipelines from a fixed namespace.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::contract::Resolver;
use crate::config::ResolverConfig;
use crate::domain::{Params, ResolutionRequest, ResolvedResource, ResolverError};
use crate::ports::ResourceStore;

/// Resolves `kind`/`name` params against the configured lookup namespace.
///
/// The store handle is injected at construction; nothing is mutated after
/// that, so `initialize` and `resolve` cannot race over it.
pub struct ClusterResolver {
    config: ResolverConfig,
    store: Arc<dyn ResourceStore>,
}

impl ClusterResolver {
    pub fn new(config: ResolverConfig, store: Arc<dyn ResourceStore>) -> Self {
        Self { config, store }
    }

    /// Fetch and serialize an already-parsed request.
    pub async fn resolve_request(
        &self,
        request: &ResolutionRequest,
    ) -> Result<ResolvedResource, ResolverError> {
        let kind = request.kind();
        let name = request.name();
        let namespace = self.config.lookup_namespace.as_str();

        tracing::debug!(%kind, name, namespace, "looking up cluster-scoped resource");
        let resource = self
            .store
            .get(kind, namespace, name)
            .await
            .map_err(|source| ResolverError::LookupFailed {
                kind,
                name: name.to_string(),
                source,
            })?;

        let resource = if self.config.simplify_resources {
            resource.simplified()
        } else {
            resource
        };
        let data = serde_json::to_vec(&resource).map_err(ResolverError::SerializationFailed)?;

        tracing::info!(%kind, name, bytes = data.len(), "resolved cluster-scoped resource");
        Ok(ResolvedResource::json(data))
    }
}

#[async_trait]
impl Resolver for ClusterResolver {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn selector(&self) -> BTreeMap<String, String> {
        self.config.selector.clone()
    }

    async fn initialize(&self) -> Result<(), ResolverError> {
        self.config
            .validate()
            .map_err(|e| ResolverError::Initialization(e.to_string()))?;
        self.store
            .ready()
            .await
            .map_err(|e| ResolverError::Initialization(e.to_string()))
    }

    fn validate_params(&self, params: &Params) -> Result<(), ResolverError> {
        ResolutionRequest::from_params(params).map(|_| ())
    }

    async fn resolve(&self, params: &Params) -> Result<ResolvedResource, ResolverError> {
        let request = ResolutionRequest::for_resolve(params)?;
        self.resolve_request(&request).await
    }
}
