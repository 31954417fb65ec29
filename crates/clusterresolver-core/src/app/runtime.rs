//! App runtime: drives one resolver through validate → resolve.
//!
//! This is the smallest host that can exercise the resolver contract. It
//! does not queue, retry, or route between resolvers.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{ErrorKind, Params, ResolvedResource, ResolverError};
use crate::resolver::Resolver;

/// An initialized resolver ready to serve requests.
///
/// Built by [`AppBuilder`](super::AppBuilder). Immutable after build, so it
/// can be shared behind an `Arc` across tasks.
pub struct App {
    resolver: Arc<dyn Resolver>,
    init_error: Option<String>,
}

impl App {
    pub(crate) fn new(resolver: Arc<dyn Resolver>, init_error: Option<String>) -> Self {
        Self {
            resolver,
            init_error,
        }
    }

    /// `false` if `initialize` failed; every request will then fail.
    pub fn is_ready(&self) -> bool {
        self.init_error.is_none()
    }

    /// Whether a request carrying `labels` should be sent to this resolver:
    /// every selector pair must be present with the same value.
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.resolver
            .selector()
            .iter()
            .all(|(k, v)| labels.get(k) == Some(v))
    }

    /// Validate then resolve one request.
    pub async fn handle(&self, params: &Params) -> Result<ResolvedResource, ResolverError> {
        if let Some(msg) = &self.init_error {
            return Err(ResolverError::Initialization(msg.clone()));
        }

        let result = match self.resolver.validate_params(params) {
            Ok(()) => self.resolver.resolve(params).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            let class = e.kind();
            if class == ErrorKind::InvalidRequest {
                tracing::info!(resolver = self.resolver.name(), error = %e, "rejected resolution request");
            } else {
                tracing::warn!(resolver = self.resolver.name(), ?class, error = %e, "resolution failed");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppBuilder;
    use crate::config::ResolverConfig;
    use crate::impls::InMemoryResourceStore;
    use crate::resolver::ClusterResolver;

    async fn app_with(store: InMemoryResourceStore) -> App {
        let resolver = ClusterResolver::new(ResolverConfig::default(), Arc::new(store));
        AppBuilder::new(Arc::new(resolver)).build().await.unwrap()
    }

    #[tokio::test]
    async fn failed_initialization_fails_every_request() {
        let app = app_with(InMemoryResourceStore::unavailable("cluster unreachable")).await;
        assert!(!app.is_ready());

        let params: Params = [("kind", "task"), ("name", "n1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for _ in 0..2 {
            let err = app.handle(&params).await.unwrap_err();
            assert!(matches!(&err, ResolverError::Initialization(msg) if msg.contains("cluster unreachable")));
        }
    }

    #[tokio::test]
    async fn validation_failure_short_circuits() {
        let app = app_with(InMemoryResourceStore::new()).await;
        let err = app.handle(&Params::new()).await.unwrap_err();
        assert!(matches!(err, ResolverError::MissingParameters));
    }

    #[tokio::test]
    async fn matches_requires_every_selector_label() {
        let app = app_with(InMemoryResourceStore::new()).await;

        let mut labels = BTreeMap::new();
        assert!(!app.matches(&labels));

        labels.insert("resolution.tekton.dev/type".to_string(), "git".to_string());
        assert!(!app.matches(&labels));

        labels.insert(
            "resolution.tekton.dev/type".to_string(),
            "clusterresolver".to_string(),
        );
        labels.insert("extra".to_string(), "ignored".to_string());
        assert!(app.matches(&labels));
    }
}
