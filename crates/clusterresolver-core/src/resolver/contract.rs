//! Resolver trait - フレームワークに登録されるプラグインの契約
//!
//! フレームワークは `initialize` を 1 回呼んだ後、リクエストごとに
//! `validate_params` → `resolve` の順で呼び出します。

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::{Params, ResolvedResource, ResolverError};

/// A pluggable resolver for one class of resolution requests.
///
/// # 使用例
/// ```ignore
/// let resolver = ClusterResolver::new(ResolverConfig::default(), Arc::new(store));
/// resolver.initialize().await?;
/// resolver.validate_params(&params)?;
/// let resolved = resolver.resolve(&params).await?;
/// ```
///
/// Implementations hold no request-scoped state, so one instance serves
/// concurrent requests.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Stable identifier used for registration and logs.
    fn name(&self) -> &str;

    /// Labels a request must carry to be routed to this resolver. Never empty.
    fn selector(&self) -> BTreeMap<String, String>;

    /// One-time setup before any request is served.
    async fn initialize(&self) -> Result<(), ResolverError>;

    /// Check request params without touching the backing store.
    fn validate_params(&self, params: &Params) -> Result<(), ResolverError>;

    /// Fetch the requested resource. Must behave sensibly even if
    /// `validate_params` was skipped.
    async fn resolve(&self, params: &Params) -> Result<ResolvedResource, ResolverError>;
}
