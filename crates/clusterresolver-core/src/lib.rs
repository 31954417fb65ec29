//! clusterresolver-core
//!
//! A resolver that serves Tasks and Pipelines from a single, fixed
//! namespace as JSON payloads.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（kind, params, resource, errors）
//! - **ports**: 抽象化レイヤー（ResourceStore）
//! - **resolver**: プラグイン契約（Resolver trait）と ClusterResolver
//! - **impls**: ストア実装（InMemory / Directory）
//! - **app**: 起動と validate → resolve のドライバ（AppBuilder, App）
//! - **config**: 設定（ResolverConfig）

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod resolver;

pub use app::{App, AppBuilder, BuildError};
pub use config::{ConfigError, ResolverConfig};
pub use domain::{Params, ResolvedResource, ResolverError, ResourceKind};
pub use resolver::{ClusterResolver, Resolver};
