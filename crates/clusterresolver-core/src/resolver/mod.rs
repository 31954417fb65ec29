//! Resolver - プラグイン契約とその実装
//!
//! - **contract**: `Resolver` trait（name / selector / initialize / validate_params / resolve）
//! - **cluster**: 固定 namespace から Task / Pipeline を返す `ClusterResolver`

pub mod cluster;
pub mod contract;

pub use self::cluster::ClusterResolver;
pub use self::contract::Resolver;
