//! ResourceStore port - Task / Pipeline の取得元
//!
//! ResourceStore は (kind, namespace, name) で 1 件のリソースを返すだけの
//! インターフェースです。永続化・watch・キャッシュは実装側の責務です。
//!
//! # 実装
//! - **InMemoryResourceStore**: テスト・デモ用
//! - **DirectoryResourceStore**: `<root>/<namespace>/<kind>s/<name>.json`

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{ResourceKind, StoredResource};

/// StoreError はストア操作のエラー
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} {name:?} not found in namespace {namespace:?}")]
    NotFound {
        kind: ResourceKind,
        namespace: String,
        name: String,
    },

    #[error("invalid resource name {0:?}")]
    InvalidName(String),

    #[error("malformed resource at {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// ResourceStore は lookup-by-name のサービス
///
/// # Thread Safety
/// - `Send + Sync` を要求（resolver から並行に呼ばれる）
/// - 読み取り専用として扱う。内部の同期は実装側の責務
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// ストアが利用可能かを確認（初期化時に 1 回だけ呼ばれる）
    async fn ready(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// `namespace` から `kind` / `name` のリソースを取得
    async fn get(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
    ) -> Result<StoredResource, StoreError>;
}
