//! AppBuilder - resolver の登録と起動時検証
//!
//! # Fail-fast 設計
//! - selector が空の resolver はルーティングできないので build() で拒否
//! - initialize() は build() の中で 1 回だけ await する
//!   （以降の handle() と並行に走ることはない）

use std::sync::Arc;

use super::runtime::App;
use crate::resolver::Resolver;

/// AppBuilder は App を構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new(Arc::new(resolver)).build().await?;
/// let resolved = app.handle(&params).await?;
/// ```
pub struct AppBuilder {
    resolver: Arc<dyn Resolver>,
}

/// BuildError は App 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("resolver {0:?} has an empty selector and can never be routed to")]
    EmptySelector(String),
}

impl AppBuilder {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// 検証して initialize() を実行
    ///
    /// initialize() の失敗は Err にせず App に記録します。
    /// その App へのリクエストはすべて同じエラーで失敗します。
    pub async fn build(self) -> Result<App, BuildError> {
        let name = self.resolver.name().to_string();
        if self.resolver.selector().is_empty() {
            return Err(BuildError::EmptySelector(name));
        }

        let init_error = match self.resolver.initialize().await {
            Ok(()) => {
                tracing::info!(resolver = %name, "resolver initialized");
                None
            }
            Err(e) => {
                tracing::warn!(resolver = %name, error = %e, "resolver initialization failed");
                Some(e.to_string())
            }
        };

        Ok(App::new(self.resolver, init_error))
    }
}
