//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryResourceStore**: テスト・デモ用
//! - **DirectoryResourceStore**: ローカルディレクトリの JSON を読む（CLI 用）
//!
//! クラスタ API を叩く本番用ストアはホスト側が `ResourceStore` を実装して注入します。

pub mod dir_store;
pub mod inmem_store;

pub use self::dir_store::DirectoryResourceStore;
pub use self::inmem_store::InMemoryResourceStore;
