//! Ports - 抽象化レイヤー
//!
//! resolver が外部システムに依存する箇所をここで trait として定義します。
//! 本物のオブジェクトストア（クラスタ API など）はホスト側が実装を注入します。

pub mod resource_store;

pub use self::resource_store::{ResourceStore, StoreError};
