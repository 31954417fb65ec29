//! App - アプリケーション層
//!
//! resolver をホストのライフサイクル（initialize 1 回 → validate → resolve）に
//! 載せる最小のドライバです。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: 起動時検証と initialize
//! - **App**: リクエストごとの validate → resolve

pub mod builder;
pub mod runtime;

pub use self::builder::{AppBuilder, BuildError};
pub use self::runtime::App;
