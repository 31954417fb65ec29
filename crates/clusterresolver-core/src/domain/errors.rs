//! Errors - エラー型と分類
//!
//! すべての失敗は呼び出し元（フレームワーク）へ値として返します。
//! リトライはフレームワーク側の方針であり、ここでは行いません。

use crate::domain::ResourceKind;
use crate::ports::StoreError;

/// ErrorKind は失敗の運用分類（ログ用）
///
/// - InvalidRequest: 呼び出し側がリクエストを直せば解決する
/// - Lookup: バックエンドのストアが失敗を返した
/// - Internal: 取得済みオブジェクトのシリアライズ失敗など（想定外）
/// - Initialization: 起動時の失敗。直すまでリクエストを処理できない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    Lookup,
    Internal,
    Initialization,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error(r#"require "kind" and "name" params"#)]
    MissingParameters,

    #[error(r#"require "{0}" param"#)]
    MissingParameter(&'static str),

    #[error(r#""{0}" param must not be empty"#)]
    EmptyParameter(&'static str),

    /// Raised by validation; holds the normalized value.
    #[error("unrecognized kind {0:?}, only task and pipeline are supported")]
    UnsupportedKind(String),

    /// Raised by resolution; holds the raw value.
    #[error("unrecognized cluster-scoped resource kind {0:?}")]
    UnrecognizedKind(String),

    #[error("error getting cluster-scoped {kind} {name:?}: {source}")]
    LookupFailed {
        kind: ResourceKind,
        name: String,
        #[source]
        source: StoreError,
    },

    #[error("unable to marshal resolved resource to json: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    #[error("resolver initialization failed: {0}")]
    Initialization(String),
}

impl ResolverError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolverError::MissingParameters
            | ResolverError::MissingParameter(_)
            | ResolverError::EmptyParameter(_)
            | ResolverError::UnsupportedKind(_)
            | ResolverError::UnrecognizedKind(_) => ErrorKind::InvalidRequest,
            ResolverError::LookupFailed { .. } => ErrorKind::Lookup,
            ResolverError::SerializationFailed(_) => ErrorKind::Internal,
            ResolverError::Initialization(_) => ErrorKind::Initialization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn messages_quote_parameter_names() {
        assert_eq!(
            ResolverError::MissingParameters.to_string(),
            r#"require "kind" and "name" params"#
        );
        assert_eq!(
            ResolverError::MissingParameter("kind").to_string(),
            r#"require "kind" param"#
        );
        assert_eq!(
            ResolverError::EmptyParameter("name").to_string(),
            r#""name" param must not be empty"#
        );
    }

    #[test]
    fn lookup_failed_keeps_store_error_as_source() {
        let err = ResolverError::LookupFailed {
            kind: ResourceKind::Pipeline,
            name: "missing".to_string(),
            source: StoreError::NotFound {
                kind: ResourceKind::Pipeline,
                namespace: "ns".to_string(),
                name: "missing".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with(r#"error getting cluster-scoped pipeline "missing""#));
        assert!(err.source().is_some());
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn kind_errors_are_invalid_requests() {
        assert_eq!(
            ResolverError::UnsupportedKind("x".into()).kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            ResolverError::UnrecognizedKind("X".into()).kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            ResolverError::Initialization("down".into()).kind(),
            ErrorKind::Initialization
        );
    }
}
