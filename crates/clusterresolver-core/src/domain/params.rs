//! Request parameters and the typed request parsed from them.

use std::collections::HashMap;

use super::errors::ResolverError;
use super::kind::{ResourceKind, UnknownKind};

/// Untyped parameters as supplied by the resolution framework.
pub type Params = HashMap<String, String>;

pub const PARAM_KIND: &str = "kind";
pub const PARAM_NAME: &str = "name";

/// A request that has passed the parameter schema.
///
/// Built once from `Params`; `resolve` dispatches on `kind` without
/// comparing strings again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    kind: ResourceKind,
    name: String,
}

impl ResolutionRequest {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Apply the parameter schema in order, failing on the first violation.
    ///
    /// 1. no params at all
    /// 2. `kind` absent
    /// 3. `kind` not task/pipeline after trim + lowercase
    /// 4. `name` absent
    /// 5. `name` blank
    ///
    /// Unknown keys are ignored.
    pub fn from_params(params: &Params) -> Result<Self, ResolverError> {
        Self::parse(params).map_err(|e| match e {
            ParseError::Kind(UnknownKind(normalized)) => ResolverError::UnsupportedKind(normalized),
            ParseError::Other(e) => e,
        })
    }

    /// Same schema as [`from_params`](Self::from_params), but an unknown kind
    /// is reported with the raw value as `UnrecognizedKind`.
    ///
    /// Used on the resolve path, where validation may have been skipped.
    pub fn for_resolve(params: &Params) -> Result<Self, ResolverError> {
        Self::parse(params).map_err(|e| match e {
            ParseError::Kind(_) => ResolverError::UnrecognizedKind(
                params.get(PARAM_KIND).cloned().unwrap_or_default(),
            ),
            ParseError::Other(e) => e,
        })
    }

    fn parse(params: &Params) -> Result<Self, ParseError> {
        if params.is_empty() {
            return Err(ParseError::Other(ResolverError::MissingParameters));
        }
        let raw_kind = params
            .get(PARAM_KIND)
            .ok_or(ParseError::Other(ResolverError::MissingParameter(PARAM_KIND)))?;
        let kind: ResourceKind = raw_kind.parse().map_err(ParseError::Kind)?;

        let name = params
            .get(PARAM_NAME)
            .ok_or(ParseError::Other(ResolverError::MissingParameter(PARAM_NAME)))?;
        if name.trim().is_empty() {
            return Err(ParseError::Other(ResolverError::EmptyParameter(PARAM_NAME)));
        }

        Ok(Self::new(kind, name.clone()))
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

enum ParseError {
    Kind(UnknownKind),
    Other(ResolverError),
}
