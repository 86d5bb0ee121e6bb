//! Named parameters

use serde::Deserialize;

use crate::types::{parse_type, ParamType};
use crate::AbiError;

/// A named, typed method or event parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name (may be empty)
    pub name: String,
    /// Parameter type
    pub kind: ParamType,
    /// Stored in a log topic rather than log data (events only)
    pub indexed: bool,
}

impl Param {
    /// Create a non-indexed parameter
    pub fn new(name: impl Into<String>, kind: ParamType) -> Self {
        Self {
            name: name.into(),
            kind,
            indexed: false,
        }
    }

    /// Create an indexed event parameter
    pub fn indexed(name: impl Into<String>, kind: ParamType) -> Self {
        Self {
            indexed: true,
            ..Self::new(name, kind)
        }
    }
}

/// Parameter as written in the schema, type string not yet parsed
#[derive(Debug, Deserialize)]
pub(crate) struct RawParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    indexed: bool,
}

impl TryFrom<RawParam> for Param {
    type Error = AbiError;

    fn try_from(raw: RawParam) -> Result<Self, Self::Error> {
        let kind = parse_type(&raw.kind).map_err(|e| {
            AbiError::Schema(format!("parameter '{}': {}", raw.name, e))
        })?;
        Ok(Param {
            name: raw.name,
            kind,
            indexed: raw.indexed,
        })
    }
}

/// Convert a schema parameter list
pub(crate) fn convert_params(raw: Vec<RawParam>) -> Result<Vec<Param>, AbiError> {
    raw.into_iter().map(Param::try_from).collect()
}

/// Types of `params`, in order
pub(crate) fn param_types(params: &[Param]) -> Vec<ParamType> {
    params.iter().map(|p| p.kind.clone()).collect()
}
