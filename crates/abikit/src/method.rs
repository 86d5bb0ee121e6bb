//! Method and constructor descriptors

use crate::codec::{encode_call, pack_values, unpack_values};
use crate::param::{param_types, Param};
use crate::types::{ParamType, Token};
use crate::AbiError;

/// A callable contract method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Declared constant (view) method
    pub constant: bool,
    /// Input parameters
    pub inputs: Vec<Param>,
    /// Output parameters
    pub outputs: Vec<Param>,
}

impl Method {
    /// Create a non-constant method
    pub fn new(name: impl Into<String>, inputs: Vec<Param>, outputs: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            constant: false,
            inputs,
            outputs,
        }
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }

    /// First 4 bytes of keccak256 of the signature. Recomputed on every call.
    pub fn selector(&self) -> [u8; 4] {
        abikit_crypto::selector(&self.signature())
    }

    /// Input types in order
    pub fn input_types(&self) -> Vec<ParamType> {
        param_types(&self.inputs)
    }

    /// Output types in order
    pub fn output_types(&self) -> Vec<ParamType> {
        param_types(&self.outputs)
    }

    /// Selector followed by the encoded arguments
    pub fn encode_input(&self, values: &[Token]) -> Result<Vec<u8>, AbiError> {
        encode_call(self.selector(), &self.input_types(), values)
    }

    /// Decode call arguments (selector already stripped)
    pub fn decode_input(&self, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        unpack_values(&self.input_types(), data)
    }

    /// Decode return data
    pub fn decode_output(&self, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        unpack_values(&self.output_types(), data)
    }
}

/// Contract constructor; has inputs but no name or selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constructor {
    /// Input parameters
    pub inputs: Vec<Param>,
}

impl Constructor {
    /// Create a constructor
    pub fn new(inputs: Vec<Param>) -> Self {
        Self { inputs }
    }

    /// Input types in order
    pub fn input_types(&self) -> Vec<ParamType> {
        param_types(&self.inputs)
    }

    /// Encoded arguments, no selector
    pub fn encode_input(&self, values: &[Token]) -> Result<Vec<u8>, AbiError> {
        pack_values(&self.input_types(), values)
    }
}

/// `name(type1,type2,...)`
pub(crate) fn canonical_signature(name: &str, params: &[Param]) -> String {
    let types: Vec<String> = params.iter().map(|p| p.kind.to_string()).collect();
    format!("{}({})", name, types.join(","))
}
