//! Event descriptors

use abikit_primitives::H256;

use crate::codec::unpack_values;
use crate::method::canonical_signature;
use crate::param::{param_types, Param};
use crate::types::{ParamType, Token};
use crate::AbiError;

/// A contract event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name
    pub name: String,
    /// Anonymous events do not store their topic hash in the log
    pub anonymous: bool,
    /// Event parameters, indexed and non-indexed
    pub inputs: Vec<Param>,
}

impl Event {
    /// Create a non-anonymous event
    pub fn new(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            anonymous: false,
            inputs,
        }
    }

    /// Canonical signature, e.g. `Transfer(address,address,uint256)`
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }

    /// keccak256 of the signature, the first log topic of non-anonymous events
    pub fn topic(&self) -> H256 {
        abikit_crypto::keccak256(self.signature().as_bytes())
    }

    /// Types stored in the log data, i.e. the non-indexed inputs
    pub fn data_types(&self) -> Vec<ParamType> {
        let data: Vec<Param> = self.inputs.iter().filter(|p| !p.indexed).cloned().collect();
        param_types(&data)
    }

    /// Decode log data
    pub fn decode_data(&self, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        unpack_values(&self.data_types(), data)
    }
}
