//! Contract interface descriptor
//!
//! An [`Interface`] is loaded once from a JSON schema and is read-only
//! afterwards. Methods and events live in name-ordered tables, so every
//! scan (selector resolution, clash reports) visits them in ascending
//! name order.

use std::collections::BTreeMap;
use std::io::Read;

use abikit_primitives::{H256, WORD_SIZE};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::args::parse_arguments;
use crate::detokenize::Detokenize;
use crate::event::Event;
use crate::method::{Constructor, Method};
use crate::param::{convert_params, RawParam};
use crate::types::Token;
use crate::AbiError;

/// One entry of the schema array
#[derive(Debug, Deserialize)]
struct FieldRecord {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    constant: bool,
    #[serde(default, rename = "stateMutability")]
    state_mutability: Option<String>,
    #[serde(default)]
    anonymous: bool,
    #[serde(default)]
    inputs: Vec<RawParam>,
    #[serde(default)]
    outputs: Vec<RawParam>,
}

impl FieldRecord {
    fn is_constant(&self) -> bool {
        self.constant || matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }
}

/// Methods, events and the constructor of one contract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interface {
    constructor: Option<Constructor>,
    methods: BTreeMap<String, Method>,
    events: BTreeMap<String, Event>,
}

impl Interface {
    /// Load from a JSON schema string
    pub fn load(json: &str) -> Result<Self, AbiError> {
        Self::from_slice(json.as_bytes())
    }

    /// Load from a JSON schema byte slice
    pub fn from_slice(json: &[u8]) -> Result<Self, AbiError> {
        let records: Vec<FieldRecord> = serde_json::from_slice(json)?;
        Self::from_records(records)
    }

    /// Load from a reader yielding a JSON schema
    pub fn from_reader(reader: impl Read) -> Result<Self, AbiError> {
        let records: Vec<FieldRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<FieldRecord>) -> Result<Self, AbiError> {
        let mut interface = Interface::default();

        for record in records {
            let constant = record.is_constant();
            match record.kind.as_str() {
                "constructor" => {
                    interface.constructor = Some(Constructor::new(convert_params(record.inputs)?));
                }
                "function" | "" => {
                    let method = Method {
                        name: record.name,
                        constant,
                        inputs: convert_params(record.inputs)?,
                        outputs: convert_params(record.outputs)?,
                    };
                    interface.insert_method(method);
                }
                "event" => {
                    let event = Event {
                        name: record.name,
                        anonymous: record.anonymous,
                        inputs: convert_params(record.inputs)?,
                    };
                    interface.insert_event(event);
                }
                other => {
                    trace!("Skipping schema entry '{}' of type '{}'", record.name, other);
                }
            }
        }

        interface.report_clashes();
        debug!(
            "Loaded interface: {} methods, {} events, constructor: {}",
            interface.methods.len(),
            interface.events.len(),
            interface.constructor.is_some()
        );
        Ok(interface)
    }

    pub(crate) fn insert_method(&mut self, method: Method) {
        let name = method.name.clone();
        if let Some(previous) = self.methods.insert(name, method) {
            debug!("Replacing method {}", previous.signature());
        }
    }

    pub(crate) fn insert_event(&mut self, event: Event) {
        let name = event.name.clone();
        if let Some(previous) = self.events.insert(name, event) {
            debug!("Replacing event {}", previous.signature());
        }
    }

    pub(crate) fn set_constructor(&mut self, constructor: Constructor) {
        self.constructor = Some(constructor);
    }

    pub(crate) fn report_clashes(&self) {
        for (selector, names) in self.ambiguous_selectors() {
            warn!(
                "Selector 0x{} is shared by methods: {}",
                hex::encode(selector),
                names.join(", ")
            );
        }
    }

    /// Constructor, if the schema declares one
    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    /// Method table, ordered by name
    pub fn methods(&self) -> &BTreeMap<String, Method> {
        &self.methods
    }

    /// Event table, ordered by name
    pub fn events(&self) -> &BTreeMap<String, Event> {
        &self.events
    }

    /// Method by name
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Event by name
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    /// Non-anonymous event whose topic is `topic`
    pub fn event_by_topic(&self, topic: &H256) -> Option<&Event> {
        self.events
            .values()
            .find(|e| !e.anonymous && e.topic() == *topic)
    }

    /// Resolve the method whose selector matches the first 4 bytes of `data`.
    ///
    /// Methods are scanned in name order and the first match wins, so a
    /// selector clash always resolves to the same method.
    pub fn method_by_selector(&self, data: &[u8]) -> Result<&Method, AbiError> {
        let id = data
            .get(..4)
            .ok_or(AbiError::SelectorTooShort(data.len()))?;
        self.methods
            .values()
            .find(|m| m.selector()[..] == *id)
            .ok_or_else(|| AbiError::NoSuchSelector(hex::encode(id)))
    }

    /// Selectors shared by more than one method, with the method names
    pub fn ambiguous_selectors(&self) -> Vec<([u8; 4], Vec<String>)> {
        let mut by_selector: BTreeMap<[u8; 4], Vec<String>> = BTreeMap::new();
        for method in self.methods.values() {
            by_selector
                .entry(method.selector())
                .or_default()
                .push(method.name.clone());
        }
        by_selector
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .collect()
    }

    /// Encode typed values for method `name`.
    ///
    /// An empty name encodes constructor arguments, without a selector.
    pub fn pack(&self, name: &str, values: &[Token]) -> Result<Bytes, AbiError> {
        if name.is_empty() {
            let empty = Constructor::default();
            let constructor = self.constructor.as_ref().unwrap_or(&empty);
            return Ok(Bytes::from(constructor.encode_input(values)?));
        }

        let method = self
            .method(name)
            .ok_or_else(|| AbiError::MethodNotFound(name.to_string()))?;
        Ok(Bytes::from(method.encode_input(values)?))
    }

    /// Parse `args` as the inputs of method `name` and encode the call
    pub fn encode(&self, name: &str, args: &str) -> Result<Bytes, AbiError> {
        let method = self
            .method(name)
            .ok_or_else(|| AbiError::MethodNotFound(name.to_string()))?;
        let values = parse_arguments(&method.input_types(), args)?;
        trace!("Encoding call to {}", method.signature());
        Ok(Bytes::from(method.encode_input(&values)?))
    }

    /// Parse `args` as constructor inputs and encode them
    pub fn encode_constructor(&self, args: &str) -> Result<Bytes, AbiError> {
        let types = self
            .constructor
            .as_ref()
            .map(Constructor::input_types)
            .unwrap_or_default();
        let values = parse_arguments(&types, args)?;
        self.pack("", &values)
    }

    /// Decode method output or event data for `name`.
    ///
    /// Methods take precedence over events of the same name.
    pub fn decode(&self, name: &str, data: &[u8]) -> Result<Vec<Token>, AbiError> {
        if data.is_empty() {
            return Err(AbiError::EmptyOutput);
        }

        if let Some(method) = self.methods.get(name) {
            if data.len() % WORD_SIZE != 0 {
                return Err(AbiError::MalformedOutput(data.len()));
            }
            return method.decode_output(data);
        }

        if let Some(event) = self.events.get(name) {
            return event.decode_data(data);
        }

        Err(AbiError::NoSuchEventOrMethod(name.to_string()))
    }

    /// Decode into a caller-chosen Rust type
    ///
    /// ```
    /// use abikit::{Interface, U256};
    ///
    /// let abi = Interface::load(
    ///     r#"[{"type":"function","name":"get","outputs":[{"type":"uint256"}]}]"#,
    /// ).unwrap();
    /// let mut data = [0u8; 32];
    /// data[31] = 7;
    /// let value: U256 = abi.unpack("get", &data).unwrap();
    /// assert_eq!(value, U256::from(7));
    /// ```
    pub fn unpack<T: Detokenize>(&self, name: &str, data: &[u8]) -> Result<T, AbiError> {
        T::from_tokens(self.decode(name, data)?)
    }

    /// Decode into an existing target. `target` is left untouched on failure.
    pub fn unpack_into<T: Detokenize>(
        &self,
        target: &mut T,
        name: &str,
        data: &[u8],
    ) -> Result<(), AbiError> {
        *target = self.unpack(name, data)?;
        Ok(())
    }

    /// Resolve the selector of `data` and decode the call arguments after it
    pub fn decode_call(&self, data: &[u8]) -> Result<(&Method, Vec<Token>), AbiError> {
        let method = self.method_by_selector(data)?;
        let args = data.get(4..).unwrap_or_default();
        Ok((method, method.decode_input(args)?))
    }
}
