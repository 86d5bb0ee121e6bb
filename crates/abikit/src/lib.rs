//! # abikit
//!
//! Contract interface descriptors and call-data encoding.
//!
//! ## Features
//!
//! - **Interface**: loads a JSON interface schema into method and event tables
//! - **Selectors**: 4-byte method ids, resolved from raw call data
//! - **Text arguments**: `"42 true [1 2 3]"` parsed against declared input types
//! - **Codec**: 32-byte-word head/tail encoding of typed values
//! - **Detokenize**: decoded values straight into Rust types
//!
//! ## Quick Start
//!
//! ```rust
//! use abikit::{Interface, Token};
//!
//! let abi = Interface::load(r#"[
//!     {"type":"function","name":"foo","inputs":[{"name":"x","type":"uint256"}],
//!      "outputs":[{"name":"","type":"bool"}]}
//! ]"#)?;
//!
//! // selector || 32-byte big-endian 42
//! let call = abi.encode("foo", "42")?;
//! assert_eq!(call.len(), 36);
//!
//! let (method, args) = abi.decode_call(&call)?;
//! assert_eq!(method.name, "foo");
//! assert_eq!(args, vec![Token::uint(42)]);
//!
//! let mut output = [0u8; 32];
//! output[31] = 1;
//! let ok: bool = abi.unpack("foo", &output)?;
//! assert!(ok);
//! # Ok::<(), abikit::AbiError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
mod builder;
pub mod codec;
mod detokenize;
mod error;
mod event;
mod interface;
mod method;
mod param;
mod stack;
mod types;

pub use builder::{erc20, InterfaceBuilder};
pub use detokenize::{Detokenize, FromToken};
pub use error::AbiError;
pub use event::Event;
pub use interface::Interface;
pub use method::{Constructor, Method};
pub use param::Param;
pub use stack::TokenStack;
pub use types::{parse_type, FixedBytes, ParamType, Token, I256, MAX_ARRAY_DEPTH};

// Re-export primitives for convenience
pub use abikit_primitives::{Address, H256, U256};
pub use bytes::Bytes;
