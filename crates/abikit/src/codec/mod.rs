//! 32-byte-word value codec
//!
//! Static values occupy one head word each (fixed arrays of static
//! elements occupy `size` words). Dynamic values store an offset in the
//! head and their content in the tail, offsets being relative to the
//! start of the enclosing encoding.
//!
//! # Example
//!
//! ```rust
//! use abikit::codec::{pack_values, unpack_values};
//! use abikit::{ParamType, Token};
//!
//! let types = [ParamType::Uint(256), ParamType::Bool];
//! let values = [Token::uint(1000), Token::Bool(true)];
//! let data = pack_values(&types, &values).unwrap();
//! assert_eq!(data.len(), 64);
//! assert_eq!(unpack_values(&types, &data).unwrap(), values);
//! ```

mod decode;
mod encode;

pub use decode::unpack_values;
pub use encode::{encode_call, pack_values};
