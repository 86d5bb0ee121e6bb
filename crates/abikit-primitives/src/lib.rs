//! # abikit-primitives
//!
//! Primitive value types shared by the abikit crates: 20-byte addresses,
//! 32-byte hashes and the 256-bit unsigned integer used for ABI words.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;

pub use address::{Address, AddressError};
pub use hash::{HashError, H256};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Size of one ABI word in bytes
pub const WORD_SIZE: usize = 32;
