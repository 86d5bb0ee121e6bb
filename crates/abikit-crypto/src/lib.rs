//! # abikit-crypto
//!
//! Hashing used by the ABI layer:
//!
//! - Keccak-256 hashing
//! - 4-byte function selectors

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, selector};
