//! Contract account address (20 bytes)

use std::fmt;
use thiserror::Error;

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// 20-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from an exactly 20-byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() != Self::LEN {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Ok(Address(bytes))
    }

    /// Create address from a slice of any length.
    ///
    /// Shorter input is left-padded with zeros, longer input keeps its
    /// trailing 20 bytes.
    pub fn from_slice_truncating(slice: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        if slice.len() >= Self::LEN {
            bytes.copy_from_slice(&slice[slice.len() - Self::LEN..]);
        } else {
            bytes[Self::LEN - slice.len()..].copy_from_slice(slice);
        }
        Address(bytes)
    }

    /// Parse address from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = decode_hex(s, false)?;
        Self::from_slice(&bytes)
    }

    /// Parse address from a hex string of any length.
    ///
    /// An odd number of digits is read as if it had a leading zero. The
    /// decoded bytes are fitted with [`Address::from_slice_truncating`].
    pub fn from_hex_lenient(s: &str) -> Result<Self, AddressError> {
        let bytes = decode_hex(s, true)?;
        Ok(Self::from_slice_truncating(&bytes))
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

fn decode_hex(s: &str, pad_odd: bool) -> Result<Vec<u8>, AddressError> {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let result = if pad_odd && s.len() % 2 == 1 {
        hex::decode(format!("0{}", s))
    } else {
        hex::decode(s)
    };
    result.map_err(|e| AddressError::InvalidHex(e.to_string()))
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_from_hex() {
        let addr = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        assert!(!addr.is_zero());

        let addr2 = Address::from_hex("742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        assert_eq!(addr, addr2);
    }

    #[test]
    fn test_address_display() {
        let addr = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        assert_eq!(
            format!("{}", addr),
            "0x742d35cc6634c0532925a3b844bc9e7595f0ab3d"
        );
        assert_eq!(
            format!("{:?}", addr),
            "Address(0x742d35cc6634c0532925a3b844bc9e7595f0ab3d)"
        );
    }

    #[test]
    fn test_address_from_hex_wrong_length() {
        assert_eq!(
            Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB"),
            Err(AddressError::InvalidLength(19))
        );
        assert_eq!(Address::from_hex("0x"), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn test_address_from_hex_invalid_chars() {
        match Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aGGG") {
            Err(AddressError::InvalidHex(_)) => {}
            other => panic!("Expected InvalidHex error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_hex_lenient_short_input_left_pads() {
        let addr = Address::from_hex_lenient("0xdead").unwrap();
        assert_eq!(addr.as_bytes()[18], 0xde);
        assert_eq!(addr.as_bytes()[19], 0xad);
        assert!(addr.as_bytes()[..18].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_from_hex_lenient_odd_digits() {
        let addr = Address::from_hex_lenient("0x1").unwrap();
        assert_eq!(addr.as_bytes()[19], 0x01);

        let addr = Address::from_hex_lenient("abc").unwrap();
        assert_eq!(&addr.as_bytes()[18..], &[0x0a, 0xbc]);
    }

    #[test]
    fn test_from_hex_lenient_long_input_keeps_tail() {
        let addr = Address::from_hex_lenient(
            "0xffff742d35Cc6634C0532925a3b844Bc9e7595f0aB3d",
        )
        .unwrap();
        assert_eq!(
            addr,
            Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap()
        );
    }

    #[test]
    fn test_from_hex_lenient_rejects_garbage() {
        assert!(Address::from_hex_lenient("0xzz").is_err());
        assert!(Address::from_hex_lenient("hello").is_err());
    }

    #[test]
    fn test_from_hex_lenient_empty_is_zero() {
        assert_eq!(Address::from_hex_lenient("0x").unwrap(), Address::ZERO);
    }

    #[test]
    fn test_address_ordering_follows_bytes() {
        let low = Address::from_hex_lenient("0x01").unwrap();
        let high = Address::from_hex_lenient("0x02").unwrap();
        assert!(low < high);
    }
}
