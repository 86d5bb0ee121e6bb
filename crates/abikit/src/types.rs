//! ABI type definitions

use std::fmt;
use std::str::FromStr;

use abikit_primitives::{Address, U256, WORD_SIZE};

use crate::AbiError;

/// Typed ABI value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer (8-256 bits)
    Uint(U256),
    /// Signed integer (8-256 bits)
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes (1-32)
    FixedBytes(FixedBytes),
    /// UTF-8 string
    String(String),
    /// Dynamic array
    Array(Vec<Token>),
    /// Fixed-size array
    FixedArray(Vec<Token>),
}

impl Token {
    /// Create a uint256 from u128
    pub fn uint(value: u128) -> Self {
        Token::Uint(U256::from(value))
    }

    /// Create an int256 from i128
    pub fn int(value: i128) -> Self {
        Token::Int(I256::from_i128(value))
    }

    /// Create a string token
    pub fn string(s: impl Into<String>) -> Self {
        Token::String(s.into())
    }

    /// Short name of the value kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Address(_) => "address",
            Token::Uint(_) => "uint",
            Token::Int(_) => "int",
            Token::Bool(_) => "bool",
            Token::Bytes(_) => "bytes",
            Token::FixedBytes(_) => "fixed bytes",
            Token::String(_) => "string",
            Token::Array(_) => "array",
            Token::FixedArray(_) => "fixed array",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Address(addr) => write!(f, "{}", addr),
            Token::Uint(value) => write!(f, "{}", value),
            Token::Int(value) => write!(f, "{}", value),
            Token::Bool(b) => write!(f, "{}", b),
            Token::Bytes(data) => write!(f, "0x{}", hex::encode(data)),
            Token::FixedBytes(data) => write!(f, "0x{}", hex::encode(data.as_bytes())),
            Token::String(s) => f.write_str(s),
            Token::Array(tokens) | Token::FixedArray(tokens) => {
                f.write_str("[")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", token)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Signed 256-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256. Zero is never negative.
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            abs,
            negative: negative && !abs.is_zero(),
        }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self::new(U256::from(value.unsigned_abs()), value < 0)
    }

    /// Parse a base-10 integer with an optional leading '-'
    pub fn from_dec_str(s: &str) -> Result<Self, String> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let abs = parse_dec_u256(digits)?;
        Ok(Self::new(abs, negative))
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Whether the value is representable as a two's complement `bits`-bit integer
    pub fn fits(&self, bits: usize) -> bool {
        if bits == 0 || bits > 256 {
            return false;
        }
        let limit = U256::one() << (bits - 1);
        if self.negative {
            self.abs <= limit
        } else {
            self.abs < limit
        }
    }

    /// Two's complement big-endian word
    pub fn to_word(&self) -> [u8; WORD_SIZE] {
        let mut bytes = [0u8; WORD_SIZE];
        self.abs.to_big_endian(&mut bytes);
        if self.negative {
            negate(&mut bytes);
        }
        bytes
    }

    /// Read a two's complement big-endian word
    pub fn from_word(word: &[u8; WORD_SIZE]) -> Self {
        let negative = word[0] & 0x80 != 0;
        let mut bytes = *word;
        if negative {
            negate(&mut bytes);
        }
        Self::new(U256::from_big_endian(&bytes), negative)
    }
}

// Flip bits and add 1
fn negate(bytes: &mut [u8; WORD_SIZE]) {
    for b in bytes.iter_mut() {
        *b = !*b;
    }
    let mut carry = 1u16;
    for b in bytes.iter_mut().rev() {
        let sum = (*b as u16) + carry;
        *b = sum as u8;
        carry = sum >> 8;
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// Parse unsigned base-10 digits into a U256
pub(crate) fn parse_dec_u256(digits: &str) -> Result<U256, String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a base-10 integer".to_string());
    }
    U256::from_dec_str(digits).map_err(|_| "value exceeds 256 bits".to_string())
}

/// Whether `value` fits in an unsigned `bits`-bit integer
pub(crate) fn uint_fits(value: &U256, bits: usize) -> bool {
    bits >= 256 || (*value >> bits).is_zero()
}

/// Fixed-capacity byte buffer for `bytes1`..`bytes32` values
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBytes {
    len: usize,
    data: [u8; WORD_SIZE],
}

impl FixedBytes {
    /// Largest supported size
    pub const MAX_LEN: usize = WORD_SIZE;

    /// Copy a 1..=32 byte slice
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
            return None;
        }
        let mut data = [0u8; WORD_SIZE];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            len: bytes.len(),
            data,
        })
    }

    /// Place `src` at the end of a zeroed `size`-byte buffer.
    ///
    /// Returns `None` when `size` is outside 1..=32 or `src` is longer
    /// than `size`.
    pub fn right_aligned(src: &[u8], size: usize) -> Option<Self> {
        if size == 0 || size > Self::MAX_LEN || src.len() > size {
            return None;
        }
        let mut data = [0u8; WORD_SIZE];
        data[size - src.len()..size].copy_from_slice(src);
        Some(Self { len: size, data })
    }

    /// Declared size in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a valid buffer
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `len` meaningful bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl fmt::Debug for FixedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBytes(0x{})", hex::encode(self.as_bytes()))
    }
}

/// Solidity parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Address
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<ParamType>),
    /// Fixed-size array
    FixedArray(Box<ParamType>, usize),
}

impl ParamType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::FixedArray(inner, _) => inner.is_dynamic(),
            _ => false,
        }
    }

    /// Signed or unsigned integer
    pub fn is_integer(&self) -> bool {
        matches!(self, ParamType::Int(_) | ParamType::Uint(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Address => f.write_str("address"),
            ParamType::Uint(bits) => write!(f, "uint{}", bits),
            ParamType::Int(bits) => write!(f, "int{}", bits),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::FixedBytes(size) => write!(f, "bytes{}", size),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{}[]", inner),
            ParamType::FixedArray(inner, size) => write!(f, "{}[{}]", inner, size),
        }
    }
}

impl FromStr for ParamType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

/// Deepest array nesting accepted by [`parse_type`]
pub const MAX_ARRAY_DEPTH: usize = 8;

/// Parse a canonical type string (e.g., "uint256", "address", "bytes32[4]")
pub fn parse_type(s: &str) -> Result<ParamType, AbiError> {
    let full = s.trim();
    let mut base = full;

    // T[] / T[N] suffixes, read outermost first
    let mut suffixes = Vec::new();
    while let Some(body) = base.strip_suffix(']') {
        if suffixes.len() == MAX_ARRAY_DEPTH {
            return Err(AbiError::InvalidType(format!(
                "array nesting deeper than {} levels",
                MAX_ARRAY_DEPTH
            )));
        }
        let open = body
            .rfind('[')
            .ok_or_else(|| AbiError::InvalidType(format!("unbalanced brackets in '{}'", full)))?;
        let size = &body[open + 1..];
        let size = if size.is_empty() {
            None
        } else {
            let n = parse_size(size).filter(|n| *n > 0).ok_or_else(|| {
                AbiError::InvalidType(format!("invalid array size in '{}'", full))
            })?;
            Some(n)
        };
        suffixes.push(size);
        base = body[..open].trim_end();
    }

    let mut param_type = parse_elementary(base)?;
    for size in suffixes.into_iter().rev() {
        param_type = match size {
            None => ParamType::Array(Box::new(param_type)),
            Some(n) => ParamType::FixedArray(Box::new(param_type), n),
        };
    }
    Ok(param_type)
}

fn parse_elementary(s: &str) -> Result<ParamType, AbiError> {
    match s {
        "address" => return Ok(ParamType::Address),
        "bool" => return Ok(ParamType::Bool),
        "string" => return Ok(ParamType::String),
        "bytes" => return Ok(ParamType::Bytes),
        _ => {}
    }

    // uint<N>
    if let Some(rest) = s.strip_prefix("uint") {
        return parse_bits(rest, s).map(ParamType::Uint);
    }

    // int<N>
    if let Some(rest) = s.strip_prefix("int") {
        return parse_bits(rest, s).map(ParamType::Int);
    }

    // bytes<N>
    if let Some(rest) = s.strip_prefix("bytes") {
        return parse_size(rest)
            .filter(|n| (1..=32).contains(n))
            .map(ParamType::FixedBytes)
            .ok_or_else(|| AbiError::InvalidType(format!("invalid bytes size in '{}'", s)));
    }

    Err(AbiError::InvalidType(format!("unknown type '{}'", s)))
}

fn parse_size(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_bits(rest: &str, full: &str) -> Result<usize, AbiError> {
    if rest.is_empty() {
        return Ok(256);
    }
    parse_size(rest)
        .filter(|bits| *bits > 0 && *bits <= 256 && bits % 8 == 0)
        .ok_or_else(|| AbiError::InvalidType(format!("invalid integer size in '{}'", full)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_is_dynamic() {
        assert!(!ParamType::Address.is_dynamic());
        assert!(!ParamType::Uint(256).is_dynamic());
        assert!(!ParamType::Bool.is_dynamic());
        assert!(!ParamType::FixedBytes(32).is_dynamic());
        assert!(!ParamType::FixedArray(Box::new(ParamType::Uint(8)), 3).is_dynamic());

        assert!(ParamType::Bytes.is_dynamic());
        assert!(ParamType::String.is_dynamic());
        assert!(ParamType::Array(Box::new(ParamType::Uint(256))).is_dynamic());
        assert!(ParamType::FixedArray(Box::new(ParamType::String), 2).is_dynamic());
    }

    #[test]
    fn test_parse_type_scalars() {
        assert_eq!(parse_type("address").unwrap(), ParamType::Address);
        assert_eq!(parse_type("uint256").unwrap(), ParamType::Uint(256));
        assert_eq!(parse_type("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(parse_type("int").unwrap(), ParamType::Int(256));
        assert_eq!(parse_type("uint8").unwrap(), ParamType::Uint(8));
        assert_eq!(parse_type("int64").unwrap(), ParamType::Int(64));
        assert_eq!(parse_type("bool").unwrap(), ParamType::Bool);
        assert_eq!(parse_type("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(parse_type("bytes32").unwrap(), ParamType::FixedBytes(32));
        assert_eq!(parse_type(" string ").unwrap(), ParamType::String);
    }

    #[test]
    fn test_parse_type_arrays() {
        assert_eq!(
            parse_type("uint256[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)))
        );
        assert_eq!(
            parse_type("int8[3]").unwrap(),
            ParamType::FixedArray(Box::new(ParamType::Int(8)), 3)
        );
        // Outermost suffix is the last one
        assert_eq!(
            parse_type("uint8[2][]").unwrap(),
            ParamType::Array(Box::new(ParamType::FixedArray(Box::new(ParamType::Uint(8)), 2)))
        );
    }

    #[test]
    fn test_parse_type_nesting_depth() {
        let nested = format!("uint8{}", "[]".repeat(MAX_ARRAY_DEPTH));
        assert_eq!(parse_type(&nested).unwrap().to_string(), nested);

        let too_deep = format!("uint8{}", "[]".repeat(MAX_ARRAY_DEPTH + 1));
        assert!(matches!(parse_type(&too_deep), Err(AbiError::InvalidType(_))));

        let absurd = format!("uint8{}", "[]".repeat(200_000));
        assert!(matches!(parse_type(&absurd), Err(AbiError::InvalidType(_))));
    }

    #[test]
    fn test_parse_type_rejects() {
        for bad in [
            "uint7", "uint264", "int0", "bytes0", "bytes33", "uint+8", "tuple", "uint256[0]",
            "uint256[x]", "uint256]", "", "function",
        ] {
            assert!(
                matches!(parse_type(bad), Err(AbiError::InvalidType(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_display_is_canonical() {
        for s in ["uint256", "int8", "address", "bool", "string", "bytes", "bytes4", "uint256[]", "int16[4]"] {
            assert_eq!(parse_type(s).unwrap().to_string(), s);
        }
        assert_eq!(parse_type("uint").unwrap().to_string(), "uint256");
        assert_eq!(parse_type("int[]").unwrap().to_string(), "int256[]");
    }

    #[test]
    fn test_i256_from_i128() {
        let positive = I256::from_i128(100);
        assert!(!positive.negative);
        assert_eq!(positive.abs, U256::from(100));

        let negative = I256::from_i128(-100);
        assert!(negative.negative);
        assert_eq!(negative.abs, U256::from(100));

        assert!(I256::from_i128(0).is_zero());
    }

    #[test]
    fn test_i256_from_dec_str() {
        assert_eq!(I256::from_dec_str("-42").unwrap(), I256::from_i128(-42));
        assert_eq!(I256::from_dec_str("42").unwrap(), I256::from_i128(42));
        assert!(!I256::from_dec_str("-0").unwrap().negative);
        assert!(I256::from_dec_str("").is_err());
        assert!(I256::from_dec_str("-").is_err());
        assert!(I256::from_dec_str("+5").is_err());
        assert!(I256::from_dec_str("4x").is_err());
    }

    #[test]
    fn test_i256_fits() {
        assert!(I256::from_i128(127).fits(8));
        assert!(!I256::from_i128(128).fits(8));
        assert!(I256::from_i128(-128).fits(8));
        assert!(!I256::from_i128(-129).fits(8));
        assert!(I256::new(U256::one() << 255usize, true).fits(256));
        assert!(!I256::new(U256::one() << 255usize, false).fits(256));
    }

    #[test]
    fn test_i256_word_roundtrip() {
        assert_eq!(I256::from_i128(-1).to_word(), [0xff; 32]);
        for v in [-1i128, 1, 0, -255, 1 << 100, -(1 << 100)] {
            let value = I256::from_i128(v);
            assert_eq!(I256::from_word(&value.to_word()), value);
        }
    }

    #[test]
    fn test_uint_fits() {
        assert!(uint_fits(&U256::from(255), 8));
        assert!(!uint_fits(&U256::from(256), 8));
        assert!(uint_fits(&U256::MAX, 256));
    }

    #[test]
    fn test_fixed_bytes_right_aligned() {
        let fb = FixedBytes::right_aligned(b"ab", 4).unwrap();
        assert_eq!(fb.as_bytes(), &[0, 0, b'a', b'b']);
        assert_eq!(fb.len(), 4);

        assert_eq!(FixedBytes::right_aligned(b"abcd", 4).unwrap().as_bytes(), b"abcd");
        assert!(FixedBytes::right_aligned(b"abcde", 4).is_none());
        assert!(FixedBytes::right_aligned(b"", 33).is_none());
        assert!(FixedBytes::right_aligned(b"", 0).is_none());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::uint(42).to_string(), "42");
        assert_eq!(Token::int(-7).to_string(), "-7");
        assert_eq!(Token::Bytes(vec![0xde, 0xad]).to_string(), "0xdead");
        assert_eq!(
            Token::Array(vec![Token::uint(1), Token::uint(2)]).to_string(),
            "[1, 2]"
        );
    }
}
