//! ABI encoding

use abikit_primitives::{U256, WORD_SIZE};

use crate::types::{uint_fits, ParamType, Token};
use crate::AbiError;

/// Encode `tokens` against `types`.
///
/// Fails when the counts differ or a value does not match its declared type.
pub fn pack_values(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::Encode(format!(
            "Expected {} values, got {}",
            types.len(),
            tokens.len()
        )));
    }
    encode_params(types, tokens)
}

/// Encode function call (selector + params)
pub fn encode_call(
    selector: [u8; 4],
    types: &[ParamType],
    tokens: &[Token],
) -> Result<Vec<u8>, AbiError> {
    let mut result = selector.to_vec();
    result.extend(pack_values(types, tokens)?);
    Ok(result)
}

/// Encode parameters
fn encode_params(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    // Calculate head size (fixed part)
    let head_size = types
        .iter()
        .try_fold(0usize, |total, param_type| {
            head_length(param_type).and_then(|len| total.checked_add(len))
        })
        .ok_or_else(|| AbiError::Encode("Head size overflows".to_string()))?;

    // Sized by the tokens, not the declared types
    let mut head = Vec::new();
    let mut tail = Vec::new();

    for (param_type, token) in types.iter().zip(tokens.iter()) {
        if param_type.is_dynamic() {
            // Offset to tail
            let offset = head_size + tail.len();
            head.extend(encode_u256(&U256::from(offset)));
            tail.extend(encode_token(param_type, token)?);
        } else {
            head.extend(encode_token(param_type, token)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Get the head length for a type, or `None` when it overflows
pub(crate) fn head_length(param_type: &ParamType) -> Option<usize> {
    match param_type {
        ParamType::FixedArray(inner, size) if !inner.is_dynamic() => {
            head_length(inner)?.checked_mul(*size)
        }
        _ => Some(WORD_SIZE),
    }
}

/// Encode a single token
fn encode_token(param_type: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    match (param_type, token) {
        (ParamType::Address, Token::Address(addr)) => {
            let mut buf = [0u8; WORD_SIZE];
            buf[12..].copy_from_slice(addr.as_bytes());
            Ok(buf.to_vec())
        }
        (ParamType::Uint(bits), Token::Uint(value)) => {
            if !uint_fits(value, *bits) {
                return Err(AbiError::Encode(format!(
                    "{} does not fit in {}",
                    value, param_type
                )));
            }
            Ok(encode_u256(value))
        }
        (ParamType::Int(bits), Token::Int(value)) => {
            if !value.fits(*bits) {
                return Err(AbiError::Encode(format!(
                    "{} does not fit in {}",
                    value, param_type
                )));
            }
            Ok(value.to_word().to_vec())
        }
        (ParamType::Bool, Token::Bool(b)) => {
            let mut buf = [0u8; WORD_SIZE];
            buf[31] = u8::from(*b);
            Ok(buf.to_vec())
        }
        (ParamType::FixedBytes(size), Token::FixedBytes(data)) => {
            if data.len() != *size {
                return Err(AbiError::Encode(format!(
                    "bytes{} value has {} bytes",
                    size,
                    data.len()
                )));
            }
            let mut buf = [0u8; WORD_SIZE];
            buf[..data.len()].copy_from_slice(data.as_bytes());
            Ok(buf.to_vec())
        }
        (ParamType::Bytes, Token::Bytes(data)) => Ok(encode_bytes(data)),
        (ParamType::String, Token::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (ParamType::Array(inner), Token::Array(tokens)) => {
            let mut result = encode_u256(&U256::from(tokens.len()));
            let inner_types = vec![(**inner).clone(); tokens.len()];
            result.extend(encode_params(&inner_types, tokens)?);
            Ok(result)
        }
        (ParamType::FixedArray(inner, size), Token::FixedArray(tokens)) => {
            if tokens.len() != *size {
                return Err(AbiError::Encode(format!(
                    "{} expects {} elements, got {}",
                    param_type,
                    size,
                    tokens.len()
                )));
            }
            let inner_types = vec![(**inner).clone(); tokens.len()];
            encode_params(&inner_types, tokens)
        }
        _ => Err(AbiError::Encode(format!(
            "Cannot encode {} value '{}' as {}",
            token.kind(),
            token,
            param_type
        ))),
    }
}

/// Encode a U256 as 32 bytes
fn encode_u256(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; WORD_SIZE];
    value.to_big_endian(&mut bytes);
    bytes.to_vec()
}

/// Encode dynamic bytes
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_u256(&U256::from(data.len()));

    // Pad to 32 bytes
    let padded_len = data.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}
