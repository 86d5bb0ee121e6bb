//! ABI decoding

use abikit_primitives::{Address, U256, WORD_SIZE};

use super::encode::head_length;
use crate::types::{FixedBytes, ParamType, Token, I256};
use crate::AbiError;

/// Decode tokens from ABI-encoded data
pub fn unpack_values(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(types.len());
    // A well-formed encoding gives every decoded value its own word
    let mut budget = data.len() / WORD_SIZE;

    for param_type in types {
        let (token, consumed) = decode_token(param_type, data, offset, &mut budget)?;
        tokens.push(token);
        offset += consumed;
    }

    Ok(tokens)
}

/// Decode a single token at `offset`, returning it and the head bytes consumed
fn decode_token(
    param_type: &ParamType,
    data: &[u8],
    offset: usize,
    budget: &mut usize,
) -> Result<(Token, usize), AbiError> {
    if let ParamType::FixedArray(inner, size) = param_type {
        if !inner.is_dynamic() {
            // Inline elements; the words are charged per element
            let consumed = checked_head_length(param_type)?;
            let end = offset
                .checked_add(consumed)
                .ok_or_else(|| AbiError::Decode(format!("Offset {} overflows", offset)))?;
            check_length(data, end)?;

            let mut tokens = Vec::with_capacity(*size);
            let mut inner_offset = offset;
            for _ in 0..*size {
                let (token, used) = decode_token(inner, data, inner_offset, budget)?;
                tokens.push(token);
                inner_offset += used;
            }
            return Ok((Token::FixedArray(tokens), consumed));
        }
    }

    charge(budget, 1)?;

    if param_type.is_dynamic() {
        let tail_offset = read_usize(data, offset)?;
        let tail = data.get(tail_offset..).ok_or_else(|| {
            AbiError::Decode(format!(
                "Offset {} points past the end of {} bytes",
                tail_offset,
                data.len()
            ))
        })?;
        return Ok((decode_tail(param_type, tail, budget)?, WORD_SIZE));
    }

    let word = read_word(data, offset)?;
    let token = match param_type {
        ParamType::Address => Token::Address(Address::from_slice_truncating(&word[12..])),
        ParamType::Uint(_) => Token::Uint(U256::from_big_endian(&word)),
        ParamType::Int(_) => Token::Int(I256::from_word(&word)),
        ParamType::Bool => Token::Bool(word[31] != 0),
        ParamType::FixedBytes(size) => {
            let value = word
                .get(..*size)
                .and_then(FixedBytes::from_slice)
                .ok_or_else(|| AbiError::Decode(format!("Invalid fixed bytes size {}", size)))?;
            Token::FixedBytes(value)
        }
        // Arrays and dynamic types handled above
        ParamType::Bytes | ParamType::String | ParamType::Array(_) | ParamType::FixedArray(..) => {
            return Err(AbiError::Decode(format!(
                "Unexpected type {} in head",
                param_type
            )))
        }
    };
    Ok((token, WORD_SIZE))
}

/// Decode the content of a dynamic value located at the start of `tail`
fn decode_tail(param_type: &ParamType, tail: &[u8], budget: &mut usize) -> Result<Token, AbiError> {
    match param_type {
        ParamType::Bytes => Ok(Token::Bytes(decode_bytes(tail, budget)?)),
        ParamType::String => {
            let bytes = decode_bytes(tail, budget)?;
            let s = String::from_utf8(bytes)
                .map_err(|e| AbiError::Decode(format!("Invalid UTF-8: {}", e)))?;
            Ok(Token::String(s))
        }
        ParamType::Array(inner) => {
            let len = read_usize(tail, 0)?;
            let body = &tail[WORD_SIZE..];
            check_elements(inner, len, body)?;
            let mut tokens = Vec::with_capacity(len);
            let mut offset = 0;
            for _ in 0..len {
                let (token, consumed) = decode_token(inner, body, offset, budget)?;
                tokens.push(token);
                offset += consumed;
            }
            Ok(Token::Array(tokens))
        }
        ParamType::FixedArray(inner, size) => {
            check_elements(inner, *size, tail)?;
            let mut tokens = Vec::with_capacity(*size);
            let mut offset = 0;
            for _ in 0..*size {
                let (token, consumed) = decode_token(inner, tail, offset, budget)?;
                tokens.push(token);
                offset += consumed;
            }
            Ok(Token::FixedArray(tokens))
        }
        _ => Err(AbiError::Decode(format!(
            "Unexpected static type {}",
            param_type
        ))),
    }
}

/// Check that `count` element heads of type `inner` fit in `data`
fn check_elements(inner: &ParamType, count: usize, data: &[u8]) -> Result<(), AbiError> {
    let required = checked_head_length(inner)?
        .checked_mul(count)
        .ok_or_else(|| AbiError::Decode(format!("Array length {} overflows", count)))?;
    if required > data.len() {
        return Err(AbiError::Decode(format!(
            "Array length {} exceeds available data",
            count
        )));
    }
    Ok(())
}

fn checked_head_length(param_type: &ParamType) -> Result<usize, AbiError> {
    head_length(param_type)
        .ok_or_else(|| AbiError::Decode(format!("Head size of {} overflows", param_type)))
}

/// Spend `words` of the decode budget
fn charge(budget: &mut usize, words: usize) -> Result<(), AbiError> {
    *budget = budget.checked_sub(words).ok_or_else(|| {
        AbiError::Decode("Decoded values exceed the encoded data".to_string())
    })?;
    Ok(())
}

/// Decode length-prefixed bytes
fn decode_bytes(tail: &[u8], budget: &mut usize) -> Result<Vec<u8>, AbiError> {
    let len = read_usize(tail, 0)?;
    let end = WORD_SIZE
        .checked_add(len)
        .ok_or_else(|| AbiError::Decode(format!("Byte length {} overflows", len)))?;
    check_length(tail, end)?;
    charge(budget, len.div_ceil(WORD_SIZE))?;
    Ok(tail[WORD_SIZE..end].to_vec())
}

/// Read the word at `offset`
fn read_word(data: &[u8], offset: usize) -> Result<[u8; WORD_SIZE], AbiError> {
    let end = offset
        .checked_add(WORD_SIZE)
        .ok_or_else(|| AbiError::Decode(format!("Offset {} overflows", offset)))?;
    check_length(data, end)?;
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(&data[offset..end]);
    Ok(word)
}

/// Read a word that must hold a length or offset
fn read_usize(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let value = U256::from_big_endian(&read_word(data, offset)?);
    if value > U256::from(usize::MAX) {
        return Err(AbiError::Decode(format!("Length or offset {} too large", value)));
    }
    Ok(value.as_usize())
}

/// Check that data has at least `required` bytes
fn check_length(data: &[u8], required: usize) -> Result<(), AbiError> {
    if data.len() < required {
        return Err(AbiError::Decode(format!(
            "Insufficient data: need {} bytes, have {}",
            required,
            data.len()
        )));
    }
    Ok(())
}
