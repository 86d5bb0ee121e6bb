//! Typed argument parser
//!
//! Consumes a [`TokenStack`] of [`Lexeme`]s one declared parameter type at
//! a time. Integers are base-10, arrays are bracketed lists of integers,
//! byte types take the raw text bytes of a single word.

use abikit_primitives::Address;

use super::lexer::{tokenize_to_stack, Lexeme};
use crate::stack::TokenStack;
use crate::types::{parse_dec_u256, uint_fits, FixedBytes, ParamType, Token, I256};
use crate::AbiError;

/// Parse `text` into exactly one value per entry of `types`
pub fn parse_arguments(types: &[ParamType], text: &str) -> Result<Vec<Token>, AbiError> {
    for ty in types {
        check_supported(ty)?;
    }

    let parser = ArgParser::new(text);
    let values = types
        .iter()
        .map(|ty| parser.next_value(ty))
        .collect::<Result<Vec<_>, _>>()?;
    parser.finish()?;

    tracing::trace!("Parsed {} argument(s) from text", values.len());
    Ok(values)
}

/// Reject types the textual syntax has no form for
pub fn check_supported(ty: &ParamType) -> Result<(), AbiError> {
    match ty {
        ParamType::Array(inner) | ParamType::FixedArray(inner, _) if inner.is_integer() => Ok(()),
        ParamType::Array(_) | ParamType::FixedArray(_, _) => {
            Err(AbiError::UnsupportedType(ty.to_string()))
        }
        _ => Ok(()),
    }
}

/// Stateful parser over one argument string
#[derive(Debug)]
pub struct ArgParser {
    stack: TokenStack<Lexeme>,
}

impl ArgParser {
    /// Tokenize `text`
    pub fn new(text: &str) -> Self {
        Self {
            stack: tokenize_to_stack(text),
        }
    }

    /// Tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    /// Consume the tokens of one value of type `ty`
    pub fn next_value(&self, ty: &ParamType) -> Result<Token, AbiError> {
        match ty {
            ParamType::Int(_) | ParamType::Uint(_) => {
                let word = self.word(ty)?;
                parse_integer(ty, &word)
            }
            ParamType::Bool => {
                let word = self.word(ty)?;
                word.parse::<bool>()
                    .map(Token::Bool)
                    .map_err(|e| AbiError::parse(&word, ty, e))
            }
            ParamType::String => Ok(Token::String(self.word(ty)?)),
            ParamType::Address => {
                let word = self.word(ty)?;
                Address::from_hex_lenient(&word)
                    .map(Token::Address)
                    .map_err(|e| AbiError::parse(&word, ty, e))
            }
            ParamType::FixedBytes(size) => {
                let word = self.word(ty)?;
                FixedBytes::right_aligned(word.as_bytes(), *size)
                    .map(Token::FixedBytes)
                    .ok_or_else(|| {
                        AbiError::parse(
                            &word,
                            ty,
                            format!("{} bytes do not fit in {}", word.len(), size),
                        )
                    })
            }
            ParamType::Bytes => Ok(Token::Bytes(self.word(ty)?.into_bytes())),
            ParamType::Array(inner) => Ok(Token::Array(self.integers(inner)?)),
            ParamType::FixedArray(inner, size) => {
                let items = self.integers(inner)?;
                if items.len() != *size {
                    return Err(AbiError::syntax(
                        format!("{} elements for {}", size, ty),
                        format!("{} elements", items.len()),
                    ));
                }
                Ok(Token::FixedArray(items))
            }
        }
    }

    /// Fail if any token is left over
    pub fn finish(&self) -> Result<(), AbiError> {
        match self.stack.pop() {
            Ok(extra) => Err(AbiError::syntax("end of arguments", extra)),
            Err(_) => Ok(()),
        }
    }

    fn word(&self, ty: &ParamType) -> Result<String, AbiError> {
        match self.stack.pop()? {
            Lexeme::Word(word) => Ok(word),
            other => Err(AbiError::syntax(format!("{} value", ty), other)),
        }
    }

    /// `[ n n ... ]`
    fn integers(&self, elem: &ParamType) -> Result<Vec<Token>, AbiError> {
        if !elem.is_integer() {
            return Err(AbiError::UnsupportedType(format!("{}[]", elem)));
        }
        match self.stack.pop()? {
            Lexeme::Open => {}
            other => return Err(AbiError::syntax("'['", other)),
        }

        let mut items = Vec::new();
        loop {
            match self.stack.pop()? {
                Lexeme::Close => return Ok(items),
                Lexeme::Word(word) => items.push(parse_integer(elem, &word)?),
                Lexeme::Open => return Err(AbiError::syntax("integer or ']'", Lexeme::Open)),
            }
        }
    }
}

fn parse_integer(ty: &ParamType, word: &str) -> Result<Token, AbiError> {
    match ty {
        ParamType::Uint(bits) => {
            let value = parse_dec_u256(word).map_err(|r| AbiError::parse(word, ty, r))?;
            if !uint_fits(&value, *bits) {
                return Err(AbiError::parse(word, ty, "value out of range"));
            }
            Ok(Token::Uint(value))
        }
        ParamType::Int(bits) => {
            let value = I256::from_dec_str(word).map_err(|r| AbiError::parse(word, ty, r))?;
            if !value.fits(*bits) {
                return Err(AbiError::parse(word, ty, "value out of range"));
            }
            Ok(Token::Int(value))
        }
        _ => Err(AbiError::UnsupportedType(ty.to_string())),
    }
}
