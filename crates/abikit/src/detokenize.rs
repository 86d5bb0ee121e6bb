//! Conversion of decoded tokens into Rust values

use abikit_primitives::{Address, U256};
use bytes::Bytes;

use crate::types::{FixedBytes, Token, I256};
use crate::AbiError;

/// A Rust type that one decoded token converts into
pub trait FromToken: Sized {
    /// Convert, failing when the token has another shape
    fn from_token(token: Token) -> Result<Self, AbiError>;
}

/// A Rust type that a whole decoded value list converts into
pub trait Detokenize: Sized {
    /// Convert, failing when the count or shapes differ
    fn from_tokens(tokens: Vec<Token>) -> Result<Self, AbiError>;
}

fn mismatch(expected: &str, token: &Token) -> AbiError {
    AbiError::Detokenize(format!("expected {}, got {} value", expected, token.kind()))
}

impl FromToken for Token {
    fn from_token(token: Token) -> Result<Self, AbiError> {
        Ok(token)
    }
}

macro_rules! impl_from_token {
    ($ty:ty, $expected:literal, $variant:ident) => {
        impl FromToken for $ty {
            fn from_token(token: Token) -> Result<Self, AbiError> {
                match token {
                    Token::$variant(value) => Ok(value.into()),
                    other => Err(mismatch($expected, &other)),
                }
            }
        }
    };
}

impl_from_token!(Address, "address", Address);
impl_from_token!(U256, "uint", Uint);
impl_from_token!(I256, "int", Int);
impl_from_token!(bool, "bool", Bool);
impl_from_token!(String, "string", String);
impl_from_token!(Bytes, "bytes", Bytes);
impl_from_token!(FixedBytes, "fixed bytes", FixedBytes);

impl<T: FromToken> FromToken for Vec<T> {
    fn from_token(token: Token) -> Result<Self, AbiError> {
        match token {
            Token::Array(items) | Token::FixedArray(items) => {
                items.into_iter().map(T::from_token).collect()
            }
            other => Err(mismatch("array", &other)),
        }
    }
}

impl Detokenize for Vec<Token> {
    fn from_tokens(tokens: Vec<Token>) -> Result<Self, AbiError> {
        Ok(tokens)
    }
}

fn single(tokens: Vec<Token>) -> Result<Token, AbiError> {
    let count = tokens.len();
    let mut iter = tokens.into_iter();
    match (iter.next(), count) {
        (Some(token), 1) => Ok(token),
        _ => Err(AbiError::Detokenize(format!("expected 1 value, got {}", count))),
    }
}

macro_rules! impl_detokenize_single {
    ($($ty:ty),+) => {
        $(
            impl Detokenize for $ty {
                fn from_tokens(tokens: Vec<Token>) -> Result<Self, AbiError> {
                    <$ty>::from_token(single(tokens)?)
                }
            }
        )+
    };
}

impl_detokenize_single!(Token, Address, U256, I256, bool, String, Bytes, FixedBytes);

macro_rules! impl_detokenize_tuple {
    ($count:literal => $($name:ident),+) => {
        impl<$($name: FromToken),+> Detokenize for ($($name,)+) {
            fn from_tokens(tokens: Vec<Token>) -> Result<Self, AbiError> {
                if tokens.len() != $count {
                    return Err(AbiError::Detokenize(format!(
                        "expected {} values, got {}",
                        $count,
                        tokens.len()
                    )));
                }
                let mut iter = tokens.into_iter();
                Ok(($(
                    $name::from_token(iter.next().ok_or_else(|| {
                        AbiError::Detokenize("missing value".to_string())
                    })?)?,
                )+))
            }
        }
    };
}

impl_detokenize_tuple!(1 => A);
impl_detokenize_tuple!(2 => A, B);
impl_detokenize_tuple!(3 => A, B, C);
impl_detokenize_tuple!(4 => A, B, C, D);
impl_detokenize_tuple!(5 => A, B, C, D, E);
impl_detokenize_tuple!(6 => A, B, C, D, E, F);
