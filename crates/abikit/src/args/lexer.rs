//! Argument text tokenizer

use std::fmt;

use crate::stack::TokenStack;

/// One token of argument text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// `[`
    Open,
    /// `]`; consecutive brackets are separate tokens
    Close,
    /// Maximal run of non-whitespace, non-bracket characters
    Word(String),
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Open => f.write_str("'['"),
            Lexeme::Close => f.write_str("']'"),
            Lexeme::Word(word) => write!(f, "'{}'", word),
        }
    }
}

/// Split argument text into tokens, left to right
pub fn tokenize(input: &str) -> Vec<Lexeme> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in input.chars() {
        let marker = match c {
            '[' => Some(Lexeme::Open),
            ']' => Some(Lexeme::Close),
            c if c.is_whitespace() => None,
            c => {
                word.push(c);
                continue;
            }
        };
        if !word.is_empty() {
            tokens.push(Lexeme::Word(std::mem::take(&mut word)));
        }
        if let Some(marker) = marker {
            tokens.push(marker);
        }
    }
    if !word.is_empty() {
        tokens.push(Lexeme::Word(word));
    }

    tokens
}

/// Tokenize into a stack that pops tokens in their original order
pub fn tokenize_to_stack(input: &str) -> TokenStack<Lexeme> {
    TokenStack::from_ordered(tokenize(input))
}
