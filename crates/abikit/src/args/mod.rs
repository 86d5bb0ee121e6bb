//! Textual call arguments
//!
//! Arguments are written as one string of whitespace-separated words.
//! Integer arrays are bracketed:
//!
//! ```text
//! 42 true alice 0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d [ 1 2 3 ]
//! ```
//!
//! Every `]` is a token of its own. Arrays nest one level only.

mod lexer;
mod parser;

pub use lexer::{tokenize, tokenize_to_stack, Lexeme};
pub use parser::{check_supported, parse_arguments, ArgParser};
