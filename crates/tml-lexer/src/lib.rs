//! Tokenizer for the TML bracketed tree syntax.
//!
//! Operates in place over a mutable byte buffer: item tokens with escape
//! sequences are collapsed as they're scanned, never allocated.

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
