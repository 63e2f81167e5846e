//! Shared primitives for the TML tokenizer and arena parser.
//!
//! This crate has no tree logic of its own: it is the thing the lexer and
//! the core arena/parser both depend on, so the `0xFF` discriminant byte,
//! the wildcard sentinels, and the error type only have to be defined once.

mod constants;
mod error;

pub use constants::{
    Offset, FULL_NODE_FLAG, MAX_DATA_SIZE, NODE_LINK_HEADER_SIZE, WILD_ANY, WILD_ONE,
};
pub use error::{TmlError, TmlErrorKind};
