//! Arena-backed parser, navigator, printer, and pattern matcher for TML
//! bracketed trees.
//!
//! A document is parsed once into one contiguous byte arena (§4.2); every
//! other operation here — navigation, flattening, pattern matching, value
//! conversion — is a pure read over that arena via [`Cursor`], a by-value
//! view that borrows the document for as long as it's held.

mod arena;
mod convert;
mod cursor;
mod document;
mod file;
mod layout;
mod matcher;
mod parser;
mod printer;

pub use convert::{children_to_double_array, children_to_float_array, children_to_int_array, leaf_to_double, leaf_to_float, leaf_to_int};
pub use cursor::Cursor;
pub use document::Document;
pub use file::parse_file;
pub use matcher::{compare, find_first_child, find_next_sibling};
pub use printer::{to_markup_string, to_string};

pub use tml_common::{TmlError, TmlErrorKind};
