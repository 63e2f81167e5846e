//! Full-node field layout, shared between the arena writer (which patches
//! these fields) and the navigator (which reads them back). Matches
//! `tml_parser.c`: `0xFF`, then `first_child`, then `next_sibling` — in
//! that byte order, which is the reverse of the order `spec.md` §3's node
//! record table mentions them in prose.

use tml_common::Offset;

/// Byte offset of `first_child` relative to a full node's base (right
/// after the `0xFF` discriminant).
pub(crate) const FIRST_CHILD_REL: usize = 1;
/// Byte offset of `next_sibling` relative to a full node's base.
pub(crate) const NEXT_SIBLING_REL: usize = 1 + std::mem::size_of::<Offset>();
