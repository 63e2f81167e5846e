//! Shared numeric constants for the TML wire format.
//!
//! These values are part of the *binary surface* (spec.md §6): the
//! `0xFF` discriminant byte, the two wildcard sentinel bytes, and the
//! default size ceiling all have to agree between the lexer, the arena
//! writer, and the navigator, so they live in one place.

/// Absolute byte offset into an arena. 32-bit, per spec.md §3 ("Offsets
/// are 32-bit (enough for inputs < 4 GB)"). A build targeting larger
/// inputs would widen this one alias.
pub type Offset = u32;

/// Discriminant byte marking a full node record (as opposed to a packed
/// leaf, whose first byte is itself the sibling gap).
pub const FULL_NODE_FLAG: u8 = 0xFF;

/// Byte size of a full node's link header: the flag byte plus two
/// `Offset`s (`next_sibling`, `first_child`).
pub const NODE_LINK_HEADER_SIZE: usize = 1 + 2 * std::mem::size_of::<Offset>();

/// In-band wildcard sentinel for `\?` (matches exactly one child).
pub const WILD_ONE: u8 = 0x01;

/// In-band wildcard sentinel for `\*` (matches the rest of a child list).
pub const WILD_ANY: u8 = 0x02;

/// Default ceiling on arena size, in bytes: 2^32 - 1.
///
/// The original C headers disagree between `0xFFFF` and an implied
/// `0xFFFFFFFF` (from the 32-bit offset type); spec.md §9 resolves this
/// in favor of the latter and treats the smaller value as a legacy typo.
pub const MAX_DATA_SIZE: usize = u32::MAX as usize;
