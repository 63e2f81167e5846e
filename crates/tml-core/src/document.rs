use tml_common::TmlError;

use crate::cursor::Cursor;
use crate::parser;

/// An owned, parsed TML tree: the arena, the sticky first error (if any),
/// and the synthetic root. Disposing a `Document` invalidates every
/// [`Cursor`] borrowed from it — the borrow checker enforces this since
/// every cursor carries the document's lifetime.
pub struct Document {
    arena: Vec<u8>,
    error: Option<TmlError>,
    root_first_child: u32,
}

impl Document {
    /// Parses `bytes` without touching the caller's buffer: a private copy
    /// is made and parsed destructively (spec.md §6, "non-destructive,
    /// copies input internally").
    pub fn parse_text(bytes: &[u8]) -> Self {
        let mut owned = bytes.to_vec();
        Self::parse_in_place(&mut owned)
    }

    /// Parses `buffer` destructively: escape sequences are collapsed in
    /// place, so the buffer's contents must be considered invalidated
    /// afterward (spec.md §6, §5 resource policy).
    pub fn parse_in_place(buffer: &mut [u8]) -> Self {
        let outcome = parser::parse(buffer);
        Self {
            arena: outcome.arena,
            error: outcome.error,
            root_first_child: outcome.root_first_child,
        }
    }

    /// The first sticky parse error recorded, if any.
    pub fn error(&self) -> Option<&TmlError> {
        self.error.as_ref()
    }

    /// The root cursor: its `first_child` is the real root list's own
    /// first child — one layer of indirection already collapsed.
    ///
    /// A document carrying a sticky error has a null root (spec.md §7),
    /// mirroring `tml_parser.c::parse_root` leaving `data->root_node` as
    /// the zero-initialized `NULL_NODE` on every error path.
    pub fn root(&self) -> Cursor<'_> {
        if self.error.is_some() {
            return Cursor::null();
        }
        Cursor::synthetic_root(&self.arena, self.root_first_child)
    }
}
