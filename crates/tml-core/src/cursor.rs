use tml_common::{Offset, FULL_NODE_FLAG};

use crate::layout::{FIRST_CHILD_REL, NEXT_SIBLING_REL};

/// A by-value view into one node of a parsed arena.
///
/// There is no `Option<Cursor>`: a cursor that points nowhere is the null
/// cursor (`arena` is `None`), and every operation on it is total — it
/// returns another null cursor rather than panicking. This mirrors
/// `tml_parser.c`'s static `NULL_NODE = { 0, 0, 0, "" }` sentinel, whose
/// all-zero fields make every downstream operation fall out correctly
/// without a special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    arena: Option<&'a [u8]>,
    value: &'a [u8],
    first_child: Offset,
    next_sibling: Offset,
}

impl<'a> Cursor<'a> {
    pub(crate) fn null() -> Self {
        Self {
            arena: None,
            value: &[],
            first_child: 0,
            next_sibling: 0,
        }
    }

    /// The synthetic top-level cursor exposed as `Document::root`: its
    /// `first_child` is the real root list's own `first_child`, one level
    /// of indirection collapsed away (`tml_parser.c::parse_root` does the
    /// same — `root_node.first_child = get_node_child(&buff[root_offset])`).
    pub(crate) fn synthetic_root(arena: &'a [u8], first_child: Offset) -> Self {
        Self {
            arena: Some(arena),
            value: &[],
            first_child,
            next_sibling: 0,
        }
    }

    pub(crate) fn at(arena: &'a [u8], offset: Offset) -> Self {
        decode(arena, offset)
    }

    /// The node's leaf value, or an empty slice for a list node.
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// The cursor has no backing arena.
    pub fn is_null(&self) -> bool {
        self.arena.is_none()
    }

    /// The value string is empty: either a list (possibly empty) or, for
    /// the null cursor, degenerately true too — matching `NULL_NODE`'s
    /// empty value field in the reference implementation.
    pub fn is_list(&self) -> bool {
        self.value.is_empty()
    }

    pub fn has_children(&self) -> bool {
        self.first_child != 0
    }

    pub fn first_child(&self) -> Cursor<'a> {
        match self.arena {
            Some(arena) if self.first_child != 0 => decode(arena, self.first_child),
            _ => Cursor::null(),
        }
    }

    pub fn next_sibling(&self) -> Cursor<'a> {
        match self.arena {
            Some(arena) if self.next_sibling != 0 => decode(arena, self.next_sibling),
            _ => Cursor::null(),
        }
    }

    /// O(n) walk of the sibling chain under `first_child`.
    pub fn child_count(&self) -> usize {
        let mut count = 0;
        let mut child = self.first_child();
        while !child.is_null() {
            count += 1;
            child = child.next_sibling();
        }
        count
    }

    /// O(i) walk to the i-th child, or the null cursor if out of range.
    pub fn child_at(&self, index: usize) -> Cursor<'a> {
        let mut count = 0;
        let mut child = self.first_child();
        while !child.is_null() {
            if count == index {
                return child;
            }
            count += 1;
            child = child.next_sibling();
        }
        Cursor::null()
    }
}

/// Decodes the node record at `offset` into a cursor.
///
/// If the first byte is `0xFF` this is a full node: `first_child` and
/// `next_sibling` are little-endian `u32`s at fixed positions, followed by
/// the NUL-terminated value. Otherwise it's a packed leaf: the byte itself
/// is the sibling gap (`0` meaning no next sibling, else `next_sibling =
/// here + 2 + gap`, per spec.md §4.4), and the value follows directly.
fn decode(arena: &[u8], offset: Offset) -> Cursor<'_> {
    let base = offset as usize;
    let flag = arena[base];

    if flag == FULL_NODE_FLAG {
        let fc = Offset::from_le_bytes(
            arena[base + FIRST_CHILD_REL..base + FIRST_CHILD_REL + 4]
                .try_into()
                .unwrap(),
        );
        let ns = Offset::from_le_bytes(
            arena[base + NEXT_SIBLING_REL..base + NEXT_SIBLING_REL + 4]
                .try_into()
                .unwrap(),
        );
        let value_start = base + NEXT_SIBLING_REL + 4;
        let value = read_nul_terminated(arena, value_start);
        Cursor {
            arena: Some(arena),
            value,
            first_child: fc,
            next_sibling: ns,
        }
    } else {
        let gap = flag;
        let next_sibling = if gap == 0 {
            0
        } else {
            base as Offset + 2 + gap as Offset
        };
        let value = read_nul_terminated(arena, base + 1);
        Cursor {
            arena: Some(arena),
            value,
            first_child: 0,
            next_sibling,
        }
    }
}

fn read_nul_terminated(arena: &[u8], start: usize) -> &[u8] {
    let end = arena[start..]
        .iter()
        .position(|&b| b == 0)
        .map(|rel| start + rel)
        .unwrap_or(arena.len());
    &arena[start..end]
}
