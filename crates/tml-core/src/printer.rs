use crate::cursor::Cursor;

/// Flattens `cursor` into `out`, omitting brackets: leaves separated by a
/// single space, nested lists' own brackets dropped. Returns the number of
/// bytes written (not counting the trailing NUL), which is `0` for the
/// degenerate case of a zero-length `out` (mirrors `tml_node_to_string`'s
/// own "this shouldn't happen" return-0 path for that input).
pub fn to_string(cursor: &Cursor<'_>, out: &mut [u8]) -> usize {
    write_flat(cursor, out, false)
}

/// Flattens `cursor` into `out` with brackets: `[a [b c] d]`. An empty
/// list prints as `[]`.
pub fn to_markup_string(cursor: &Cursor<'_>, out: &mut [u8]) -> usize {
    write_flat(cursor, out, true)
}

fn write_flat(cursor: &Cursor<'_>, out: &mut [u8], brackets: bool) -> usize {
    let dest_size = out.len();
    let mut pos = 0usize;
    write_node(cursor, out, &mut pos, brackets);
    if pos < dest_size {
        out[pos] = 0;
        pos
    } else {
        0
    }
}

/// Recursive flattener. Clamps at `dest_end - 1` so a NUL terminator
/// always fits; the entry guard is checked before every single byte or
/// value-run write, exactly mirroring `write_node_to_string`'s pointer
/// comparisons in `tml_parser.c`.
fn write_node(cursor: &Cursor<'_>, out: &mut [u8], pos: &mut usize, brackets: bool) {
    let dest_end = out.len();
    if *pos >= dest_end.saturating_sub(1) {
        return;
    }

    if !cursor.has_children() {
        let value: &[u8] = if !cursor.is_list() {
            cursor.value()
        } else if brackets {
            b"[]"
        } else {
            return;
        };

        let room = dest_end - *pos - 1;
        let n = value.len().min(room);
        out[*pos..*pos + n].copy_from_slice(&value[..n]);
        *pos += n;
        return;
    }

    let mut child = cursor.first_child();

    if brackets {
        if *pos >= dest_end - 1 {
            return;
        }
        out[*pos] = b'[';
        *pos += 1;
    }

    loop {
        write_node(&child, out, pos, brackets);
        child = child.next_sibling();
        if child.is_null() {
            break;
        }
        if *pos >= dest_end - 1 {
            return;
        }
        out[*pos] = b' ';
        *pos += 1;
    }

    if brackets {
        if *pos >= dest_end - 1 {
            return;
        }
        out[*pos] = b']';
        *pos += 1;
    }
}
