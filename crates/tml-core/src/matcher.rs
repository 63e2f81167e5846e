use tml_common::{WILD_ANY, WILD_ONE};

use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wildcard {
    None,
    One,
    Any,
}

/// A pattern leaf is a wildcard only when its *entire* value is exactly
/// one sentinel byte (`\?` or `\*` collapsed by the lexer into 0x01/0x02).
fn check_wildcard(value: &[u8]) -> Wildcard {
    match value {
        [WILD_ONE] => Wildcard::One,
        [WILD_ANY] => Wildcard::Any,
        _ => Wildcard::None,
    }
}

/// Recursively compares `candidate` against `pattern`, where `pattern` may
/// contain in-band wildcards. See spec.md §4.6; grounded directly in
/// `tml_compare_nodes` / `check_wildcard`.
pub fn compare(candidate: &Cursor<'_>, pattern: &Cursor<'_>) -> bool {
    if !pattern.is_list() {
        if candidate.is_list() {
            return false;
        }
        return candidate.value() == pattern.value();
    }

    if !candidate.is_list() {
        return false;
    }

    if !pattern.has_children() {
        return !candidate.has_children();
    }

    let mut p_child = pattern.first_child();
    let mut wild = check_wildcard(p_child.value());
    if wild == Wildcard::Any {
        return true;
    }

    let mut c_child = candidate.first_child();

    while !c_child.is_null() && !p_child.is_null() {
        if wild != Wildcard::One && !compare(&c_child, &p_child) {
            return false;
        }

        // A following WILD_ANY matches the remainder unconditionally,
        // regardless of any pattern tokens still left after it.
        p_child = p_child.next_sibling();
        wild = check_wildcard(p_child.value());
        if wild == Wildcard::Any {
            return true;
        }

        c_child = c_child.next_sibling();
    }

    if !c_child.is_null() || !p_child.is_null() {
        return false;
    }

    true
}

/// Scans `node`'s children left-to-right for the first one matching
/// `pattern`. Never returns `node` itself.
pub fn find_first_child<'a>(node: &Cursor<'a>, pattern: &Cursor<'_>) -> Cursor<'a> {
    let mut child = node.first_child();
    while !child.is_null() {
        if compare(&child, pattern) {
            return child;
        }
        child = child.next_sibling();
    }
    child
}

/// Scans forward from `node`'s next sibling for the first one matching
/// `pattern`.
pub fn find_next_sibling<'a>(node: &Cursor<'a>, pattern: &Cursor<'_>) -> Cursor<'a> {
    let mut sib = node.next_sibling();
    while !sib.is_null() {
        if compare(&sib, pattern) {
            return sib;
        }
        sib = sib.next_sibling();
    }
    sib
}
