use tml_common::{Offset, TmlError, TmlErrorKind, FULL_NODE_FLAG};
use tml_lexer::{Lexer, Token, TokenKind};

use crate::arena::Arena;

pub(crate) struct ParseOutcome {
    pub(crate) arena: Vec<u8>,
    pub(crate) error: Option<TmlError>,
    pub(crate) root_first_child: Offset,
}

/// Drives a [`Lexer`] over `buffer`, building the arena in a single
/// forward pass. Grounded in `tml_parser.c`'s `parse_root` /
/// `parse_list_node`.
pub(crate) fn parse(buffer: &mut [u8]) -> ParseOutcome {
    let input_size = buffer.len();
    let mut lexer = Lexer::new(buffer);
    let mut arena = Arena::with_initial_capacity(input_size);
    let mut error: Option<TmlError> = None;

    let root_first_child = parse_root(&mut lexer, &mut arena, &mut error);

    arena.shrink_to_fit();
    ParseOutcome {
        arena: arena.into_inner(),
        error,
        root_first_child,
    }
}

fn set_error(error: &mut Option<TmlError>, kind: TmlErrorKind, offset: Offset) {
    if error.is_none() {
        *error = Some(TmlError::new(kind, offset));
    }
}

/// Writes a packed leaf or full node for `value`, surfacing `OutOfMemory`
/// (at the current write cursor, since this is an arena-capacity failure,
/// not a source-position one) if the arena has hit `MAX_DATA_SIZE`.
fn write_packed_checked(arena: &mut Arena, error: &mut Option<TmlError>, value: &[u8], gap: u8) -> Offset {
    match arena.write_packed(value, gap) {
        Some(off) => off,
        None => {
            let at = arena.len();
            set_error(error, TmlErrorKind::OutOfMemory, at);
            at
        }
    }
}

fn write_full_checked(arena: &mut Arena, error: &mut Option<TmlError>, value: &[u8]) -> Offset {
    match arena.write_full(value) {
        Some(off) => off,
        None => {
            let at = arena.len();
            set_error(error, TmlErrorKind::OutOfMemory, at);
            at
        }
    }
}

/// Parses `document := OPEN list EOF`.
fn parse_root(lexer: &mut Lexer<'_>, arena: &mut Arena, error: &mut Option<TmlError>) -> Offset {
    let token = lexer.pop();
    if token.kind != TokenKind::Open {
        match token.kind {
            TokenKind::Eof => set_error(error, TmlErrorKind::EmptyInput, token.offset),
            _ => set_error(error, TmlErrorKind::MissingOpen, token.offset),
        }
        return 0;
    }

    let (root_node, _) = parse_list_node(lexer, arena, error, true);

    let trailing = lexer.pop();
    if trailing.kind != TokenKind::Eof {
        set_error(error, TmlErrorKind::TrailingContent, trailing.offset);
    }

    arena.read_first_child(root_node)
}

/// Parses `...]`, assuming the opening `[` (or the implicit list start for
/// a divider segment) has already been consumed. Returns the container
/// node's offset and the token that terminated the list (CLOSE, EOF, or —
/// only meaningful when `process_divider` is false — DIVIDER).
///
/// `process_divider` controls the `|` regrouping (spec.md §4.3 step 5):
/// true at the outermost call for a `[...]`, false for each inner segment
/// recursed into once a divider has already triggered the rewrite, so a
/// `|` nested one level deeper terminates its segment instead of
/// triggering a second level of regrouping.
fn parse_list_node<'a>(
    lexer: &mut Lexer<'a>,
    arena: &mut Arena,
    error: &mut Option<TmlError>,
    process_divider: bool,
) -> (Offset, Token<'a>) {
    let root_node = write_full_checked(arena, error, &[]);

    let mut pending: Option<Token<'a>> = None;
    let mut set_first_child = false;
    let mut token: Token<'a>;

    loop {
        token = match pending.take() {
            Some(t) => t,
            None => lexer.pop(),
        };

        match token.kind {
            TokenKind::Item => {
                if !set_first_child {
                    arena.patch_first_child(root_node, arena.len());
                    set_first_child = true;
                }

                let last_token = token;
                let next = lexer.pop();
                let has_sibling = matches!(next.kind, TokenKind::Item | TokenKind::Open);

                if !has_sibling {
                    write_packed_checked(arena, error, last_token.value, 0);
                } else if last_token.value.len() < FULL_NODE_FLAG as usize {
                    let gap = last_token.value.len() as u8;
                    write_packed_checked(arena, error, last_token.value, gap);
                } else {
                    let n = write_full_checked(arena, error, last_token.value);
                    arena.patch_next_sibling(n, arena.len());
                }

                pending = Some(next);
            }
            TokenKind::Open => {
                if !set_first_child {
                    arena.patch_first_child(root_node, arena.len());
                    set_first_child = true;
                }

                let (list_node, _) = parse_list_node(lexer, arena, error, true);

                let next = lexer.pop();
                let has_sibling = matches!(next.kind, TokenKind::Item | TokenKind::Open);
                if has_sibling {
                    arena.patch_next_sibling(list_node, arena.len());
                }

                pending = Some(next);
            }
            TokenKind::Divider => {
                if !process_divider {
                    break;
                }

                // Rewire the already-written children under a new list
                // `first_list`, then parse the remaining segments as
                // siblings of it — one level of regrouping, never two.
                let first_list = write_full_checked(arena, error, &[]);
                let existing_children = arena.read_first_child(root_node);
                arena.patch_first_child(first_list, existing_children);
                arena.patch_next_sibling(first_list, arena.len());
                arena.patch_first_child(root_node, first_list);

                loop {
                    let (list_node, closing_token) = parse_list_node(lexer, arena, error, false);
                    if closing_token.kind == TokenKind::Divider {
                        arena.patch_next_sibling(list_node, arena.len());
                    } else {
                        break;
                    }
                }
                break;
            }
            TokenKind::Close | TokenKind::Eof => break,
        }
    }

    if token.kind == TokenKind::Eof {
        set_error(error, TmlErrorKind::Unterminated, token.offset);
    }

    (root_node, token)
}
