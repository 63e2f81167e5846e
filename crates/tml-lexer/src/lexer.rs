use std::marker::PhantomData;

use tml_common::{Offset, WILD_ANY, WILD_ONE};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Zero-copy, in-place tokenizer over a mutable byte buffer.
///
/// Escape sequences inside item tokens are collapsed in place as they are
/// scanned (two source bytes become one output byte), so `ITEM` token
/// values borrow straight from the input buffer even post-collapse — no
/// heap allocation, ever. Every byte a returned `Token` borrows has already
/// been read past by the cursor and the write position never catches back
/// up to it, so the slice stays valid for `'a` even though later `pop()`
/// calls keep mutating bytes further ahead in the same buffer.
pub struct Lexer<'a> {
    ptr: *mut u8,
    cursor: Cursor,
    _buffer: PhantomData<&'a mut [u8]>,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let ptr = buffer.as_mut_ptr();
        let len = buffer.len();
        Self {
            ptr,
            cursor: Cursor::new(ptr as *const u8, len),
            _buffer: PhantomData,
        }
    }

    /// Current byte offset of the cursor, for error reporting.
    pub fn offset(&self) -> Offset {
        self.cursor.pos()
    }

    /// Pop the next token from the stream.
    pub fn pop(&mut self) -> Token<'a> {
        loop {
            let Some(ch) = self.cursor.peek() else {
                return Token::simple(TokenKind::Eof, self.cursor.pos());
            };
            if is_tml_whitespace(ch) {
                self.cursor.advance();
                continue;
            }

            let offset = self.cursor.pos();
            match ch {
                b'[' => {
                    self.cursor.advance();
                    return Token::simple(TokenKind::Open, offset);
                }
                b']' => {
                    self.cursor.advance();
                    return Token::simple(TokenKind::Close, offset);
                }
                b'|' => {
                    self.cursor.advance();
                    if self.cursor.peek() == Some(b'|') {
                        self.skip_to_next_line();
                        continue;
                    }
                    return Token::simple(TokenKind::Divider, offset);
                }
                _ => return self.scan_item(offset),
            }
        }
    }

    /// `||` starts a line comment; consume through `\n`, `\r`, or EOF.
    fn skip_to_next_line(&mut self) {
        loop {
            match self.cursor.advance() {
                None | Some(b'\n') | Some(b'\r') => return,
                Some(_) => continue,
            }
        }
    }

    /// Scan an ITEM token, collapsing `\x` escape sequences in place.
    ///
    /// `write` never runs ahead of the cursor's read position, so every
    /// byte this loop writes through the raw pointer has already been
    /// consumed as input and will never be read again.
    fn scan_item(&mut self, offset: Offset) -> Token<'a> {
        let start = self.cursor.pos() as usize;
        let mut write = start;
        let mut shift_necessary = false;

        while let Some(ch) = self.cursor.peek() {
            if is_tml_whitespace(ch) || matches!(ch, b'|' | b'[' | b']') {
                break;
            }

            if ch == b'\\' {
                self.cursor.advance();
                match self.cursor.peek() {
                    // Dangling backslash at EOF: drop it, end the item here.
                    None => break,
                    Some(escaped) => {
                        // SAFETY: write <= start + (bytes consumed so far) <= current
                        // cursor position, which is within the buffer.
                        unsafe { *self.ptr.add(write) = translate_escape_code(escaped) };
                        shift_necessary = true;
                    }
                }
            } else if shift_necessary {
                // SAFETY: see above.
                unsafe { *self.ptr.add(write) = ch };
            }

            write += 1;
            self.cursor.advance();
        }

        // SAFETY: [start, write) has been fully written (or is untouched
        // original input, in the no-escape fast path) and will not be
        // written again by any later call.
        let value =
            unsafe { std::slice::from_raw_parts(self.ptr.add(start), write - start) };
        Token {
            kind: TokenKind::Item,
            value,
            offset,
        }
    }
}

fn translate_escape_code(code: u8) -> u8 {
    match code {
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b's' => b' ',
        // In-band wildcard sentinels for pattern-match strings.
        b'?' => WILD_ONE,
        b'*' => WILD_ANY,
        other => other,
    }
}

/// TML whitespace is exactly space, tab, CR, LF — not Rust's broader
/// `u8::is_ascii_whitespace` (which also matches form feed `0x0C`). Any
/// other byte, including a raw form feed, is valid word content (spec.md
/// §1, §4.1, §6).
fn is_tml_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r' | b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> (Vec<u8>, Vec<(TokenKind, Vec<u8>)>) {
        let mut buf = input.as_bytes().to_vec();
        let mut out = Vec::new();
        {
            let mut lexer = Lexer::new(&mut buf);
            loop {
                let tok = lexer.pop();
                let kind = tok.kind;
                let value = tok.value.to_vec();
                out.push((kind, value));
                if kind == TokenKind::Eof {
                    break;
                }
            }
        }
        (buf, out)
    }

    #[test]
    fn brackets_and_eof() {
        let (_, toks) = tokenize("[]");
        assert_eq!(
            toks.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            vec![TokenKind::Open, TokenKind::Close, TokenKind::Eof]
        );
    }

    #[test]
    fn empty_brackets_with_inner_whitespace() {
        let (_, toks) = tokenize("[  ]");
        assert_eq!(
            toks.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            vec![TokenKind::Open, TokenKind::Close, TokenKind::Eof]
        );
    }

    #[test]
    fn plain_item() {
        let (_, toks) = tokenize("[ hello ]");
        assert_eq!(
            toks,
            vec![
                (TokenKind::Open, vec![]),
                (TokenKind::Item, b"hello".to_vec()),
                (TokenKind::Close, vec![]),
                (TokenKind::Eof, vec![]),
            ]
        );
    }

    #[test]
    fn divider_vs_comment() {
        let (_, toks) = tokenize("[a | b || comment\nc]");
        assert_eq!(
            toks.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            vec![
                TokenKind::Open,
                TokenKind::Item,
                TokenKind::Divider,
                TokenKind::Item,
                TokenKind::Item,
                TokenKind::Close,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn escape_codes_collapse_in_place() {
        // `\s` collapses to a literal space byte *inside* the item, but the
        // following raw space is still an unescaped delimiter — this is
        // two items, not one: "a\nb\tc " (trailing escaped space) then "d".
        let (_, toks) = tokenize(r"[a\nb\tc\s d]");
        assert_eq!(toks[1], (TokenKind::Item, b"a\nb\tc ".to_vec()));
        assert_eq!(toks[2], (TokenKind::Item, b"d".to_vec()));
    }

    #[test]
    fn raw_form_feed_is_word_content_not_whitespace() {
        // 0x0C (form feed) matches Rust's `is_ascii_whitespace` but is not
        // TML whitespace — it must stay part of the word.
        let (_, toks) = tokenize("[a\x0cb]");
        assert_eq!(toks[1], (TokenKind::Item, b"a\x0cb".to_vec()));
    }

    #[test]
    fn wildcard_escapes_become_sentinel_bytes() {
        let (_, toks) = tokenize(r"[\? \*]");
        assert_eq!(toks[1], (TokenKind::Item, vec![WILD_ONE]));
        assert_eq!(toks[2], (TokenKind::Item, vec![WILD_ANY]));
    }

    #[test]
    fn dangling_backslash_at_eof_is_dropped() {
        let (_, toks) = tokenize(r"\");
        assert_eq!(toks, vec![(TokenKind::Item, vec![]), (TokenKind::Eof, vec![])]);
    }

    #[test]
    fn double_backslash_is_literal_backslash() {
        let (_, toks) = tokenize(r"\\");
        assert_eq!(toks[0], (TokenKind::Item, vec![b'\\']));
    }

    #[test]
    fn unknown_escape_passes_through() {
        let (_, toks) = tokenize(r"\q");
        assert_eq!(toks[0], (TokenKind::Item, vec![b'q']));
    }
}
