//! Concrete markup/flatten scenarios from spec.md §8, snapshotted with
//! `insta` the way the teacher workspace snapshots larger structural
//! output (`mesh-typeck`'s integration tests, `snow-lexer`'s token
//! snapshots). Inline snapshots (`@"..."`) are used instead of accepted
//! `.snap` files since there is no interactive `cargo insta review` step
//! in this workflow.

use tml_core::Document;

fn markup(src: &str) -> String {
    let doc = Document::parse_text(src.as_bytes());
    let mut buf = [0u8; 256];
    let n = tml_core::to_markup_string(&doc.root(), &mut buf);
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

fn flattened(src: &str) -> String {
    let doc = Document::parse_text(src.as_bytes());
    let mut buf = [0u8; 256];
    let n = tml_core::to_string(&doc.root(), &mut buf);
    String::from_utf8(buf[..n].to_vec()).unwrap()
}

#[test]
fn empty_list() {
    insta::assert_snapshot!(markup("[]"), @"[]");
    insta::assert_snapshot!(flattened("[]"), @"");
}

#[test]
fn single_leaf() {
    insta::assert_snapshot!(markup("[test]"), @"[test]");
    insta::assert_snapshot!(flattened("[test]"), @"test");
}

#[test]
fn deeply_nested_singletons_flatten_to_words() {
    insta::assert_snapshot!(flattened("[this [is [a [test]]]]"), @"this is a test");
    insta::assert_snapshot!(markup("[this [is [a [test]]]]"), @"[this [is [a [test]]]]");
}

#[test]
fn single_divider_splits_into_two_groups() {
    insta::assert_snapshot!(markup("[a b c | d e f]"), @"[[a b c] [d e f]]");
}

#[test]
fn many_dividers_produce_singleton_groups() {
    insta::assert_snapshot!(markup("[a | b | c | d | e]"), @"[[a] [b] [c] [d] [e]]");
}

#[test]
fn divider_nesting_is_one_level_deep() {
    insta::assert_snapshot!(
        markup("[bold | hello [italic | this] is a test]"),
        @"[[bold] [hello [[italic] [this]] is a test]]"
    );
}

#[test]
fn round_trip_through_markup_reparses_equal() {
    let src = "[bold | hello [italic | this] is a test]";
    let once = markup(src);
    let twice = markup(&once);
    assert_eq!(once, twice, "markup output should be stable under reparse");
}
