//! Pattern-match truth table from spec.md §8.

use tml_core::{compare, Document};

fn matches(candidate: &str, pattern: &str) -> bool {
    let candidate_doc = Document::parse_text(candidate.as_bytes());
    let pattern_doc = Document::parse_text(pattern.as_bytes());
    compare(&candidate_doc.root(), &pattern_doc.root())
}

#[test]
fn wild_one_matches_each_leaf_positionally() {
    assert!(matches("[a b c]", r"[\? \? \?]"));
}

#[test]
fn wild_any_matches_everything() {
    assert!(matches("[a b c]", r"[\*]"));
}

#[test]
fn wild_any_does_not_match_empty_candidate_when_one_is_required_first() {
    assert!(!matches("[]", r"[\? \*]"));
}

#[test]
fn wild_one_then_wild_any() {
    assert!(matches("[a b]", r"[\? \*]"));
}

#[test]
fn divider_regrouped_candidate_matches_wild_any_segment() {
    assert!(matches(
        "[bold | hello, this is a test!]",
        r"[bold | \*]"
    ));
}

#[test]
fn leaf_mismatch_in_first_segment_fails() {
    assert!(!matches(
        "[bold | hello, this is a test!]",
        r"[italic | \*]"
    ));
}

#[test]
fn compare_is_reflexive() {
    let doc = Document::parse_text(b"[bold | hello [italic | this] is a test]");
    assert!(compare(&doc.root(), &doc.root()));
}

#[test]
fn wild_any_alone_matches_empty_list() {
    assert!(matches("[]", r"[\*]"));
}

#[test]
fn tokens_after_wild_any_are_ignored() {
    // documented limitation (spec.md §4.6, §9): anything after a WILD_ANY
    // in the same pattern list never gets consulted.
    assert!(matches("[a b c]", r"[\* nonsense more-nonsense]"));
}
