//! Unit tests for the per-node analysis rules.

use gramdex_core::BooleanQuery;

use crate::analyze::Translator;
use crate::info::RegexInfo;

fn analyze(pattern: &str, gram_len: usize) -> RegexInfo {
    let hir = regex_syntax::ParserBuilder::new()
        .build()
        .parse(pattern)
        .unwrap();
    Translator::new(gram_len).analyze(&hir)
}

#[test]
fn literal_is_exact() {
    let info = analyze("abc", 3);
    assert!(info.exact.contains("abc"));
    assert!(!info.emptyable);
    assert_eq!(info.query, BooleanQuery::All);
}

#[test]
fn empty_pattern_matches_empty_string() {
    let info = analyze("", 3);
    assert!(info.exact.contains(""));
    assert!(info.emptyable);
}

#[test]
fn anchors_match_empty_string() {
    let info = analyze("^$", 3);
    assert!(info.exact.contains(""));

    let info = analyze(r"\babc\b", 3);
    assert!(info.exact.contains("abc"));
}

#[test]
fn small_class_enumerates_characters() {
    let info = analyze("[a-c]", 3);
    assert_eq!(info.exact.len(), 3);
    assert!(info.exact.contains("a"));
    assert!(info.exact.contains("b"));
    assert!(info.exact.contains("c"));
}

#[test]
fn case_insensitive_class_folds_to_lower() {
    // `(?i)` reaches the analyzer as a folded character class; every
    // character is lower-cased as it enters the set.
    let info = analyze("(?i)k", 3);
    assert_eq!(info.exact.len(), 1);
    assert!(info.exact.contains("k"));
}

#[test]
fn wide_class_coarsens_to_match_any() {
    let info = analyze(r"\w", 3);
    assert!(info.exact.is_empty());
    assert!(info.emptyable);
    assert_eq!(info.query, BooleanQuery::All);

    let info = analyze("[^a]", 3);
    assert!(info.exact.is_empty());
    assert_eq!(info.query, BooleanQuery::All);
}

#[test]
fn medium_class_flushes_into_prefix_suffix() {
    // 26 single characters: within the class cutoff but over the exact-set
    // cap, so the characters survive only as coarse prefix/suffix data.
    let info = analyze("[a-z]", 3);
    assert!(info.exact.is_empty());
    assert_eq!(info.query, BooleanQuery::All);
    assert!(info.prefix.contains(""));
}

#[test]
fn plus_degrades_exact_to_prefix_suffix() {
    let info = analyze("(ab)+", 3);
    assert!(info.exact.is_empty());
    assert!(info.prefix.contains("ab"));
    assert!(info.suffix.contains("ab"));
    assert!(!info.emptyable);
}

#[test]
fn plus_of_long_literal_keeps_gram_constraint() {
    let info = analyze("(abc)+", 3);
    assert_eq!(info.query, BooleanQuery::Gram("abc".to_string()));
    assert!(info.prefix.contains("ab"));
    assert!(info.suffix.contains("bc"));
}

#[test]
fn star_coarsens_to_match_any() {
    let info = analyze("x*", 3);
    assert!(info.exact.is_empty());
    assert!(info.emptyable);
    assert_eq!(info.query, BooleanQuery::All);
}

#[test]
fn quest_alternates_with_empty_string() {
    let info = analyze("x?", 3);
    assert!(info.exact.contains("x"));
    assert!(info.exact.contains(""));
    assert!(info.emptyable);
}

#[test]
fn bounded_repeat_with_zero_min_coarsens() {
    let info = analyze("a{0,2}", 3);
    assert!(info.exact.is_empty());
    assert!(info.emptyable);
    assert_eq!(info.query, BooleanQuery::All);
}

#[test]
fn bounded_repeat_with_positive_min_acts_like_plus() {
    let info = analyze("a{2,4}", 3);
    assert!(info.exact.is_empty());
    assert!(info.prefix.contains("a"));
    assert!(info.suffix.contains("a"));
}

#[test]
fn alternation_of_exacts_unions() {
    let info = analyze("ab|cd", 3);
    assert_eq!(info.exact.len(), 2);
    assert!(info.exact.contains("ab"));
    assert!(info.exact.contains("cd"));
}

#[test]
fn alternation_emptyable_if_either_branch_is() {
    let info = analyze("ab|x*", 3);
    assert!(info.emptyable);
}

#[test]
fn concat_crosses_exact_sets() {
    let info = analyze("(a|b)(c|d)", 3);
    assert_eq!(info.exact.len(), 4);
    assert!(info.exact.contains("ac"));
    assert!(info.exact.contains("ad"));
    assert!(info.exact.contains("bc"));
    assert!(info.exact.contains("bd"));
}

#[test]
fn concat_boundary_gram_lands_in_query() {
    // Neither `ab+` nor `cd` alone pins down a gram at their boundary, but
    // every match contains "b" followed by "cd".
    let info = analyze("ab+cd", 3);
    assert_eq!(info.query, BooleanQuery::Gram("bcd".to_string()));
}

#[test]
fn concat_with_emptyable_left_unions_prefixes() {
    // `(ab+)?` can vanish, so the concatenation can also start at "cd".
    let info = analyze("(ab+)?(cd+)", 3);
    assert!(info.prefix.contains("ab"));
    assert!(info.prefix.contains("cd"));
    assert!(info.prefix.contains(""));
}
