//! Unit tests for bounded literal-set arithmetic.

use crate::set::{LiteralSet, MAX_SET_SIZE, Orientation, grams_of};

#[test]
fn union_is_plain_set_union() {
    let a: LiteralSet = ["abc", "def"].into_iter().collect();
    let b: LiteralSet = ["def", "ghi"].into_iter().collect();
    let u = a.union(&b);
    assert_eq!(u.len(), 3);
    assert!(u.contains("abc"));
    assert!(u.contains("def"));
    assert!(u.contains("ghi"));
}

#[test]
fn cross_concatenates_pairwise() {
    let a: LiteralSet = ["a", "b"].into_iter().collect();
    let b: LiteralSet = ["x", "y"].into_iter().collect();
    let product = a.cross(&b).unwrap();
    let got: Vec<&str> = product.iter().collect();
    assert_eq!(got, vec!["ax", "ay", "bx", "by"]);
}

#[test]
fn cross_with_empty_set_is_empty() {
    let a: LiteralSet = ["a", "b"].into_iter().collect();
    assert!(a.cross(&LiteralSet::new()).unwrap().is_empty());
}

#[test]
fn cross_signals_overflow_instead_of_truncating() {
    let a: LiteralSet = (0..7).map(|i| i.to_string()).collect();
    let b: LiteralSet = (0..7).map(|i| format!("x{i}")).collect();
    assert!(7 * 7 > MAX_SET_SIZE);
    assert!(a.cross(&b).is_err());
}

#[test]
fn min_len_counts_characters_not_bytes() {
    let set: LiteralSet = ["äöü", "abcd"].into_iter().collect();
    assert_eq!(set.min_len(), 3);
}

#[test]
fn min_len_of_empty_set_is_zero() {
    assert_eq!(LiteralSet::new().min_len(), 0);
    assert_eq!(LiteralSet::any().min_len(), 0);
}

#[test]
fn trimmed_keeps_front_of_prefixes() {
    let set: LiteralSet = ["abcd", "ab", "x"].into_iter().collect();
    let t = set.trimmed(2, Orientation::Prefix);
    let got: Vec<&str> = t.iter().collect();
    assert_eq!(got, vec!["ab", "x"]);
}

#[test]
fn trimmed_keeps_back_of_suffixes() {
    let set: LiteralSet = ["abcd", "cd", "x"].into_iter().collect();
    let t = set.trimmed(2, Orientation::Suffix);
    let got: Vec<&str> = t.iter().collect();
    assert_eq!(got, vec!["cd", "x"]);
}

#[test]
fn trimmed_to_zero_collapses_to_empty_string() {
    let set: LiteralSet = ["abc", "de"].into_iter().collect();
    let t = set.trimmed(0, Orientation::Prefix);
    assert_eq!(t.len(), 1);
    assert!(t.contains(""));
}

#[test]
fn grams_of_slides_a_window() {
    assert_eq!(grams_of("abcde", 3), vec!["abc", "bcd", "cde"]);
    assert_eq!(grams_of("abc", 3), vec!["abc"]);
}

#[test]
fn grams_of_short_text_is_empty() {
    assert!(grams_of("ab", 3).is_empty());
    assert!(grams_of("", 3).is_empty());
}

#[test]
fn grams_of_respects_gram_length() {
    assert_eq!(grams_of("abcd", 4), vec!["abcd"]);
    assert_eq!(grams_of("abcd", 2), vec!["ab", "bc", "cd"]);
}
