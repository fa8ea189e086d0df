//! Bounded literal-set arithmetic.
//!
//! The regex analysis tracks three kinds of string sets per node: exact
//! matches, possible prefixes, and possible suffixes. All three are
//! `LiteralSet`s: small ordered sets of lower-cased strings whose operations
//! enforce a cardinality cap. Exceeding the cap is not an error; the caller
//! degrades the derived set to the coarse "anything" set and keeps going,
//! trading precision for soundness.

use std::collections::BTreeSet;

/// Maximum cardinality of an exact-match set before it is flushed into
/// prefix/suffix form.
pub const MAX_EXACT_SIZE: usize = 7;

/// Maximum cardinality of a prefix/suffix set. Also caps cartesian products
/// and the size of a set folded into a query.
pub const MAX_SET_SIZE: usize = 20;

/// Whether a set tracks how matched strings begin or how they end.
///
/// Trimming keeps the front of prefix strings and the back of suffix
/// strings; passing the wrong orientation inverts the set's meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Prefix,
    Suffix,
}

/// A set operation would exceed [`MAX_SET_SIZE`].
///
/// Handled locally by coarsening the derived set; never surfaced past the
/// translator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetOverflow;

/// An ordered set of literal strings with size-bounded operations.
///
/// `BTreeSet` keeps iteration order deterministic, which in turn makes the
/// final query tree deterministic for a given pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiteralSet {
    strings: BTreeSet<String>,
}

impl LiteralSet {
    /// The empty set: no strings are known.
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximally coarse set `{""}`.
    ///
    /// As a prefix or suffix set this says "anything": its minimum length is
    /// zero, so no gram constraint can ever be derived from it.
    pub fn any() -> Self {
        Self::singleton(String::new())
    }

    pub fn singleton(s: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(s.into());
        set
    }

    pub fn insert(&mut self, s: String) {
        self.strings.insert(s);
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn contains(&self, s: &str) -> bool {
        self.strings.contains(s)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    /// Length in characters of the shortest string, or 0 for an empty set.
    pub fn min_len(&self) -> usize {
        self.strings
            .iter()
            .map(|s| s.chars().count())
            .min()
            .unwrap_or(0)
    }

    /// Plain set union.
    pub fn union(&self, other: &LiteralSet) -> LiteralSet {
        let mut strings = self.strings.clone();
        strings.extend(other.strings.iter().cloned());
        LiteralSet { strings }
    }

    /// All pairwise concatenations `a + b`.
    ///
    /// Signals [`SetOverflow`] instead of truncating when the product would
    /// exceed [`MAX_SET_SIZE`]; the caller must fall back to [`LiteralSet::any`]
    /// for the derived set.
    pub fn cross(&self, other: &LiteralSet) -> Result<LiteralSet, SetOverflow> {
        if self.len() * other.len() > MAX_SET_SIZE {
            return Err(SetOverflow);
        }
        let mut out = LiteralSet::new();
        for a in self.iter() {
            for b in other.iter() {
                out.insert(format!("{a}{b}"));
            }
        }
        Ok(out)
    }

    /// Cut every string longer than `max_len` characters down to `max_len`,
    /// keeping the front for prefix sets and the back for suffix sets.
    pub fn trimmed(&self, max_len: usize, orientation: Orientation) -> LiteralSet {
        let mut out = LiteralSet::new();
        for s in self.iter() {
            let n = s.chars().count();
            if n <= max_len {
                out.insert(s.to_string());
            } else {
                let cut = match orientation {
                    Orientation::Prefix => s.chars().take(max_len).collect(),
                    Orientation::Suffix => {
                        let skip = n - max_len;
                        s.chars().skip(skip).collect()
                    }
                };
                out.insert(cut);
            }
        }
        out
    }
}

impl FromIterator<String> for LiteralSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        LiteralSet {
            strings: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for LiteralSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

/// Every contiguous `gram_len`-character window of `text`, in order.
///
/// Returns nothing when the text is shorter than one gram. Windows are
/// character-based, not byte-based, so multi-byte text never splits a
/// code point.
///
/// # Examples
/// ```
/// use gramdex_core::grams_of;
/// assert_eq!(grams_of("abcd", 3), vec!["abc", "bcd"]);
/// assert_eq!(grams_of("ab", 3), Vec::<String>::new());
/// ```
pub fn grams_of(text: &str, gram_len: usize) -> Vec<String> {
    if gram_len == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < gram_len {
        return Vec::new();
    }
    chars
        .windows(gram_len)
        .map(|w| w.iter().collect())
        .collect()
}
