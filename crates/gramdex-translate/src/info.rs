//! Per-node analysis record.
//!
//! A `RegexInfo` summarizes one regex subexpression: either the complete
//! finite set of strings it matches (`exact`), or bounded approximations of
//! how its matches can begin and end (`prefix`/`suffix`), plus whether it
//! can match the empty string and the boolean query already known to be
//! implied by it. Records are created fresh per node, combined into the
//! parent's record, and discarded; nothing is shared between nodes.

use gramdex_core::{BooleanQuery, LiteralSet, MAX_EXACT_SIZE, MAX_SET_SIZE, Orientation};

/// Analysis summary for one node of the regex AST.
///
/// Invariant: `exact` and `prefix`/`suffix` are mutually exclusive. While
/// `exact` is populated the prefix/suffix sets stay empty; once `exact`
/// grows past [`MAX_EXACT_SIZE`] or its strings get long enough to gram,
/// [`RegexInfo::simplify`] flushes it into prefix/suffix form and folds its
/// gram constraints into `query`.
#[derive(Clone, Debug)]
pub(crate) struct RegexInfo {
    /// Complete set of strings this node matches, when small and finite.
    pub exact: LiteralSet,
    /// Known possible prefixes of matched strings.
    pub prefix: LiteralSet,
    /// Known possible suffixes of matched strings.
    pub suffix: LiteralSet,
    /// Whether this node can match the empty string.
    pub emptyable: bool,
    /// Boolean query already implied by this node, independent of the sets.
    pub query: BooleanQuery,
}

impl RegexInfo {
    /// A node that matches nothing (error-recovery cases).
    pub fn match_none() -> Self {
        RegexInfo {
            exact: LiteralSet::new(),
            prefix: LiteralSet::new(),
            suffix: LiteralSet::new(),
            emptyable: false,
            query: BooleanQuery::None,
        }
    }

    /// A node that matches exactly the empty string (anchors, `\b`, `()`).
    pub fn empty_string() -> Self {
        RegexInfo {
            exact: LiteralSet::singleton(""),
            prefix: LiteralSet::new(),
            suffix: LiteralSet::new(),
            emptyable: true,
            query: BooleanQuery::All,
        }
    }

    /// A node that matches any single character: unknown prefix/suffix,
    /// not emptyable, no constraint derivable.
    pub fn any_char() -> Self {
        RegexInfo {
            exact: LiteralSet::new(),
            prefix: LiteralSet::any(),
            suffix: LiteralSet::any(),
            emptyable: false,
            query: BooleanQuery::All,
        }
    }

    /// The maximally coarse node: matches anything, including nothing.
    pub fn match_any() -> Self {
        RegexInfo {
            emptyable: true,
            ..Self::any_char()
        }
    }

    /// A node matching exactly the given finite set of strings.
    pub fn exactly(exact: LiteralSet) -> Self {
        RegexInfo {
            emptyable: exact.contains(""),
            exact,
            prefix: LiteralSet::new(),
            suffix: LiteralSet::new(),
            query: BooleanQuery::All,
        }
    }

    /// Keep the record within its precision bounds.
    ///
    /// Flushes `exact` into prefix/suffix form when it is too big or its
    /// strings are long enough to contribute grams (`force` lowers the
    /// length threshold to exactly one gram, used once at the end of a
    /// translation so wholly-literal patterns still yield constraints).
    /// With `exact` empty, both prefix and suffix sets are folded and
    /// trimmed via [`RegexInfo::simplify_set`].
    pub fn simplify(&mut self, force: bool, gram_len: usize) {
        if !self.exact.is_empty()
            && (self.exact.len() > MAX_EXACT_SIZE
                || (force && self.exact.min_len() >= gram_len)
                || self.exact.min_len() >= gram_len + 1)
        {
            let exact = std::mem::take(&mut self.exact);
            self.add_constraint(&exact, gram_len);
            for s in exact.iter() {
                let n = s.chars().count();
                if n < gram_len {
                    self.prefix.insert(s.to_string());
                    self.suffix.insert(s.to_string());
                } else {
                    self.prefix.insert(s.chars().take(gram_len - 1).collect());
                    self.suffix
                        .insert(s.chars().skip(n - (gram_len - 1)).collect());
                }
            }
        }

        if self.exact.is_empty() {
            self.simplify_set(Orientation::Prefix, gram_len);
            self.simplify_set(Orientation::Suffix, gram_len);
        }
    }

    /// Fold the set's gram constraints into `query`, then trim it: strings
    /// are cut to at most `gram_len - 1` characters (front for prefixes,
    /// back for suffixes), repeating with shorter cuts while the set stays
    /// over half of [`MAX_SET_SIZE`].
    fn simplify_set(&mut self, orientation: Orientation, gram_len: usize) {
        let mut set = match orientation {
            Orientation::Prefix => std::mem::take(&mut self.prefix),
            Orientation::Suffix => std::mem::take(&mut self.suffix),
        };

        self.add_constraint(&set, gram_len);

        let mut n = gram_len;
        while n == gram_len || 2 * set.len() > MAX_SET_SIZE {
            set = set.trimmed(n - 1, orientation);
            if n == 1 {
                break;
            }
            n -= 1;
        }

        match orientation {
            Orientation::Prefix => self.prefix = set,
            Orientation::Suffix => self.suffix = set,
        }
    }

    /// Tighten `query` with a set of strings known to be required.
    pub fn add_constraint(&mut self, literals: &LiteralSet, gram_len: usize) {
        let query = std::mem::replace(&mut self.query, BooleanQuery::All);
        self.query = query.combine(literals, gram_len);
    }
}
