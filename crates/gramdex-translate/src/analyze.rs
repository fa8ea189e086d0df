//! Recursive analysis of the regex HIR.
//!
//! `Translator` walks the AST produced by `regex-syntax` and computes a
//! [`RegexInfo`] per node, bottom-up. Each AST kind has a defined rule; the
//! coarse fallback for anything unconstrained is "match anything", never an
//! error, so the analysis is total over the grammar.
//!
//! The gram length is carried by the `Translator` itself: no global state,
//! so concurrent translations with different gram lengths never interfere.

use regex_syntax::hir::{Class, Hir, HirKind, Repetition};

use gramdex_core::{LiteralSet, MAX_SET_SIZE, SetOverflow};

use crate::info::RegexInfo;

/// A character class wider than this many code points is treated as
/// "any character"; enumerating it would cost more precision than it buys.
const MAX_CLASS_SIZE: u32 = 100;

/// One translation pass over a regex AST, parameterized by gram length.
pub(crate) struct Translator {
    gram_len: usize,
}

impl Translator {
    pub fn new(gram_len: usize) -> Self {
        Translator { gram_len }
    }

    /// Compute the [`RegexInfo`] for one AST node.
    ///
    /// Recursion depth equals AST depth, which the parser's nest limit
    /// already bounds.
    pub fn analyze(&self, hir: &Hir) -> RegexInfo {
        match hir.kind() {
            // `()` and zero-width assertions (anchors, word boundaries)
            // match exactly the empty string.
            HirKind::Empty | HirKind::Look(_) => RegexInfo::empty_string(),
            HirKind::Literal(lit) => self.literal(&lit.0),
            HirKind::Class(class) => self.class(class),
            HirKind::Repetition(rep) => self.repetition(rep),
            HirKind::Capture(cap) => {
                let mut info = self.analyze(&cap.sub);
                info.simplify(false, self.gram_len);
                info
            }
            HirKind::Concat(subs) => self.fold(subs, Self::concat, RegexInfo::match_none()),
            HirKind::Alternation(subs) => self.fold(subs, Self::alternate, RegexInfo::match_any()),
        }
    }

    /// A literal run matches exactly one string. The index stores
    /// lower-cased grams, so the literal is lower-cased here, at the point
    /// it enters a set.
    fn literal(&self, bytes: &[u8]) -> RegexInfo {
        let text = String::from_utf8_lossy(bytes);
        if text.is_empty() {
            return RegexInfo::empty_string();
        }
        let mut info = RegexInfo::exactly(LiteralSet::singleton(text.to_lowercase()));
        info.simplify(false, self.gram_len);
        info
    }

    /// A small character class is a finite exact set of one-character
    /// strings; a wide one carries no usable information.
    fn class(&self, class: &Class) -> RegexInfo {
        match class {
            Class::Unicode(cls) => {
                self.class_ranges(cls.ranges().iter().map(|r| (r.start(), r.end())))
            }
            Class::Bytes(cls) => {
                self.class_ranges(cls.ranges().iter().map(|r| (r.start() as char, r.end() as char)))
            }
        }
    }

    fn class_ranges(&self, ranges: impl Iterator<Item = (char, char)>) -> RegexInfo {
        let mut exact = LiteralSet::new();
        let mut width: u32 = 0;
        let mut seen_any = false;
        for (lo, hi) in ranges {
            seen_any = true;
            width += hi as u32 - lo as u32;
            if width > MAX_CLASS_SIZE {
                return RegexInfo::match_any();
            }
            for c in lo..=hi {
                exact.insert(c.to_lowercase().collect());
            }
        }
        if !seen_any {
            // The empty class matches nothing (the parser's "fail" node).
            return RegexInfo::match_none();
        }
        let mut info = RegexInfo::exactly(exact);
        info.simplify(false, self.gram_len);
        info
    }

    fn repetition(&self, rep: &Repetition) -> RegexInfo {
        if rep.min == 0 {
            if rep.max == Some(1) {
                // `x?`: either the child or the empty string.
                return self.alternate(self.analyze(&rep.sub), RegexInfo::empty_string());
            }
            // `x*` and `x{0,n}`: zero repetitions are allowed, so nothing
            // about the child is guaranteed to appear.
            return RegexInfo::match_any();
        }
        // `x+` and `x{m,n}` with m >= 1: same as the child except that the
        // repetition count is unknown, so no single exact string can be
        // asserted; the child's exact strings survive only as possible
        // prefixes and suffixes.
        let mut info = self.analyze(&rep.sub);
        if !info.exact.is_empty() {
            info.prefix = info.exact.clone();
            info.suffix = std::mem::take(&mut info.exact);
        }
        info.simplify(false, self.gram_len);
        info
    }

    /// Combine two sibling infos for the alternation `x|y`.
    fn alternate(&self, mut x: RegexInfo, mut y: RegexInfo) -> RegexInfo {
        let g = self.gram_len;
        let mut exact = LiteralSet::new();
        let mut prefix = LiteralSet::new();
        let mut suffix = LiteralSet::new();

        if !x.exact.is_empty() && !y.exact.is_empty() {
            exact = x.exact.union(&y.exact);
        } else if !x.exact.is_empty() {
            // Only the left branch is an exact set: its strings become
            // candidate prefixes/suffixes of the whole alternation, and its
            // own query is tightened first so the literal branch's
            // constraint is not lost in the disjunction below.
            let x_exact = std::mem::take(&mut x.exact);
            prefix = x_exact.union(&y.prefix);
            suffix = x_exact.union(&y.suffix);
            x.add_constraint(&x_exact, g);
        } else if !y.exact.is_empty() {
            let y_exact = std::mem::take(&mut y.exact);
            prefix = x.prefix.union(&y_exact);
            suffix = x.suffix.union(&y_exact);
            y.add_constraint(&y_exact, g);
        } else {
            prefix = x.prefix.union(&y.prefix);
            suffix = x.suffix.union(&y.suffix);
        }

        let mut xy = RegexInfo {
            exact,
            prefix,
            suffix,
            emptyable: x.emptyable || y.emptyable,
            // Satisfying either branch satisfies the alternation: this is
            // the one place the accumulated queries are OR-ed, not AND-ed.
            query: x.query.or(y.query),
        };
        xy.simplify(false, g);
        xy
    }

    /// Combine two sibling infos for the concatenation `xy`.
    fn concat(&self, x: RegexInfo, y: RegexInfo) -> RegexInfo {
        let g = self.gram_len;
        let RegexInfo {
            exact: x_exact,
            prefix: x_prefix,
            suffix: x_suffix,
            emptyable: x_emptyable,
            query: x_query,
        } = x;
        let RegexInfo {
            exact: y_exact,
            prefix: y_prefix,
            suffix: y_suffix,
            emptyable: y_emptyable,
            query: y_query,
        } = y;

        let mut exact = LiteralSet::new();
        let mut prefix = LiteralSet::new();
        let mut suffix = LiteralSet::new();
        let mut query = x_query.and(y_query);

        if !x_exact.is_empty() && !y_exact.is_empty() {
            match x_exact.cross(&y_exact) {
                Ok(product) => exact = product,
                Err(SetOverflow) => {
                    // Too many combinations to track exactly; the conjoined
                    // query above is all that survives.
                    prefix = LiteralSet::any();
                    suffix = LiteralSet::any();
                }
            }
        } else {
            if !x_exact.is_empty() {
                prefix = x_exact
                    .cross(&y_prefix)
                    .unwrap_or_else(|SetOverflow| LiteralSet::any());
            } else {
                prefix = x_prefix;
                if x_emptyable {
                    // The concatenation can start at `y` when `x` vanishes.
                    prefix = prefix.union(&y_prefix);
                }
            }
            if !y_exact.is_empty() {
                suffix = x_suffix
                    .cross(&y_exact)
                    .unwrap_or_else(|SetOverflow| LiteralSet::any());
            } else {
                suffix = y_suffix;
                if y_emptyable {
                    suffix = suffix.union(&x_suffix);
                }
            }
        }

        // A gram can straddle the boundary: when neither side is exact but
        // x's suffixes plus y's prefixes are together long enough to span a
        // full gram, their cross product is a required set. The length check
        // is load-bearing; asserting anything shorter than one gram would be
        // unsound.
        if x_exact.is_empty()
            && y_exact.is_empty()
            && x_suffix.len() <= MAX_SET_SIZE
            && y_prefix.len() <= MAX_SET_SIZE
            && x_suffix.min_len() + y_prefix.min_len() >= g
        {
            if let Ok(bridge) = x_suffix.cross(&y_prefix) {
                query = query.combine(&bridge, g);
            }
        }

        let mut xy = RegexInfo {
            exact,
            prefix,
            suffix,
            emptyable: false,
            query,
        };
        xy.simplify(false, g);
        xy
    }

    /// Left-to-right pairwise reduction of a node's subexpression list.
    /// Iterative, so sibling count never deepens the call stack.
    fn fold<F>(&self, subs: &[Hir], combine: F, identity: RegexInfo) -> RegexInfo
    where
        F: Fn(&Self, RegexInfo, RegexInfo) -> RegexInfo,
    {
        let mut iter = subs.iter();
        let Some(first) = iter.next() else {
            return identity;
        };
        let mut acc = self.analyze(first);
        for sub in iter {
            acc = combine(self, acc, self.analyze(sub));
        }
        acc
    }
}
