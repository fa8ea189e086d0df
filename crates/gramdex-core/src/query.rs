//! The n-gram boolean query tree.
//!
//! A query is an AND/OR expression over gram literals plus the two absorbing
//! constants `All` and `None`. The tree is immutable: combinators always
//! build new nodes, so sub-queries can be shared freely between sibling
//! computations during analysis. Simplification (constant absorption,
//! flattening of nested AND/AND and OR/OR, dedup) happens eagerly on every
//! construction, never as a separate pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::set::{LiteralSet, MAX_SET_SIZE, grams_of};

/// Characters the index's query syntax treats specially inside a literal.
const INDEX_SPECIAL: &[char] = &[
    '\\', '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '/', '&', '|',
];

/// A boolean query over grams, evaluated against an inverted index to prune
/// documents that cannot match a regex.
///
/// `All` matches every document and `None` matches no document; they are the
/// identities/absorbers of [`BooleanQuery::and`] and [`BooleanQuery::or`].
/// `And`/`Or` children are flattened, deduplicated, and kept in a canonical
/// order so that structural equality means semantic equality for trees built
/// through the combinators.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BooleanQuery {
    /// Matches everything; no constraint derivable.
    All,
    /// Matches nothing.
    None,
    /// The gram must be present in the document.
    Gram(String),
    /// Every child query must be satisfied.
    And(Vec<BooleanQuery>),
    /// At least one child query must be satisfied.
    Or(Vec<BooleanQuery>),
}

impl BooleanQuery {
    /// Conjunction with eager simplification: `All` is the identity, `None`
    /// absorbs, nested `And` children are flattened.
    pub fn and(self, other: BooleanQuery) -> BooleanQuery {
        match (self, other) {
            (BooleanQuery::All, q) | (q, BooleanQuery::All) => q,
            (BooleanQuery::None, _) | (_, BooleanQuery::None) => BooleanQuery::None,
            (a, b) => Self::flatten_into(a, b, /* conjunction */ true),
        }
    }

    /// Disjunction, symmetric to [`BooleanQuery::and`]: `None` is the
    /// identity, `All` absorbs.
    pub fn or(self, other: BooleanQuery) -> BooleanQuery {
        match (self, other) {
            (BooleanQuery::None, q) | (q, BooleanQuery::None) => q,
            (BooleanQuery::All, _) | (_, BooleanQuery::All) => BooleanQuery::All,
            (a, b) => Self::flatten_into(a, b, /* conjunction */ false),
        }
    }

    fn flatten_into(a: BooleanQuery, b: BooleanQuery, conjunction: bool) -> BooleanQuery {
        let mut children: Vec<BooleanQuery> = Vec::new();
        for q in [a, b] {
            match (conjunction, q) {
                (true, BooleanQuery::And(sub)) => children.extend(sub),
                (false, BooleanQuery::Or(sub)) => children.extend(sub),
                (_, q) => children.push(q),
            }
        }
        children.sort();
        children.dedup();
        if children.len() == 1 {
            return children.remove(0);
        }
        if conjunction {
            BooleanQuery::And(children)
        } else {
            BooleanQuery::Or(children)
        }
    }

    /// Tighten this query with a set of literal strings known to be required:
    /// `self AND (OR over strings of (AND over each string's grams))`.
    ///
    /// Returns `self` unchanged when no sound constraint is derivable: the
    /// set is empty, some string is too short to contain a full gram, or the
    /// set is over [`MAX_SET_SIZE`]. A string shorter than one gram poisons
    /// the whole set because that alternative would accept documents without
    /// any particular gram.
    pub fn combine(self, literals: &LiteralSet, gram_len: usize) -> BooleanQuery {
        if literals.is_empty() || literals.min_len() < gram_len || literals.len() > MAX_SET_SIZE {
            return self;
        }
        let mut alternatives = BooleanQuery::None;
        for s in literals.iter() {
            let mut required = BooleanQuery::All;
            for gram in grams_of(s, gram_len) {
                required = required.and(BooleanQuery::Gram(gram));
            }
            alternatives = alternatives.or(required);
        }
        self.and(alternatives)
    }

    /// Evaluate against an index probe: `has_gram` answers whether a gram
    /// occurs in the candidate document.
    pub fn satisfied(&self, has_gram: &dyn Fn(&str) -> bool) -> bool {
        match self {
            BooleanQuery::All => true,
            BooleanQuery::None => false,
            BooleanQuery::Gram(g) => has_gram(g),
            BooleanQuery::And(children) => children.iter().all(|c| c.satisfied(has_gram)),
            BooleanQuery::Or(children) => children.iter().any(|c| c.satisfied(has_gram)),
        }
    }

    /// A copy of the tree with every gram escaped for the index's literal
    /// syntax (each special character prefixed with a backslash).
    pub fn escaped(&self) -> BooleanQuery {
        match self {
            BooleanQuery::All => BooleanQuery::All,
            BooleanQuery::None => BooleanQuery::None,
            BooleanQuery::Gram(g) => BooleanQuery::Gram(escape_literal(g)),
            BooleanQuery::And(children) => {
                BooleanQuery::And(children.iter().map(BooleanQuery::escaped).collect())
            }
            BooleanQuery::Or(children) => {
                BooleanQuery::Or(children.iter().map(BooleanQuery::escaped).collect())
            }
        }
    }
}

fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if INDEX_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for BooleanQuery {
    /// Renders as `(g1 AND g2) OR g3`; composite children are parenthesized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_child(child: &BooleanQuery, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if matches!(child, BooleanQuery::And(_) | BooleanQuery::Or(_)) {
                write!(f, "({child})")
            } else {
                write!(f, "{child}")
            }
        }

        fn write_joined(
            children: &[BooleanQuery],
            op: &str,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, " {op} ")?;
                }
                write_child(child, f)?;
            }
            Ok(())
        }

        match self {
            BooleanQuery::All => write!(f, "ALL"),
            BooleanQuery::None => write!(f, "NONE"),
            BooleanQuery::Gram(g) => write!(f, "{g}"),
            BooleanQuery::And(children) => write_joined(children, "AND", f),
            BooleanQuery::Or(children) => write_joined(children, "OR", f),
        }
    }
}
