//! Translation entry points.

use regex_syntax::ParserBuilder;

use gramdex_core::BooleanQuery;

use crate::analyze::Translator;
use crate::{Error, Result};

/// Default gram length, matching the usual trigram index.
pub const DEFAULT_GRAM_LENGTH: usize = 3;

/// Translate a regex into a boolean query over grams of the default length.
///
/// The query is an over-approximation: every string matching the regex
/// satisfies it, but not necessarily vice versa.
///
/// # Examples
/// ```
/// use gramdex_translate::translate;
/// let query = translate("abc|xyz").unwrap();
/// assert_eq!(query.to_string(), "abc OR xyz");
/// ```
pub fn translate(regex: &str) -> Result<BooleanQuery> {
    translate_with_gram_length(regex, DEFAULT_GRAM_LENGTH)
}

/// Translate a regex into a boolean query over grams of a custom length.
///
/// `gram_len` must match the length the target index was built with; a
/// constraint over the wrong length would be meaningless to the executor.
pub fn translate_with_gram_length(regex: &str, gram_len: usize) -> Result<BooleanQuery> {
    if gram_len == 0 {
        return Err(Error::InvalidGramLength(gram_len));
    }

    // The inverted index stores lower-cased grams, so the pattern is
    // lower-cased before anything else sees it.
    let lowered = regex.to_lowercase();

    // The parser's nest limit bounds AST depth, and with it our recursion.
    let hir = ParserBuilder::new()
        .utf8(true)
        .build()
        .parse(&lowered)
        .map_err(|source| Error::InvalidRegex {
            pattern: regex.to_string(),
            source: Box::new(source),
        })?;

    let translator = Translator::new(gram_len);
    let mut info = translator.analyze(&hir);
    // Force-fold any remaining exact set so a wholly-literal pattern yields
    // real gram constraints instead of an unconstrained ALL.
    info.simplify(true, gram_len);

    Ok(info.query.escaped())
}
