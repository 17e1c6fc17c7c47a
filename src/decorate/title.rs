//! Conventional-commit tag extraction from pull request titles.

use std::sync::LazyLock;

use regex::Regex;

use crate::decorate::error::DecorateError;

/// Conventional-commit tags recognized by this tool.
///
/// Documentation vocabulary only: the parser extracts whatever tag the title
/// carries and passes it through, recognized or not.
pub const TAGS: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BRACKET_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)[(\[](.*)[)\]](.*)").unwrap());

/// A raw title split into its classification tag and plain remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Lower-cased, trimmed classification tag (e.g. `feat`, `fix`).
    pub tag: String,
    /// Title text with the tag and its delimiters removed.
    pub plain_title: String,
}

/// Splits a raw title into a tag and a plain title.
///
/// Two mutually exclusive grammars, selected by the presence of a literal
/// `:` anywhere in the title:
///
/// - colon grammar (`:` present): the tag is everything before the first
///   colon, the plain title everything after it with leading spaces trimmed;
/// - bracket grammar (no `:`): the tag is the content of the first
///   `(...)`/`[...]` group, the plain title the surrounding text.
///
/// A title satisfying neither grammar fails with
/// [`DecorateError::PatternMismatch`]; callers must not proceed to
/// decoration in that case.
pub fn parse_title(title: &str) -> Result<ParsedTitle, DecorateError> {
    if let Some((tag, rest)) = title.split_once(':') {
        return Ok(ParsedTitle {
            tag: tag.trim().to_lowercase(),
            plain_title: rest.trim_start().to_string(),
        });
    }

    let captures = BRACKET_TITLE_PATTERN
        .captures(title)
        .ok_or_else(|| DecorateError::PatternMismatch(title.to_string()))?;

    let plain = format!("{}{}", &captures[1], &captures[3]);
    Ok(ParsedTitle {
        tag: captures[2].trim().to_lowercase(),
        plain_title: plain.trim().to_string(),
    })
}
