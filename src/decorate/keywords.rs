//! Keyword vocabulary construction.
//!
//! Turns a raw newline-separated symbol blob plus a directory listing into a
//! deduplicated set of highlight keywords, ordered longest-first so that a
//! multi-word keyword is matched before any of its substrings.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Noise tokens removed from symbol candidates.
///
/// A portable blend of English filler and identifier noise words. The list is
/// deliberately explicit rather than derived from any language's reserved
/// keywords.
pub const STOPWORDS: &[&str] = &[
    "and", "any", "are", "break", "case", "class", "const", "continue", "default", "delete",
    "else", "enum", "false", "final", "for", "from", "function", "global", "has", "import", "into",
    "lambda", "let", "loop", "match", "new", "none", "not", "null", "other", "pass", "raise",
    "return", "self", "static", "struct", "super", "that", "the", "this", "true", "try", "type",
    "use", "value", "var", "void", "when", "where", "while", "with", "yield",
];

#[allow(clippy::unwrap_used)] // Compile-time constant pattern over a fixed word list
static STOPWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = STOPWORDS.join("|");
    Regex::new(&format!(r"\b({alternation})\b")).unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SPACE_RUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// An immutable, deduplicated keyword vocabulary ordered longest-first.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Builds the keyword set from a raw symbol blob and a filename listing.
    ///
    /// Per-token normalization failures are swallowed: a token the
    /// morphological transforms cannot handle passes through unchanged. The
    /// builder itself never fails.
    pub fn build(symbols: &str, filenames: &[String]) -> Self {
        let mut candidates: Vec<String> = symbols
            .lines()
            .map(tokenize)
            .filter(|token| token.chars().count() > 3)
            .collect();

        // Underscore-joined variants so both "user id" and "user_id" match.
        let underscored: Vec<String> = candidates
            .iter()
            .filter(|token| token.contains(' '))
            .map(|token| token.replace(' ', "_"))
            .collect();
        candidates.extend(underscored);

        let singulars: Vec<String> = candidates.iter().map(|t| singularize(t)).collect();
        candidates.extend(singulars);
        let plurals: Vec<String> = candidates.iter().map(|t| pluralize(t)).collect();
        candidates.extend(plurals);

        candidates.extend(filenames.iter().cloned());

        // Dedup, then order longest-first (lexicographic tie-break) so a
        // keyword is never pre-empted by one of its substrings.
        let unique: BTreeSet<String> = candidates.into_iter().collect();
        let mut keywords: Vec<String> = unique.into_iter().collect();
        keywords.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        debug!(count = keywords.len(), "built keyword set");
        Self(keywords)
    }

    /// Keywords in application order (longest first).
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the keywords in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the set holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Normalizes one raw symbol into a lower-cased, stop-word-free phrase.
fn tokenize(symbol: &str) -> String {
    let humanized = humanize(&underscore(symbol));
    let stripped = STOPWORD_PATTERN.replace_all(&humanized, "");
    SPACE_RUN_PATTERN
        .replace_all(stripped.trim(), " ")
        .to_lowercase()
}

/// Converts camelCase, PascalCase, kebab-case and spaced names to snake_case.
fn underscore(symbol: &str) -> String {
    let chars: Vec<char> = symbol.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' || ch.is_whitespace() {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else if ch.is_uppercase() {
            let boundary = match chars.get(i.wrapping_sub(1)) {
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                // End of an acronym run: "HTTPServer" -> "http_server".
                Some(prev) if prev.is_uppercase() => {
                    chars.get(i + 1).is_some_and(|next| next.is_lowercase())
                }
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out
}

/// Converts a snake_case identifier to lower-cased space-separated words.
///
/// A trailing `_id` suffix is dropped, matching the usual humanization of
/// foreign-key style names.
fn humanize(symbol: &str) -> String {
    let base = symbol.strip_suffix("_id").unwrap_or(symbol);
    base.replace('_', " ").trim().to_lowercase()
}

/// Best-effort English pluralization. Unrecognized shapes come back unchanged.
fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().next_back().is_some_and(is_consonant) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Best-effort English singularization. Unrecognized shapes come back
/// unchanged, never an error.
fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }

    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

fn is_consonant(ch: char) -> bool {
    ch.is_ascii_alphabetic() && !matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_symbols_are_humanized() {
        assert_eq!(tokenize("UserAccount"), "user account");
        assert_eq!(tokenize("retryCount"), "retry count");
    }

    #[test]
    fn kebab_and_snake_case_are_equivalent() {
        assert_eq!(tokenize("user-account"), tokenize("user_account"));
    }

    #[test]
    fn acronym_runs_split_correctly() {
        assert_eq!(underscore("HTTPServer"), "http_server");
        assert_eq!(underscore("parseJSONBody"), "parse_json_body");
    }

    #[test]
    fn trailing_id_suffix_is_dropped() {
        assert_eq!(tokenize("customer_id"), "customer");
    }

    #[test]
    fn stopwords_are_stripped_from_phrases() {
        assert_eq!(tokenize("type_of_payment"), "of payment");
        assert_eq!(tokenize("the_billing_address"), "billing address");
    }

    #[test]
    fn short_tokens_are_discarded() {
        let set = KeywordSet::build("id\nfoo\nuser_account\n", &[]);
        assert!(set.iter().all(|k| k.len() > 3));
        assert!(!set.iter().any(|k| k == "foo"));
    }

    #[test]
    fn underscore_variant_is_added() {
        let set = KeywordSet::build("user_account", &[]);
        assert!(set.iter().any(|k| k == "user account"));
        assert!(set.iter().any(|k| k == "user_account"));
    }

    #[test]
    fn singular_and_plural_forms_are_added() {
        let set = KeywordSet::build("payments", &[]);
        assert!(set.iter().any(|k| k == "payments"));
        assert!(set.iter().any(|k| k == "payment"));
    }

    #[test]
    fn filenames_join_the_set() {
        let files = vec!["main.rs".to_string()];
        let set = KeywordSet::build("", &files);
        assert!(set.iter().any(|k| k == "main.rs"));
    }

    #[test]
    fn set_is_deduplicated() {
        let set = KeywordSet::build("user_account\nuser_account\nUserAccount", &[]);
        let mut seen = std::collections::HashSet::new();
        assert!(set.iter().all(|k| seen.insert(k.clone())));
    }

    #[test]
    fn set_is_ordered_longest_first() {
        let set = KeywordSet::build("username\nuser_profile_pages", &[]);
        let lengths: Vec<usize> = set.iter().map(String::len).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn builder_never_fails_on_garbage() {
        let set = KeywordSet::build("\n\n   \n\u{1f980}\n----", &[]);
        assert!(set.iter().all(|k| k.len() > 3));
    }

    #[test]
    fn pluralize_handles_common_shapes() {
        assert_eq!(pluralize("payment"), "payments");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn singularize_handles_common_shapes() {
        assert_eq!(singularize("payments"), "payment");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("address"), "address");
    }

    #[test]
    fn singularize_and_pluralize_pass_garbage_through() {
        assert_eq!(singularize(""), "");
        assert_eq!(pluralize("\u{1f980}"), "\u{1f980}s");
    }
}
