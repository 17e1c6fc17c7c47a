//! Inline-code decoration transforms.
//!
//! Every transform here is a pure function of its inputs and never fails:
//! malformed input comes back unchanged in the worst case.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`*([0-9]+[0-9.\-%$,]*)`*").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static DEPENDABOT_REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dependabot/\w+/(\w+)-[.\d]+").unwrap());

/// Returns true if the title looks like a dependency-bump pull request.
pub fn is_bump(title: &str) -> bool {
    title.to_lowercase().contains("bump")
}

/// Wraps every numeric token in exactly one pair of inline-code markers.
///
/// A token is a maximal run starting with a digit and continuing over digits,
/// `.`, `-`, `%`, `$` and `,` (versions, percentages, prices). Existing
/// markers around the token are consumed, so the transform is idempotent.
pub fn decorate_numbers(text: &str) -> String {
    NUMBER_PATTERN.replace_all(text, "`$1`").into_owned()
}

/// Wraps every occurrence of a collected filename in inline-code markers.
///
/// All filenames are joined into a single alternation, ordered longest-first
/// so that a filename never shadows another one it is a prefix of.
pub fn decorate_filenames<S: AsRef<str>>(text: &str, filenames: &[S]) -> String {
    if filenames.is_empty() {
        return text.to_string();
    }

    let mut candidates: Vec<&str> = filenames.iter().map(AsRef::as_ref).collect();
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = candidates
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&format!("`*({alternation})`*")) {
        Ok(pattern) => pattern.replace_all(text, "`$1`").into_owned(),
        Err(error) => {
            warn!(%error, "filename pattern failed to compile, leaving text unchanged");
            text.to_string()
        }
    }
}

/// Wraps every whole-word occurrence of each keyword in inline-code markers.
///
/// Keywords are applied in the order given (the keyword set is ordered
/// longest-first). Occurrences already adjacent to a marker are left alone,
/// so text is never double-wrapped. A keyword whose pattern fails to compile
/// is logged and skipped; a single bad keyword never aborts the batch.
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let mut highlighted = text.to_string();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if keyword.is_empty() {
            continue;
        }

        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(error) => {
                warn!(keyword, %error, "skipping keyword with invalid pattern");
                continue;
            }
        };

        highlighted = wrap_matches(&highlighted, &regex);
    }

    highlighted
}

/// Wraps each match in markers unless it already touches one.
///
/// The regex crate has no lookaround, so marker adjacency is checked against
/// the characters surrounding each match instead.
fn wrap_matches(text: &str, regex: &Regex) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for found in regex.find_iter(text) {
        let before = text[..found.start()].chars().next_back();
        let after = text[found.end()..].chars().next();

        out.push_str(&text[last..found.start()]);
        if before == Some('`') || after == Some('`') {
            out.push_str(found.as_str());
        } else {
            out.push('`');
            out.push_str(found.as_str());
            out.push('`');
        }
        last = found.end();
    }

    out.push_str(&text[last..]);
    out
}

/// Decorates the title of a dependency-bump pull request.
///
/// Applies number decoration, then highlights the dependency name extracted
/// from a `dependabot/<ecosystem>/<name>-<version>` head ref. Head refs that
/// do not match the dependabot shape leave the title number-decorated only.
pub fn decorate_bump(title: &str, head_ref: &str) -> String {
    let decorated = decorate_numbers(title);

    match DEPENDABOT_REF_PATTERN.captures(head_ref) {
        Some(captures) => {
            let dep_name = &captures[1];
            debug!(dep_name, "highlighting bumped dependency");
            highlight(&decorated, &[dep_name])
        }
        None => decorated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_wrapped_in_markers() {
        assert_eq!(decorate_numbers("retry 42 times"), "retry `42` times");
    }

    #[test]
    fn version_strings_are_wrapped_as_one_token() {
        assert_eq!(
            decorate_numbers("from 4.17.15 to 4.17.21"),
            "from `4.17.15` to `4.17.21`"
        );
    }

    #[test]
    fn already_marked_numbers_stay_single_marked() {
        assert_eq!(decorate_numbers("add `42` retries"), "add `42` retries");
    }

    #[test]
    fn number_decoration_is_idempotent() {
        let once = decorate_numbers("95% of 1,000 requests in 2.5s");
        assert_eq!(decorate_numbers(&once), once);
    }

    #[test]
    fn filenames_are_wrapped() {
        let files = ["main.rs".to_string(), "Cargo.toml".to_string()];
        assert_eq!(
            decorate_filenames("update main.rs and Cargo.toml", &files),
            "update `main.rs` and `Cargo.toml`"
        );
    }

    #[test]
    fn longer_filename_wins_over_its_prefix() {
        // "config" must not pre-empt "config.toml" in the alternation.
        let files = ["config".to_string(), "config.toml".to_string()];
        assert_eq!(
            decorate_filenames("tweak config.toml", &files),
            "tweak `config.toml`"
        );
    }

    #[test]
    fn filename_decoration_without_files_is_identity() {
        let files: [&str; 0] = [];
        assert_eq!(decorate_filenames("nothing to do", &files), "nothing to do");
    }

    #[test]
    fn marked_filenames_stay_single_marked() {
        let files = ["main.rs"];
        assert_eq!(
            decorate_filenames("see `main.rs` here", &files),
            "see `main.rs` here"
        );
    }

    #[test]
    fn keywords_are_highlighted_whole_word() {
        let highlighted = highlight("update the user record", &["user"]);
        assert_eq!(highlighted, "update the `user` record");
    }

    #[test]
    fn longest_keyword_wins_over_substring() {
        // Longest-first ordering: "username" must be applied before "user".
        let highlighted = highlight("update username field", &["username", "user"]);
        assert_eq!(highlighted, "update `username` field");
    }

    #[test]
    fn marked_keywords_are_not_double_wrapped() {
        let highlighted = highlight("the `user` record", &["user"]);
        assert_eq!(highlighted, "the `user` record");
    }

    #[test]
    fn highlight_without_occurrences_is_identity() {
        let highlighted = highlight("nothing relevant here", &["user", "payment"]);
        assert_eq!(highlighted, "nothing relevant here");
    }

    #[test]
    fn bump_title_highlights_dependency_and_versions() {
        let decorated = decorate_bump(
            "Bump lodash from 4.17.15 to 4.17.21",
            "dependabot/npm_and_yarn/lodash-4.17.21",
        );
        assert_eq!(decorated, "Bump `lodash` from `4.17.15` to `4.17.21`");
    }

    #[test]
    fn bump_with_unrecognized_ref_only_decorates_numbers() {
        let decorated = decorate_bump("Bump lodash from 4.17.15 to 4.17.21", "feature/whatever");
        assert_eq!(decorated, "Bump lodash from `4.17.15` to `4.17.21`");
    }

    #[test]
    fn is_bump_is_case_insensitive() {
        assert!(is_bump("Bump serde to 1.0"));
        assert!(is_bump("chore: BUMP deps"));
        assert!(!is_bump("fix: rough road"));
    }

    #[test]
    fn partially_marked_keyword_is_left_alone() {
        // A backtick on either side counts as already marked.
        assert_eq!(highlight("`user and user", &["user"]), "`user and `user`");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn number_decoration_idempotent(s in "[ a-z0-9.`%$,-]{0,60}") {
                let once = decorate_numbers(&s);
                prop_assert_eq!(decorate_numbers(&once), once);
            }

            #[test]
            fn highlight_identity_without_keyword(s in "[ a-z]{0,60}") {
                // The keyword cannot occur: text has no digits.
                let out = highlight(&s, &["keyword42"]);
                prop_assert_eq!(out, s);
            }

            #[test]
            fn highlight_is_idempotent(s in "( |user|name|username){0,10}") {
                let keywords = ["username", "user", "name"];
                let once = highlight(&s, &keywords);
                prop_assert_eq!(highlight(&once, &keywords), once);
            }
        }
    }
}
