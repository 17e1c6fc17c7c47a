//! Decoration pipeline orchestration.

use tracing::{debug, info};

use crate::decorate::error::DecorateError;
use crate::decorate::keywords::KeywordSet;
use crate::decorate::text::{
    decorate_bump, decorate_filenames, decorate_numbers, highlight, is_bump,
};
use crate::decorate::title::parse_title;
use crate::github::PullRequest;

/// The final decorated title/body pair for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedResult {
    /// Decorated title, `tag: subject` shaped.
    pub title: String,
    /// Decorated body.
    pub body: String,
}

/// Runs the full decoration pipeline over one pull request.
///
/// Parses the title, branches on bump detection, and applies the decoration
/// chain to title and body. Dependency-bump pull requests get a
/// number-and-dependency-only title treatment and their machine-generated
/// body passes through untouched.
///
/// A title matching neither grammar is fatal for the run; per-keyword
/// highlighting failures are recovered inside [`highlight`]. Decoration never
/// erases content: an empty decorated string falls back to the original.
pub fn decorate_pull_request(
    pull_request: &PullRequest,
    keywords: &KeywordSet,
    filenames: &[String],
) -> Result<DecoratedResult, DecorateError> {
    let parsed = parse_title(&pull_request.title)?;
    debug!(tag = %parsed.tag, plain_title = %parsed.plain_title, "parsed title");

    let (title, body) = if is_bump(&parsed.plain_title) {
        info!("dependency bump detected, decorating title only");
        let decorated = decorate_bump(&parsed.plain_title, &pull_request.head_ref);
        (
            format!("{}: {}", parsed.tag, decorated),
            pull_request.body.clone(),
        )
    } else {
        let plain = decorate_numbers(&parsed.plain_title);
        let plain = decorate_filenames(&plain, filenames);
        (
            format!("{}: {}", parsed.tag, highlight(&plain, keywords.as_slice())),
            highlight(&pull_request.body, keywords.as_slice()),
        )
    };

    // Decoration must never erase content.
    let title = non_empty_or(title, &pull_request.title);
    let body = non_empty_or(body, &pull_request.body);

    Ok(DecoratedResult { title, body })
}

fn non_empty_or(decorated: String, original: &str) -> String {
    if decorated.is_empty() {
        original.to_string()
    } else {
        decorated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_request(title: &str, body: &str, head_ref: &str) -> PullRequest {
        PullRequest {
            title: title.to_string(),
            body: body.to_string(),
            head_ref: head_ref.to_string(),
        }
    }

    #[test]
    fn standard_path_decorates_title_and_body() {
        let pr = pull_request(
            "feat: add username validation",
            "The username check now runs first.",
            "feature/username-validation",
        );
        let keywords = KeywordSet::build("username", &[]);

        let result = decorate_pull_request(&pr, &keywords, &[]).unwrap();
        assert_eq!(result.title, "feat: add `username` validation");
        assert_eq!(result.body, "The `username` check now runs first.");
    }

    #[test]
    fn numbers_and_filenames_are_decorated_in_title() {
        let pr = pull_request(
            "fix: retry main.rs parsing 3 times",
            "",
            "fix/retry-parsing",
        );
        let keywords = KeywordSet::build("", &[]);
        let files = vec!["main.rs".to_string()];

        let result = decorate_pull_request(&pr, &keywords, &files).unwrap();
        assert_eq!(result.title, "fix: retry `main.rs` parsing `3` times");
    }

    #[test]
    fn bump_path_decorates_title_and_leaves_body_alone() {
        let pr = pull_request(
            "chore: Bump lodash from 4.17.15 to 4.17.21",
            "Bumps [lodash](https://github.com/lodash/lodash) from 4.17.15 to 4.17.21.",
            "dependabot/npm_and_yarn/lodash-4.17.21",
        );
        let keywords = KeywordSet::build("lodash_helpers", &[]);

        let result = decorate_pull_request(&pr, &keywords, &[]).unwrap();
        assert_eq!(
            result.title,
            "chore: Bump `lodash` from `4.17.15` to `4.17.21`"
        );
        assert_eq!(result.body, pr.body);
    }

    #[test]
    fn bracket_title_goes_through_the_standard_path() {
        let pr = pull_request("[fix] drop stale user_record entry", "", "fix/stale-record");
        let keywords = KeywordSet::build("user_record", &[]);

        let result = decorate_pull_request(&pr, &keywords, &[]).unwrap();
        assert_eq!(result.title, "fix: drop stale `user_record` entry");
    }

    #[test]
    fn unparseable_title_is_fatal() {
        let pr = pull_request("random text no delimiter", "body", "main");
        let keywords = KeywordSet::build("", &[]);

        let err = decorate_pull_request(&pr, &keywords, &[]).unwrap_err();
        assert!(matches!(err, DecorateError::PatternMismatch(_)));
    }

    #[test]
    fn empty_body_falls_back_to_original() {
        let pr = pull_request("docs: clarify readme", "", "docs/readme");
        let keywords = KeywordSet::build("", &[]);

        let result = decorate_pull_request(&pr, &keywords, &[]).unwrap();
        assert_eq!(result.body, "");
        assert_eq!(result.title, "docs: clarify readme");
    }
}
