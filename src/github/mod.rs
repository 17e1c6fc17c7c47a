//! GitHub pull request provider.
//!
//! Thin client over the GitHub REST API covering the two operations the
//! pipeline needs: fetching a pull request and editing its title and body.
//! Both are blocking, single-shot calls with no retry logic; failures
//! propagate to the caller as fatal.

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("pr-polish/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// GitHub API specific errors.
#[derive(Error, Debug)]
pub enum GithubError {
    /// Credentials were rejected (401/403).
    #[error("GitHub rejected the access token (HTTP {0})")]
    AuthenticationFailed(StatusCode),

    /// The pull request does not exist or is not visible to the token.
    #[error("pull request {owner}/{repository}#{number} not found")]
    NotFound {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repository: String,
        /// Pull request number.
        number: u64,
    },

    /// Any other non-success response from the API.
    #[error("GitHub API request failed: HTTP {status}: {body}")]
    RequestFailed {
        /// HTTP status code of the failed response.
        status: StatusCode,
        /// Response body text, for diagnostics.
        body: String,
    },

    /// Network connectivity error.
    #[error("network error: {0}")]
    Network(String),
}

/// A pull request as seen by the decoration pipeline.
///
/// Derived strings only are ever written back; these fields are read-only
/// inputs.
#[derive(Debug, Clone)]
pub struct PullRequest {
    /// Raw title.
    pub title: String,
    /// Raw body. GitHub sends `null` for an empty body; that becomes `""`.
    pub body: String,
    /// Head branch reference, e.g. `dependabot/npm_and_yarn/lodash-4.17.21`.
    pub head_ref: String,
}

#[derive(Deserialize)]
struct PullRequestResponse {
    title: String,
    body: Option<String>,
    head: HeadResponse,
}

#[derive(Deserialize)]
struct HeadResponse {
    #[serde(rename = "ref")]
    ref_name: String,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    title: &'a str,
    body: &'a str,
}

/// GitHub client for pull request fetch and edit operations.
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    /// Creates a client against the public GitHub API.
    pub fn new(token: String) -> Self {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Creates a client against a custom API base URL (GitHub Enterprise,
    /// test servers).
    pub fn with_api_url(api_url: impl Into<String>, token: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Fetches one pull request.
    pub async fn fetch_pull_request(
        &self,
        owner: &str,
        repository: &str,
        number: u64,
    ) -> Result<PullRequest> {
        let url = self.pull_request_url(owner, repository, number);
        debug!(%url, "fetching pull request");

        let response = self
            .request(self.client.get(&url))
            .await
            .map_err(|e| GithubError::Network(e.to_string()))?;

        let response = check_status(response, owner, repository, number).await?;

        let parsed: PullRequestResponse = response
            .json()
            .await
            .map_err(|e| GithubError::Network(e.to_string()))?;

        Ok(PullRequest {
            title: parsed.title,
            body: parsed.body.unwrap_or_default(),
            head_ref: parsed.head.ref_name,
        })
    }

    /// Replaces the pull request's title and body.
    ///
    /// This is the single point of external mutation in a run and is
    /// attempted at most once.
    pub async fn edit_pull_request(
        &self,
        owner: &str,
        repository: &str,
        number: u64,
        title: &str,
        body: &str,
    ) -> Result<()> {
        let url = self.pull_request_url(owner, repository, number);
        info!(%url, title, "editing pull request");

        let response = self
            .request(self.client.patch(&url).json(&EditRequest { title, body }))
            .await
            .map_err(|e| GithubError::Network(e.to_string()))?;

        check_status(response, owner, repository, number).await?;
        Ok(())
    }

    fn pull_request_url(&self, owner: &str, repository: &str, number: u64) -> String {
        format!("{}/repos/{owner}/{repository}/pulls/{number}", self.api_url)
    }

    async fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::Result<Response> {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
    }
}

/// Maps non-success responses onto the provider error taxonomy.
async fn check_status(
    response: Response,
    owner: &str,
    repository: &str,
    number: u64,
) -> Result<Response, GithubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(GithubError::AuthenticationFailed(status))
        }
        StatusCode::NOT_FOUND => Err(GithubError::NotFound {
            owner: owner.to_string(),
            repository: repository.to_string(),
            number,
        }),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(GithubError::RequestFailed { status, body })
        }
    }
}
