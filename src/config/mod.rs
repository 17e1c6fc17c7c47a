//! Run configuration.
//!
//! One explicit, immutable [`Config`] is constructed per run and handed to
//! the decorate command; nothing reads ambient process state after that.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::utils::settings::{get_env_var, get_env_vars};

/// Environment variable carrying the newline-separated symbol blob.
pub const SYMBOLS_VAR: &str = "PR_POLISH_SYMBOLS";
/// Environment variable carrying the source tree root.
pub const SRC_PATH_VAR: &str = "PR_POLISH_SRC_PATH";
/// Environment variables carrying the API token, in precedence order.
pub const ACCESS_TOKEN_VARS: [&str; 2] = ["PR_POLISH_ACCESS_TOKEN", "GITHUB_TOKEN"];
/// Environment variable carrying the repository owner.
pub const OWNER_VAR: &str = "PR_POLISH_OWNER";
/// Environment variable carrying the repository name.
pub const REPOSITORY_VAR: &str = "PR_POLISH_REPOSITORY";
/// Environment variable carrying the pull request number.
pub const PULL_REQUEST_NUMBER_VAR: &str = "PR_POLISH_PULL_REQUEST_NUMBER";

/// Immutable configuration for one decoration run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw newline-separated symbol vocabulary.
    pub symbols: String,
    /// Root directory to enumerate for filenames.
    pub src_path: PathBuf,
    /// GitHub API token.
    pub access_token: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repository: String,
    /// Pull request number to fetch and edit.
    pub pull_request_number: u64,
}

impl Config {
    /// Resolves configuration from explicit values with environment and
    /// settings-file fallback.
    ///
    /// Every `Some` value wins over its environment variable; `symbols` and
    /// `src_path` default to an empty vocabulary and the current directory
    /// when absent everywhere, since both are optional enrichments.
    pub fn resolve(
        symbols: Option<String>,
        src_path: Option<PathBuf>,
        access_token: Option<String>,
        owner: Option<String>,
        repository: Option<String>,
        pull_request_number: Option<u64>,
    ) -> Result<Self> {
        let pull_request_number = match pull_request_number {
            Some(number) => number,
            None => get_env_var(PULL_REQUEST_NUMBER_VAR)?
                .parse()
                .with_context(|| format!("{PULL_REQUEST_NUMBER_VAR} is not a number"))?,
        };

        Ok(Self {
            symbols: symbols
                .or_else(|| get_env_var(SYMBOLS_VAR).ok())
                .unwrap_or_default(),
            src_path: src_path
                .or_else(|| get_env_var(SRC_PATH_VAR).ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            access_token: access_token
                .map(Ok)
                .unwrap_or_else(|| get_env_vars(&ACCESS_TOKEN_VARS))?,
            owner: owner.map(Ok).unwrap_or_else(|| get_env_var(OWNER_VAR))?,
            repository: repository
                .map(Ok)
                .unwrap_or_else(|| get_env_var(REPOSITORY_VAR))?,
            pull_request_number,
        })
    }
}
