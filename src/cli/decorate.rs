//! Decorate command — fetches, decorates, and edits one pull request.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::decorate::{decorate_pull_request, KeywordSet};
use crate::github::{GithubClient, DEFAULT_API_URL};
use crate::utils::list_file_names;

/// Decorate command options.
///
/// Every flag falls back to an environment variable (and the settings file)
/// so the command can run unattended in CI with no arguments at all.
#[derive(Parser)]
pub struct DecorateCommand {
    /// Repository owner (defaults to PR_POLISH_OWNER).
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name (defaults to PR_POLISH_REPOSITORY).
    #[arg(long)]
    pub repository: Option<String>,

    /// Pull request number (defaults to PR_POLISH_PULL_REQUEST_NUMBER).
    #[arg(long, value_name = "NUMBER")]
    pub pull_request_number: Option<u64>,

    /// GitHub API token (defaults to PR_POLISH_ACCESS_TOKEN or GITHUB_TOKEN).
    #[arg(long)]
    pub access_token: Option<String>,

    /// Newline-separated symbol vocabulary (defaults to PR_POLISH_SYMBOLS).
    #[arg(long)]
    pub symbols: Option<String>,

    /// Source tree to enumerate for filenames (defaults to PR_POLISH_SRC_PATH,
    /// then the current directory).
    #[arg(long, value_name = "DIR")]
    pub src_path: Option<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise installations.
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl DecorateCommand {
    /// Executes the decorate command.
    pub async fn execute(self) -> Result<()> {
        let config = Config::resolve(
            self.symbols,
            self.src_path,
            self.access_token,
            self.owner,
            self.repository,
            self.pull_request_number,
        )
        .context("Failed to resolve configuration")?;

        let filenames = list_file_names(&config.src_path)
            .with_context(|| format!("Failed to enumerate {}", config.src_path.display()))?;

        let keywords = KeywordSet::build(&config.symbols, &filenames);
        info!(keywords = ?keywords.as_slice(), "keyword set ready");

        let client = GithubClient::with_api_url(self.api_url.as_str(), config.access_token.clone());
        let pull_request = client
            .fetch_pull_request(&config.owner, &config.repository, config.pull_request_number)
            .await
            .context("Failed to fetch pull request")?;
        info!(title = %pull_request.title, head_ref = %pull_request.head_ref, "fetched pull request");

        // A title matching neither grammar aborts here, before any edit.
        let decorated = decorate_pull_request(&pull_request, &keywords, &filenames)?;
        debug!(title = %decorated.title, "decorated");

        client
            .edit_pull_request(
                &config.owner,
                &config.repository,
                config.pull_request_number,
                &decorated.title,
                &decorated.body,
            )
            .await
            .context("Failed to edit pull request")?;

        println!(
            "✓ Updated {}/{}#{}: {}",
            config.owner, config.repository, config.pull_request_number, decorated.title
        );
        Ok(())
    }
}
