//! Live adapter for the `ChangeForge` port using the GitHub REST API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::error::PortError;
use crate::ports::forge::{ChangeForge, ChangeStatus};

const USER_AGENT: &str = concat!("companion-check/", env!("CARGO_PKG_VERSION"));

/// Live forge client that calls the GitHub pulls API.
///
/// Requests are driven to completion on a private current-thread runtime so
/// callers stay blocking.
pub struct LiveForge {
    client: Client,
    runtime: Runtime,
    api_url: String,
    token: Option<String>,
}

impl LiveForge {
    /// Creates a client for `api_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the runtime cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PortError> {
        let client = Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?;
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self { client, runtime, api_url: api_url.into(), token })
    }

    fn pull_url(&self, org: &str, repo: &str, number: u64) -> String {
        format!("{}/repos/{org}/{repo}/pulls/{number}", self.api_url.trim_end_matches('/'))
    }

    fn fetch_pull(&self, org: &str, repo: &str, number: u64) -> Result<PullRequest, PortError> {
        let url = self.pull_url(org, repo, number);
        self.runtime.block_on(async {
            let mut request =
                self.client.get(&url).header("Accept", "application/vnd.github+json");
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await.map_err(|e| -> PortError {
                format!("GitHub API request to {url} failed: {e}").into()
            })?;

            let status = response.status();
            let response_text = response.text().await.map_err(|e| -> PortError {
                format!("Failed to read GitHub API response: {e}").into()
            })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<GitHubError>(&response_text)
                    .map(|e| e.message)
                    .unwrap_or(response_text);
                return Err(format!("GitHub API error ({}): {msg}", status.as_u16()).into());
            }

            serde_json::from_str::<PullRequest>(&response_text).map_err(|e| -> PortError {
                format!("Failed to parse GitHub API response: {e}").into()
            })
        })
    }
}

/// The subset of a GitHub pull request the checker reads.
#[derive(Deserialize)]
struct PullRequest {
    body: Option<String>,
    mergeable: Option<bool>,
    head: Head,
}

#[derive(Deserialize)]
struct Head {
    #[serde(rename = "ref")]
    ref_name: String,
    sha: String,
}

/// Error body returned by GitHub.
#[derive(Deserialize)]
struct GitHubError {
    message: String,
}

impl ChangeForge for LiveForge {
    fn description(&self, org: &str, repo: &str, number: u64) -> Result<String, PortError> {
        Ok(self.fetch_pull(org, repo, number)?.body.unwrap_or_default())
    }

    fn status(&self, org: &str, repo: &str, number: u64) -> Result<ChangeStatus, PortError> {
        let pull = self.fetch_pull(org, repo, number)?;
        Ok(ChangeStatus {
            mergeable: pull.mergeable,
            head_ref: pull.head.ref_name,
            head_sha: pull.head.sha,
        })
    }
}
