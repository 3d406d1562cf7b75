use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::StoreError;

/// Opaque version token for a remote blob (the GitHub blob sha).
/// Compared by equality only, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(sha: impl Into<String>) -> Self {
        Self(sha.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fetched remote file: its decoded content plus the version token
/// required for a conditional write.
#[derive(Debug, Clone)]
pub struct RemoteBlob {
    pub content: String,
    pub version: VersionToken,
}

/// GitHub content API client for versioned file reads and conditional writes
pub struct GitHubClient {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    sha: &'a str,
    branch: &'a str,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: PutContentsBlob,
}

#[derive(Debug, Deserialize)]
struct PutContentsBlob {
    sha: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: config.github_token.clone(),
        }
    }

    /// Fetch the current content and version token of a file on a branch.
    pub async fn fetch_file(&self, path: &str, ref_name: &str) -> Result<RemoteBlob, StoreError> {
        info!(path, r#ref = ref_name, "Fetching file from GitHub");

        let url = self.contents_url(path);
        let response = self
            .client
            .get(&url)
            .query(&[("ref", ref_name)])
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "next-review")
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(StoreError::Auth),
            StatusCode::NOT_FOUND => {
                return Err(StoreError::NotFound {
                    path: path.to_string(),
                })
            }
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Transient(format!(
                    "GitHub API error ({status}): {body}"
                )));
            }
            _ => {}
        }

        let contents: ContentsResponse = response.json().await?;
        let content = decode_content(&contents.content)?;

        debug!(bytes = content.len(), sha = %contents.sha, "Fetched file");

        Ok(RemoteBlob {
            content,
            version: VersionToken::new(contents.sha),
        })
    }

    /// Write a file only if its remote version still matches `expected`.
    /// A stale token is rejected by GitHub and surfaces as `Conflict`.
    pub async fn put_file(
        &self,
        path: &str,
        content: &str,
        expected: &VersionToken,
        branch: &str,
        message: &str,
    ) -> Result<VersionToken, StoreError> {
        info!(path, branch, sha = expected.as_str(), "Writing file to GitHub");

        let request = PutContentsRequest {
            message,
            content: STANDARD.encode(content),
            sha: expected.as_str(),
            branch,
        };

        let url = self.contents_url(path);
        let response = self
            .client
            .put(&url)
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "next-review")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(StoreError::Auth),
            StatusCode::NOT_FOUND => {
                return Err(StoreError::NotFound {
                    path: path.to_string(),
                })
            }
            // GitHub reports a stale sha as 409, occasionally 422.
            StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                return Err(StoreError::Conflict)
            }
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Transient(format!(
                    "GitHub API error ({status}): {body}"
                )));
            }
            _ => {}
        }

        let updated: PutContentsResponse = response.json().await?;

        debug!(sha = %updated.content.sha, "File committed");

        Ok(VersionToken::new(updated.content.sha))
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, self.owner, self.repo, path
        )
    }
}

/// Decode the base64 `content` field of a contents response. GitHub wraps
/// the payload with newlines, which must be stripped before decoding.
fn decode_content(raw: &str) -> Result<String, StoreError> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(stripped)
        .map_err(|e| StoreError::MalformedData(format!("invalid base64 content: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| StoreError::MalformedData(format!("content is not valid UTF-8: {e}")))
}
