use serde_json::{json, Value};
use tracing::info;

use crate::config::{Config, REVIEWS_FILE_PATH};
use crate::error::StoreError;
use crate::github::GitHubClient;
use crate::selection::{select_and_remove, RandomSource};

/// Outcome of a single draw against the remote list.
#[derive(Debug)]
pub enum DrawOutcome {
    /// One review was removed and the updated list committed.
    Drawn { review: Value, remaining: usize },
    /// The list was already empty; nothing was written.
    Exhausted,
}

/// Composes the GitHub client and the selection engine into one logical
/// read-modify-write operation per request. There is no in-process
/// synchronization: the remote store's sha check on write is the only
/// guard against concurrent draws, and a lost race surfaces as `Conflict`.
pub struct Orchestrator<R: RandomSource> {
    client: GitHubClient,
    path: String,
    branch: String,
    random: R,
}

impl<R: RandomSource> Orchestrator<R> {
    pub fn new(client: GitHubClient, config: &Config, random: R) -> Self {
        Self {
            client,
            path: REVIEWS_FILE_PATH.to_string(),
            branch: config.branch.clone(),
            random,
        }
    }

    /// Fetch the list, remove one random review, and commit the remainder
    /// conditional on the fetched version token. No retry on conflict.
    pub async fn draw_next(&self) -> Result<DrawOutcome, StoreError> {
        let blob = self.client.fetch_file(&self.path, &self.branch).await?;
        let reviews = parse_reviews(&blob.content)?;

        if reviews.is_empty() {
            info!("Review list is empty, nothing to draw");
            return Ok(DrawOutcome::Exhausted);
        }

        let result = select_and_remove(reviews, &self.random);
        let remaining = result.residual.len();

        // Pretty-printed so commits stay diffable.
        let updated = serde_json::to_string_pretty(&json!({ "reviews": result.residual }))?;
        let message = format!("Draw one review ({remaining} left)");

        let version = self
            .client
            .put_file(&self.path, &updated, &blob.version, &self.branch, &message)
            .await?;

        info!(remaining, sha = version.as_str(), "Committed updated review list");

        Ok(DrawOutcome::Drawn {
            review: result.chosen,
            remaining,
        })
    }

    /// Read-only count of the remaining reviews. Never writes.
    pub async fn count(&self) -> Result<usize, StoreError> {
        let blob = self.client.fetch_file(&self.path, &self.branch).await?;
        Ok(parse_reviews(&blob.content)?.len())
    }
}

/// Parse the `reviews` array out of the remote document. A missing or
/// non-array `reviews` field is treated as an empty list; only content
/// that is not valid JSON at all is an error.
fn parse_reviews(content: &str) -> Result<Vec<Value>, StoreError> {
    let document: Value = serde_json::from_str(content)?;
    Ok(document
        .get("reviews")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default())
}
