use clap::Parser;

/// Path of the review list inside the configured repository.
pub const REVIEWS_FILE_PATH: &str = "reviews.json";

/// Environment-sourced service configuration, built once at startup and
/// passed by reference into the orchestrator and the GitHub client.
#[derive(Debug, Clone, Parser)]
#[command(name = "next-review")]
#[command(about = "Serves random draws from a GitHub-hosted review list")]
pub struct Config {
    /// Personal access token for the GitHub content API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Owner (user or org) of the repository holding the review list
    #[arg(long, env = "GITHUB_OWNER")]
    pub owner: String,

    /// Repository holding the review list
    #[arg(long, env = "GITHUB_REPO")]
    pub repo: String,

    /// Branch the review list is read from and written back to
    #[arg(long, env = "GITHUB_BRANCH", default_value = "main")]
    pub branch: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Base URL of the GitHub API (override for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_BASE", default_value = "https://api.github.com")]
    pub api_base: String,
}
