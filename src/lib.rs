pub mod config;
pub mod error;
pub mod github;
pub mod orchestrator;
pub mod selection;
pub mod server;

pub use config::{Config, REVIEWS_FILE_PATH};
pub use error::StoreError;
pub use github::{GitHubClient, RemoteBlob, VersionToken};
pub use orchestrator::{DrawOutcome, Orchestrator};
pub use selection::{select_and_remove, FastrandSource, RandomSource, SelectionResult};
pub use server::{router, AppState};
