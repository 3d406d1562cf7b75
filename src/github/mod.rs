pub mod client;

pub use client::{GitHubClient, RemoteBlob, VersionToken};
