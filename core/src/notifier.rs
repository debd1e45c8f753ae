//! Outbound delivery of a [`Report`].
//!
//! Delivery is attempted once. A failure is returned to the caller untouched;
//! nothing here retries or queues.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::report::Report;

mod gotify;

pub use gotify::GotifyNotifier;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to reach notification server")]
    Transport(#[source] reqwest::Error),
    #[error("notification server answered with status {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, report: &Report) -> Result<(), NotifyError>;
}
