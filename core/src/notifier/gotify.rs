use std::time::Duration;

use async_trait::async_trait;
use ipnotify_common::config::GotifyConfig;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{Notifier, NotifyError};
use crate::report::Report;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Posts reports to `{server_url}/message` of a Gotify server.
pub struct GotifyNotifier {
    client: Client,
    server_url: String,
    token: String,
    priority: u8,
}

impl GotifyNotifier {
    pub fn new(
        server_url: impl Into<String>,
        token: impl Into<String>,
        priority: u8,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NotifyError::Client)?;

        Ok(Self {
            client,
            server_url: server_url.into(),
            token: token.into(),
            priority,
        })
    }

    pub fn from_config(cfg: &GotifyConfig) -> Result<Self, NotifyError> {
        Self::new(cfg.server_url.clone(), cfg.token.clone(), cfg.priority)
    }
}

#[async_trait]
impl Notifier for GotifyNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotifyError> {
        let url = format!("{}/message", self.server_url);
        let priority = self.priority.to_string();
        let form = [
            ("title", report.title.as_str()),
            ("message", report.body.as_str()),
            ("priority", priority.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.token.as_str())])
            .form(&form)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        let status = response.status();
        debug!(%url, %status, "notification posted");
        if status != StatusCode::OK {
            return Err(NotifyError::Status(status));
        }
        Ok(())
    }
}
