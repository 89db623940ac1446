use std::time::Duration;

use reqwest::Client;

use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};
use crate::models::VoteRequest;

/// Client for the scheduling backend's vote endpoint.
#[derive(Debug, Clone)]
pub struct VoteService {
    client: Client,
    base_url: String,
}

impl VoteService {
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Submit a vote for the given backend slot identifiers. The backend's
    /// acknowledgment body is not interesting to the UI and is discarded.
    pub async fn submit_vote(&self, request: &VoteRequest) -> AppResult<()> {
        let url = format!("{}/api/vote", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to submit vote for {}: {}", request.user_name, e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Backend returned {} submitting vote", status);
            return Err(AppError::Backend {
                status: status.as_u16(),
            });
        }

        tracing::debug!(
            "Vote registered for {} on {} slot(s)",
            request.user_name,
            request.times.len()
        );
        Ok(())
    }
}
