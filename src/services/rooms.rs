use std::time::Duration;

use reqwest::Client;

use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};
use crate::models::{CreateRoomRequest, CreateRoomResponse, RoomSnapshot};

/// Client for the scheduling backend's room endpoints.
#[derive(Debug, Clone)]
pub struct RoomService {
    client: Client,
    base_url: String,
}

impl RoomService {
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

    /// Fetch the current snapshot of a room.
    pub async fn get_room(&self, room_id: &str) -> AppResult<RoomSnapshot> {
        let url = format!("{}/api/room/{}", self.base_url, room_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch room {}: {}", room_id, e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Backend returned {} fetching room {}", status, room_id);
            return Err(AppError::Backend {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Create a room; returns the new room's identifier.
    pub async fn create_room(&self, request: &CreateRoomRequest) -> AppResult<String> {
        let url = format!("{}/api/room/", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to create room: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Backend returned {} creating room", status);
            return Err(AppError::Backend {
                status: status.as_u16(),
            });
        }

        let created: CreateRoomResponse = response.json().await?;
        tracing::debug!("Created room {}", created.room_id);
        Ok(created.room_id)
    }
}
