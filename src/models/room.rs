use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Room state as returned by `GET /api/room/{id}`.
///
/// Read-only from the client's perspective; fetched once per room view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub room_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    pub ending_at: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "Time", default)]
    pub times: Vec<RoomTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTime {
    pub room_id: String,
    pub time_id: String,
    pub date: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "Vote", default)]
    pub votes: Vec<RoomVote>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomVote {
    pub vote_id: String,
    pub created_at: String,
    pub user_name: String,
    pub time_id: String,
}

/// Body for `POST /api/room/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub ending_at: String,
    pub times: Vec<TimePayload>,
}

/// One candidate slot as the backend expects it: absolute UTC instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePayload {
    pub date: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
}

/// One candidate date with its time ranges, as built by the creation form.
///
/// Mutated interactively in the browser while the room is assembled and
/// submitted as a single JSON-encoded form field; discarded after submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateSlotDraft {
    pub date: NaiveDate,
    pub times: Vec<TimeRangeDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRangeDraft {
    /// Wall-clock start, "HH:MM".
    pub start: String,
    /// Length of the slot, "HH:MM".
    pub duration: String,
}
