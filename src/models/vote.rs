use serde::{Deserialize, Serialize};

/// UI-facing candidate time, produced by the slot adapter.
///
/// Immutable once produced; a new list is adapted from a fresh snapshot
/// after every vote submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlot {
    /// Start instant projected into the display offset, ISO-8601.
    pub date_time: String,
    /// Display label, "HH:MM - HH:MM" (stored UTC wall-clock).
    pub duration: String,
    pub votes: Vec<Vote>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vote {
    pub name: String,
    pub email: Option<String>,
    /// Backend slot identifiers this voter selected.
    pub time_slots: Vec<String>,
}

/// Body for `POST /api/vote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub times: Vec<String>,
}
