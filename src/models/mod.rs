pub mod room;
pub mod vote;

pub use room::{
    CreateRoomRequest, CreateRoomResponse, DateSlotDraft, RoomSnapshot, RoomTime, RoomVote,
    TimePayload, TimeRangeDraft,
};
pub use vote::{TimeSlot, Vote, VoteRequest};
