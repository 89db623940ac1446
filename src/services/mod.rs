pub mod rooms;
pub mod votes;
