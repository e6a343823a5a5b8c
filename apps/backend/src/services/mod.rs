//! Service layer: room registry and per-room action coordination.

pub mod game_flow;
pub mod rooms;


pub use game_flow::GameFlowService;
pub use rooms::{RoomHandle, RoomRegistry};
