#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod realtime;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{Card, PlayerId, RoomPhase, RoomSnapshot, RoundPhase, Seat};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use realtime::{ChannelBroker, EventEnvelope, NoopNotifier, RoomNotifier};
pub use services::{GameFlowService, RoomRegistry};
pub use state::AppState;
