use std::sync::Arc;

use crate::config::GameConfig;
use crate::realtime::{ChannelBroker, RoomNotifier};
use crate::services::{GameFlowService, RoomRegistry};

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    pub config: GameConfig,
    pub registry: Arc<RoomRegistry>,
    pub notifier: Arc<dyn RoomNotifier>,
}

impl AppState {
    /// Create an AppState with the in-process broadcast broker.
    pub fn new(config: GameConfig) -> Self {
        let notifier = Arc::new(ChannelBroker::new(config.broadcast_capacity));
        Self {
            config,
            registry: Arc::new(RoomRegistry::new()),
            notifier,
        }
    }

    /// Create an AppState with a custom notifier (e.g. an external pub/sub
    /// adapter).
    pub fn with_notifier(config: GameConfig, notifier: Arc<dyn RoomNotifier>) -> Self {
        Self {
            config,
            registry: Arc::new(RoomRegistry::new()),
            notifier,
        }
    }

    pub fn game_flow(&self) -> GameFlowService {
        GameFlowService::new(self.registry.clone(), self.notifier.clone())
    }

    /// Create a test AppState that discards notifications.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::with_notifier(
            GameConfig::default(),
            Arc::new(crate::realtime::NoopNotifier),
        )
    }
}
