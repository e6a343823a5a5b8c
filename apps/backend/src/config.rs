//! Runtime configuration.

use std::env;

/// Tunables read once at startup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Capacity of each room's broadcast channel. Slow consumers that lag
    /// past this many events must re-fetch state.
    pub broadcast_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 64,
        }
    }
}

impl GameConfig {
    /// Build a config from the environment, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(capacity) = env::var("BROADCAST_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.broadcast_capacity = capacity;
        }
        config
    }
}
