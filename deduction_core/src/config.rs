//! Tunables for the agent and the game loop.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the reasoning agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Largest candidate set an inference step will enumerate.
    ///
    /// Enumeration is exponential in this number; 14 candidates already
    /// produce over a hundred thousand worlds.
    pub max_candidate_rooms: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_candidate_rooms: 14,
        }
    }
}

/// Configuration for a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Turns played before the game is abandoned.
    pub max_turns: u32,

    pub agent: AgentConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            agent: AgentConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}
