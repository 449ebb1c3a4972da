//! Error types for the world crate.

use thiserror::Error;

use crate::grid::Room;

/// Failure to parse a percept or action name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown percept '{0}'")]
    UnknownPercept(String),

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

/// A scenario that cannot be loaded or describes an impossible world.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to parse scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no built-in scenario named '{0}'")]
    UnknownBuiltin(String),

    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },

    #[error("{what} room {room} lies outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        room: Room,
        width: i32,
        height: i32,
    },

    #[error("the start room {0} holds a hazard")]
    HazardAtStart(Room),

    #[error("Luke's room {0} holds a hazard")]
    LukeOnHazard(Room),

    #[error("the wampa's room {0} also holds a pit")]
    WampaOnPit(Room),
}

/// An action the simulator refuses to perform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("the game is already over")]
    GameOver,
}
