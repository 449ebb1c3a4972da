//! Error types for the reasoning crate.

use thiserror::Error;

use wampa_world::{Room, ScenarioError, WorldError};

/// A malformed request to the knowledge base.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("unknown query '{0}'")]
    UnknownQuery(String),
}

/// An inference step that could not produce conclusions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InferenceError {
    /// Every enumerated world contradicts some percept.
    #[error("no world out of {worlds} is consistent with the knowledge base at {room}")]
    InconsistentKnowledge { room: Room, worlds: usize },

    #[error("{candidates} candidate rooms exceed the limit of {limit}")]
    CandidateSpaceTooLarge { candidates: usize, limit: usize },
}

/// A configuration file that could not be read.
#[derive(Debug, Error)]
#[error("failed to parse configuration: {0}")]
pub struct ConfigError(#[from] pub toml::de::Error);

/// Anything that can stop a game before it ends on its own.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
