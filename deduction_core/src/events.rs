//! Turn records - what happened on each turn of a game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use wampa_world::{Action, PerceptSet, Pose, Room};

use crate::inference::InferenceReport;

/// One turn of the observe, infer, act loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,

    /// Pose at the start of the turn.
    pub pose: Pose,

    pub percepts: PerceptSet,
    pub action: Action,

    /// Worlds enumerated by the inference step.
    pub worlds: usize,

    /// Worlds consistent with the knowledge base.
    pub model_size: usize,

    pub newly_safe: BTreeSet<Room>,
}

impl TurnRecord {
    pub fn new(
        turn: u32,
        pose: Pose,
        percepts: PerceptSet,
        action: Action,
        report: InferenceReport,
    ) -> Self {
        Self {
            turn,
            pose,
            percepts,
            action,
            worlds: report.worlds,
            model_size: report.model_size,
            newly_safe: report.newly_safe,
        }
    }
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "turn {} at {} facing {}: {:?} -> {} ({}/{} worlds)",
            self.turn,
            self.pose.room,
            self.pose.heading,
            self.percepts,
            self.action.as_str(),
            self.model_size,
            self.worlds
        )
    }
}
