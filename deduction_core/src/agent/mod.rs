//! Agent - owns a knowledge base and turns its conclusions into actions.
//!
//! Each turn the agent:
//! 1. **Observes**: syncs its pose and inventory and records the percepts
//! 2. **Infers**: runs one inference step for its current room
//! 3. **Decides**: picks the next action, never stepping into a room not proven safe

mod planner;

pub use planner::*;

use wampa_world::{Action, Direction, Observation, PerceptSet, Pose, Room};

use crate::config::AgentConfig;
use crate::error::InferenceError;
use crate::inference::InferenceReport;
use crate::knowledge_base::KnowledgeBase;

/// A logical agent exploring the cave.
#[derive(Debug, Clone)]
pub struct Agent {
    kb: KnowledgeBase,
    pose: Pose,
    start: Room,
    has_blaster: bool,
    has_luke: bool,
    config: AgentConfig,
}

impl Agent {
    /// Create an agent standing in `start`, facing up.
    pub fn new(start: Room, config: AgentConfig) -> Self {
        Self {
            kb: KnowledgeBase::new(start),
            pose: Pose::new(start, Direction::Up),
            start,
            has_blaster: true,
            has_luke: false,
            config,
        }
    }

    /// Create an agent with the default configuration.
    pub fn with_defaults(start: Room) -> Self {
        Self::new(start, AgentConfig::default())
    }

    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Move the agent without acting, e.g. to replay a recorded situation.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn has_blaster(&self) -> bool {
        self.has_blaster
    }

    pub fn has_luke(&self) -> bool {
        self.has_luke
    }

    /// Take in everything the world reports at the start of a turn.
    pub fn observe(&mut self, observation: &Observation) {
        self.pose = observation.pose;
        self.has_blaster = observation.has_blaster;
        self.has_luke = observation.has_luke;
        self.record_percepts(observation.percepts);
    }

    /// Record percepts sensed at the current pose.
    pub fn record_percepts(&mut self, percepts: PerceptSet) {
        self.kb
            .record_percepts(self.pose.room, self.pose.heading, percepts);
    }

    /// Run one inference step for the current room.
    pub fn run_inference(&mut self) -> Result<InferenceReport, InferenceError> {
        self.kb.run_inference(self.pose.room, &self.config)
    }

    /// Is the confirmed wampa somewhere straight ahead?
    pub fn is_facing_wampa(&self) -> bool {
        self.kb
            .confirmed_wampa_room()
            .is_some_and(|wampa| self.pose.heading.points_at(self.pose.room, wampa))
    }

    fn is_passable(&self, room: Room) -> bool {
        self.kb.is_safe(room) && !self.kb.is_wall(room)
    }

    /// Every action that cannot get the agent killed right now.
    pub fn all_safe_next_actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::TurnLeft, Action::TurnRight];

        if self.is_passable(self.pose.ahead()) {
            actions.push(Action::Forward);
        }
        if self.has_blaster && self.is_facing_wampa() {
            actions.push(Action::Shoot);
        }
        if self.has_luke && self.pose.room == self.start {
            actions.push(Action::Climb);
        }
        if !self.has_luke && self.kb.luke_room() == Some(self.pose.room) {
            actions.push(Action::Grab);
        }
        actions
    }

    /// Pick the next action.
    ///
    /// Climbing out, grabbing Luke and shooting a wampa in line of fire take
    /// precedence. Otherwise the agent walks a shortest safe path: home when
    /// it carries Luke, to Luke once he is located, else to the nearest safe
    /// room it has not visited. With nothing left to explore it lines up a
    /// shot at a confirmed wampa, and failing that turns left.
    pub fn choose_next_action(&self) -> Action {
        let safe = self.all_safe_next_actions();
        for preferred in [Action::Climb, Action::Grab, Action::Shoot] {
            if safe.contains(&preferred) {
                return preferred;
            }
        }

        let here = self.pose.room;
        let passable = |room: Room| self.is_passable(room);

        let path = if self.has_luke {
            shortest_path(here, passable, |room| room == self.start)
        } else if let Some(luke) = self.kb.luke_room() {
            shortest_path(here, passable, |room| room == luke)
        } else {
            None
        };
        let path = path.or_else(|| {
            shortest_path(here, passable, |room| {
                !self.kb.is_visited(room) && !self.kb.is_wall(room)
            })
        });

        if let Some(next) = path.as_ref().and_then(|p| p.first()) {
            if let Some(action) = step_toward(self.pose, *next) {
                return action;
            }
        }

        if let Some(action) = self.line_up_shot() {
            return action;
        }
        Action::TurnLeft
    }

    /// Walk to, or turn in, a safe room from which the confirmed wampa can be shot.
    fn line_up_shot(&self) -> Option<Action> {
        if !self.has_blaster {
            return None;
        }
        let wampa = self.kb.confirmed_wampa_room()?;
        let in_line = |room: Room| {
            room != wampa && Direction::ALL.iter().any(|d| d.points_at(room, wampa))
        };

        let path = shortest_path(self.pose.room, |r| self.is_passable(r), in_line)?;
        match path.first() {
            Some(next) => step_toward(self.pose, *next),
            None => {
                let desired = Direction::ALL
                    .into_iter()
                    .find(|d| d.points_at(self.pose.room, wampa))?;
                Some(turn_toward(self.pose.heading, desired))
            }
        }
    }
}
