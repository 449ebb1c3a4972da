//! World state management - the simulator that executes actions and produces percepts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::error::{ScenarioError, WorldError};
use crate::grid::{Direction, Pose, Room};
use crate::mechanics::{Action, Percept, PerceptSet, ACTION_COST, DEATH_PENALTY, RESCUE_REWARD};
use crate::scenario::Scenario;

/// Unique identifier for one run of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two kinds of fatal room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hazard {
    Pit,
    Wampa,
}

/// Whether the game is still being played and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    /// The agent climbed out holding Luke.
    Rescued,
    /// The agent entered a hazardous room.
    Killed { hazard: Hazard, room: Room },
}

/// What the agent learns about itself and its surroundings at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub pose: Pose,
    pub percepts: PerceptSet,
    pub has_blaster: bool,
    pub has_luke: bool,
}

/// The simulated cave together with the agent's physical state.
#[derive(Debug, Clone)]
pub struct WampaWorld {
    id: GameId,
    scenario: Scenario,
    pose: Pose,
    score: i32,
    status: GameStatus,

    wampa_alive: bool,
    /// Luke's room until he is picked up.
    luke: Option<Room>,
    has_blaster: bool,
    has_luke: bool,

    /// Set by a blocked forward move, cleared by the next action.
    bumped: bool,
    /// Heard everywhere once the wampa is dead.
    screamed: bool,
}

impl WampaWorld {
    /// Create a fresh world for a scenario with the agent at the start facing up.
    ///
    /// The scenario is validated first, since its fields are public and may
    /// have been built by hand.
    pub fn new(scenario: Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;
        Ok(Self {
            id: GameId::new(),
            pose: Pose::new(scenario.start, Direction::Up),
            score: 0,
            status: GameStatus::Running,
            wampa_alive: scenario.wampa.is_some(),
            luke: Some(scenario.luke),
            has_blaster: true,
            has_luke: false,
            bumped: false,
            screamed: false,
            scenario,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn wampa_alive(&self) -> bool {
        self.wampa_alive
    }

    pub fn has_luke(&self) -> bool {
        self.has_luke
    }

    /// Percepts available in an arbitrary room under the current world state.
    pub fn percepts_at(&self, room: Room) -> PerceptSet {
        let mut percepts = PerceptSet::new();

        if let Some(wampa) = self.scenario.wampa {
            if self.wampa_alive && wampa.is_adjacent(room) {
                percepts.insert(Percept::Stench);
            }
        }
        if self.scenario.pits.iter().any(|pit| pit.is_adjacent(room)) {
            percepts.insert(Percept::Breeze);
        }
        if self.luke == Some(room) {
            percepts.insert(Percept::Gasp);
        }
        if self.screamed {
            percepts.insert(Percept::Scream);
        }
        percepts
    }

    /// Everything the agent senses this turn.
    pub fn observe(&self) -> Observation {
        let mut percepts = self.percepts_at(self.pose.room);
        if self.bumped {
            percepts.insert(Percept::Bump);
        }

        Observation {
            pose: self.pose,
            percepts,
            has_blaster: self.has_blaster,
            has_luke: self.has_luke,
        }
    }

    /// Execute one action and return the resulting game status.
    pub fn take_action(&mut self, action: Action) -> Result<GameStatus, WorldError> {
        if !self.is_running() {
            return Err(WorldError::GameOver);
        }

        self.score -= ACTION_COST;
        self.bumped = false;

        match action {
            Action::Forward => self.move_forward(),
            Action::TurnLeft => self.pose.heading = self.pose.heading.turn_left(),
            Action::TurnRight => self.pose.heading = self.pose.heading.turn_right(),
            Action::Shoot => self.shoot(),
            Action::Grab => {
                if self.luke == Some(self.pose.room) && !self.has_luke {
                    self.luke = None;
                    self.has_luke = true;
                    tracing::debug!(game = %self.id, room = %self.pose.room, "Luke picked up");
                }
            }
            Action::Climb => {
                if self.has_luke && self.pose.room == self.scenario.start {
                    self.score += RESCUE_REWARD;
                    self.status = GameStatus::Rescued;
                    tracing::debug!(game = %self.id, score = self.score, "Climbed out with Luke");
                }
            }
        }

        Ok(self.status)
    }

    fn move_forward(&mut self) {
        let next = self.pose.ahead();
        if !self.scenario.contains(next) {
            self.bumped = true;
            return;
        }

        self.pose.room = next;
        let hazard = if self.scenario.pits.contains(&next) {
            Some(Hazard::Pit)
        } else if self.wampa_alive && self.scenario.wampa == Some(next) {
            Some(Hazard::Wampa)
        } else {
            None
        };

        if let Some(hazard) = hazard {
            self.score -= DEATH_PENALTY;
            self.status = GameStatus::Killed { hazard, room: next };
            tracing::debug!(game = %self.id, room = %next, ?hazard, "Agent killed");
        }
    }

    fn shoot(&mut self) {
        if !self.has_blaster {
            return;
        }
        self.has_blaster = false;

        let Some(wampa) = self.scenario.wampa else {
            return;
        };
        if self.wampa_alive && self.pose.heading.points_at(self.pose.room, wampa) {
            self.wampa_alive = false;
            self.screamed = true;
            tracing::debug!(game = %self.id, room = %wampa, "Wampa killed");
        }
    }

    /// Draw the cave as text, top row first.
    ///
    /// Rooms in `overlay` (typically the agent's known-safe rooms) are drawn as `s`
    /// unless something more interesting occupies them.
    pub fn render(&self, overlay: Option<&HashSet<Room>>) -> String {
        let width = self.scenario.width as usize;
        let height = self.scenario.height as usize;
        let mut grid = vec![vec!['.'; width]; height];

        let mut put = |room: Room, symbol: char| {
            if self.scenario.contains(room) {
                grid[room.y as usize][room.x as usize] = symbol;
            }
        };

        for room in overlay.into_iter().flatten() {
            put(*room, 's');
        }
        if let Some(wampa) = self.scenario.wampa.filter(|_| self.wampa_alive) {
            put(wampa, 'W');
        }
        for pit in &self.scenario.pits {
            put(*pit, 'P');
        }
        if let Some(luke) = self.luke {
            put(luke, 'L');
        }
        put(
            self.pose.room,
            match self.pose.heading {
                Direction::Up => '^',
                Direction::Right => '>',
                Direction::Down => 'v',
                Direction::Left => '<',
            },
        );

        let mut out = String::with_capacity((width * 2) * height);
        for row in grid.iter().rev() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s1() -> WampaWorld {
        WampaWorld::new(Scenario::builtin("s1").unwrap()).unwrap()
    }

    #[test]
    fn test_start_state() {
        let world = s1();
        let obs = world.observe();

        assert_eq!(obs.pose, Pose::new(Room::origin(), Direction::Up));
        assert!(obs.percepts.is_empty());
        assert!(obs.has_blaster);
        assert!(!obs.has_luke);
        assert!(world.is_running());
    }

    #[test]
    fn test_percepts_follow_sensor_model() {
        let world = s1();

        // wampa at (0, 2), pit at (2, 0)
        assert!(world.percepts_at(Room::new(0, 1)).contains(Percept::Stench));
        assert!(!world.percepts_at(Room::new(0, 1)).contains(Percept::Breeze));
        assert!(world.percepts_at(Room::new(1, 0)).contains(Percept::Breeze));
        assert!(!world.percepts_at(Room::new(1, 0)).contains(Percept::Stench));
        assert!(world.percepts_at(world.scenario().luke).contains(Percept::Gasp));
    }

    #[test]
    fn test_bump_lasts_one_turn() {
        let mut world = s1();
        world.take_action(Action::TurnLeft).unwrap();
        world.take_action(Action::Forward).unwrap();

        assert_eq!(world.pose().room, Room::origin());
        assert!(world.observe().percepts.contains(Percept::Bump));

        world.take_action(Action::TurnRight).unwrap();
        assert!(!world.observe().percepts.contains(Percept::Bump));
    }

    #[test]
    fn test_each_action_costs_a_point() {
        let mut world = s1();
        world.take_action(Action::TurnRight).unwrap();
        world.take_action(Action::Grab).unwrap();
        assert_eq!(world.score(), -2);
    }

    #[test]
    fn test_walking_into_pit_kills() {
        let mut world = s1();
        world.take_action(Action::TurnRight).unwrap();
        world.take_action(Action::Forward).unwrap();
        let status = world.take_action(Action::Forward).unwrap();

        assert_eq!(
            status,
            GameStatus::Killed {
                hazard: Hazard::Pit,
                room: Room::new(2, 0)
            }
        );
        assert_eq!(world.score(), -3 - DEATH_PENALTY);
        assert_eq!(world.take_action(Action::TurnLeft), Err(WorldError::GameOver));
    }

    #[test]
    fn test_shooting_the_wampa() {
        let mut world = s1();
        world.take_action(Action::Shoot).unwrap();

        assert!(!world.wampa_alive());
        let percepts = world.percepts_at(Room::new(0, 1));
        assert!(percepts.contains(Percept::Scream));
        assert!(!percepts.contains(Percept::Stench));
        assert!(!world.observe().has_blaster);
    }

    #[test]
    fn test_missed_shot_spends_bolt() {
        let mut world = s1();
        world.take_action(Action::TurnRight).unwrap();
        world.take_action(Action::Shoot).unwrap();

        assert!(world.wampa_alive());
        assert!(!world.observe().has_blaster);
        assert!(!world.observe().percepts.contains(Percept::Scream));
    }

    #[test]
    fn test_climb_requires_luke() {
        let mut world = s1();
        assert_eq!(world.take_action(Action::Climb).unwrap(), GameStatus::Running);
    }

    #[test]
    fn test_grab_and_climb() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "short"
            width = 2
            height = 1
            luke = [1, 0]
            "#,
        )
        .unwrap();
        let mut world = WampaWorld::new(scenario).unwrap();

        world.take_action(Action::TurnRight).unwrap();
        world.take_action(Action::Forward).unwrap();
        assert!(world.observe().percepts.contains(Percept::Gasp));
        world.take_action(Action::Grab).unwrap();
        assert!(world.has_luke());
        assert!(!world.observe().percepts.contains(Percept::Gasp));

        world.take_action(Action::TurnLeft).unwrap();
        world.take_action(Action::TurnLeft).unwrap();
        world.take_action(Action::Forward).unwrap();
        let status = world.take_action(Action::Climb).unwrap();

        assert_eq!(status, GameStatus::Rescued);
        assert_eq!(world.score(), RESCUE_REWARD - 7);
    }

    #[test]
    fn test_render() {
        let world = s1();
        let overlay: HashSet<Room> = [Room::new(1, 0), Room::new(0, 1)].into_iter().collect();
        let board = world.render(Some(&overlay));
        let rows: Vec<&str> = board.lines().collect();

        assert_eq!(rows.len(), 4);
        // bottom row holds the agent, a safe room and the pit
        assert_eq!(rows[3], "^ s P .");
        assert!(rows[1].starts_with('W'));
        assert_eq!(rows[2], "s . . .");
    }

    #[test]
    fn test_new_rejects_hand_built_invalid_scenario() {
        let mut scenario = Scenario::builtin("s1").unwrap();
        scenario.width = -4;
        assert!(matches!(
            WampaWorld::new(scenario),
            Err(ScenarioError::EmptyGrid { width: -4, .. })
        ));

        let mut scenario = Scenario::builtin("s1").unwrap();
        scenario.pits.push(Room::new(0, 2));
        assert!(matches!(
            WampaWorld::new(scenario),
            Err(ScenarioError::WampaOnPit(_))
        ));
    }

    #[test]
    fn test_game_ids_differ() {
        assert_ne!(s1().id(), s1().id());
    }
}
