//! Game loop - plays an agent against a simulated world until the game ends.

use serde::Serialize;
use tracing::Level;

use wampa_world::{GameId, GameStatus, Room, Scenario, WampaWorld};

use crate::agent::Agent;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::events::TurnRecord;

/// How a game ended.
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub game_id: GameId,
    pub scenario: String,
    pub status: GameStatus,
    pub score: i32,
    pub has_luke: bool,
    pub final_room: Room,
    pub turns: u32,
    pub max_turns: u32,
    pub history: Vec<TurnRecord>,
}

impl GameOutcome {
    pub fn rescued(&self) -> bool {
        self.status == GameStatus::Rescued
    }

    /// The game was abandoned while still running.
    pub fn hit_turn_limit(&self) -> bool {
        self.status == GameStatus::Running && self.turns >= self.max_turns
    }

    /// Serialize the outcome, history included, as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Play `scenario` with a fresh agent.
#[tracing::instrument(skip_all, fields(scenario = %scenario.name))]
pub fn run_game(scenario: Scenario, config: &GameConfig) -> Result<GameOutcome, GameError> {
    let name = scenario.name.clone();
    let mut agent = Agent::new(scenario.start, config.agent);
    let mut world = WampaWorld::new(scenario)?;
    let mut history = Vec::new();

    tracing::info!(game = %world.id(), max_turns = config.max_turns, "Game started");

    let mut turn = 0;
    while world.is_running() && turn < config.max_turns {
        turn += 1;

        let observation = world.observe();
        agent.observe(&observation);
        let report = agent.run_inference()?;
        let action = agent.choose_next_action();

        if tracing::enabled!(Level::TRACE) {
            let board = world.render(Some(agent.kb().safe_rooms()));
            tracing::trace!(turn, action = action.as_str(), "\n{board}");
        }

        history.push(TurnRecord::new(
            turn,
            observation.pose,
            observation.percepts,
            action,
            report,
        ));
        world.take_action(action)?;
    }

    let outcome = GameOutcome {
        game_id: world.id(),
        scenario: name,
        status: world.status(),
        score: world.score(),
        has_luke: world.has_luke(),
        final_room: world.pose().room,
        turns: turn,
        max_turns: config.max_turns,
        history,
    };

    if outcome.hit_turn_limit() {
        tracing::warn!(game = %outcome.game_id, turns = outcome.turns, "Turn limit reached");
    }
    tracing::info!(
        game = %outcome.game_id,
        status = ?outcome.status,
        score = outcome.score,
        turns = outcome.turns,
        "Game finished"
    );
    Ok(outcome)
}

/// Play one of the scenarios shipped with `wampa_world`.
pub fn run_builtin(name: &str, config: &GameConfig) -> Result<GameOutcome, GameError> {
    run_game(Scenario::builtin(name)?, config)
}
