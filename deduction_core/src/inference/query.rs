//! Room-specific queries over sets of worlds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use wampa_world::Room;

use super::{PossibleWorld, WorldSet};
use crate::error::KnowledgeError;

/// The four questions asked about each room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    PitInRoom,
    WampaInRoom,
    NoPitInRoom,
    NoWampaInRoom,
}

impl QueryKind {
    pub const ALL: [QueryKind; 4] = [
        QueryKind::PitInRoom,
        QueryKind::WampaInRoom,
        QueryKind::NoPitInRoom,
        QueryKind::NoWampaInRoom,
    ];

    /// Does the query hold for `room` in this world?
    pub fn holds_in(self, room: Room, world: &PossibleWorld) -> bool {
        match self {
            QueryKind::PitInRoom => world.has_pit(room),
            QueryKind::WampaInRoom => world.has_wampa(room),
            QueryKind::NoPitInRoom => !world.has_pit(room),
            QueryKind::NoWampaInRoom => !world.has_wampa(room),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::PitInRoom => "pit_in_room",
            QueryKind::WampaInRoom => "wampa_in_room",
            QueryKind::NoPitInRoom => "no_pit_in_room",
            QueryKind::NoWampaInRoom => "no_wampa_in_room",
        }
    }
}

impl FromStr for QueryKind {
    type Err = KnowledgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryKind::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| KnowledgeError::UnknownQuery(s.to_string()))
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The worlds in which the query holds for `room`.
pub fn find_model_of_query(kind: QueryKind, room: Room, worlds: &WorldSet) -> WorldSet {
    worlds
        .iter()
        .filter(|world| kind.holds_in(room, world))
        .cloned()
        .collect()
}

/// A query is entailed when it holds in every world of the model.
pub fn is_entailed(model: &WorldSet, kind: QueryKind, room: Room, worlds: &WorldSet) -> bool {
    model.is_subset(&find_model_of_query(kind, room, worlds))
}
