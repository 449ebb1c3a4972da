//! Possible worlds and their enumeration.

use std::collections::{BTreeSet, HashSet};

use wampa_world::Room;

use crate::knowledge_base::KnowledgeBase;

/// A set of world hypotheses.
pub type WorldSet = HashSet<PossibleWorld>;

/// One hypothesis about where every hazard is.
///
/// Equality is structural, so identical hypotheses collapse in a [`WorldSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PossibleWorld {
    pub pit_rooms: BTreeSet<Room>,
    /// `None` means there is no wampa among the candidate rooms.
    pub wampa_room: Option<Room>,
}

impl PossibleWorld {
    pub fn new(pit_rooms: impl IntoIterator<Item = Room>, wampa_room: Option<Room>) -> Self {
        Self {
            pit_rooms: pit_rooms.into_iter().collect(),
            wampa_room,
        }
    }

    /// The world with no hazards anywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_pit(&self, room: Room) -> bool {
        self.pit_rooms.contains(&room)
    }

    pub fn has_wampa(&self, room: Room) -> bool {
        self.wampa_room == Some(room)
    }
}

impl std::fmt::Display for PossibleWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pits: Vec<String> = self.pit_rooms.iter().map(|r| r.to_string()).collect();
        match self.wampa_room {
            Some(wampa) => write!(f, "pits [{}], wampa {}", pits.join(", "), wampa),
            None => write!(f, "pits [{}], no wampa", pits.join(", ")),
        }
    }
}

/// Number of worlds [`KnowledgeBase::enumerate_possible_worlds`] yields for
/// `n` candidate rooms: every pit subset, each with no wampa or a wampa in
/// one of the remaining rooms.
pub fn world_count(n: u32) -> u128 {
    let subsets = 1u128.checked_shl(n).unwrap_or(u128::MAX);
    subsets.saturating_add(u128::from(n).saturating_mul(subsets >> 1))
}

impl KnowledgeBase {
    /// Generate every hazard layout over the candidate rooms.
    ///
    /// Pits range over all subsets of the candidates; the wampa is absent or in
    /// exactly one candidate that holds no pit. Percept evidence is ignored
    /// here and applied by [`KnowledgeBase::find_model_of_kb`].
    pub fn enumerate_possible_worlds(&self) -> WorldSet {
        let candidates: Vec<Room> = self.candidate_rooms().into_iter().collect();

        let mut pit_subsets: Vec<BTreeSet<Room>> = vec![BTreeSet::new()];
        for room in &candidates {
            let with_room: Vec<BTreeSet<Room>> = pit_subsets
                .iter()
                .map(|subset| {
                    let mut subset = subset.clone();
                    subset.insert(*room);
                    subset
                })
                .collect();
            pit_subsets.extend(with_room);
        }

        let mut worlds = WorldSet::new();
        for pit_rooms in pit_subsets {
            for wampa in candidates.iter().filter(|room| !pit_rooms.contains(room)) {
                worlds.insert(PossibleWorld {
                    pit_rooms: pit_rooms.clone(),
                    wampa_room: Some(*wampa),
                });
            }
            worlds.insert(PossibleWorld {
                pit_rooms,
                wampa_room: None,
            });
        }
        worlds
    }
}
