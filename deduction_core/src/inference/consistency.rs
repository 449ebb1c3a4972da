//! Consistency of single-room hypotheses with the knowledge base, and the
//! model-of-KB filter built on them.

use wampa_world::Room;

use super::{PossibleWorld, WorldSet};
use crate::knowledge_base::KnowledgeBase;

impl KnowledgeBase {
    /// Could `candidate` hold a pit, given every breeze observation so far?
    ///
    /// `None` asks whether there could be no pit at all, which holds only while
    /// no breeze has been sensed. Otherwise every visited neighbor of the
    /// candidate must have been breezy; unvisited neighbors say nothing.
    pub fn pit_consistent(&self, candidate: Option<Room>) -> bool {
        match candidate {
            None => self.breeze_rooms.is_empty(),
            Some(room) => room
                .neighbors()
                .iter()
                .all(|n| !self.visited_rooms.contains(n) || self.breeze_rooms.contains(n)),
        }
    }

    /// Could `candidate` hold the wampa, given every stench observation so far?
    ///
    /// Like [`pit_consistent`](Self::pit_consistent), every visited neighbor
    /// must have smelled it. In addition every stench ever sensed must be
    /// adjacent to the candidate: the wampa is the only source of stench, so
    /// a stench elsewhere rules the candidate out. This second rule depends on
    /// there being at most one wampa and would be unsound with several.
    pub fn wampa_consistent(&self, candidate: Option<Room>) -> bool {
        match candidate {
            None => self.stench_rooms.is_empty(),
            Some(room) => {
                let neighbors_smell = room
                    .neighbors()
                    .iter()
                    .all(|n| !self.visited_rooms.contains(n) || self.stench_rooms.contains(n));
                let explains_every_stench = self.stench_rooms.iter().all(|s| s.is_adjacent(room));

                neighbors_smell && explains_every_stench
            }
        }
    }

    /// Check whether a whole world satisfies the knowledge base.
    pub fn is_model(&self, world: &PossibleWorld) -> bool {
        if !self.wampa_consistent(world.wampa_room) {
            return false;
        }
        if world.pit_rooms.is_empty() {
            self.pit_consistent(None)
        } else {
            world.pit_rooms.iter().all(|pit| self.pit_consistent(Some(*pit)))
        }
    }

    /// The subset of `worlds` consistent with everything known.
    pub fn find_model_of_kb(&self, worlds: &WorldSet) -> WorldSet {
        worlds.iter().filter(|w| self.is_model(w)).cloned().collect()
    }
}
