//! Inference - model checking over possible worlds.
//!
//! One inference step works as follows:
//! 1. **Direct rules**: a room with neither breeze nor stench makes all its neighbors safe
//! 2. **Walls**: bumps are turned into wall lines
//! 3. **Events**: a gasp fixes Luke's room, a scream retires the wampa
//! 4. **Enumeration**: every hazard layout over the candidate rooms is generated
//! 5. **Filtering**: layouts that contradict a percept are dropped, leaving the model of the KB
//! 6. **Entailment**: a query about a neighbor is entailed when the model of the KB
//!    is a subset of the query's model
//! 7. **Update**: entailed conclusions are written back into the knowledge base

mod consistency;
mod query;
mod world;

pub use query::*;
pub use world::*;

use serde::Serialize;
use std::collections::BTreeSet;

use wampa_world::Room;

use crate::config::AgentConfig;
use crate::error::InferenceError;
use crate::knowledge_base::KnowledgeBase;

/// What one inference step considered and concluded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InferenceReport {
    /// Number of enumerated worlds.
    pub worlds: usize,

    /// Number of worlds consistent with the knowledge base.
    pub model_size: usize,

    pub pit_in_room: BTreeSet<Room>,
    pub wampa_in_room: BTreeSet<Room>,
    pub no_pit_in_room: BTreeSet<Room>,
    pub no_wampa_in_room: BTreeSet<Room>,

    /// Rooms that became safe during this step.
    pub newly_safe: BTreeSet<Room>,
}

impl InferenceReport {
    /// The neighbors for which `kind` was entailed.
    pub fn entailed(&self, kind: QueryKind) -> &BTreeSet<Room> {
        match kind {
            QueryKind::PitInRoom => &self.pit_in_room,
            QueryKind::WampaInRoom => &self.wampa_in_room,
            QueryKind::NoPitInRoom => &self.no_pit_in_room,
            QueryKind::NoWampaInRoom => &self.no_wampa_in_room,
        }
    }

    fn entailed_mut(&mut self, kind: QueryKind) -> &mut BTreeSet<Room> {
        match kind {
            QueryKind::PitInRoom => &mut self.pit_in_room,
            QueryKind::WampaInRoom => &mut self.wampa_in_room,
            QueryKind::NoPitInRoom => &mut self.no_pit_in_room,
            QueryKind::NoWampaInRoom => &mut self.no_wampa_in_room,
        }
    }
}

impl KnowledgeBase {
    /// Run one full inference step for the room the agent stands in.
    ///
    /// Percepts for `current` must already be recorded. On error the
    /// enumeration-based conclusions are not written back.
    #[tracing::instrument(level = "debug", skip_all, fields(room = %current))]
    pub fn run_inference(
        &mut self,
        current: Room,
        config: &AgentConfig,
    ) -> Result<InferenceReport, InferenceError> {
        let safe_before: BTreeSet<Room> = self.safe_rooms.iter().copied().collect();

        if !self.breeze_rooms.contains(&current) && !self.stench_rooms.contains(&current) {
            self.mark_safe(current.neighbors());
        }

        self.infer_walls();

        if self.gasp_perceived && self.luke_room.is_none() {
            self.luke_room = Some(current);
            tracing::debug!(room = %current, "Luke located");
        }

        if self.scream_perceived {
            if let Some(dead) = self.confirmed_wampa_room.take() {
                self.safe_rooms.insert(dead);
            }
            self.stench_rooms.clear();
        }

        let candidates = self.candidate_rooms().len();
        if candidates > config.max_candidate_rooms {
            tracing::warn!(
                candidates,
                limit = config.max_candidate_rooms,
                worlds = world_count(u32::try_from(candidates).unwrap_or(u32::MAX)),
                "Refusing to enumerate candidate space"
            );
            return Err(InferenceError::CandidateSpaceTooLarge {
                candidates,
                limit: config.max_candidate_rooms,
            });
        }

        let worlds = self.enumerate_possible_worlds();
        let model = self.find_model_of_kb(&worlds);
        if model.is_empty() {
            tracing::error!(
                room = %current,
                worlds = worlds.len(),
                "No world is consistent with the knowledge base"
            );
            return Err(InferenceError::InconsistentKnowledge {
                room: current,
                worlds: worlds.len(),
            });
        }

        let mut report = InferenceReport {
            worlds: worlds.len(),
            model_size: model.len(),
            ..Default::default()
        };
        for neighbor in current.neighbors() {
            for kind in QueryKind::ALL {
                if is_entailed(&model, kind, neighbor, &worlds) {
                    report.entailed_mut(kind).insert(neighbor);
                }
            }
        }

        let proven_safe: Vec<Room> = report
            .no_pit_in_room
            .intersection(&report.no_wampa_in_room)
            .copied()
            .collect();
        self.mark_safe(proven_safe);
        self.confirmed_pit_rooms.extend(report.pit_in_room.iter().copied());
        if !self.scream_perceived {
            if let Some(wampa) = report.wampa_in_room.first() {
                self.confirmed_wampa_room = Some(*wampa);
            }
        }

        report.newly_safe = self
            .safe_rooms
            .iter()
            .filter(|room| !safe_before.contains(room))
            .copied()
            .collect();

        tracing::debug!(
            worlds = report.worlds,
            model = report.model_size,
            newly_safe = report.newly_safe.len(),
            pits = report.pit_in_room.len(),
            wampa = ?self.confirmed_wampa_room,
            "Inference step complete"
        );
        Ok(report)
    }
}
