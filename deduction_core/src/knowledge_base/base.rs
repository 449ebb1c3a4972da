//! The knowledge base record and percept recording.

use std::collections::{BTreeSet, HashMap, HashSet};

use wampa_world::{Direction, Percept, PerceptSet, Room};

/// Everything the agent has perceived or deduced so far.
///
/// Sets only grow, with two exceptions tied to the scream: once the wampa is
/// known to be dead, the confirmed wampa room and all stench observations are
/// cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    /// Rooms known to exist: every visited room and its neighbors.
    pub(crate) known_rooms: HashSet<Room>,

    /// Rooms proven to hold no hazard.
    pub(crate) safe_rooms: HashSet<Room>,

    pub(crate) visited_rooms: HashSet<Room>,
    pub(crate) stench_rooms: HashSet<Room>,
    pub(crate) breeze_rooms: HashSet<Room>,

    /// Most recent bump per room, keyed by the heading that was blocked.
    pub(crate) bump_events: HashMap<Room, Direction>,

    pub(crate) gasp_perceived: bool,
    pub(crate) scream_perceived: bool,

    /// Rooms outside the traversable grid.
    pub(crate) wall_rooms: HashSet<Room>,

    pub(crate) confirmed_pit_rooms: HashSet<Room>,
    pub(crate) confirmed_wampa_room: Option<Room>,
    pub(crate) luke_room: Option<Room>,
}

impl KnowledgeBase {
    /// Create a knowledge base seeded with the start room.
    pub fn new(start: Room) -> Self {
        Self {
            known_rooms: HashSet::from([start]),
            safe_rooms: HashSet::from([start]),
            visited_rooms: HashSet::from([start]),
            stench_rooms: HashSet::new(),
            breeze_rooms: HashSet::new(),
            bump_events: HashMap::new(),
            gasp_perceived: false,
            scream_perceived: false,
            wall_rooms: HashSet::new(),
            confirmed_pit_rooms: HashSet::new(),
            confirmed_wampa_room: None,
            luke_room: None,
        }
    }

    /// Fold the percepts sensed in `room` into the knowledge base.
    ///
    /// `heading` is only used for a bump, which records the blocked direction.
    /// The room itself becomes visited and safe, and its neighbors become known.
    pub fn record_percepts(&mut self, room: Room, heading: Direction, percepts: PerceptSet) {
        for percept in percepts.iter() {
            match percept {
                Percept::Stench => {
                    self.stench_rooms.insert(room);
                }
                Percept::Breeze => {
                    self.breeze_rooms.insert(room);
                }
                Percept::Bump => {
                    self.bump_events.insert(room, heading);
                }
                Percept::Gasp => self.gasp_perceived = true,
                Percept::Scream => self.scream_perceived = true,
            }
        }

        self.visited_rooms.insert(room);
        self.safe_rooms.insert(room);
        self.known_rooms.insert(room);
        self.known_rooms.extend(room.neighbors());
    }

    pub(crate) fn mark_safe(&mut self, rooms: impl IntoIterator<Item = Room>) {
        self.safe_rooms.extend(rooms);
    }

    /// Rooms that may still hold a hazard: known, not walls and not proven safe.
    ///
    /// Sorted, so that enumeration order is stable.
    pub fn candidate_rooms(&self) -> BTreeSet<Room> {
        self.known_rooms
            .iter()
            .filter(|room| !self.wall_rooms.contains(room) && !self.safe_rooms.contains(room))
            .copied()
            .collect()
    }

    pub fn known_rooms(&self) -> &HashSet<Room> {
        &self.known_rooms
    }

    pub fn safe_rooms(&self) -> &HashSet<Room> {
        &self.safe_rooms
    }

    pub fn visited_rooms(&self) -> &HashSet<Room> {
        &self.visited_rooms
    }

    pub fn stench_rooms(&self) -> &HashSet<Room> {
        &self.stench_rooms
    }

    pub fn breeze_rooms(&self) -> &HashSet<Room> {
        &self.breeze_rooms
    }

    pub fn bump_events(&self) -> &HashMap<Room, Direction> {
        &self.bump_events
    }

    pub fn wall_rooms(&self) -> &HashSet<Room> {
        &self.wall_rooms
    }

    pub fn confirmed_pit_rooms(&self) -> &HashSet<Room> {
        &self.confirmed_pit_rooms
    }

    /// The wampa's room, once proven.
    pub fn confirmed_wampa_room(&self) -> Option<Room> {
        self.confirmed_wampa_room
    }

    /// Luke's room, once found.
    pub fn luke_room(&self) -> Option<Room> {
        self.luke_room
    }

    pub fn gasp_perceived(&self) -> bool {
        self.gasp_perceived
    }

    pub fn scream_perceived(&self) -> bool {
        self.scream_perceived
    }

    pub fn is_known(&self, room: Room) -> bool {
        self.known_rooms.contains(&room)
    }

    pub fn is_safe(&self, room: Room) -> bool {
        self.safe_rooms.contains(&room)
    }

    pub fn is_visited(&self, room: Room) -> bool {
        self.visited_rooms.contains(&room)
    }

    pub fn is_wall(&self, room: Room) -> bool {
        self.wall_rooms.contains(&room)
    }

    pub fn is_confirmed_pit(&self, room: Room) -> bool {
        self.confirmed_pit_rooms.contains(&room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_percepts() -> PerceptSet {
        Percept::ALL.into_iter().collect()
    }

    #[test]
    fn test_new_kb_seeds_start_room() {
        let kb = KnowledgeBase::new(Room::origin());

        assert!(kb.is_known(Room::origin()));
        assert!(kb.is_safe(Room::origin()));
        assert!(kb.is_visited(Room::origin()));
        assert_eq!(kb.known_rooms().len(), 1);
        assert!(kb.confirmed_wampa_room().is_none());
        assert!(kb.luke_room().is_none());
    }

    #[test]
    fn test_record_every_percept() {
        let mut kb = KnowledgeBase::new(Room::origin());
        let room = Room::new(9, 9);
        kb.record_percepts(room, Direction::Up, all_percepts());

        assert_eq!(kb.stench_rooms(), &HashSet::from([room]));
        assert_eq!(kb.breeze_rooms(), &HashSet::from([room]));
        assert_eq!(kb.bump_events(), &HashMap::from([(room, Direction::Up)]));
        assert!(kb.gasp_perceived());
        assert!(kb.scream_perceived());
    }

    #[test]
    fn test_record_empty_percepts() {
        let mut kb = KnowledgeBase::new(Room::origin());
        kb.record_percepts(Room::new(1, 0), Direction::Right, PerceptSet::new());

        assert!(kb.stench_rooms().is_empty());
        assert!(kb.breeze_rooms().is_empty());
        assert!(kb.bump_events().is_empty());
        assert!(!kb.gasp_perceived());
        assert!(kb.is_visited(Room::new(1, 0)));
        assert!(kb.is_safe(Room::new(1, 0)));
    }

    #[test]
    fn test_record_discovers_neighbors() {
        let mut kb = KnowledgeBase::new(Room::origin());
        kb.record_percepts(Room::origin(), Direction::Up, PerceptSet::new());

        for neighbor in Room::origin().neighbors() {
            assert!(kb.is_known(neighbor));
            assert!(!kb.is_visited(neighbor));
        }
        assert_eq!(kb.known_rooms().len(), 5);
    }

    #[test]
    fn test_bump_keeps_latest_heading() {
        let mut kb = KnowledgeBase::new(Room::origin());
        let bump = PerceptSet::new().with(Percept::Bump);
        kb.record_percepts(Room::origin(), Direction::Left, bump);
        kb.record_percepts(Room::origin(), Direction::Down, bump);

        assert_eq!(kb.bump_events().len(), 1);
        assert_eq!(kb.bump_events()[&Room::origin()], Direction::Down);
    }

    #[test]
    fn test_candidates_exclude_safe_and_walls() {
        let mut kb = KnowledgeBase::new(Room::origin());
        kb.record_percepts(Room::origin(), Direction::Up, PerceptSet::new());
        kb.wall_rooms.insert(Room::new(-1, 0));
        kb.mark_safe([Room::new(0, 1)]);

        let candidates = kb.candidate_rooms();
        assert_eq!(
            candidates.into_iter().collect::<Vec<_>>(),
            vec![Room::new(0, -1), Room::new(1, 0)]
        );
    }
}
