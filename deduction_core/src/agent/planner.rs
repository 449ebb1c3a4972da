//! Shortest paths over rooms the agent can walk through.

use std::collections::{HashMap, HashSet, VecDeque};

use wampa_world::{Action, Direction, Pose, Room};

/// Breadth-first search from `start` to the nearest room satisfying `is_goal`.
///
/// Only rooms for which `passable` holds are entered. Neighbors are expanded
/// in [`Direction::ALL`] order, so ties are broken the same way every time.
/// The returned path excludes `start` and ends at the goal; it is empty when
/// `start` itself is a goal.
pub fn shortest_path(
    start: Room,
    passable: impl Fn(Room) -> bool,
    is_goal: impl Fn(Room) -> bool,
) -> Option<Vec<Room>> {
    let mut parents: HashMap<Room, Room> = HashMap::new();
    let mut seen: HashSet<Room> = HashSet::from([start]);
    let mut queue: VecDeque<Room> = VecDeque::from([start]);

    while let Some(room) = queue.pop_front() {
        if is_goal(room) {
            let mut path = vec![room];
            let mut cursor = room;
            while let Some(parent) = parents.get(&cursor) {
                if *parent == start {
                    break;
                }
                path.push(*parent);
                cursor = *parent;
            }
            if room == start {
                path.clear();
            }
            path.reverse();
            return Some(path);
        }

        for next in room.neighbors() {
            if passable(next) && seen.insert(next) {
                parents.insert(next, room);
                queue.push_back(next);
            }
        }
    }
    None
}

/// The single action that brings the agent closer to the adjacent room `next`.
///
/// Returns `None` if `next` is not adjacent.
pub fn step_toward(pose: Pose, next: Room) -> Option<Action> {
    let desired = Direction::between(pose.room, next)?;
    Some(turn_toward(pose.heading, desired))
}

/// Forward when already facing `desired`, otherwise the shorter turn.
pub fn turn_toward(heading: Direction, desired: Direction) -> Action {
    if heading == desired {
        Action::Forward
    } else if heading.turn_left() == desired {
        Action::TurnLeft
    } else {
        Action::TurnRight
    }
}
