//! Grid geometry: rooms, headings and the agent's pose.

use serde::{Deserialize, Serialize};

/// A grid cell identified by its integer coordinates.
///
/// Rooms carry no identity beyond their value. The grid is discovered
/// incrementally, so negative coordinates are legal until proven to be walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Room {
    pub x: i32,
    pub y: i32,
}

impl Room {
    /// Create a room at the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The conventional start room.
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The room one step away in the given direction.
    pub fn step(self, direction: Direction) -> Room {
        let (dx, dy) = direction.delta();
        Room::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonally adjacent rooms, unfiltered by any bounds.
    pub fn neighbors(self) -> [Room; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Check whether `other` is orthogonally adjacent to this room.
    pub fn is_adjacent(self, other: Room) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl From<(i32, i32)> for Room {
    fn from((x, y): (i32, i32)) -> Self {
        Room::new(x, y)
    }
}

impl From<Room> for (i32, i32) {
    fn from(room: Room) -> Self {
        (room.x, room.y)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading of the agent. `Up` is increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All headings in clockwise order starting from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Heading after a 90 degree counter-clockwise turn.
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Heading after a 90 degree clockwise turn.
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The heading that leads from `from` to the adjacent room `to`.
    pub fn between(from: Room, to: Room) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| from.step(*d) == to)
    }

    /// Check whether `target` lies strictly ahead of `origin` along this heading.
    pub fn points_at(self, origin: Room, target: Room) -> bool {
        match self {
            Direction::Up => target.x == origin.x && target.y > origin.y,
            Direction::Down => target.x == origin.x && target.y < origin.y,
            Direction::Left => target.y == origin.y && target.x < origin.x,
            Direction::Right => target.y == origin.y && target.x > origin.x,
        }
    }

    /// Lower-case name, as used in scenario files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the agent stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub room: Room,
    pub heading: Direction,
}

impl Pose {
    /// Create a pose.
    pub fn new(room: Room, heading: Direction) -> Self {
        Self { room, heading }
    }

    /// The room directly ahead.
    pub fn ahead(&self) -> Room {
        self.room.step(self.heading)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Room::origin(), Direction::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_unbounded() {
        let neighbors = Room::origin().neighbors();
        assert!(neighbors.contains(&Room::new(0, 1)));
        assert!(neighbors.contains(&Room::new(1, 0)));
        assert!(neighbors.contains(&Room::new(0, -1)));
        assert!(neighbors.contains(&Room::new(-1, 0)));
    }

    #[test]
    fn test_adjacency() {
        let room = Room::new(2, 2);
        assert!(room.is_adjacent(Room::new(2, 3)));
        assert!(!room.is_adjacent(Room::new(3, 3)));
        assert!(!room.is_adjacent(room));
    }

    #[test]
    fn test_turns_cycle() {
        let mut heading = Direction::Up;
        for _ in 0..4 {
            heading = heading.turn_right();
        }
        assert_eq!(heading, Direction::Up);
        assert_eq!(Direction::Up.turn_left(), Direction::Left);
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
    }

    #[test]
    fn test_between_and_points_at() {
        let origin = Room::origin();
        assert_eq!(Direction::between(origin, Room::new(0, -1)), Some(Direction::Down));
        assert_eq!(Direction::between(origin, Room::new(2, 0)), None);

        assert!(Direction::Up.points_at(origin, Room::new(0, 3)));
        assert!(!Direction::Up.points_at(origin, Room::new(1, 3)));
        assert!(Direction::Left.points_at(Room::new(3, 1), Room::new(0, 1)));
    }

    #[test]
    fn test_room_serializes_as_pair() {
        let json = serde_json::to_string(&Room::new(1, -2)).unwrap();
        assert_eq!(json, "[1,-2]");

        let room: Room = serde_json::from_str("[3,4]").unwrap();
        assert_eq!(room, Room::new(3, 4));
    }
}
