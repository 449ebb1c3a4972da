//! Wall inference from bump events.

use wampa_world::{Direction, Room};

use super::KnowledgeBase;

/// Inclusive coordinate bounds of the known rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl KnowledgeBase {
    /// Bounds of every room known so far, or `None` if nothing is known.
    pub fn known_bounds(&self) -> Option<KnownBounds> {
        let mut rooms = self.known_rooms.iter();
        let first = rooms.next()?;
        let init = KnownBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(rooms.fold(init, |b, room| KnownBounds {
            min_x: b.min_x.min(room.x),
            max_x: b.max_x.max(room.x),
            min_y: b.min_y.min(room.y),
            max_y: b.max_y.max(room.y),
        }))
    }

    /// Turn every recorded bump into a full wall line.
    ///
    /// The cave is rectangular, so a bump heading up from `(rx, ry)` means the
    /// whole row `ry + 1` lies outside it. The line spans the currently known
    /// range of the other axis and is recomputed from all bumps on every call,
    /// so it grows as more of the cave is discovered.
    pub fn infer_walls(&mut self) {
        if self.bump_events.is_empty() {
            return;
        }
        let Some(bounds) = self.known_bounds() else {
            return;
        };

        let mut walls = Vec::new();
        for (room, heading) in &self.bump_events {
            let beyond = room.step(*heading);
            match heading {
                Direction::Up | Direction::Down => {
                    walls.extend((bounds.min_x..=bounds.max_x).map(|x| Room::new(x, beyond.y)));
                }
                Direction::Left | Direction::Right => {
                    walls.extend((bounds.min_y..=bounds.max_y).map(|y| Room::new(beyond.x, y)));
                }
            }
        }
        self.wall_rooms.extend(walls);
    }
}
