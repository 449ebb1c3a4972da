//! Game mechanics: percepts, actions and scoring.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Points lost for every action taken.
pub const ACTION_COST: i32 = 1;

/// Points lost when the agent walks into a hazard.
pub const DEATH_PENALTY: i32 = 1000;

/// Points earned for climbing out with Luke.
pub const RESCUE_REWARD: i32 = 1000;

/// Everything the agent can sense in its current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Percept {
    /// The wampa is in an adjacent room.
    Stench,
    /// A pit is in an adjacent room.
    Breeze,
    /// Luke is in this room.
    Gasp,
    /// The last forward move hit a wall.
    Bump,
    /// The wampa has been killed.
    Scream,
}

impl Percept {
    pub const ALL: [Percept; 5] = [
        Percept::Stench,
        Percept::Breeze,
        Percept::Gasp,
        Percept::Bump,
        Percept::Scream,
    ];

    fn bit(self) -> u8 {
        match self {
            Percept::Stench => 1,
            Percept::Breeze => 1 << 1,
            Percept::Gasp => 1 << 2,
            Percept::Bump => 1 << 3,
            Percept::Scream => 1 << 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Percept::Stench => "stench",
            Percept::Breeze => "breeze",
            Percept::Gasp => "gasp",
            Percept::Bump => "bump",
            Percept::Scream => "scream",
        }
    }
}

impl FromStr for Percept {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Percept::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPercept(s.to_string()))
    }
}

impl std::fmt::Display for Percept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The percepts sensed on one turn. An empty set means nothing was sensed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PerceptSet(u8);

impl PerceptSet {
    /// An empty percept set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this set with `percept` added.
    pub fn with(mut self, percept: Percept) -> Self {
        self.insert(percept);
        self
    }

    pub fn insert(&mut self, percept: Percept) {
        self.0 |= percept.bit();
    }

    pub fn contains(&self, percept: Percept) -> bool {
        self.0 & percept.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the contained percepts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Percept> + '_ {
        Percept::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Percept> for PerceptSet {
    fn from_iter<I: IntoIterator<Item = Percept>>(iter: I) -> Self {
        let mut set = PerceptSet::new();
        for percept in iter {
            set.insert(percept);
        }
        set
    }
}

impl std::fmt::Debug for PerceptSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for PerceptSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for PerceptSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let percepts = Vec::<Percept>::deserialize(deserializer)?;
        Ok(percepts.into_iter().collect())
    }
}

/// Actions the agent can ask the world to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
    /// Fire the single blaster bolt along the current heading.
    Shoot,
    /// Pick up Luke in the current room.
    Grab,
    /// Leave the cave; only counts from the start room with Luke.
    Climb,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Shoot,
        Action::Grab,
        Action::Climb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::TurnLeft => "left",
            Action::TurnRight => "right",
            Action::Shoot => "shoot",
            Action::Grab => "grab",
            Action::Climb => "climb",
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percept_set_membership() {
        let set = PerceptSet::new().with(Percept::Stench).with(Percept::Bump);

        assert!(set.contains(Percept::Stench));
        assert!(set.contains(Percept::Bump));
        assert!(!set.contains(Percept::Breeze));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Percept::Stench, Percept::Bump]);
    }

    #[test]
    fn test_empty_percept_set() {
        let set = PerceptSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_parse_percepts() {
        let set: PerceptSet = ["breeze", "gasp"]
            .iter()
            .map(|s| s.parse::<Percept>())
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(set.contains(Percept::Breeze));
        assert!(set.contains(Percept::Gasp));
        assert!(matches!(
            "smell".parse::<Percept>(),
            Err(ParseError::UnknownPercept(s)) if s == "smell"
        ));
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("forward".parse::<Action>().unwrap(), Action::Forward);
        assert_eq!("left".parse::<Action>().unwrap(), Action::TurnLeft);
        assert!("jump".parse::<Action>().is_err());
    }

    #[test]
    fn test_percept_set_serde() {
        let set = PerceptSet::new().with(Percept::Scream).with(Percept::Breeze);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["breeze","scream"]"#);

        let back: PerceptSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
