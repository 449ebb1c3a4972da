//! Scenario definitions - the hidden layout of a cave.
//!
//! Scenarios are plain data, written in TOML (or JSON):
//!
//! ```toml
//! name = "s1"
//! width = 4
//! height = 4
//! wampa = [0, 2]
//! pits = [[2, 0]]
//! luke = [1, 3]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::grid::Room;

const BUILTIN: &[(&str, &str)] = &[
    ("s1", include_str!("../../scenarios/s1.toml")),
    ("s2", include_str!("../../scenarios/s2.toml")),
    ("s3", include_str!("../../scenarios/s3.toml")),
];

/// A complete world layout. The agent never sees this directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub width: i32,
    pub height: i32,

    /// Where the agent enters and must climb out.
    #[serde(default = "Room::origin")]
    pub start: Room,

    /// The single mobile hazard, if the cave has one.
    #[serde(default)]
    pub wampa: Option<Room>,

    #[serde(default)]
    pub pits: Vec<Room>,

    pub luke: Room,
}

impl Scenario {
    /// Parse and validate a scenario from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Parse and validate a scenario from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load one of the scenarios shipped with the crate.
    pub fn builtin(name: &str) -> Result<Self, ScenarioError> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| ScenarioError::UnknownBuiltin(name.to_string()))
            .and_then(|(_, source)| Self::from_toml_str(source))
    }

    /// Names of all shipped scenarios.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }

    /// Check whether a room lies inside the grid.
    pub fn contains(&self, room: Room) -> bool {
        (0..self.width).contains(&room.x) && (0..self.height).contains(&room.y)
    }

    /// Check that the layout describes a playable world.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.width < 1 || self.height < 1 {
            return Err(ScenarioError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        let placed = std::iter::once(("start", self.start))
            .chain(std::iter::once(("luke", self.luke)))
            .chain(self.wampa.map(|room| ("wampa", room)))
            .chain(self.pits.iter().map(|room| ("pit", *room)));
        for (what, room) in placed {
            if !self.contains(room) {
                return Err(ScenarioError::OutOfBounds {
                    what,
                    room,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        if self.is_hazard(self.start) {
            return Err(ScenarioError::HazardAtStart(self.start));
        }
        if self.is_hazard(self.luke) {
            return Err(ScenarioError::LukeOnHazard(self.luke));
        }
        if let Some(wampa) = self.wampa.filter(|room| self.pits.contains(room)) {
            return Err(ScenarioError::WampaOnPit(wampa));
        }
        Ok(())
    }

    fn is_hazard(&self, room: Room) -> bool {
        self.wampa == Some(room) || self.pits.contains(&room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_load() {
        for name in Scenario::builtin_names() {
            let scenario = Scenario::builtin(name).unwrap();
            assert_eq!(scenario.name, name);
        }
    }

    #[test]
    fn test_s1_layout() {
        let s1 = Scenario::builtin("s1").unwrap();
        assert_eq!((s1.width, s1.height), (4, 4));
        assert_eq!(s1.start, Room::origin());
        assert_eq!(s1.wampa, Some(Room::new(0, 2)));
        assert_eq!(s1.pits, vec![Room::new(2, 0)]);
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(matches!(
            Scenario::builtin("s99"),
            Err(ScenarioError::UnknownBuiltin(name)) if name == "s99"
        ));
    }

    #[test]
    fn test_defaults_from_toml() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "tiny"
            width = 2
            height = 1
            luke = [1, 0]
            "#,
        )
        .unwrap();

        assert_eq!(scenario.start, Room::origin());
        assert!(scenario.wampa.is_none());
        assert!(scenario.pits.is_empty());
    }

    #[test]
    fn test_from_json() {
        let scenario = Scenario::from_json_str(
            r#"{"name": "j", "width": 3, "height": 3, "wampa": [2, 2], "pits": [[1, 1]], "luke": [0, 2]}"#,
        )
        .unwrap();

        assert_eq!(scenario.wampa, Some(Room::new(2, 2)));
        assert_eq!(scenario.pits, vec![Room::new(1, 1)]);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let result = Scenario::from_toml_str(
            r#"
            name = "bad"
            width = 2
            height = 2
            pits = [[2, 0]]
            luke = [1, 1]
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::OutOfBounds { what: "pit", .. })));
    }

    #[test]
    fn test_rejects_hazard_at_start() {
        let result = Scenario::from_toml_str(
            r#"
            name = "bad"
            width = 2
            height = 2
            wampa = [0, 0]
            luke = [1, 1]
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::HazardAtStart(_))));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let result = Scenario::from_toml_str(
            r#"
            name = "bad"
            width = 0
            height = 3
            luke = [0, 0]
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::EmptyGrid { .. })));
    }

    #[test]
    fn test_rejects_luke_on_pit() {
        let result = Scenario::from_toml_str(
            r#"
            name = "bad"
            width = 3
            height = 3
            pits = [[2, 2]]
            luke = [2, 2]
            "#,
        );
        assert!(matches!(result, Err(ScenarioError::LukeOnHazard(_))));
    }

    #[test]
    fn test_rejects_wampa_on_pit() {
        let result = Scenario::from_toml_str(
            r#"
            name = "stacked"
            width = 3
            height = 3
            wampa = [1, 1]
            pits = [[1, 1]]
            luke = [2, 2]
            "#,
        );
        assert!(matches!(
            result,
            Err(ScenarioError::WampaOnPit(room)) if room == Room::new(1, 1)
        ));
    }
}
