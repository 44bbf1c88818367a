//! Direction slot and compass direction types.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when parsing an invalid direction slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {value:?} (expected 0 or 1)")]
pub struct InvalidDirection {
    value: String,
}

/// One of the two direction slots of a route.
///
/// Every route has exactly two slots; there is no three-way branching.
/// An absent `direction_id` defaults to slot 0.
///
/// # Examples
///
/// ```
/// use go_bus_feed::domain::DirectionSlot;
///
/// assert_eq!(DirectionSlot::parse("1").unwrap(), DirectionSlot::One);
/// assert_eq!(DirectionSlot::parse("").unwrap(), DirectionSlot::Zero);
/// assert!(DirectionSlot::parse("2").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DirectionSlot {
    #[default]
    Zero,
    One,
}

impl DirectionSlot {
    /// Parse a GTFS `direction_id` value.
    pub fn parse(s: &str) -> Result<Self, InvalidDirection> {
        match s.trim() {
            "" | "0" => Ok(DirectionSlot::Zero),
            "1" => Ok(DirectionSlot::One),
            other => Err(InvalidDirection {
                value: other.to_string(),
            }),
        }
    }

    /// Returns the slot index (0 or 1).
    pub fn index(&self) -> u8 {
        match self {
            DirectionSlot::Zero => 0,
            DirectionSlot::One => 1,
        }
    }
}

impl fmt::Display for DirectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl Serialize for DirectionSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

/// A compass direction, used by routes labelled by heading rather than
/// by destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinal {
    East,
    West,
    North,
    South,
}

impl Cardinal {
    /// Display label used as the trip headsign.
    pub fn label(&self) -> &'static str {
        match self {
            Cardinal::East => "East",
            Cardinal::West => "West",
            Cardinal::North => "North",
            Cardinal::South => "South",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
