//! Numeric route identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a route identifier cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route ID: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A numeric route identifier.
///
/// GO bus routes are published with numeric short names ("18", "96"), and
/// the short name doubles as the stable route ID downstream. Branch
/// suffixes ("96B") are not part of the route identity.
///
/// # Examples
///
/// ```
/// use go_bus_feed::domain::RouteId;
///
/// let id = RouteId::parse("18").unwrap();
/// assert_eq!(id.get(), 18);
///
/// // Embedded digits are extracted when the text is not purely numeric
/// assert_eq!(RouteId::from_embedded_digits("96B").unwrap().get(), 96);
///
/// // No digits at all is an error
/// assert!(RouteId::from_embedded_digits("Express").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u32);

impl RouteId {
    /// Wrap a known numeric route ID.
    pub const fn new(id: u32) -> Self {
        RouteId(id)
    }

    /// Parse a route ID from purely numeric text.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "must not be empty",
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRouteId {
                reason: "must contain only ASCII digits",
            });
        }
        s.parse().map(RouteId).map_err(|_| InvalidRouteId {
            reason: "out of range",
        })
    }

    /// Derive a route ID from the first run of digits embedded in `s`.
    pub fn from_embedded_digits(s: &str) -> Result<Self, InvalidRouteId> {
        let digits: String = s
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return Err(InvalidRouteId {
                reason: "no digits present",
            });
        }
        Self::parse(&digits)
    }

    /// Returns the numeric value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
