//! Stop code and numeric stop ID types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A feed-supplied stop code.
///
/// Most GO stops are coded with digits ("02130"), but stations and
/// terminals use short alphabetic codes ("UN", "USBT", "JAMES STR").
/// The only validation is that the code is non-empty after trimming.
///
/// # Examples
///
/// ```
/// use go_bus_feed::domain::StopCode;
///
/// assert!(StopCode::parse("12345").unwrap().is_numeric());
/// assert!(!StopCode::parse("UN").unwrap().is_numeric());
/// assert!(StopCode::parse("  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidStopCode {
                reason: "stop code cannot be empty",
            });
        }
        Ok(StopCode(s.to_string()))
    }

    /// Returns true if the code consists only of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A numeric stop identifier, as consumed downstream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StopId(u32);

impl StopId {
    /// Wrap a known numeric stop ID.
    pub const fn new(id: u32) -> Self {
        StopId(id)
    }

    /// Returns the numeric value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims() {
        let code = StopCode::parse("  UN ").unwrap();
        assert_eq!(code.as_str(), "UN");
    }

    #[test]
    fn reject_empty() {
        assert!(StopCode::parse("").is_err());
        assert!(StopCode::parse("\t").is_err());
    }

    #[test]
    fn numeric_detection() {
        assert!(StopCode::parse("00123").unwrap().is_numeric());
        assert!(!StopCode::parse("JAMES STR").unwrap().is_numeric());
        assert!(!StopCode::parse("12A").unwrap().is_numeric());
    }

    #[test]
    fn display_and_debug() {
        let code = StopCode::parse("USBT").unwrap();
        assert_eq!(code.to_string(), "USBT");
        assert_eq!(format!("{:?}", code), "StopCode(USBT)");

        let id = StopId::new(9021);
        assert_eq!(id.to_string(), "9021");
        assert_eq!(format!("{:?}", id), "StopId(9021)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Digit-only codes are always numeric
        #[test]
        fn digits_are_numeric(s in "[0-9]{1,9}") {
            prop_assert!(StopCode::parse(&s).unwrap().is_numeric());
        }

        /// Any letter makes a code non-numeric
        #[test]
        fn letters_are_not_numeric(s in "[0-9]{0,3}[A-Z][0-9A-Z]{0,3}") {
            prop_assert!(!StopCode::parse(&s).unwrap().is_numeric());
        }
    }
}
