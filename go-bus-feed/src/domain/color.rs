//! Route color type.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {value:?}: {reason}")]
pub struct InvalidColor {
    value: String,
    reason: &'static str,
}

/// A 6-digit RGB hex color, stored uppercase without a leading `#`.
///
/// # Examples
///
/// ```
/// use go_bus_feed::domain::RouteColor;
///
/// assert_eq!(RouteColor::parse("98002e").unwrap().as_str(), "98002E");
/// assert_eq!(RouteColor::parse("#387C2B").unwrap().as_str(), "387C2B");
/// assert!(RouteColor::parse("green").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteColor([u8; 6]);

impl RouteColor {
    /// Parse a hex color, accepting an optional leading `#`.
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let bytes = hex.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidColor {
                value: s.to_string(),
                reason: "must be exactly 6 hex digits",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidColor {
                    value: s.to_string(),
                    reason: "must contain only hex digits",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(RouteColor(out))
    }

    /// Build a color from a hex literal known at compile time.
    ///
    /// Panics if `hex` is not six upper-case hex digits; in a `const`
    /// context that is a compile error.
    pub const fn from_static(hex: &[u8; 6]) -> Self {
        let mut i = 0;
        while i < hex.len() {
            assert!(
                matches!(hex[i], b'0'..=b'9' | b'A'..=b'F'),
                "color must be upper-case hex"
            );
            i += 1;
        }
        RouteColor(*hex)
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteColor({})", self.as_str())
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RouteColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert_eq!(RouteColor::parse("794500").unwrap().as_str(), "794500");
        assert_eq!(RouteColor::parse("abcdef").unwrap().as_str(), "ABCDEF");
        assert_eq!(RouteColor::parse(" #00ff00 ").unwrap().as_str(), "00FF00");
    }

    #[test]
    fn reject_invalid() {
        assert!(RouteColor::parse("").is_err());
        assert!(RouteColor::parse("FFF").is_err());
        assert!(RouteColor::parse("GGGGGG").is_err());
        assert!(RouteColor::parse("#1234567").is_err());
    }

    #[test]
    fn serializes_as_string() {
        let color = RouteColor::parse("387c2b").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"387C2B\"");
        assert_eq!(format!("{:?}", color), "RouteColor(387C2B)");
    }

    #[test]
    fn from_static_matches_parse() {
        const GREEN: RouteColor = RouteColor::from_static(b"387C2B");
        assert_eq!(GREEN, RouteColor::parse("387c2b").unwrap());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 6-digit hex string parses and comes back uppercased
        #[test]
        fn hex_roundtrip(s in "[0-9a-fA-F]{6}") {
            let color = RouteColor::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.to_ascii_uppercase());
        }
    }
}
