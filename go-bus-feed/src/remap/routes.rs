//! Route identity and color.

use tracing::warn;

use crate::domain::{RouteColor, RouteId};
use crate::error::{Error, TableMiss};

/// Colors for routes the feed publishes without one.
const ROUTE_COLOR_OVERRIDES: &[(RouteId, RouteColor)] = &[
    // St. Catharines / Niagara-on-the-Lake
    (RouteId::new(11), RouteColor::from_static(b"98002E")),
    (RouteId::new(70), RouteColor::from_static(b"794500")),
];

/// Derive a route's numeric ID from the digits embedded in its short
/// name, falling back to the feed route ID when the short name has none.
///
/// # Examples
///
/// ```
/// use go_bus_feed::remap::route_numeric_id;
///
/// assert_eq!(route_numeric_id("18", "01260426-18").unwrap().get(), 18);
/// assert_eq!(route_numeric_id("", "96").unwrap().get(), 96);
/// assert!(route_numeric_id("Express", "EX").is_err());
/// ```
pub fn route_numeric_id(short_name: &str, route_id: &str) -> Result<RouteId, Error> {
    RouteId::from_embedded_digits(short_name)
        .or_else(|_| RouteId::from_embedded_digits(route_id))
        .map_err(|_| Error::MalformedIdentifier {
            route: if short_name.trim().is_empty() {
                route_id.to_string()
            } else {
                short_name.to_string()
            },
        })
}

/// Resolve a route's color.
///
/// A feed-supplied color wins. Otherwise the override table is consulted.
/// With neither, the route is a table miss unless `lenient` is set, in
/// which case the route goes out without a color.
pub fn route_color(
    route: RouteId,
    feed_color: Option<RouteColor>,
    lenient: bool,
) -> Result<Option<RouteColor>, TableMiss> {
    if let Some(color) = feed_color {
        return Ok(Some(color));
    }

    if let Some((_, color)) = ROUTE_COLOR_OVERRIDES.iter().find(|(id, _)| *id == route) {
        return Ok(Some(*color));
    }

    if lenient {
        warn!(%route, "no feed or override color; emitting route without color");
        return Ok(None);
    }

    Err(TableMiss::RouteColor { route })
}
