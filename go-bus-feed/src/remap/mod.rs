//! Stable numeric identifiers and colors for routes and stops.
//!
//! Downstream consumers key everything on integers that must stay the same
//! across feed updates. Codes that cannot be derived mechanically come
//! from curated tables; anything missing from a table is an error rather
//! than a guess.

mod routes;
mod stops;

pub use routes::{route_color, route_numeric_id};
pub use stops::{STOP_CODE_OVERRIDES, stop_numeric_id};

use crate::domain::RouteColor;

/// GO Transit green.
pub const AGENCY_COLOR: RouteColor = RouteColor::from_static(b"387C2B");

/// GTFS route type for bus service.
pub const ROUTE_TYPE_BUS: u8 = 3;
