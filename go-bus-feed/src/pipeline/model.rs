//! Processed output records.

use serde::Serialize;

use crate::domain::{DirectionSlot, RouteColor, RouteId, StopCode, StopId};
use crate::remap::{AGENCY_COLOR, ROUTE_TYPE_BUS};

/// Agency-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyInfo {
    pub color: RouteColor,
    pub route_type: u8,
}

impl Default for AgencyInfo {
    fn default() -> Self {
        Self {
            color: AGENCY_COLOR,
            route_type: ROUTE_TYPE_BUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedRoute {
    pub id: RouteId,
    pub short_name: String,
    pub long_name: String,
    pub color: Option<RouteColor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedTrip {
    pub trip_id: String,
    pub route_id: RouteId,
    pub direction: DirectionSlot,
    pub headsign: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedStop {
    pub id: StopId,
    pub code: StopCode,
    pub name: String,
}

/// The result of a processing run, sorted by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedFeed {
    pub agency: AgencyInfo,
    pub routes: Vec<ProcessedRoute>,
    pub trips: Vec<ProcessedTrip>,
    pub stops: Vec<ProcessedStop>,
}

impl ProcessedFeed {
    /// The headsign assigned to a route's direction slot, if any trip has one.
    pub fn headsign(&self, route: RouteId, direction: DirectionSlot) -> Option<&str> {
        self.trips
            .iter()
            .find(|t| t.route_id == route && t.direction == direction)
            .map(|t| t.headsign.as_str())
    }
}
