//! Raw GTFS rows as they appear in the text files.
//!
//! Only the columns the pipeline consumes are read. Optional columns
//! default to empty so a feed that omits them still parses.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteRow {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
    #[serde(default)]
    pub route_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TripRow {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    #[serde(default)]
    pub trip_headsign: String,
    #[serde(default)]
    pub direction_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StopRow {
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CalendarRow {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CalendarDateRow {
    pub service_id: String,
    pub date: String,
    pub exception_type: u8,
}
