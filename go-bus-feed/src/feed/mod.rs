//! GTFS feed input.
//!
//! Reads the handful of GTFS files the pipeline needs into validated
//! records. Everything else in the feed is ignored.

mod error;
mod loader;
mod records;
mod types;

pub use error::FeedError;
pub use loader::load_feed;
pub use records::{
    CalendarDateRecord, CalendarRecord, ExceptionType, Feed, RouteRecord, StopRecord, TripRecord,
};
