//! GO Transit bus feed processing.
//!
//! Turns a raw GTFS feed into stable numeric route and stop IDs with one
//! canonical headsign per route direction, ready for a downstream
//! consumer that keys on those IDs across feed updates.

pub mod domain;
pub mod error;
pub mod feed;
pub mod merge;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod remap;
pub mod service;
pub mod variants;

pub use error::{Error, TableMiss};
