//! Crate-level error types.
//!
//! Every failure here is fatal for a run: the binary reports it and exits
//! non-zero rather than writing partial output.

use crate::domain::{DirectionSlot, RouteId};
use crate::feed::FeedError;
use crate::variants::VariantTableError;

/// A curated lookup table has no entry for something the feed contains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableMiss {
    /// Non-numeric stop code with no numeric override
    #[error("stop code {code:?} has no numeric override")]
    StopCode { code: String },

    /// Route has no feed color and no override color
    #[error("route {route} has no feed color and no override color")]
    RouteColor { route: RouteId },

    /// Observed headsigns not covered by any variant group of the route
    #[error("route {route} direction {slot}: headsigns {headsigns:?} are not covered by any variant group")]
    Variants {
        route: RouteId,
        slot: DirectionSlot,
        headsigns: Vec<String>,
    },
}

/// Errors that abort feed processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A curated table is stale relative to the feed
    #[error("table miss: {0}")]
    TableMiss(#[from] TableMiss),

    /// Route identifier has no digits to derive a numeric ID from
    #[error("malformed route identifier {route:?}: no digits present")]
    MalformedIdentifier { route: String },

    /// Branch-letter heuristic could not pick a label and no table rule exists
    #[error("route {route} direction {slot}: cannot choose between {first:?} and {second:?}")]
    AmbiguousDirection {
        route: RouteId,
        slot: DirectionSlot,
        first: String,
        second: String,
    },

    /// Trip references a route that is not in the feed
    #[error("trip {trip:?} references unknown route {route:?}")]
    UnknownRoute { trip: String, route: String },

    /// Feed could not be read
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Variant table could not be loaded or failed validation
    #[error(transparent)]
    VariantTable(#[from] VariantTableError),

    /// Output could not be written
    #[error("output error: {message}")]
    Output { message: String },
}
