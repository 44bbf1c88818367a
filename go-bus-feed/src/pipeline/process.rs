//! The feed processing pass.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::domain::{DirectionSlot, RouteId, StopCode, StopId};
use crate::error::Error;
use crate::feed::{Feed, RouteRecord, TripRecord};
use crate::merge::MergeResolver;
use crate::remap::{route_color, route_numeric_id, stop_numeric_id};

use super::ProcessContext;
use super::model::{ProcessedFeed, ProcessedRoute, ProcessedStop, ProcessedTrip};

/// Turn a loaded feed into stable-ID, canonical-headsign output.
///
/// Any table miss, malformed route identifier or undecidable direction
/// aborts the whole run.
pub fn process_feed(feed: &Feed, ctx: &ProcessContext) -> Result<ProcessedFeed, Error> {
    if ctx.filter().excluding_all() {
        warn!("no service runs in the window; output will be empty");
        return Ok(ProcessedFeed::default());
    }

    let trips: Vec<&TripRecord> = feed
        .trips
        .iter()
        .filter(|t| !ctx.filter().exclude_trip(t))
        .collect();
    debug!(
        kept = trips.len(),
        dropped = feed.trips.len() - trips.len(),
        "trips filtered by service"
    );

    let route_ids = numeric_route_ids(&feed.routes)?;
    let routes = process_routes(feed, &route_ids, &trips, ctx)?;
    let trips = process_trips(&trips, &route_ids, ctx)?;
    let stops = process_stops(feed, ctx)?;

    info!(
        routes = routes.len(),
        trips = trips.len(),
        stops = stops.len(),
        "feed processed"
    );

    Ok(ProcessedFeed {
        routes,
        trips,
        stops,
        ..ProcessedFeed::default()
    })
}

fn numeric_route_ids(routes: &[RouteRecord]) -> Result<HashMap<&str, RouteId>, Error> {
    routes
        .iter()
        .map(|r| route_numeric_id(&r.short_name, &r.route_id).map(|id| (r.route_id.as_str(), id)))
        .collect()
}

/// Routes with at least one kept trip, one per numeric ID.
fn process_routes(
    feed: &Feed,
    route_ids: &HashMap<&str, RouteId>,
    trips: &[&TripRecord],
    ctx: &ProcessContext,
) -> Result<Vec<ProcessedRoute>, Error> {
    let used: BTreeSet<&str> = trips.iter().map(|t| t.route_id.as_str()).collect();
    let mut routes: BTreeMap<RouteId, ProcessedRoute> = BTreeMap::new();

    for record in feed.routes.iter().filter(|r| used.contains(r.route_id.as_str())) {
        let Some(&id) = route_ids.get(record.route_id.as_str()) else {
            continue;
        };
        if routes.contains_key(&id) {
            debug!(%id, feed_route = record.route_id.as_str(), "route already emitted");
            continue;
        }
        let color = route_color(id, record.color, ctx.config().lenient_route_colors)?;
        routes.insert(
            id,
            ProcessedRoute {
                id,
                short_name: record.short_name.clone(),
                long_name: record.long_name.clone(),
                color,
            },
        );
    }

    Ok(routes.into_values().collect())
}

fn process_trips(
    trips: &[&TripRecord],
    route_ids: &HashMap<&str, RouteId>,
    ctx: &ProcessContext,
) -> Result<Vec<ProcessedTrip>, Error> {
    let mut assigned = Vec::with_capacity(trips.len());
    let mut slots: BTreeMap<(RouteId, DirectionSlot), BTreeSet<String>> = BTreeMap::new();

    for trip in trips {
        let route = *route_ids
            .get(trip.route_id.as_str())
            .ok_or_else(|| Error::UnknownRoute {
                trip: trip.trip_id.clone(),
                route: trip.route_id.clone(),
            })?;
        let headsign = ctx.normalizer().headsign(&trip.headsign);
        slots
            .entry((route, trip.direction))
            .or_default()
            .insert(headsign);
        assigned.push((trip, route));
    }

    let mut resolver = MergeResolver::new(ctx.table())
        .tolerate_ambiguous(ctx.config().tolerate_ambiguous_directions);
    let mut labels: HashMap<(RouteId, DirectionSlot), String> = HashMap::new();
    for ((route, slot), headsigns) in &slots {
        let label = resolver.fold_slot(*route, *slot, headsigns)?;
        debug!(%route, %slot, variants = headsigns.len(), label = label.as_str(), "direction resolved");
        labels.insert((*route, *slot), label);
    }

    let mut out: Vec<ProcessedTrip> = assigned
        .into_iter()
        .map(|(trip, route)| ProcessedTrip {
            trip_id: trip.trip_id.clone(),
            route_id: route,
            direction: trip.direction,
            headsign: labels
                .get(&(route, trip.direction))
                .cloned()
                .unwrap_or_default(),
        })
        .collect();
    out.sort_by(|a, b| a.trip_id.cmp(&b.trip_id));
    Ok(out)
}

fn process_stops(feed: &Feed, ctx: &ProcessContext) -> Result<Vec<ProcessedStop>, Error> {
    let mut stops: BTreeMap<StopId, ProcessedStop> = BTreeMap::new();
    let mut seen: HashMap<StopId, &StopCode> = HashMap::new();

    for record in &feed.stops {
        let id = stop_numeric_id(&record.code)?;
        if let Some(first) = seen.get(&id) {
            if **first != record.code {
                warn!(
                    %id,
                    first = first.as_str(),
                    second = record.code.as_str(),
                    "two stop codes map to one stop ID; keeping the first"
                );
            }
            continue;
        }
        seen.insert(id, &record.code);
        stops.insert(
            id,
            ProcessedStop {
                id,
                code: record.code.clone(),
                name: ctx.normalizer().stop_name(&record.name),
            },
        );
    }

    Ok(stops.into_values().collect())
}
