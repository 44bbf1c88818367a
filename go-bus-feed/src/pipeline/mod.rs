//! Feed processing pipeline.
//!
//! A run reads a [`Feed`], drops trips whose service does not run in the
//! configured window, assigns stable numeric IDs to routes and stops, and
//! collapses every route direction to a single canonical headsign.

mod config;
mod model;
mod process;


pub use config::ProcessConfig;
pub use model::{AgencyInfo, ProcessedFeed, ProcessedRoute, ProcessedStop, ProcessedTrip};
pub use process::process_feed;

use tracing::debug;

use crate::feed::Feed;
use crate::normalize::Normalizer;
use crate::service::{ServiceFilter, useful_service_ids};
use crate::variants::VariantTable;

/// Everything a run needs besides the feed itself.
///
/// Built once before processing and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProcessContext {
    config: ProcessConfig,
    table: VariantTable,
    filter: ServiceFilter,
    normalizer: Normalizer,
}

impl ProcessContext {
    /// Create a context with an explicit service filter.
    pub fn new(config: ProcessConfig, table: VariantTable, filter: ServiceFilter) -> Self {
        let normalizer = Normalizer::new().keep_branch_letter(config.keep_branch_letter);
        Self {
            config,
            table,
            filter,
            normalizer,
        }
    }

    /// Create a context whose service filter is computed from the feed's
    /// calendars over the configured window.
    ///
    /// A feed without any calendar data is not filtered.
    pub fn for_feed(config: ProcessConfig, table: VariantTable, feed: &Feed) -> Self {
        let filter = if feed.calendars.is_empty() && feed.calendar_dates.is_empty() {
            debug!("feed has no calendars; keeping every trip");
            ServiceFilter::unfiltered()
        } else {
            let useful = useful_service_ids(&feed.calendars, &feed.calendar_dates, config.service_window());
            ServiceFilter::new(useful)
        };
        Self::new(config, table, filter)
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub fn table(&self) -> &VariantTable {
        &self.table
    }

    pub fn filter(&self) -> &ServiceFilter {
        &self.filter
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{DirectionSlot, RouteColor, RouteId, StopCode};
    use crate::error::{Error, TableMiss};
    use crate::feed::{CalendarRecord, RouteRecord, StopRecord, TripRecord};
    use crate::variants::go_transit;

    fn route(route_id: &str, short_name: &str, color: Option<&str>) -> RouteRecord {
        RouteRecord {
            route_id: route_id.to_string(),
            short_name: short_name.to_string(),
            long_name: String::new(),
            color: color.map(|c| RouteColor::parse(c).unwrap()),
        }
    }

    fn trip(trip_id: &str, route_id: &str, direction: DirectionSlot, headsign: &str) -> TripRecord {
        TripRecord {
            trip_id: trip_id.to_string(),
            route_id: route_id.to_string(),
            service_id: "WKDY".to_string(),
            direction,
            headsign: headsign.to_string(),
        }
    }

    fn stop(code: &str, name: &str) -> StopRecord {
        StopRecord {
            code: StopCode::parse(code).unwrap(),
            name: name.to_string(),
        }
    }

    fn context(config: ProcessConfig) -> ProcessContext {
        ProcessContext::new(config, go_transit().unwrap(), ServiceFilter::unfiltered())
    }

    fn route_18_feed() -> Feed {
        Feed {
            routes: vec![route("r18", "18", Some("387C2B"))],
            trips: vec![
                trip("t1", "r18", DirectionSlot::Zero, "Aldershot"),
                trip("t2", "r18", DirectionSlot::Zero, "B Union"),
                trip("t3", "r18", DirectionSlot::Zero, "Special"),
                trip("t4", "r18", DirectionSlot::One, "18 - Hamilton GO"),
                trip("t5", "r18", DirectionSlot::One, "C Hamilton"),
            ],
            stops: vec![stop("UN", "Union Station"), stop("02112", "Hwy. 7 at Bayview Ave.")],
            ..Feed::default()
        }
    }

    #[test]
    fn route_18_collapses_per_slot() {
        let out = process_feed(&route_18_feed(), &context(ProcessConfig::default())).unwrap();

        assert_eq!(out.headsign(RouteId::new(18), DirectionSlot::Zero), Some("Union"));
        assert_eq!(out.headsign(RouteId::new(18), DirectionSlot::One), Some("Hamilton"));
        assert!(
            out.trips
                .iter()
                .filter(|t| t.direction == DirectionSlot::Zero)
                .all(|t| t.headsign == "Union")
        );
        let ids: Vec<_> = out.trips.iter().map(|t| t.trip_id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn stops_are_remapped_and_sorted() {
        let out = process_feed(&route_18_feed(), &context(ProcessConfig::default())).unwrap();
        let stops: Vec<_> = out.stops.iter().map(|s| (s.id.get(), s.name.as_str())).collect();
        assert_eq!(
            stops,
            vec![(2112, "Hwy 7 / Bayview Ave"), (9021, "Union Station")]
        );
    }

    #[test]
    fn agency_metadata() {
        let out = process_feed(&route_18_feed(), &context(ProcessConfig::default())).unwrap();
        assert_eq!(out.agency.color.as_str(), "387C2B");
        assert_eq!(out.agency.route_type, 3);
    }

    #[test]
    fn override_color_and_missing_color() {
        let mut feed = route_18_feed();
        feed.routes = vec![route("r11", "11", None), route("r18", "18", None)];
        feed.trips.push(trip("t9", "r11", DirectionSlot::Zero, "Niagara Falls"));

        let err = process_feed(&feed, &context(ProcessConfig::default())).unwrap_err();
        assert!(matches!(
            err,
            Error::TableMiss(TableMiss::RouteColor { route }) if route == RouteId::new(18)
        ));

        let lenient = ProcessConfig {
            lenient_route_colors: true,
            ..ProcessConfig::default()
        };
        let out = process_feed(&feed, &context(lenient)).unwrap();
        assert_eq!(out.routes[0].id, RouteId::new(11));
        assert_eq!(out.routes[0].color.unwrap().as_str(), "98002E");
        assert_eq!(out.routes[1].color, None);
    }

    #[test]
    fn routes_without_kept_trips_are_skipped() {
        let mut feed = route_18_feed();
        feed.routes.push(route("r99", "99", None));
        let out = process_feed(&feed, &context(ProcessConfig::default())).unwrap();
        assert_eq!(out.routes.len(), 1);
    }

    #[test]
    fn uncovered_headsign_fails_the_run() {
        let mut feed = route_18_feed();
        feed.trips.push(trip("t6", "r18", DirectionSlot::Zero, "Kitchener"));
        let err = process_feed(&feed, &context(ProcessConfig::default())).unwrap_err();
        assert!(matches!(err, Error::TableMiss(TableMiss::Variants { .. })));
    }

    #[test]
    fn lone_uncovered_headsign_fails_the_run() {
        let mut feed = route_18_feed();
        feed.trips.retain(|t| t.direction == DirectionSlot::One);
        feed.trips.push(trip("t6", "r18", DirectionSlot::Zero, "Kitchener"));
        feed.trips.push(trip("t7", "r18", DirectionSlot::Zero, "Kitchener"));
        let err = process_feed(&feed, &context(ProcessConfig::default())).unwrap_err();
        assert!(matches!(
            err,
            Error::TableMiss(TableMiss::Variants { ref headsigns, .. })
                if headsigns == &vec!["Kitchener".to_string()]
        ));
    }

    #[test]
    fn unknown_route_fails_the_run() {
        let mut feed = route_18_feed();
        feed.trips.push(trip("t7", "r404", DirectionSlot::Zero, "Union"));
        let err = process_feed(&feed, &context(ProcessConfig::default())).unwrap_err();
        assert!(matches!(err, Error::UnknownRoute { .. }));
    }

    #[test]
    fn unknown_stop_code_fails_the_run() {
        let mut feed = route_18_feed();
        feed.stops.push(stop("ZZ", "Nowhere"));
        let err = process_feed(&feed, &context(ProcessConfig::default())).unwrap_err();
        assert!(matches!(err, Error::TableMiss(TableMiss::StopCode { .. })));
    }

    #[test]
    fn service_filter_drops_trips() {
        let mut feed = route_18_feed();
        feed.trips[0].service_id = "OLD".to_string();
        let filter = ServiceFilter::new(HashSet::from(["WKDY".to_string()]));
        let ctx = ProcessContext::new(ProcessConfig::default(), go_transit().unwrap(), filter);
        let out = process_feed(&feed, &ctx).unwrap();
        assert_eq!(out.trips.len(), 4);
        assert!(out.trips.iter().all(|t| t.trip_id != "t1"));
    }

    #[test]
    fn empty_useful_set_gives_empty_output() {
        let ctx = ProcessContext::new(
            ProcessConfig::default(),
            go_transit().unwrap(),
            ServiceFilter::new(HashSet::new()),
        );
        let out = process_feed(&route_18_feed(), &ctx).unwrap();
        assert!(out.routes.is_empty());
        assert!(out.trips.is_empty());
        assert!(out.stops.is_empty());
    }

    #[test]
    fn context_for_feed_uses_calendars() {
        let mut feed = route_18_feed();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        feed.calendars.push(CalendarRecord {
            service_id: "WKDY".to_string(),
            weekdays: [true; 7],
            start_date: start,
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        });
        let config = ProcessConfig {
            service_window_start: Some(start),
            ..ProcessConfig::default()
        };
        let ctx = ProcessContext::for_feed(config, go_transit().unwrap(), &feed);
        assert!(!ctx.filter().exclude_service("WKDY"));
        assert!(ctx.filter().exclude_service("SAT"));

        let unfiltered = ProcessContext::for_feed(ProcessConfig::default(), VariantTable::empty(), &route_18_feed());
        assert!(!unfiltered.filter().exclude_service("SAT"));
    }

    #[test]
    fn keep_branch_letter_flows_into_normalizer() {
        let config = ProcessConfig {
            keep_branch_letter: true,
            ..ProcessConfig::default()
        };
        let ctx = context(config);
        assert_eq!(ctx.normalizer().headsign("18B - Union"), "B Union");
    }
}
