//! Service-ID filtering.
//!
//! A feed usually carries calendars for past and future schedule periods.
//! Only services that run inside a window of dates are kept; everything
//! that references another service is dropped before processing.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::feed::{CalendarDateRecord, CalendarRecord, ExceptionType, TripRecord};

/// A run of consecutive dates starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub start: NaiveDate,
    pub days: u32,
}

impl ServiceWindow {
    /// Create a window of `days` days starting at `start`.
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// Last date in the window, or `None` for an empty window.
    pub fn end(&self) -> Option<NaiveDate> {
        self.days
            .checked_sub(1)
            .map(|extra| self.start + Duration::days(i64::from(extra)))
    }

    /// True if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.end().is_some_and(|end| date >= self.start && date <= end)
    }

    /// Every date in the window, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.days as usize)
    }
}

/// Service IDs that run on at least one date of `window`.
///
/// A calendar runs on a date inside its range whose weekday flag is set,
/// unless a removal exception cancels that date. An added exception makes
/// its service run on that date regardless of calendars.
pub fn useful_service_ids(
    calendars: &[CalendarRecord],
    calendar_dates: &[CalendarDateRecord],
    window: ServiceWindow,
) -> HashSet<String> {
    let mut exceptions: HashMap<(&str, NaiveDate), ExceptionType> = HashMap::new();
    for cd in calendar_dates {
        exceptions.insert((cd.service_id.as_str(), cd.date), cd.exception);
    }

    let mut useful = HashSet::new();

    for date in window.dates() {
        for cal in calendars {
            if useful.contains(&cal.service_id) || !cal.runs_on(date) {
                continue;
            }
            let removed = exceptions.get(&(cal.service_id.as_str(), date)) == Some(&ExceptionType::Removed);
            if !removed {
                useful.insert(cal.service_id.clone());
            }
        }
    }

    for cd in calendar_dates {
        if cd.exception == ExceptionType::Added && window.contains(cd.date) {
            useful.insert(cd.service_id.clone());
        }
    }

    info!(
        start = %window.start,
        days = window.days,
        useful = useful.len(),
        "computed useful service IDs"
    );
    useful
}

/// Exclusion predicates driven by a precomputed set of useful service IDs.
///
/// A filter without a set excludes nothing.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use go_bus_feed::service::ServiceFilter;
///
/// let filter = ServiceFilter::new(HashSet::from(["WKDY".to_string()]));
/// assert!(!filter.exclude_service("WKDY"));
/// assert!(filter.exclude_service("SAT"));
/// assert!(!ServiceFilter::unfiltered().exclude_service("SAT"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    useful: Option<HashSet<String>>,
}

impl ServiceFilter {
    /// Keep only the given service IDs.
    pub fn new(useful: HashSet<String>) -> Self {
        Self {
            useful: Some(useful),
        }
    }

    /// Keep everything.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// True if records of `service_id` should be dropped.
    pub fn exclude_service(&self, service_id: &str) -> bool {
        self.useful
            .as_ref()
            .is_some_and(|useful| !useful.contains(service_id))
    }

    /// True if the calendar entry should be dropped.
    pub fn exclude_calendar(&self, calendar: &CalendarRecord) -> bool {
        self.exclude_service(&calendar.service_id)
    }

    /// True if the calendar-date entry should be dropped.
    pub fn exclude_calendar_date(&self, calendar_date: &CalendarDateRecord) -> bool {
        self.exclude_service(&calendar_date.service_id)
    }

    /// True if the trip should be dropped.
    pub fn exclude_trip(&self, trip: &TripRecord) -> bool {
        self.exclude_service(&trip.service_id)
    }

    /// True if a set was supplied and it is empty, so nothing survives.
    pub fn excluding_all(&self) -> bool {
        self.useful.as_ref().is_some_and(HashSet::is_empty)
    }
}
