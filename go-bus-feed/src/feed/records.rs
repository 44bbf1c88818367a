//! Validated feed records.
//!
//! Rows from [`super::types`] are converted here; every identifier the
//! pipeline relies on is checked once at load time.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::{DirectionSlot, RouteColor, StopCode};

use super::error::FeedError;
use super::types::{CalendarDateRow, CalendarRow, RouteRow, StopRow, TripRow};

/// A route as published by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub route_id: String,
    pub short_name: String,
    pub long_name: String,
    pub color: Option<RouteColor>,
}

/// A trip as published by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    pub direction: DirectionSlot,
    pub headsign: String,
}

/// A stop as published by the feed; `code` is its `stop_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    pub code: StopCode,
    pub name: String,
}

/// A weekly service pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRecord {
    pub service_id: String,
    /// Monday first.
    pub weekdays: [bool; 7],
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CalendarRecord {
    /// True when the weekly pattern runs on `date`, ignoring exceptions.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date && self.runs_on_weekday(date.weekday())
    }

    /// True when the pattern runs on `weekday`.
    pub fn runs_on_weekday(&self, weekday: Weekday) -> bool {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }
}

/// Whether a calendar-date row adds or removes service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Added,
    Removed,
}

/// A one-off service change on a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDateRecord {
    pub service_id: String,
    pub date: NaiveDate,
    pub exception: ExceptionType,
}

/// Everything the pipeline reads from a feed.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub routes: Vec<RouteRecord>,
    pub trips: Vec<TripRecord>,
    pub stops: Vec<StopRecord>,
    pub calendars: Vec<CalendarRecord>,
    pub calendar_dates: Vec<CalendarDateRecord>,
}

fn parse_date(file: &'static str, service: &str, value: &str) -> Result<NaiveDate, FeedError> {
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| FeedError::Date {
        file,
        service: service.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn convert_route(row: RouteRow) -> Result<RouteRecord, FeedError> {
    let color = if row.route_color.trim().is_empty() {
        None
    } else {
        let color = RouteColor::parse(&row.route_color).map_err(|source| FeedError::Color {
            route: row.route_id.clone(),
            source,
        })?;
        Some(color)
    };

    Ok(RouteRecord {
        route_id: row.route_id,
        short_name: row.route_short_name,
        long_name: row.route_long_name,
        color,
    })
}

pub(crate) fn convert_trip(row: TripRow) -> Result<TripRecord, FeedError> {
    let direction = DirectionSlot::parse(&row.direction_id).map_err(|source| FeedError::Direction {
        trip: row.trip_id.clone(),
        source,
    })?;

    Ok(TripRecord {
        trip_id: row.trip_id,
        route_id: row.route_id,
        service_id: row.service_id,
        direction,
        headsign: row.trip_headsign,
    })
}

/// `row` is the 1-based data row, for diagnostics.
pub(crate) fn convert_stop(row: usize, raw: StopRow) -> Result<StopRecord, FeedError> {
    let code = StopCode::parse(&raw.stop_id).map_err(|source| FeedError::StopCode { row, source })?;
    Ok(StopRecord {
        code,
        name: raw.stop_name,
    })
}

pub(crate) fn convert_calendar(row: CalendarRow) -> Result<CalendarRecord, FeedError> {
    let start_date = parse_date("calendar.txt", &row.service_id, &row.start_date)?;
    let end_date = parse_date("calendar.txt", &row.service_id, &row.end_date)?;
    let weekdays = [
        row.monday,
        row.tuesday,
        row.wednesday,
        row.thursday,
        row.friday,
        row.saturday,
        row.sunday,
    ]
    .map(|flag| flag == 1);

    Ok(CalendarRecord {
        service_id: row.service_id,
        weekdays,
        start_date,
        end_date,
    })
}

pub(crate) fn convert_calendar_date(row: CalendarDateRow) -> Result<CalendarDateRecord, FeedError> {
    let date = parse_date("calendar_dates.txt", &row.service_id, &row.date)?;
    let exception = match row.exception_type {
        1 => ExceptionType::Added,
        2 => ExceptionType::Removed,
        value => {
            return Err(FeedError::ExceptionType {
                service: row.service_id,
                value,
            });
        }
    };

    Ok(CalendarDateRecord {
        service_id: row.service_id,
        date,
        exception,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar_row(start: &str, end: &str) -> CalendarRow {
        CalendarRow {
            service_id: "WKDY".to_string(),
            monday: 1,
            tuesday: 1,
            wednesday: 1,
            thursday: 1,
            friday: 1,
            saturday: 0,
            sunday: 0,
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn empty_color_is_absent() {
        let row = RouteRow {
            route_id: "r18".to_string(),
            route_short_name: "18".to_string(),
            route_long_name: String::new(),
            route_color: " ".to_string(),
        };
        assert_eq!(convert_route(row).unwrap().color, None);
    }

    #[test]
    fn malformed_color_is_an_error() {
        let row = RouteRow {
            route_id: "r18".to_string(),
            route_short_name: "18".to_string(),
            route_long_name: String::new(),
            route_color: "green".to_string(),
        };
        assert!(matches!(convert_route(row), Err(FeedError::Color { .. })));
    }

    #[test]
    fn trip_direction() {
        let mut row = TripRow {
            route_id: "r18".to_string(),
            service_id: "WKDY".to_string(),
            trip_id: "t1".to_string(),
            trip_headsign: "Union".to_string(),
            direction_id: String::new(),
        };
        assert_eq!(convert_trip(row.clone()).unwrap().direction, DirectionSlot::Zero);

        row.direction_id = "1".to_string();
        assert_eq!(convert_trip(row.clone()).unwrap().direction, DirectionSlot::One);

        row.direction_id = "2".to_string();
        assert!(matches!(convert_trip(row), Err(FeedError::Direction { .. })));
    }

    #[test]
    fn blank_stop_id_is_an_error() {
        let row = StopRow {
            stop_id: " ".to_string(),
            stop_name: "Nowhere".to_string(),
        };
        assert!(matches!(convert_stop(3, row), Err(FeedError::StopCode { row: 3, .. })));
    }

    #[test]
    fn calendar_runs_on() {
        let cal = convert_calendar(calendar_row("20240101", "20240131")).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert!(cal.runs_on(monday));
        assert!(!cal.runs_on(saturday));
        assert!(!cal.runs_on(after));
        assert!(cal.runs_on_weekday(Weekday::Fri));
        assert!(!cal.runs_on_weekday(Weekday::Sun));
    }

    #[test]
    fn calendar_bad_date() {
        assert!(matches!(
            convert_calendar(calendar_row("2024-01-01", "20240131")),
            Err(FeedError::Date { .. })
        ));
    }

    #[test]
    fn calendar_date_exception_types() {
        let row = |t| CalendarDateRow {
            service_id: "WKDY".to_string(),
            date: "20240101".to_string(),
            exception_type: t,
        };
        assert_eq!(convert_calendar_date(row(1)).unwrap().exception, ExceptionType::Added);
        assert_eq!(convert_calendar_date(row(2)).unwrap().exception, ExceptionType::Removed);
        assert!(matches!(
            convert_calendar_date(row(3)),
            Err(FeedError::ExceptionType { value: 3, .. })
        ));
    }
}
