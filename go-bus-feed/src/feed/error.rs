//! Feed loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidColor, InvalidDirection, InvalidStopCode};

/// Errors that can occur while reading a GTFS feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Feed path could not be opened or read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Zip archive is unreadable
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required file is absent from the feed
    #[error("feed has no {file}")]
    MissingFile { file: &'static str },

    /// A row could not be parsed
    #[error("{file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },

    /// Trip has a direction other than 0 or 1
    #[error("trip {trip:?}: {source}")]
    Direction {
        trip: String,
        source: InvalidDirection,
    },

    /// Route has a malformed color
    #[error("route {route:?}: {source}")]
    Color { route: String, source: InvalidColor },

    /// Stop has no usable code
    #[error("stop row {row}: {source}")]
    StopCode { row: usize, source: InvalidStopCode },

    /// Calendar date is not `YYYYMMDD`
    #[error("{file}: invalid date {value:?} for service {service:?}")]
    Date {
        file: &'static str,
        service: String,
        value: String,
    },

    /// Calendar-date exception type other than 1 or 2
    #[error("calendar_dates.txt: invalid exception type {value} for service {service:?}")]
    ExceptionType { service: String, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FeedError::MissingFile { file: "trips.txt" };
        assert_eq!(err.to_string(), "feed has no trips.txt");

        let err = FeedError::Date {
            file: "calendar.txt",
            service: "WKDY".to_string(),
            value: "2024-01-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "calendar.txt: invalid date \"2024-01-01\" for service \"WKDY\""
        );

        let err = FeedError::ExceptionType {
            service: "WKDY".to_string(),
            value: 3,
        };
        assert_eq!(
            err.to_string(),
            "calendar_dates.txt: invalid exception type 3 for service \"WKDY\""
        );
    }
}
