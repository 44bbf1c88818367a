//! GTFS loading from a directory or a zip archive.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use zip::ZipArchive;
use zip::result::ZipError;

use super::error::FeedError;
use super::records::{
    Feed, convert_calendar, convert_calendar_date, convert_route, convert_stop, convert_trip,
};
use super::types::{CalendarDateRow, CalendarRow, RouteRow, StopRow, TripRow};

/// Where the GTFS text files come from.
enum Source {
    Dir(PathBuf),
    Zip(ZipArchive<File>),
}

impl Source {
    fn open(path: &Path) -> Result<Self, FeedError> {
        if path.is_dir() {
            return Ok(Source::Dir(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Source::Zip(ZipArchive::new(file)?))
    }

    /// Read a whole file, or `None` if the feed does not contain it.
    fn read(&mut self, name: &str) -> Result<Option<Vec<u8>>, FeedError> {
        let mut bytes = Vec::new();
        match self {
            Source::Dir(dir) => {
                let path = dir.join(name);
                if !path.exists() {
                    return Ok(None);
                }
                bytes = std::fs::read(&path).map_err(|source| FeedError::Io { path, source })?;
            }
            Source::Zip(archive) => {
                let mut entry = match archive.by_name(name) {
                    Ok(entry) => entry,
                    Err(ZipError::FileNotFound) => return Ok(None),
                    Err(e) => return Err(e.into()),
                };
                entry
                    .read_to_end(&mut bytes)
                    .map_err(|source| FeedError::Io {
                        path: PathBuf::from(name),
                        source,
                    })?;
            }
        }
        Ok(Some(bytes))
    }

    fn required(&mut self, name: &'static str) -> Result<Vec<u8>, FeedError> {
        self.read(name)?.ok_or(FeedError::MissingFile { file: name })
    }
}

fn parse_rows<T: DeserializeOwned>(file: &'static str, bytes: &[u8]) -> Result<Vec<T>, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    reader
        .deserialize()
        .map(|row| row.map_err(|source| FeedError::Csv { file, source }))
        .collect()
}

/// Load a GTFS feed from a directory or `.zip` archive.
///
/// `routes.txt`, `trips.txt` and `stops.txt` are required. Calendars are
/// optional; a feed without them has no service information and nothing
/// is filtered.
pub fn load_feed(path: impl AsRef<Path>) -> Result<Feed, FeedError> {
    let path = path.as_ref();
    let mut source = Source::open(path)?;

    let routes = parse_rows::<RouteRow>("routes.txt", &source.required("routes.txt")?)?
        .into_iter()
        .map(convert_route)
        .collect::<Result<Vec<_>, _>>()?;

    let trips = parse_rows::<TripRow>("trips.txt", &source.required("trips.txt")?)?
        .into_iter()
        .map(convert_trip)
        .collect::<Result<Vec<_>, _>>()?;

    let stops = parse_rows::<StopRow>("stops.txt", &source.required("stops.txt")?)?
        .into_iter()
        .enumerate()
        .map(|(i, row)| convert_stop(i + 1, row))
        .collect::<Result<Vec<_>, _>>()?;

    let calendars = match source.read("calendar.txt")? {
        Some(bytes) => parse_rows::<CalendarRow>("calendar.txt", &bytes)?
            .into_iter()
            .map(convert_calendar)
            .collect::<Result<Vec<_>, _>>()?,
        None => {
            debug!("feed has no calendar.txt");
            Vec::new()
        }
    };

    let calendar_dates = match source.read("calendar_dates.txt")? {
        Some(bytes) => parse_rows::<CalendarDateRow>("calendar_dates.txt", &bytes)?
            .into_iter()
            .map(convert_calendar_date)
            .collect::<Result<Vec<_>, _>>()?,
        None => {
            debug!("feed has no calendar_dates.txt");
            Vec::new()
        }
    };

    info!(
        path = %path.display(),
        routes = routes.len(),
        trips = trips.len(),
        stops = stops.len(),
        calendars = calendars.len(),
        calendar_dates = calendar_dates.len(),
        "feed loaded"
    );

    Ok(Feed {
        routes,
        trips,
        stops,
        calendars,
        calendar_dates,
    })
}
