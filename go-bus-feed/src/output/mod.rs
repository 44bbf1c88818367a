//! JSON output of a processed feed.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Error;
use crate::pipeline::ProcessedFeed;

/// Files written by [`write_feed`], in order.
pub const OUTPUT_FILES: [&str; 4] = ["agency.json", "routes.json", "trips.json", "stops.json"];

/// Write `feed` as pretty-printed JSON files into `dir`.
///
/// Creates the directory (and parents) if needed and overwrites existing
/// files. Returns the paths written.
pub fn write_feed(dir: impl AsRef<Path>, feed: &ProcessedFeed) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| Error::Output {
            message: format!("failed to create output directory {}: {}", dir.display(), e),
        })?;
    }

    let [agency, routes, trips, stops] = OUTPUT_FILES;
    let written = vec![
        write_json(dir, agency, &feed.agency)?,
        write_json(dir, routes, &feed.routes)?,
        write_json(dir, trips, &feed.trips)?,
        write_json(dir, stops, &feed.stops)?,
    ];

    info!(dir = %dir.display(), files = written.len(), "output written");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, name: &str, value: &T) -> Result<PathBuf, Error> {
    let path = dir.join(name);

    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Output {
        message: format!("failed to serialize {}: {}", name, e),
    })?;

    std::fs::write(&path, json).map_err(|e| Error::Output {
        message: format!("failed to write {}: {}", path.display(), e),
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectionSlot, RouteColor, RouteId, StopCode, StopId};
    use crate::pipeline::{ProcessedRoute, ProcessedStop, ProcessedTrip};
    use tempfile::tempdir;

    fn sample() -> ProcessedFeed {
        ProcessedFeed {
            routes: vec![ProcessedRoute {
                id: RouteId::new(18),
                short_name: "18".to_string(),
                long_name: "Lakeshore West".to_string(),
                color: Some(RouteColor::parse("387c2b").unwrap()),
            }],
            trips: vec![ProcessedTrip {
                trip_id: "t1".to_string(),
                route_id: RouteId::new(18),
                direction: DirectionSlot::One,
                headsign: "Union".to_string(),
            }],
            stops: vec![ProcessedStop {
                id: StopId::new(9021),
                code: StopCode::parse("UN").unwrap(),
                name: "Union Station".to_string(),
            }],
            ..ProcessedFeed::default()
        }
    }

    #[test]
    fn writes_all_files() {
        let dir = tempdir().unwrap();
        let written = write_feed(dir.path(), &sample()).unwrap();

        assert_eq!(written.len(), 4);
        for name in OUTPUT_FILES {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn json_shape() {
        let dir = tempdir().unwrap();
        write_feed(dir.path(), &sample()).unwrap();

        let trips: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("trips.json")).unwrap())
                .unwrap();
        assert_eq!(
            trips,
            serde_json::json!([
                {"trip_id": "t1", "route_id": 18, "direction": 1, "headsign": "Union"}
            ])
        );

        let agency: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("agency.json")).unwrap())
                .unwrap();
        assert_eq!(agency, serde_json::json!({"color": "387C2B", "route_type": 3}));

        let stops: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("stops.json")).unwrap())
                .unwrap();
        assert_eq!(
            stops,
            serde_json::json!([{"id": 9021, "code": "UN", "name": "Union Station"}])
        );
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        write_feed(&out, &sample()).unwrap();
        assert!(out.join("routes.json").exists());
    }

    #[test]
    fn unwritable_directory_is_an_output_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_feed(blocker.join("out"), &sample()).unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
    }
}
