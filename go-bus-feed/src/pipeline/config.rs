//! Processing configuration.

use chrono::{Local, NaiveDate};

use crate::service::ServiceWindow;

/// Configuration switches for a processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Emit routes with no resolvable color instead of failing.
    pub lenient_route_colors: bool,

    /// Keep the first headsign when the branch-letter heuristic cannot
    /// decide, instead of failing.
    pub tolerate_ambiguous_directions: bool,

    /// Keep the branch letter of a route-code prefix ("96B - X" becomes
    /// "B X") instead of dropping the whole prefix.
    pub keep_branch_letter: bool,

    /// Length of the service window (days).
    pub service_window_days: u32,

    /// First day of the service window; `None` means today.
    pub service_window_start: Option<NaiveDate>,
}

impl ProcessConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        lenient_route_colors: bool,
        tolerate_ambiguous_directions: bool,
        keep_branch_letter: bool,
        service_window_days: u32,
        service_window_start: Option<NaiveDate>,
    ) -> Self {
        Self {
            lenient_route_colors,
            tolerate_ambiguous_directions,
            keep_branch_letter,
            service_window_days,
            service_window_start,
        }
    }

    /// Returns the service window, resolving an unset start to today.
    pub fn service_window(&self) -> ServiceWindow {
        let start = self
            .service_window_start
            .unwrap_or_else(|| Local::now().date_naive());
        ServiceWindow::new(start, self.service_window_days)
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            lenient_route_colors: false,
            tolerate_ambiguous_directions: false,
            keep_branch_letter: false,
            service_window_days: 30,
            service_window_start: None,
        }
    }
}
