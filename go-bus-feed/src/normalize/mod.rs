//! Text normalization for headsigns and stop names.
//!
//! Both pipelines are ordered lists of regex substitutions; later stages
//! assume the lexical form produced by earlier ones. They are total
//! functions: unmatched patterns are no-ops and a string always comes out.

mod headsign;
pub mod rules;
mod stop_name;

/// Headsign and stop-name normalizer.
///
/// # Examples
///
/// ```
/// use go_bus_feed::normalize::Normalizer;
///
/// let normalizer = Normalizer::new();
/// assert_eq!(normalizer.headsign("96B - Newmarket"), "Newmarket");
/// assert_eq!(normalizer.headsign("Union Station"), "Union");
///
/// let keeping = Normalizer::new().keep_branch_letter(true);
/// assert_eq!(keeping.headsign("96B - Newmarket"), "B Newmarket");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    keep_branch_letter: bool,
}

impl Normalizer {
    /// Create a normalizer that strips route prefixes entirely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the branch letter glued to a route-code prefix ("96B - X"
    /// becomes "B X") instead of dropping it with the route number.
    pub fn keep_branch_letter(mut self, keep: bool) -> Self {
        self.keep_branch_letter = keep;
        self
    }

    /// Normalize a raw trip headsign.
    pub fn headsign(&self, raw: &str) -> String {
        headsign::normalize(raw, self.keep_branch_letter)
    }

    /// Normalize a raw stop name.
    pub fn stop_name(&self, raw: &str) -> String {
        stop_name::normalize(raw)
    }
}

/// Normalize a raw trip headsign with default options.
pub fn normalize_headsign(raw: &str) -> String {
    Normalizer::new().headsign(raw)
}

/// Normalize a raw stop name.
pub fn normalize_stop_name(raw: &str) -> String {
    Normalizer::new().stop_name(raw)
}
