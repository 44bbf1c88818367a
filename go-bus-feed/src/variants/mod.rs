//! Per-route headsign variant rules.
//!
//! A route's trips carry many raw headsigns per direction (branch-lettered
//! variants, short turns, "Special" runs). The variant table says which
//! observed headsigns may be collapsed together and what label the
//! collapsed direction gets. Tables are plain data: the built-in GO table
//! lives in [`go_transit`] and alternatives can be loaded from JSON.

mod go_transit;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Cardinal, DirectionSlot, RouteId};
use crate::normalize::normalize_headsign;

pub use go_transit::go_transit;

/// Errors from loading or validating a variant table.
#[derive(Debug, thiserror::Error)]
pub enum VariantTableError {
    /// Rule file could not be read
    #[error("failed to read variant table {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rule file is not valid JSON for a variant table
    #[error("failed to parse variant table: {0}")]
    Json(#[from] serde_json::Error),

    /// A group lists no headsigns
    #[error("route {route}: variant group {index} has no members")]
    EmptyGroup { route: RouteId, index: usize },

    /// A group has a blank canonical label
    #[error("route {route}: variant group {index} has an empty canonical label")]
    EmptyCanonical { route: RouteId, index: usize },

    /// A later group can never be selected because an earlier group with a
    /// different label covers all of its members
    #[error(
        "route {route}: group {later} ({later_label:?}) is shadowed by group {earlier} ({earlier_label:?})"
    )]
    ShadowedGroup {
        route: RouteId,
        earlier: usize,
        earlier_label: String,
        later: usize,
        later_label: String,
    },

    /// The same route has two rules of different kinds
    #[error("route {route} has more than one rule")]
    DuplicateRoute { route: RouteId },
}

/// A set of headsigns that collapse to one canonical label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    canonical: String,
    members: BTreeSet<String>,
}

impl VariantGroup {
    /// Create a group from its canonical label and member headsigns.
    pub fn new<I, S>(canonical: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canonical: canonical.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// The label every trip in this group receives.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The headsigns this group accepts.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// True when every observed headsign is a member of this group.
    pub fn covers<'a, I>(&self, observed: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        observed.into_iter().all(|h| self.members.contains(h))
    }
}

/// How a route's direction labels are decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRule {
    /// Destination-named groups, consulted in declaration order.
    Variants(Vec<VariantGroup>),
    /// Each slot is labelled with a fixed compass direction.
    Cardinal { slot0: Cardinal, slot1: Cardinal },
}

impl RouteRule {
    /// The first group, in declaration order, covering every observed
    /// headsign, with its index.
    ///
    /// Returns `None` for cardinal rules and when no group covers the set.
    pub fn select(&self, observed: &BTreeSet<String>) -> Option<(usize, &VariantGroup)> {
        match self {
            RouteRule::Variants(groups) => groups
                .iter()
                .enumerate()
                .find(|(_, group)| group.covers(observed)),
            RouteRule::Cardinal { .. } => None,
        }
    }

    /// The group at `index`, for variant rules.
    pub fn group(&self, index: usize) -> Option<&VariantGroup> {
        match self {
            RouteRule::Variants(groups) => groups.get(index),
            RouteRule::Cardinal { .. } => None,
        }
    }

    /// The compass label for `slot`, for cardinal rules.
    pub fn cardinal(&self, slot: DirectionSlot) -> Option<Cardinal> {
        match (self, slot) {
            (RouteRule::Cardinal { slot0, .. }, DirectionSlot::Zero) => Some(*slot0),
            (RouteRule::Cardinal { slot1, .. }, DirectionSlot::One) => Some(*slot1),
            (RouteRule::Variants(_), _) => None,
        }
    }
}

/// Validated rules keyed by route.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use go_bus_feed::domain::RouteId;
/// use go_bus_feed::variants::VariantTable;
///
/// let table = VariantTable::builder()
///     .group(RouteId::new(18), "Union", &["Aldershot", "B Union", "Union", "Special"])
///     .group(RouteId::new(18), "Hamilton", &["C Hamilton", "Hamilton", "Special"])
///     .build()
///     .unwrap();
///
/// let observed: BTreeSet<String> = ["Aldershot", "Special"].map(String::from).into();
/// let rule = table.rule(RouteId::new(18)).unwrap();
/// let (_, group) = rule.select(&observed).unwrap();
/// assert_eq!(group.canonical(), "Union");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    rules: BTreeMap<RouteId, RouteRule>,
}

impl VariantTable {
    /// A table with no rules; every route uses the branch-letter heuristic.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a table.
    pub fn builder() -> VariantTableBuilder {
        VariantTableBuilder::default()
    }

    /// The rule for `route`, if one is declared.
    pub fn rule(&self, route: RouteId) -> Option<&RouteRule> {
        self.rules.get(&route)
    }

    /// Routes with a declared rule, in ascending order.
    pub fn routes(&self) -> impl Iterator<Item = RouteId> + '_ {
        self.rules.keys().copied()
    }

    /// Number of routes with a rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no route has a rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parse and validate a table from JSON.
    ///
    /// ```json
    /// {"routes": [
    ///   {"route": 18, "rule": {"kind": "variants", "groups": [
    ///     {"canonical": "Union", "members": ["B Union", "Union"]}]}},
    ///   {"route": 99, "rule": {"kind": "cardinal", "slot0": "east", "slot1": "west"}}
    /// ]}
    /// ```
    pub fn from_json(json: &str) -> Result<Self, VariantTableError> {
        let file: TableFile = serde_json::from_str(json)?;
        file.routes
            .into_iter()
            .fold(Self::builder(), |builder, entry| match entry.rule {
                RuleDto::Variants { groups } => groups.into_iter().fold(builder, |b, g| {
                    b.group_owned(entry.route, g.canonical, g.members)
                }),
                RuleDto::Cardinal { slot0, slot1 } => builder.cardinal(entry.route, slot0, slot1),
            })
            .build()
    }

    /// Read, parse and validate a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VariantTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| VariantTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Deserialize)]
struct TableFile {
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    route: RouteId,
    rule: RuleDto,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RuleDto {
    Variants { groups: Vec<GroupDto> },
    Cardinal { slot0: Cardinal, slot1: Cardinal },
}

#[derive(Debug, Deserialize)]
struct GroupDto {
    canonical: String,
    members: Vec<String>,
}

/// Pending rule while the table is being assembled.
#[derive(Debug)]
enum PendingRule {
    Groups(Vec<(String, Vec<String>)>),
    Cardinal(Cardinal, Cardinal),
}

/// Accumulates rules, then validates them all at once in [`build`].
///
/// Successive [`group`] calls for one route append groups in order; that
/// order is the selection precedence.
///
/// [`build`]: VariantTableBuilder::build
/// [`group`]: VariantTableBuilder::group
#[derive(Debug, Default)]
pub struct VariantTableBuilder {
    pending: Vec<(RouteId, PendingRule)>,
}

impl VariantTableBuilder {
    /// Append a group to `route`'s variant rule.
    pub fn group(self, route: RouteId, canonical: &str, members: &[&str]) -> Self {
        self.group_owned(
            route,
            canonical.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        )
    }

    fn group_owned(mut self, route: RouteId, canonical: String, members: Vec<String>) -> Self {
        let existing = self.pending.iter_mut().rev().find_map(|(r, rule)| match rule {
            PendingRule::Groups(groups) if *r == route => Some(groups),
            _ => None,
        });
        match existing {
            Some(groups) => groups.push((canonical, members)),
            None => self
                .pending
                .push((route, PendingRule::Groups(vec![(canonical, members)]))),
        }
        self
    }

    /// Label `route`'s slots with fixed compass directions.
    pub fn cardinal(mut self, route: RouteId, slot0: Cardinal, slot1: Cardinal) -> Self {
        self.pending.push((route, PendingRule::Cardinal(slot0, slot1)));
        self
    }

    /// Validate every rule and produce the table.
    pub fn build(self) -> Result<VariantTable, VariantTableError> {
        let mut rules = BTreeMap::new();

        for (route, pending) in self.pending {
            let rule = match pending {
                PendingRule::Cardinal(slot0, slot1) => RouteRule::Cardinal { slot0, slot1 },
                PendingRule::Groups(groups) => RouteRule::Variants(validate_groups(route, groups)?),
            };
            if rules.insert(route, rule).is_some() {
                return Err(VariantTableError::DuplicateRoute { route });
            }
        }

        debug!(routes = rules.len(), "variant table built");
        Ok(VariantTable { rules })
    }
}

fn validate_groups(
    route: RouteId,
    raw: Vec<(String, Vec<String>)>,
) -> Result<Vec<VariantGroup>, VariantTableError> {
    let mut groups: Vec<VariantGroup> = Vec::with_capacity(raw.len());

    for (index, (canonical, members)) in raw.into_iter().enumerate() {
        if canonical.trim().is_empty() {
            return Err(VariantTableError::EmptyCanonical { route, index });
        }
        if members.is_empty() {
            return Err(VariantTableError::EmptyGroup { route, index });
        }

        for member in &members {
            let normalized = normalize_headsign(member);
            if normalized != *member {
                warn!(
                    %route,
                    member = member.as_str(),
                    normalized = normalized.as_str(),
                    "variant member is not in normalized form and will never match"
                );
            }
        }

        let group = VariantGroup::new(canonical, members);
        if let Some((earlier, shadowing)) = groups
            .iter()
            .enumerate()
            .find(|(_, g)| g.canonical != group.canonical && g.covers(&group.members))
        {
            return Err(VariantTableError::ShadowedGroup {
                route,
                earlier,
                earlier_label: shadowing.canonical.clone(),
                later: index,
                later_label: group.canonical,
            });
        }
        groups.push(group);
    }

    Ok(groups)
}
