//! Headsign merging.
//!
//! All trips of one route and direction slot must end up with a single
//! headsign. The resolver folds the distinct normalized headsigns of a
//! slot pairwise; routes with a variant rule are decided by the table,
//! routes without one fall back to the branch-letter heuristic.

mod heuristic;

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{DirectionSlot, RouteId};
use crate::error::{Error, TableMiss};
use crate::variants::{RouteRule, VariantTable};

pub use heuristic::{has_branch_prefix, select_direction_headsign};

/// The label decided for a slot, and the group it came from.
#[derive(Debug, Clone)]
struct Decision {
    group: Option<usize>,
    label: String,
}

#[derive(Debug, Default)]
struct SlotState {
    observed: BTreeSet<String>,
    decision: Option<Decision>,
}

/// Pairwise headsign resolver with per-slot memory.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use go_bus_feed::domain::{DirectionSlot, RouteId};
/// use go_bus_feed::merge::MergeResolver;
/// use go_bus_feed::variants::go_transit;
///
/// let table = go_transit().unwrap();
/// let mut resolver = MergeResolver::new(&table);
///
/// let headsigns: BTreeSet<String> =
///     ["Aldershot", "B Union", "Special"].map(String::from).into();
/// let label = resolver
///     .fold_slot(RouteId::new(18), DirectionSlot::Zero, &headsigns)
///     .unwrap();
/// assert_eq!(label, "Union");
/// ```
#[derive(Debug)]
pub struct MergeResolver<'t> {
    table: &'t VariantTable,
    tolerate_ambiguous: bool,
    slots: HashMap<(RouteId, DirectionSlot), SlotState>,
}

impl<'t> MergeResolver<'t> {
    /// Create a resolver backed by `table`.
    pub fn new(table: &'t VariantTable) -> Self {
        Self {
            table,
            tolerate_ambiguous: false,
            slots: HashMap::new(),
        }
    }

    /// Keep the first headsign instead of failing when the heuristic
    /// cannot decide.
    pub fn tolerate_ambiguous(mut self, tolerate: bool) -> Self {
        self.tolerate_ambiguous = tolerate;
        self
    }

    /// The label decided so far for a slot, if any.
    pub fn decision(&self, route: RouteId, slot: DirectionSlot) -> Option<&str> {
        self.slots
            .get(&(route, slot))
            .and_then(|s| s.decision.as_ref())
            .map(|d| d.label.as_str())
    }

    /// Merge two headsigns of the same route and slot into one label.
    ///
    /// `a` may be the label returned by a previous call for this slot; it
    /// is then not counted as an observed headsign.
    pub fn resolve(
        &mut self,
        route: RouteId,
        slot: DirectionSlot,
        a: &str,
        b: &str,
    ) -> Result<String, Error> {
        let table = self.table;
        let tolerate_ambiguous = self.tolerate_ambiguous;
        let state = self.slots.entry((route, slot)).or_default();

        let a_is_decision = state.decision.as_ref().is_some_and(|d| d.label == a);
        if !a_is_decision {
            state.observed.insert(a.to_string());
        }
        state.observed.insert(b.to_string());

        let decision = match table.rule(route) {
            Some(RouteRule::Cardinal { slot0, slot1 }) => {
                let cardinal = match slot {
                    DirectionSlot::Zero => slot0,
                    DirectionSlot::One => slot1,
                };
                Decision {
                    group: None,
                    label: cardinal.label().to_string(),
                }
            }
            Some(rule @ RouteRule::Variants(_)) => decide_by_groups(rule, route, slot, state)?,
            None => {
                let label = if a == b {
                    a.to_string()
                } else if let Some(chosen) = select_direction_headsign(a, b) {
                    chosen.to_string()
                } else if tolerate_ambiguous {
                    warn!(%route, %slot, first = a, second = b, "ambiguous direction; keeping first");
                    a.to_string()
                } else {
                    return Err(Error::AmbiguousDirection {
                        route,
                        slot,
                        first: a.to_string(),
                        second: b.to_string(),
                    });
                };
                Decision { group: None, label }
            }
        };

        let label = decision.label.clone();
        state.decision = Some(decision);
        Ok(label)
    }

    /// Collapse every distinct headsign of a slot into one label.
    ///
    /// A slot with a single headsign keeps it as-is only when the route
    /// has no rule; otherwise it must still be covered by the table.
    /// Headsigns without a branch prefix are folded first so the heuristic
    /// sees the plain label as its left operand.
    pub fn fold_slot(
        &mut self,
        route: RouteId,
        slot: DirectionSlot,
        headsigns: &BTreeSet<String>,
    ) -> Result<String, Error> {
        let mut ordered: Vec<&String> = headsigns.iter().collect();
        ordered.sort_by_key(|h| (has_branch_prefix(h), *h));

        let mut iter = ordered.into_iter();
        let Some(first) = iter.next() else {
            return Ok(String::new());
        };

        let Some(second) = iter.next() else {
            if self.table.rule(route).is_none() {
                return Ok(first.clone());
            }
            return self.resolve(route, slot, first, first);
        };

        let mut label = self.resolve(route, slot, first, second)?;
        for headsign in iter {
            label = self.resolve(route, slot, &label, headsign)?;
        }
        Ok(label)
    }
}

/// Keep the slot's current group while it still covers everything
/// observed; otherwise take the first group that does.
fn decide_by_groups(
    rule: &RouteRule,
    route: RouteId,
    slot: DirectionSlot,
    state: &SlotState,
) -> Result<Decision, TableMiss> {
    let kept = state
        .decision
        .as_ref()
        .and_then(|d| d.group)
        .and_then(|i| rule.group(i).map(|g| (i, g)))
        .filter(|(_, g)| g.covers(&state.observed));
    if let Some((index, group)) = kept {
        return Ok(Decision {
            group: Some(index),
            label: group.canonical().to_string(),
        });
    }

    let (index, group) = rule
        .select(&state.observed)
        .ok_or_else(|| TableMiss::Variants {
            route,
            slot,
            headsigns: state.observed.iter().cloned().collect(),
        })?;
    debug!(
        %route,
        %slot,
        group = index,
        label = group.canonical(),
        "variant group selected"
    );
    Ok(Decision {
        group: Some(index),
        label: group.canonical().to_string(),
    })
}
