//! Branch-letter heuristic for routes without a variant rule.

/// True when `headsign` starts with a single capital letter followed by a
/// space: a branch code such as the "A" in "A Burlington".
///
/// The test is purely lexical. A normalized headsign that starts with a
/// one-letter word ("U Of Guelph", from "University of Guelph") is
/// indistinguishable from a branch code, so routes whose headsigns look
/// like that need a variant rule rather than this heuristic.
pub fn has_branch_prefix(headsign: &str) -> bool {
    let mut chars = headsign.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(' ')) if letter.is_ascii_uppercase()
    )
}

/// Pick a direction label from two different headsigns.
///
/// When exactly one carries a branch prefix the other one is chosen.
/// Otherwise there is nothing to go on and `None` is returned.
///
/// # Examples
///
/// ```
/// use go_bus_feed::merge::select_direction_headsign;
///
/// assert_eq!(select_direction_headsign("A Burlington", "Burlington"), Some("Burlington"));
/// assert_eq!(select_direction_headsign("A Burlington", "B Burlington"), None);
/// assert_eq!(select_direction_headsign("Oakville", "Burlington"), None);
/// ```
pub fn select_direction_headsign<'a>(a: &'a str, b: &'a str) -> Option<&'a str> {
    if a == b {
        return None;
    }
    match (has_branch_prefix(a), has_branch_prefix(b)) {
        (true, false) => Some(b),
        (false, true) => Some(a),
        _ => None,
    }
}
