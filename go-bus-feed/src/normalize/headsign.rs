//! Trip headsign pipeline.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::rules::{
    clean_and, clean_at, clean_bounds, clean_label, clean_numbers, clean_slashes,
    clean_street_types, replace_all_stable,
};

/// Route short-name prefix: "96B - ", "18 - ".
static ROUTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[0-9]{2,3}([a-z]?)\s+-\s+").expect("valid regex"));

static GO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)go(\s|$)").expect("valid regex"));

static STATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:station|sta|stn)\b").expect("valid regex"));

static PARK_AND_RIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bpark\s*(?:&|and|n)\s*ride\b|\bp\+r\b").expect("valid regex")
});

static UNIVERSITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\buniversity\b").expect("valid regex"));

static HIGHWAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhighway\b|\bhwy\.").expect("valid regex"));

static TRAILING_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:bus loop|bus terminal|bus term\.?|terminal|term\.?)(\W|$)")
        .expect("valid regex")
});

static LEADING_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:bus loop|bus terminal|terminal)\s+").expect("valid regex")
});

static EDGE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-[\s-]*|[\s-]*-\s*$").expect("valid regex"));

/// A dash followed by whitespace starts a trailing qualifier clause.
static TRAILING_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[\s-]*-\s.*$").expect("valid regex"));

pub(super) fn normalize(raw: &str, keep_branch_letter: bool) -> String {
    let prefix_replacement = if keep_branch_letter { "${1} " } else { "" };
    let mut s = ROUTE_PREFIX.replace(raw, prefix_replacement).into_owned();

    s = replace_all_stable(&GO, &s, " ");
    s = STATION.replace_all(&s, "").into_owned();
    s = PARK_AND_RIDE.replace_all(&s, "P&R").into_owned();
    s = UNIVERSITY.replace_all(&s, "U").into_owned();
    s = HIGHWAY.replace_all(&s, "Hwy").into_owned();
    s = replace_all_stable(&TRAILING_TERMINAL, &s, "${1}");
    s = LEADING_TERMINAL.replace(&s, "").into_owned();
    s = EDGE_DASH.replace_all(&s, "").into_owned();
    s = TRAILING_CLAUSE.replace(&s, "").into_owned();

    s = clean_and(&s);
    s = clean_at(&s);
    s = clean_bounds(&s);
    if is_shouting(&s) {
        s = lower_long_words(&s);
    }

    s = clean_slashes(&s);
    s = clean_street_types(&s);
    s = clean_numbers(&s);
    clean_label(&s)
}

/// Upper-case forms that are proper names rather than shouting.
const ACRONYMS: &[&str] = &["UOIT"];

/// A run of three or more letters; shorter runs are abbreviations
/// ("EB", "U", "D.C.") and keep their case.
static LONG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}{3,}").expect("valid regex"));

/// No lower-case letter anywhere and at least one long letter run.
/// Digits and punctuation do not count either way ("HWY 407",
/// "UNION / HAMILTON").
fn is_shouting(s: &str) -> bool {
    !s.chars().any(char::is_lowercase) && LONG_WORD.is_match(s)
}

/// Lower-case every long letter run except its first letter.
fn lower_long_words(s: &str) -> String {
    LONG_WORD
        .replace_all(s, |caps: &Captures<'_>| {
            let word = &caps[0];
            if ACRONYMS.contains(&word) {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        normalize(raw, false)
    }

    #[test]
    fn strips_route_prefix() {
        assert_eq!(clean("96B - Newmarket"), "Newmarket");
        assert_eq!(clean("18 - Union Station"), "Union");
        assert_eq!(clean("21A - Milton GO"), "Milton");
    }

    #[test]
    fn keeps_branch_letter_when_asked() {
        assert_eq!(normalize("96B - Newmarket", true), "B Newmarket");
        assert_eq!(normalize("96 - Newmarket", true), "Newmarket");
    }

    #[test]
    fn prefix_needs_dash() {
        assert_eq!(clean("407 Express"), "407 Express");
    }

    #[test]
    fn removes_station_and_go_tokens() {
        assert_eq!(clean("Union Station"), "Union");
        assert_eq!(clean("Oshawa GO Stn"), "Oshawa");
        assert_eq!(clean("GO Yorkdale"), "Yorkdale");
        assert_eq!(clean("Gormley"), "Gormley");
    }

    #[test]
    fn shortens_known_words() {
        assert_eq!(clean("Bowmanville Park & Ride"), "Bowmanville P&R");
        assert_eq!(clean("Hwy 407 P+R"), "Hwy 407 P&R");
        assert_eq!(clean("York University"), "York U");
        assert_eq!(clean("Highway 7"), "Hwy 7");
        assert_eq!(clean("Hwy. 7"), "Hwy 7");
        assert_eq!(clean("Square One"), "Sq One");
    }

    #[test]
    fn removes_terminal_qualifiers() {
        assert_eq!(clean("Yorkdale Bus Terminal"), "Yorkdale");
        assert_eq!(clean("Finch Bus Term."), "Finch");
        assert_eq!(clean("Scarborough Town Centre Bus Loop"), "Scarborough Town Ctr");
        assert_eq!(clean("Oshawa Terminal"), "Oshawa");
        assert_eq!(clean("Terminal Oshawa"), "Oshawa");
    }

    #[test]
    fn truncates_trailing_clause() {
        assert_eq!(clean("Union - Express"), "Union");
        assert_eq!(clean("Union -- Express - Weekdays"), "Union");
        assert_eq!(clean("Niagara-on-the-Lake"), "Niagara-On-The-Lake");
        assert_eq!(clean("- Union -"), "Union");
    }

    #[test]
    fn conjunctions() {
        assert_eq!(clean("Hwy 7 and Bayview"), "Hwy 7 & Bayview");
        assert_eq!(clean("Dundas at Hwy 412"), "Dundas / Hwy 412");
    }

    #[test]
    fn lowercases_shouting() {
        assert_eq!(clean("UNION STATION"), "Union");
        assert_eq!(clean("RICHMOND HILL CENTRE"), "Richmond Hill Ctr");
        assert_eq!(clean("UOIT / D.C."), "UOIT / D.C.");
        assert_eq!(clean("EB"), "EB");
        assert_eq!(clean("Eastbound UNION"), "EB Union");
        assert_eq!(clean("A UNION"), "A Union");
    }

    #[test]
    fn lowercases_shouting_with_punctuation_and_digits() {
        assert_eq!(clean("UNION / HAMILTON"), "Union / Hamilton");
        assert_eq!(clean("HWY 407"), "Hwy 407");
        assert_eq!(clean("18 - BURLINGTON & OAKVILLE"), "Burlington & Oakville");
        assert_eq!(clean("A UOIT / D.C."), "A UOIT / D.C.");
        for raw in ["UNION / HAMILTON", "HWY 407", "YORK U (SOUTH)"] {
            let once = clean(raw);
            assert_eq!(clean(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn branch_letters_survive() {
        assert_eq!(clean("A Burlington"), "A Burlington");
        assert_eq!(clean("B Union"), "B Union");
    }

    #[test]
    fn is_shouting_rules() {
        assert!(is_shouting("UNION"));
        assert!(is_shouting(" UNION STATION "));
        assert!(!is_shouting("EB"));
        assert!(!is_shouting("Union"));
        assert!(is_shouting("HWY 7"));
        assert!(is_shouting("UNION / HAMILTON"));
        assert!(!is_shouting("UOIT / D.c."));
        assert!(!is_shouting("P&R 407"));
        assert!(!is_shouting(""));
    }
}
