//! Shared label-cleaning rules.
//!
//! These rules are agency-independent and are applied by both the
//! headsign and the stop-name pipelines. Every rule is total: patterns
//! that do not match leave the input unchanged.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\band\b").expect("valid regex"));

static AT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bat\b").expect("valid regex"));

static SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid regex"));

static BOUNDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(east|west|north|south)\s?bound\b").expect("valid regex")
});

static ORDINAL_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b")
        .expect("valid regex")
});

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-9]+)(st|nd|rd|th)\b").expect("valid regex"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Street-type words and their short forms.
const STREET_TYPES: &[(&str, &str)] = &[
    ("avenue", "Ave"),
    ("boulevard", "Blvd"),
    ("centre|center", "Ctr"),
    ("circle", "Cir"),
    ("court", "Ct"),
    ("crescent", "Cres"),
    ("drive", "Dr"),
    ("expressway", "Expy"),
    ("lane", "Ln"),
    ("mount", "Mt"),
    ("parkway", "Pkwy"),
    ("place", "Pl"),
    ("road", "Rd"),
    ("square", "Sq"),
    ("street", "St"),
    ("terrace", "Terr"),
];

static STREET_TYPE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    STREET_TYPES
        .iter()
        .map(|(words, short)| {
            let re = Regex::new(&format!(r"(?i)\b(?:{words})\b")).expect("valid regex");
            (re, *short)
        })
        .collect()
});

/// Apply `re` repeatedly until the text stops changing.
///
/// Patterns that consume a delimiter on both sides cannot match two
/// adjacent tokens in one pass ("GO GO"), so removals loop to a fixed
/// point. The loop is bounded because every replacement used with it
/// either shortens the text or produces text the pattern cannot match.
pub(crate) fn replace_all_stable(re: &Regex, text: &str, replacement: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..8 {
        let next = re.replace_all(&current, replacement);
        if let Cow::Borrowed(_) = next {
            break;
        }
        current = next.into_owned();
    }
    current
}

/// Replace the conjunction "and" with `&`.
pub fn clean_and(label: &str) -> String {
    AND.replace_all(label, "&").into_owned()
}

/// Replace the word "at" with `/`.
pub fn clean_at(label: &str) -> String {
    AT.replace_all(label, "/").into_owned()
}

/// Normalize spacing around slashes to `" / "`.
pub fn clean_slashes(label: &str) -> String {
    SLASHES.replace_all(label, " / ").into_owned()
}

/// Shorten "Eastbound"/"east bound" and friends to "EB", "WB", "NB", "SB".
pub fn clean_bounds(label: &str) -> String {
    BOUNDS
        .replace_all(label, |caps: &Captures<'_>| {
            let initial = caps[1].chars().next().unwrap_or('N').to_ascii_uppercase();
            format!("{initial}B")
        })
        .into_owned()
}

/// Shorten known street-type words ("Street" to "St", "Square" to "Sq").
pub fn clean_street_types(label: &str) -> String {
    STREET_TYPE_RULES
        .iter()
        .fold(label.to_string(), |acc, (re, short)| {
            re.replace_all(&acc, *short).into_owned()
        })
}

/// Normalize ordinals: spelled-out ordinals become digits ("First" to
/// "1st") and ordinal suffixes are lower-cased ("2ND" to "2nd").
pub fn clean_numbers(label: &str) -> String {
    let words = ORDINAL_WORDS.replace_all(label, |caps: &Captures<'_>| {
        let digits = match caps[1].to_ascii_lowercase().as_str() {
            "first" => "1st",
            "second" => "2nd",
            "third" => "3rd",
            "fourth" => "4th",
            "fifth" => "5th",
            "sixth" => "6th",
            "seventh" => "7th",
            "eighth" => "8th",
            "ninth" => "9th",
            _ => "10th",
        };
        digits.to_string()
    });
    ORDINAL_SUFFIX
        .replace_all(&words, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned()
}

/// Final clean-up: trim, collapse whitespace and capitalize the first
/// letter of every word.
pub fn clean_label(label: &str) -> String {
    let collapsed = SPACES.replace_all(label.trim(), " ");
    capitalize_words(&collapsed)
}

/// Upper-case the first character of each word without touching the rest,
/// so mixed-case forms like "McMaster" and "UOIT" survive.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace() || matches!(c, '/' | '-' | '(');
    }
    out
}
