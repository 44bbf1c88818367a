//! Stop name pipeline.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{
    clean_at, clean_bounds, clean_label, clean_numbers, clean_slashes, clean_street_types,
    replace_all_stable,
};

static GO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)go(\s|$)").expect("valid regex"));

static VIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\s)via(\s|$)").expect("valid regex"));

/// Abbreviations written with a trailing period ("St.", "Blvd.").
static POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(st|ave|blvd|hwy|rd|dr)\.(\W|$)").expect("valid regex")
});

/// Single-letter compass directions written with a period ("N.").
static DIRECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([nsew])\.(\W|$)").expect("valid regex"));

pub(super) fn normalize(raw: &str) -> String {
    let mut s = clean_at(raw);
    s = replace_all_stable(&VIA, &s, " ");
    s = replace_all_stable(&GO, &s, " ");
    s = POINT.replace_all(&s, "${1}${2}").into_owned();
    s = DIRECTION.replace_all(&s, "${1}${2}").into_owned();
    s = clean_slashes(&s);
    s = clean_bounds(&s);
    s = clean_street_types(&s);
    s = clean_numbers(&s);
    clean_label(&s)
}
