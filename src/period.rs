use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Pattern every ledger table name must match. Anything else in the
/// database (users, sqlite internals) is not a month table.
pub const KEY_PATTERN: &str = r"^[a-z]+_\d{2}$";

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(KEY_PATTERN).unwrap())
}

/// Derive the month table key for a date: lowercase full month name plus
/// the two-digit year, e.g. 2025-06-14 -> "june_25".
pub fn month_key(date: NaiveDate) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}_{:02}", month, date.year() % 100)
}

/// Inverse of `month_key`: month number (1-12) and full year.
///
/// The two-digit suffix is mapped to `2000 + suffix`. This century
/// assumption is a known limitation carried over from the stored key
/// format, which does not encode the century at all.
pub fn parse_key(key: &str) -> Option<(u32, i32)> {
    let (name, suffix) = key.split_once('_')?;
    let month = MONTH_NAMES.iter().position(|m| *m == name)? as u32 + 1;
    if suffix.len() != 2 {
        return None;
    }
    let year: i32 = suffix.parse().ok()?;
    Some((month, 2000 + year))
}

/// Human-readable form of a key: "june_25" -> "June 2025". Malformed
/// input comes back unchanged so catalog listings never fail on an
/// unexpected table name.
pub fn display_name(key: &str) -> String {
    match parse_key(key) {
        Some((month, year)) => {
            let name = MONTH_NAMES[month as usize - 1];
            let mut chars = name.chars();
            let capitalized = match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            format!("{capitalized} {year}")
        }
        None => key.to_string(),
    }
}

pub fn is_valid_key(key: &str) -> bool {
    key_regex().is_match(key)
}
