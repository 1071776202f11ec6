//! Date and time tokens of the log format.
//!
//! Dates are strict `DD.MM.YYYY`. Times are free-form tokens: they are never
//! rejected, and only used to order entries within a day when they happen to
//! read as a clock time.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static DAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("valid date pattern"));

/// Parses `DD.MM.YYYY` into a calendar date.
///
/// Returns `None` when the text does not match the pattern exactly or names a
/// day that does not exist (e.g. `31.02.2024`).
pub fn parse_day(text: &str) -> Option<NaiveDate> {
    let caps = DAY_PATTERN.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_clock(token: &str) -> Option<NaiveTime> {
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(token, format).ok())
}

/// Sortable instant of an entry: calendar date plus the raw time token.
///
/// Within one day, tokens that read as a clock time sort by that time; other
/// tokens sort after them and compare equal among themselves, so a stable sort
/// keeps their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: NaiveDate,
    clock: Option<NaiveTime>,
}

impl Timestamp {
    pub fn new(date: NaiveDate, time_token: &str) -> Self {
        Self {
            date,
            clock: parse_clock(time_token),
        }
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| match (self.clock, other.clock) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
