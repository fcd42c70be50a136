//! Calendar-month arithmetic and billing periods
//!
//! Premiums fall due once per calendar month, keyed by the month label the
//! payment covers ("July 2024"). Day-of-month never participates in the
//! arrears math; only whole calendar months do.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from period parsing and date arithmetic
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid premium period: {0}")]
    InvalidPeriod(String),
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A billing period: one calendar month of cover
///
/// Serialized as its human label ("July 2024"), the form the store and the
/// payment forms already use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PremiumPeriod {
    year: i32,
    /// 1-based calendar month
    month: u32,
}

impl PremiumPeriod {
    /// Creates a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidPeriod(format!(
                "month {} out of range",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Advances by a number of whole months
    pub fn advance(&self, months: u32) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        Self {
            year: (zero_based.div_euclid(12)) as i32,
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }

    /// The first day of this period
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("PremiumPeriod holds a valid month")
    }
}

impl fmt::Display for PremiumPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl FromStr for PremiumPeriod {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TemporalError::InvalidPeriod(s.to_string()));
        };
        let month = MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
            .ok_or_else(|| TemporalError::InvalidPeriod(s.to_string()))? as u32
            + 1;
        let year = year
            .parse::<i32>()
            .map_err(|_| TemporalError::InvalidPeriod(s.to_string()))?;
        PremiumPeriod::new(year, month)
    }
}

impl Serialize for PremiumPeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PremiumPeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whole calendar months from `start` to `end`, day-of-month ignored
///
/// Negative spans (end before start) floor at 0. This is the raw month
/// difference; the billing engine adds 1 to count the inception month as the
/// first month due.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let diff = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    diff.max(0) as u32
}

/// Advances a date by whole calendar months, clamping the day when the
/// target month is shorter (Jan 31 + 1 month = Feb 28/29)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let target = PremiumPeriod::from_date(date).advance(months);
    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(target.year(), target.month(), day) {
            return d;
        }
        day -= 1;
    }
}
