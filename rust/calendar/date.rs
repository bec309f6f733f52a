// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{Result, VacationError};

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Returns whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: &NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

// `str::parse` accepts a leading sign, keys do not.
fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Error returned when a month or day key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key '{input}', expected {expected}")]
pub struct ParseKeyError {
    input: String,
    expected: &'static str,
}

/// A validated calendar year.
///
/// Only years that `chrono` can represent from January 1st to December 31st are accepted,
/// so every operation on a `Year` is infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Year {
    first: NaiveDate,
}

impl Year {
    /// Smallest accepted year.
    pub const MIN: i64 = 1;
    /// Largest accepted year.
    pub const MAX: i64 = 9999;

    /// Constructs a new `Year`, rejecting values outside of [`Year::MIN`]..=[`Year::MAX`].
    pub fn try_new(year: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&year) {
            return Err(VacationError::config(
                "year",
                format!("{} is outside the supported range {}..={}", year, Self::MIN, Self::MAX),
            ));
        }
        let first = NaiveDate::from_ymd_opt(year as i32, 1, 1)
            .ok_or_else(|| VacationError::config("year", format!("{} is not a valid year", year)))?;
        Ok(Year { first })
    }

    /// The numeric year.
    pub fn value(&self) -> i32 {
        self.first.year()
    }

    /// January 1st of the year.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Returns whether February has 29 days in this year.
    pub fn is_leap(&self) -> bool {
        NaiveDate::from_ymd_opt(self.value(), 2, 29).is_some()
    }

    /// Number of days in the year, derived from the ordinal of December 31st.
    pub fn num_days(&self) -> usize {
        NaiveDate::from_ymd_opt(self.value(), 12, 31).map_or(365, |d| d.ordinal() as usize)
    }

    /// Every date of the year in ascending order, January 1st to December 31st inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let year = self.value();
        self.first.iter_days().take_while(move |d| d.year() == year)
    }
}

impl TryFrom<i64> for Year {
    type Error = VacationError;

    fn try_from(value: i64) -> Result<Self> {
        Year::try_new(value)
    }
}

impl From<Year> for i32 {
    fn from(item: Year) -> Self {
        item.value()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Key of a month sheet, rendered as "YYYY-MM".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// The month containing `date`.
    pub fn of(date: &NaiveDate) -> Self {
        MonthKey {
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

    /// Number of calendar days in the month.
    pub fn num_days(&self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match (first, next) {
            (Some(a), Some(b)) => (b - a).num_days() as u32,
            // December 9999 has no successor month in chrono's range.
            _ => 31,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseKeyError {
            input: s.to_string(),
            expected: "YYYY-MM",
        };
        let (y, m) = s.split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 || !all_digits(y) || !all_digits(m) {
            return Err(err());
        }
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => Ok(MonthKey::of(&d)),
            None => Err(err()),
        }
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(item: MonthKey) -> Self {
        item.to_string()
    }
}

/// A year-independent day marker rendered as "MM-DD".
///
/// Serves both as the day key of a month sheet and as a holiday marker. Ordering is by month
/// then day, which coincides with the lexicographic order of the rendered string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Constructs a new `MonthDay`, accepting any day that exists in a leap year.
    pub fn try_new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year so 02-29 is representable.
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| MonthDay { month, day })
    }

    /// The month-day of `date`, discarding the year.
    pub fn of(date: &NaiveDate) -> Self {
        MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseKeyError {
            input: s.to_string(),
            expected: "MM-DD",
        };
        let (m, d) = s.split_once('-').ok_or_else(err)?;
        if m.len() != 2 || d.len() != 2 || !all_digits(m) || !all_digits(d) {
            return Err(err());
        }
        let month: u32 = m.parse().map_err(|_| err())?;
        let day: u32 = d.parse().map_err(|_| err())?;
        MonthDay::try_new(month, day).ok_or_else(err)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(item: MonthDay) -> Self {
        item.to_string()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::try_new(0).is_err());
        assert!(Year::try_new(10_000).is_err());
        assert_eq!(Year::try_new(2024).unwrap().value(), 2024);
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(Year::try_new(2023).unwrap().num_days(), 365);
        assert_eq!(Year::try_new(2024).unwrap().num_days(), 366);
        assert_eq!(Year::try_new(1900).unwrap().num_days(), 365);
        assert_eq!(Year::try_new(2000).unwrap().num_days(), 366);
        assert!(Year::try_new(2000).unwrap().is_leap());
        assert!(!Year::try_new(2100).unwrap().is_leap());
    }

    #[test]
    fn test_year_days_span_whole_year() {
        let year = Year::try_new(9999).unwrap();
        let days: Vec<NaiveDate> = year.days().collect();
        assert_eq!(days.first(), Some(&ymd(9999, 1, 1)));
        assert_eq!(days.last(), Some(&ymd(9999, 12, 31)));
        assert_eq!(days.len(), year.num_days());
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(&ymd(2024, 1, 6))); // Saturday
        assert!(is_weekend(&ymd(2024, 1, 7))); // Sunday
        assert!(!is_weekend(&ymd(2024, 1, 8))); // Monday
        assert!(!is_weekend(&ymd(2024, 1, 5))); // Friday
    }

    #[test]
    fn test_month_key_format_and_parse() {
        let key = MonthKey::of(&ymd(2024, 2, 10));
        assert_eq!(key.to_string(), "2024-02");
        assert_eq!("2024-02".parse::<MonthKey>().unwrap(), key);
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("24-02".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_month_key_num_days() {
        assert_eq!(MonthKey::of(&ymd(2024, 2, 1)).num_days(), 29);
        assert_eq!(MonthKey::of(&ymd(2023, 2, 1)).num_days(), 28);
        assert_eq!(MonthKey::of(&ymd(2023, 4, 1)).num_days(), 30);
        assert_eq!(MonthKey::of(&ymd(2023, 12, 1)).num_days(), 31);
        assert_eq!(MonthKey::of(&ymd(9999, 12, 1)).num_days(), 31);
    }

    #[test]
    fn test_month_day_parse() {
        assert_eq!("07-04".parse::<MonthDay>().unwrap(), MonthDay::try_new(7, 4).unwrap());
        assert!("02-29".parse::<MonthDay>().is_ok());
        assert!("02-30".parse::<MonthDay>().is_err());
        assert!("7-4".parse::<MonthDay>().is_err());
        assert!("13-01".parse::<MonthDay>().is_err());
        assert!("ab-cd".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_keys_reject_signs() {
        assert!("+1-+4".parse::<MonthDay>().is_err());
        assert!("+1-04".parse::<MonthDay>().is_err());
        assert!("01- 4".parse::<MonthDay>().is_err());
        assert!("+024-01".parse::<MonthKey>().is_err());
        assert!("2024-+1".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_month_day_order_matches_string_order() {
        let mut keys: Vec<MonthDay> = ["12-01", "01-10", "01-02", "10-01"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["01-02", "01-10", "10-01", "12-01"]);
    }

    #[test]
    fn test_serde_as_strings() {
        let md = MonthDay::try_new(1, 6).unwrap();
        assert_eq!(serde_json::to_string(&md).unwrap(), "\"01-06\"");
        let year: Year = serde_json::from_str("2024").unwrap();
        assert_eq!(year.value(), 2024);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }
}
