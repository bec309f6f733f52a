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

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::calendar::{is_weekend, Country, CountryCode, HolidaySet, MonthDay, MonthKey, Year};

/// The holiday and weekend state of a single date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub month: MonthKey,
    pub day: MonthDay,
    /// Countries observing a holiday on this date, in configured country order.
    pub countries: IndexSet<CountryCode>,
    pub is_weekend: bool,
}

impl CalendarDay {
    /// Returns *true* if `country` observes a holiday on this date.
    pub fn is_holiday_in(&self, country: &CountryCode) -> bool {
        self.countries.contains(country)
    }
}

/// Mapping of day key to [`CalendarDay`] for one month.
///
/// Iteration order is unspecified; consumers must sort the keys.
pub type MonthDays = HashMap<MonthDay, CalendarDay>;

/// Every date of a year, partitioned by month.
///
/// Months iterate in chronological order. Days within a month are stored unordered, see
/// [`YearCalendar::sorted_days`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearCalendar {
    pub year: Year,
    pub months: IndexMap<MonthKey, MonthDays>,
}

impl YearCalendar {
    /// Total number of [`CalendarDay`] entries.
    pub fn len(&self) -> usize {
        self.months.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Look up the entry for a specific date.
    pub fn get(&self, date: &NaiveDate) -> Option<&CalendarDay> {
        self.months
            .get(&MonthKey::of(date))
            .and_then(|m| m.get(&MonthDay::of(date)))
    }

    /// The days of `month` sorted ascending by day key.
    pub fn sorted_days(&self, month: &MonthKey) -> Vec<&CalendarDay> {
        match self.months.get(month) {
            None => Vec::new(),
            Some(days) => sorted_days(days),
        }
    }
}

/// Return the values of a month mapping sorted ascending by day key.
pub fn sorted_days(days: &MonthDays) -> Vec<&CalendarDay> {
    let mut sorted: Vec<&CalendarDay> = days.values().collect();
    sorted.sort_by_key(|d| d.day);
    sorted
}

/// Build the [`CalendarDay`] of every date in `year`.
///
/// A country is on holiday on a date when the date's month-day is in its [`HolidaySet`]; the
/// year of the marker plays no part. A country without an entry in `holidays` observes no
/// holidays.
///
/// # Example
/// ```rust
/// # use std::collections::HashMap;
/// # use vacation_planner::calendar::{assemble, ymd, Country, HolidaySet, Year};
/// let us = Country::new("us", "United States");
/// let holidays = HashMap::from([(us.code, HolidaySet::new(vec!["07-04".parse().unwrap()]))]);
/// let calendar = assemble(Year::try_new(2024).unwrap(), &[us.clone()], &holidays);
/// assert_eq!(calendar.len(), 366);
/// assert!(calendar.get(&ymd(2024, 7, 4)).unwrap().is_holiday_in(&us.code));
/// assert!(calendar.get(&ymd(2024, 7, 6)).unwrap().is_weekend);
/// ```
pub fn assemble(
    year: Year,
    countries: &[Country],
    holidays: &HashMap<CountryCode, HolidaySet>,
) -> YearCalendar {
    let empty = HolidaySet::default();
    let sets: Vec<(&CountryCode, &HolidaySet)> = countries
        .iter()
        .map(|c| {
            let set = holidays.get(&c.code).unwrap_or_else(|| {
                debug!("no holiday set for '{}', treating as empty", c.code);
                &empty
            });
            (&c.code, set)
        })
        .collect();

    let mut months: IndexMap<MonthKey, MonthDays> = IndexMap::new();
    for date in year.days() {
        let month = MonthKey::of(&date);
        let day = MonthDay::of(&date);
        let on_holiday: IndexSet<CountryCode> = sets
            .iter()
            .filter(|(_, set)| set.contains(&day))
            .map(|(code, _)| **code)
            .collect();
        months.entry(month).or_default().insert(
            day,
            CalendarDay {
                month,
                day,
                countries: on_holiday,
                is_weekend: is_weekend(&date),
            },
        );
    }
    debug!("assembled {} days over {} months for {}", year.num_days(), months.len(), year);
    YearCalendar { year, months }
}
