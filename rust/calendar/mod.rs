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

//! Assemble the holiday and weekend state of every day of a year.
//!
//! Holiday data arrives per country as a [`HolidaySet`] of year-independent [`MonthDay`]
//! markers. [`assemble`] walks every date of a [`Year`], records which configured countries
//! observe a holiday on it and whether it falls on a weekend, and partitions the result by
//! [`MonthKey`] into a [`YearCalendar`].
//!
//! ### Example
//! ```rust
//! # use std::collections::HashMap;
//! # use vacation_planner::calendar::{assemble, ymd, Country, HolidaySet, MonthKey, Year};
//! let countries = vec![Country::new("fr", "France")];
//! let holidays = HashMap::from([(countries[0].code, HolidaySet::new(vec!["05-01".parse().unwrap()]))]);
//! let calendar = assemble(Year::try_new(2025).unwrap(), &countries, &holidays);
//! let may: MonthKey = "2025-05".parse().unwrap();
//! assert_eq!(calendar.sorted_days(&may).len(), 31);
//! assert_eq!(calendar.get(&ymd(2025, 5, 1)).unwrap().countries.len(), 1);
//! ```

mod assemble;
mod country;
mod date;
mod holidays;

pub use crate::calendar::{
    assemble::{assemble, sorted_days, CalendarDay, MonthDays, YearCalendar},
    country::{Country, CountryCode},
    date::{is_weekend, ymd, MonthDay, MonthKey, ParseKeyError, Year},
    holidays::HolidaySet,
};
