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

//! This is the documentation for vacation_planner
//!
//! Build a yearly vacation planning workbook: one sheet per month, one row per day, with a
//! column per country marking its public holidays, a weekend column, and a blank column per
//! person.
//!
//! The pipeline is
//! [`Config`](config::Config) → [`HolidayProvider`](provider::HolidayProvider) →
//! [`assemble`](calendar::assemble) → [`project`](grid::project) →
//! [`TabularWriter`](writer::TabularWriter), driven by [`planner::run`].
//!
//! ```rust
//! # use vacation_planner::calendar::{assemble, Country, HolidaySet, Year};
//! # use vacation_planner::grid::project_all;
//! # use std::collections::HashMap;
//! let countries = vec![Country::new("us", "United States")];
//! let persons = vec!["Alice".to_string()];
//! let holidays = HashMap::from([(countries[0].code, HolidaySet::new(vec!["07-04".parse().unwrap()]))]);
//! let calendar = assemble(Year::try_new(2024).unwrap(), &countries, &holidays);
//! let grids: Vec<_> = project_all(&calendar, &countries, &persons).collect();
//! assert_eq!(grids.len(), 12);
//! assert_eq!(grids[1].num_rows(), 29);
//! assert_eq!(grids[0].headers(), vec!["Date", "United States", "Weekend", "Alice"]);
//! ```

#[cfg(test)]
mod tests;

pub mod calendar;
pub mod config;
pub mod error;
pub mod grid;
pub mod json;
pub mod planner;
pub mod provider;
pub mod writer;

pub use error::{Result, VacationError};
