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

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::calendar::{sorted_days, Country, CountryCode, MonthDay, MonthDays, MonthKey, YearCalendar};
use crate::grid::{Cell, CellMarker};
use crate::json::JSON;

/// Header of the first column.
pub const DATE_HEADER: &str = "Date";
/// Header of the weekend column.
pub const WEEKEND_HEADER: &str = "Weekend";

/// What a column of a [`MonthGrid`] represents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnKind {
    Date,
    Country(CountryCode),
    Weekend,
    Person,
}

/// A headed column of cells, one cell per day of the month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub header: String,
    pub kind: ColumnKind,
    pub cells: Vec<Cell>,
}

/// The rectangular table for one calendar month.
///
/// Columns are ordered `Date`, one per country, `Weekend`, one per person. Every column has
/// one cell per day, in ascending day order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: MonthKey,
    pub days: Vec<MonthDay>,
    pub columns: Vec<Column>,
}

impl JSON for MonthGrid {}

impl MonthGrid {
    /// Name of the sheet the grid is written to.
    pub fn sheet_name(&self) -> String {
        self.month.to_string()
    }

    pub fn num_rows(&self) -> usize {
        self.days.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column headers in order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// The first column with the given header.
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.header == header)
    }

    /// The cells of the row for `day`, one per column.
    pub fn row(&self, day: &MonthDay) -> Option<Vec<&Cell>> {
        let i = self.days.iter().position(|d| d == day)?;
        Some(self.columns.iter().map(|c| &c.cells[i]).collect())
    }
}

/// Build the [`MonthGrid`] of one month from its unordered day mapping.
///
/// Days are explicitly sorted ascending by day key before any column is built. Country and
/// weekend columns are resolved independently, so a holiday falling on a weekend is marked
/// `Taken` in the country column and `Weekend` in the weekend column. Person columns are
/// always `Free`.
pub fn project(
    month: &MonthKey,
    day_map: &MonthDays,
    countries: &[Country],
    persons: &[String],
) -> MonthGrid {
    let days = sorted_days(day_map);
    let keys: Vec<MonthDay> = days.iter().map(|d| d.day).collect();

    let mut columns: Vec<Column> = Vec::with_capacity(countries.len() + persons.len() + 2);
    columns.push(Column {
        header: DATE_HEADER.to_string(),
        kind: ColumnKind::Date,
        cells: keys.iter().map(|k| Cell::date(*k)).collect(),
    });
    for country in countries {
        columns.push(Column {
            header: country.display.clone(),
            kind: ColumnKind::Country(country.code),
            cells: days
                .iter()
                .map(|d| {
                    Cell::marker(if d.is_holiday_in(&country.code) {
                        CellMarker::Taken
                    } else {
                        CellMarker::Free
                    })
                })
                .collect(),
        });
    }
    columns.push(Column {
        header: WEEKEND_HEADER.to_string(),
        kind: ColumnKind::Weekend,
        cells: days
            .iter()
            .map(|d| {
                Cell::marker(if d.is_weekend {
                    CellMarker::Weekend
                } else {
                    CellMarker::Free
                })
            })
            .collect(),
    });
    for person in persons {
        columns.push(Column {
            header: person.clone(),
            kind: ColumnKind::Person,
            cells: vec![Cell::marker(CellMarker::Free); keys.len()],
        });
    }

    debug!(
        "projected {} with {} rows: {}",
        month,
        keys.len(),
        columns.iter().map(|c| c.header.as_str()).join(", ")
    );
    MonthGrid {
        month: *month,
        days: keys,
        columns,
    }
}

/// Lazily project every month of `calendar`, in chronological order.
pub fn project_all<'a>(
    calendar: &'a YearCalendar,
    countries: &'a [Country],
    persons: &'a [String],
) -> impl Iterator<Item = MonthGrid> + 'a {
    calendar
        .months
        .iter()
        .map(move |(month, days)| project(month, days, countries, persons))
}
