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
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthDay;

/// The public holidays of one country in the configured year, as year-independent markers.
///
/// Only membership is meaningful. Inserting a marker twice has no effect.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    pub(crate) markers: IndexSet<MonthDay>,
}

impl HolidaySet {
    /// Create a holiday set from a vector of markers.
    pub fn new(markers: Vec<MonthDay>) -> Self {
        HolidaySet {
            markers: IndexSet::from_iter(markers),
        }
    }

    /// Returns *true* if the marker is a holiday.
    pub fn contains(&self, marker: &MonthDay) -> bool {
        self.markers.contains(marker)
    }

    /// Returns *true* if the month-day of `date` is a holiday, whatever the year of `date`.
    pub fn contains_date(&self, date: &NaiveDate) -> bool {
        self.contains(&MonthDay::of(date))
    }

    /// Add a marker, returning *false* if it was already present.
    pub fn insert(&mut self, marker: MonthDay) -> bool {
        self.markers.insert(marker)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthDay> {
        self.markers.iter()
    }
}

impl PartialEq<[&str]> for HolidaySet {
    fn eq(&self, other: &[&str]) -> bool {
        let parsed: Option<IndexSet<MonthDay>> = other.iter().map(|s| s.parse().ok()).collect();
        match parsed {
            Some(set) => set.len() == self.len() && set.iter().all(|m| self.contains(m)),
            None => false,
        }
    }
}
