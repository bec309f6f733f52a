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

use std::collections::HashMap;

use crate::calendar::{CountryCode, HolidaySet, Year};
use crate::error::{Result, VacationError};
use crate::provider::HolidayProvider;

/// A provider serving precomputed holiday sets, independent of the year requested.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    sets: HashMap<CountryCode, HolidaySet>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the set served for `code`.
    pub fn with(mut self, code: &str, set: HolidaySet) -> Self {
        self.sets.insert(CountryCode::new(code), set);
        self
    }
}

impl HolidayProvider for StaticProvider {
    fn fetch(&self, _year: Year, country: &CountryCode) -> Result<HolidaySet> {
        self.sets
            .get(country)
            .cloned()
            .ok_or_else(|| VacationError::fetch(country, "no holiday data available"))
    }
}
