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

//! Obtain the public holidays of each configured country.
//!
//! A [`HolidayProvider`] turns a `(year, country code)` pair into a [`HolidaySet`]. The
//! calendar assembly stage only ever sees those sets, never the source markup.
//!
//! - [`QppStudioProvider`] downloads and parses the public holiday pages of qppstudio.net.
//! - [`StaticProvider`] serves precomputed sets.
//! - [`CachedProvider`] wraps any provider so each country is fetched at most once per run.
//!
//! [`fetch_all`] queries a provider for every configured country. A failure for any one
//! country aborts the whole run unless the caller explicitly opts into
//! [`FailurePolicy::Empty`].

mod cache;
mod memory;
mod qpp;

use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::HashMap;

use crate::calendar::{Country, CountryCode, HolidaySet, Year};
use crate::error::Result;

pub use crate::provider::{
    cache::CachedProvider,
    memory::StaticProvider,
    qpp::{parse_holiday_page, ProviderOptions, QppStudioProvider, DEFAULT_BASE_URL},
};

/// A source of public holiday dates.
pub trait HolidayProvider: Send + Sync {
    /// Return the month-day markers observed as public holidays by `country` in `year`.
    ///
    /// The set may be empty. Any failure is reported as
    /// [`VacationError::ProviderFetchFailed`](crate::error::VacationError::ProviderFetchFailed).
    fn fetch(&self, year: Year, country: &CountryCode) -> Result<HolidaySet>;
}

/// What to do when a provider fails for one country.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole run.
    #[default]
    Abort,
    /// Continue with an empty holiday set for the failed country. The failure is logged.
    Empty,
}

/// Fetch the holiday set of every country.
///
/// With `parallel` the countries are fetched concurrently; the result does not depend on
/// completion order.
pub fn fetch_all(
    provider: &dyn HolidayProvider,
    year: Year,
    countries: &[Country],
    policy: FailurePolicy,
    parallel: bool,
) -> Result<HashMap<CountryCode, HolidaySet>> {
    let fetch_one = |country: &Country| -> Result<(CountryCode, HolidaySet)> {
        debug!("fetching holidays for '{}' ({})", country.code, year);
        match provider.fetch(year, &country.code) {
            Ok(set) => {
                info!("{}: {} holidays in {}", country.display, set.len(), year);
                Ok((country.code, set))
            }
            Err(e) => match policy {
                FailurePolicy::Abort => Err(e),
                FailurePolicy::Empty => {
                    warn!("{}; continuing with no holidays for '{}'", e, country.code);
                    Ok((country.code, HolidaySet::default()))
                }
            },
        }
    };

    let pairs: Vec<(CountryCode, HolidaySet)> = if parallel {
        countries.par_iter().map(fetch_one).collect::<Result<Vec<_>>>()?
    } else {
        countries.iter().map(fetch_one).collect::<Result<Vec<_>>>()?
    };
    Ok(pairs.into_iter().collect())
}
