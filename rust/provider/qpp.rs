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

use log::{debug, warn};
use regex::Regex;
use reqwest::blocking::Client;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use crate::calendar::{CountryCode, HolidaySet, MonthDay, Year};
use crate::error::{Result, VacationError};
use crate::provider::HolidayProvider;

/// Base URL of the public holiday listings.
pub const DEFAULT_BASE_URL: &str = "https://www.qppstudio.net";

// Dates are embedded in the listing as `<time datetime="YYYY-MM-DD">` tags.
static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<time datetime="(\d{4})-(\d{2})-(\d{2})">"#).unwrap()
});

/// Network settings of a [`QppStudioProvider`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderOptions {
    pub base_url: String,
    /// Timeout of a single request.
    pub timeout: Duration,
    /// Additional attempts after a failed request.
    pub retries: u32,
    /// Delay before the first retry, multiplied by the attempt number for later retries.
    pub backoff: Duration,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        ProviderOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            retries: 0,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Downloads the yearly public holiday page of a country from qppstudio.net.
#[derive(Clone, Debug)]
pub struct QppStudioProvider {
    client: Client,
    options: ProviderOptions,
}

impl QppStudioProvider {
    pub fn new(options: ProviderOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| VacationError::HttpClient(e.to_string()))?;
        Ok(QppStudioProvider { client, options })
    }

    /// URL of the listing for `country` in `year`.
    pub fn url(&self, year: Year, country: &CountryCode) -> String {
        format!(
            "{}/publicholidays{}/{}.htm",
            self.options.base_url.trim_end_matches('/'),
            year,
            country
        )
    }

    fn download(&self, url: &str) -> reqwest::Result<String> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl HolidayProvider for QppStudioProvider {
    fn fetch(&self, year: Year, country: &CountryCode) -> Result<HolidaySet> {
        let url = self.url(year, country);
        let mut attempt: u32 = 0;
        let page = loop {
            debug!("GET {} (attempt {})", url, attempt + 1);
            match self.download(&url) {
                Ok(text) => break text,
                Err(e) if attempt < self.options.retries => {
                    attempt += 1;
                    warn!("request for '{}' failed: {}; retrying", country, e);
                    thread::sleep(self.options.backoff * attempt);
                }
                Err(e) => return Err(VacationError::fetch(country, e)),
            }
        };
        parse_holiday_page(&page, year, country)
    }
}

/// Extract the holiday markers from a listing page.
///
/// Only the month-day of each date token is kept. Tokens dated in another year are kept as
/// well but reported with a warning, since their month-day may not be a holiday in `year`.
/// A page without any date token is an error: the layout of the source has most likely
/// changed.
pub fn parse_holiday_page(page: &str, year: Year, country: &CountryCode) -> Result<HolidaySet> {
    let mut set = HolidaySet::default();
    let mut tokens: usize = 0;
    let mut other_year: usize = 0;
    for caps in DATE_TOKEN.captures_iter(page) {
        tokens += 1;
        let invalid = || VacationError::fetch(country, format!("invalid date token '{}'", &caps[0]));
        let token_year: i32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let day: u32 = caps[3].parse().map_err(|_| invalid())?;
        let marker = MonthDay::try_new(month, day).ok_or_else(invalid)?;
        if token_year != year.value() {
            other_year += 1;
        }
        set.insert(marker);
    }
    if tokens == 0 {
        return Err(VacationError::fetch(
            country,
            "no holiday dates found in page, the source format may have changed",
        ));
    }
    if other_year > 0 {
        warn!(
            "{} of {} holiday dates for '{}' are not in {}; matching by month-day only",
            other_year, tokens, country, year
        );
    }
    Ok(set)
}
