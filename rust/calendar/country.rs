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

use internment::Intern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A country identified by the short code used to query a holiday provider.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode {
    pub(crate) name: Intern<String>,
}

impl CountryCode {
    /// Constructs a new `CountryCode`.
    ///
    /// The code is kept verbatim, e.g. *"usa"* or *"france"*, since providers are queried with
    /// it directly. Surrounding whitespace is trimmed.
    pub fn new(name: &str) -> Self {
        CountryCode {
            name: Intern::new(name.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured country: the provider code and the label used as a column header.
///
/// Identity is the `code`; two countries with the same code are the same country.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub display: String,
}

impl Country {
    pub fn new(code: &str, display: &str) -> Self {
        Country {
            code: CountryCode::new(code),
            display: display.to_string(),
        }
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}
