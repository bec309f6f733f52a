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

//! Error types for the vacation planner.
//!
//! Every fallible operation returns [`VacationError`]. The calendar assembly and grid
//! projection stages are infallible; errors only arise at the configuration, provider and
//! writer boundaries.

use std::path::PathBuf;
use thiserror::Error;

use crate::calendar::CountryCode;

/// The top-level error type used throughout the vacation planner.
#[derive(Debug, Error)]
pub enum VacationError {
    /// The configuration file could not be read from disk.
    #[error("cannot read configuration '{}': {source}", path.display())]
    ConfigUnreadable {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration key is missing or has the wrong shape.
    #[error("invalid configuration key `{key}`: {reason}")]
    ConfigInvalid {
        /// The offending key, e.g. `year` or `countries[2].code`.
        key: String,
        /// Human readable explanation.
        reason: String,
    },

    /// Holiday data for one country could not be obtained.
    #[error("failed to fetch holidays for country '{country}': {cause}")]
    ProviderFetchFailed {
        /// Code of the country whose fetch failed.
        country: CountryCode,
        /// Human readable cause.
        cause: String,
    },

    /// The HTTP client of a provider could not be initialised.
    #[error("cannot initialise HTTP client: {0}")]
    HttpClient(String),

    /// The output destination could not be created or written.
    #[error("failed to write '{}': {cause}", destination.display())]
    WriteFailed {
        /// The destination that failed.
        destination: PathBuf,
        /// Human readable cause.
        cause: String,
    },
}

impl VacationError {
    pub(crate) fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        VacationError::ConfigInvalid {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn fetch(country: &CountryCode, cause: impl ToString) -> Self {
        VacationError::ProviderFetchFailed {
            country: *country,
            cause: cause.to_string(),
        }
    }

    pub(crate) fn write(destination: impl Into<PathBuf>, cause: impl ToString) -> Self {
        VacationError::WriteFailed {
            destination: destination.into(),
            cause: cause.to_string(),
        }
    }
}

/// Shorthand `Result` type used throughout the vacation planner.
pub type Result<T, E = VacationError> = std::result::Result<T, E>;
