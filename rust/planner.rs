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

//! Run the whole pipeline: configuration, holiday fetching, calendar assembly, grid
//! projection and export.

use log::info;
use std::path::PathBuf;

use crate::calendar::assemble;
use crate::config::Config;
use crate::error::Result;
use crate::grid::project_all;
use crate::provider::{fetch_all, FailurePolicy, HolidayProvider};
use crate::writer::TabularWriter;

/// Caller decisions for a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    pub policy: FailurePolicy,
    /// Fetch countries concurrently.
    pub parallel: bool,
}

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub destination: PathBuf,
    pub days: usize,
    pub sheets: usize,
}

/// Build the planning document described by `config`.
///
/// Holiday data for every country is complete before the calendar is assembled. Grids are
/// projected one month at a time as the writer consumes them.
pub fn run(
    config: &Config,
    provider: &dyn HolidayProvider,
    writer: &dyn TabularWriter,
    options: &RunOptions,
) -> Result<RunSummary> {
    info!(
        "planning {} for {} countries and {} persons",
        config.year,
        config.countries.len(),
        config.persons.len()
    );
    let holidays = fetch_all(
        provider,
        config.year,
        &config.countries,
        options.policy,
        options.parallel,
    )?;

    let calendar = assemble(config.year, &config.countries, &holidays);
    info!("assembled {} days", calendar.len());

    let mut grids = project_all(&calendar, &config.countries, &config.persons);
    let sheets = writer.write(&config.output, &mut grids)?;
    info!("wrote {} sheets to '{}'", sheets, config.output.display());

    Ok(RunSummary {
        destination: config.output.clone(),
        days: calendar.len(),
        sheets,
    })
}
