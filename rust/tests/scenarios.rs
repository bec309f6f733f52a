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
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::calendar::{assemble, ymd, Country, CountryCode, HolidaySet, MonthKey, Year};
use crate::config::Config;
use crate::error::{Result, VacationError};
use crate::grid::{project, project_all, CellMarker, MonthGrid};
use crate::json::JSON;
use crate::planner::{run, RunOptions};
use crate::provider::{FailurePolicy, HolidayProvider, StaticProvider};
use crate::writer::{JsonWriter, TabularWriter};

struct CountingProvider {
    inner: StaticProvider,
    calls: AtomicUsize,
}

impl HolidayProvider for CountingProvider {
    fn fetch(&self, year: Year, country: &CountryCode) -> Result<HolidaySet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(year, country)
    }
}

fn us_only() -> (Vec<Country>, HashMap<CountryCode, HolidaySet>, Vec<String>) {
    let countries = vec![Country::new("us", "United States")];
    let holidays = HashMap::from([(
        CountryCode::new("us"),
        HolidaySet::new(vec!["01-01".parse().unwrap(), "07-04".parse().unwrap()]),
    )]);
    (countries, holidays, vec!["Alice".to_string()])
}

fn marker(grid: &MonthGrid, header: &str, day: &str) -> Option<CellMarker> {
    let i = grid.days.iter().position(|d| d.to_string() == day)?;
    grid.column(header)?.cells[i].as_marker()
}

#[test]
fn leap_year_us_scenario() {
    let (countries, holidays, persons) = us_only();
    let calendar = assemble(Year::try_new(2024).unwrap(), &countries, &holidays);
    let grids: Vec<MonthGrid> = project_all(&calendar, &countries, &persons).collect();
    assert_eq!(grids.len(), 12);

    let feb = &grids[1];
    assert_eq!(feb.sheet_name(), "2024-02");
    assert_eq!(feb.num_rows(), 29);

    let jan = &grids[0];
    assert_eq!(marker(jan, "United States", "01-01"), Some(CellMarker::Taken));
    // 2024-01-06 is a Saturday
    assert_eq!(marker(jan, "Weekend", "01-06"), Some(CellMarker::Weekend));
    assert_eq!(marker(jan, "United States", "01-06"), Some(CellMarker::Free));

    let jul = &grids[6];
    assert_eq!(marker(jul, "United States", "07-04"), Some(CellMarker::Taken));

    for grid in grids.iter() {
        let alice = grid.column("Alice").unwrap();
        assert_eq!(alice.cells.len(), grid.num_rows());
        assert!(alice.cells.iter().all(|c| c.text().is_empty() && c.style.is_none()));
    }
}

#[test]
fn empty_holiday_set_scenario() {
    let countries = vec![Country::new("aq", "Antarctica")];
    let holidays = HashMap::from([(CountryCode::new("aq"), HolidaySet::default())]);
    let calendar = assemble(Year::try_new(2025).unwrap(), &countries, &holidays);
    for grid in project_all(&calendar, &countries, &[]) {
        let col = grid.column("Antarctica").unwrap();
        assert!(col.cells.iter().all(|c| c.as_marker() == Some(CellMarker::Free)));
    }
}

#[test]
fn stale_year_marker_still_matches() {
    // A provider returning last year's dates matches by month-day: a known risk.
    let countries = vec![Country::new("us", "United States")];
    let stale = crate::provider::parse_holiday_page(
        r#"<time datetime="2023-11-23">"#,
        Year::try_new(2024).unwrap(),
        &CountryCode::new("us"),
    )
    .unwrap();
    let holidays = HashMap::from([(CountryCode::new("us"), stale)]);
    let calendar = assemble(Year::try_new(2024).unwrap(), &countries, &holidays);
    assert!(calendar
        .get(&ymd(2024, 11, 23))
        .unwrap()
        .is_holiday_in(&CountryCode::new("us")));
}

#[test]
fn assemble_then_project_is_byte_identical() {
    let (countries, holidays, persons) = us_only();
    let render = || -> Vec<String> {
        let calendar = assemble(Year::try_new(2024).unwrap(), &countries, &holidays);
        project_all(&calendar, &countries, &persons)
            .map(|g| g.to_json().unwrap())
            .collect()
    };
    assert_eq!(render(), render());
}

#[test]
fn project_single_month() {
    let (countries, holidays, persons) = us_only();
    let calendar = assemble(Year::try_new(2023).unwrap(), &countries, &holidays);
    let feb: MonthKey = "2023-02".parse().unwrap();
    let grid = project(&feb, &calendar.months[&feb], &countries, &persons);
    assert_eq!(grid.num_rows(), 28);
    assert_eq!(grid.headers(), vec!["Date", "United States", "Weekend", "Alice"]);
}

#[test]
fn invalid_year_aborts_before_any_fetch() {
    let text = r#"
countries:
  - code: us
    display: United States
persons: [Alice]
year: "2024"
output: out.json
"#;
    let provider = CountingProvider {
        inner: StaticProvider::new().with("us", HolidaySet::default()),
        calls: AtomicUsize::new(0),
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    std::fs::write(&path, text).unwrap();

    let result = Config::load(&path).and_then(|config| {
        run(&config, &provider, &JsonWriter::new(), &RunOptions::default())
    });
    match result {
        Err(VacationError::ConfigInvalid { key, .. }) => assert_eq!(key, "year"),
        _ => panic!("expected ConfigInvalid"),
    }
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

fn fixture_config(output: &Path) -> Config {
    Config {
        countries: vec![Country::new("us", "United States"), Country::new("ca", "Canada")],
        persons: vec!["Alice".to_string(), "Bob".to_string()],
        year: Year::try_new(2024).unwrap(),
        output: output.to_path_buf(),
    }
}

#[test]
fn run_end_to_end_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(&dir.path().join("plan.json"));
    let provider = StaticProvider::new()
        .with("us", HolidaySet::new(vec!["07-04".parse().unwrap()]))
        .with("ca", HolidaySet::new(vec!["07-01".parse().unwrap()]));

    let summary = run(&config, &provider, &JsonWriter::new(), &RunOptions::default()).unwrap();
    assert_eq!(summary.days, 366);
    assert_eq!(summary.sheets, 12);

    let text = std::fs::read_to_string(&config.output).unwrap();
    let document: indexmap::IndexMap<String, MonthGrid> = serde_json::from_str(&text).unwrap();
    let jul = &document["2024-07"];
    assert_eq!(marker(jul, "Canada", "07-01"), Some(CellMarker::Taken));
    assert_eq!(marker(jul, "United States", "07-01"), Some(CellMarker::Free));
    assert_eq!(marker(jul, "United States", "07-04"), Some(CellMarker::Taken));
}

#[test]
fn run_aborts_when_a_country_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(&dir.path().join("plan.json"));
    let provider = StaticProvider::new().with("us", HolidaySet::default());

    let result = run(&config, &provider, &JsonWriter::new(), &RunOptions::default());
    match result {
        Err(VacationError::ProviderFetchFailed { country, .. }) => assert_eq!(country.as_str(), "ca"),
        _ => panic!("expected ProviderFetchFailed"),
    }
    // no partial document
    assert!(!config.output.exists());
}

#[test]
fn run_degrades_to_empty_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(&dir.path().join("plan.json"));
    let provider = StaticProvider::new().with("us", HolidaySet::default());
    let options = RunOptions {
        policy: FailurePolicy::Empty,
        parallel: true,
    };
    let summary = run(&config, &provider, &JsonWriter::new(), &options).unwrap();
    assert_eq!(summary.sheets, 12);
}

#[test]
fn run_reports_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(&dir.path().join("nope").join("plan.json"));
    let provider = StaticProvider::new()
        .with("us", HolidaySet::default())
        .with("ca", HolidaySet::default());
    let writer: &dyn TabularWriter = &JsonWriter::new();
    let result = run(&config, &provider, writer, &RunOptions::default());
    assert!(matches!(result, Err(VacationError::WriteFailed { .. })));
}
