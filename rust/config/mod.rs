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

//! Load and validate the run configuration.
//!
//! The configuration is a YAML (or JSON) document with four required keys:
//!
//! ```yaml
//! countries:
//!   - code: usa
//!     display: United States
//! persons: [Alice, Bob]
//! year: 2024
//! output: vacation-2024.xlsx
//! ```
//!
//! Every key is checked for presence and shape before anything else happens, and the first
//! offending key is reported in [`VacationError::ConfigInvalid`].

use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::{Country, CountryCode, Year};
use crate::error::{Result, VacationError};
use crate::json::JSON;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// The validated configuration of a run.
///
/// Deserialising a `Config`, from any serde format, applies the same checks as
/// [`Config::parse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Config {
    /// Countries in column order, unique by code.
    pub countries: Vec<Country>,
    /// Persons in column order.
    pub persons: Vec<String>,
    pub year: Year,
    pub output: PathBuf,
}

impl JSON for Config {}

#[derive(Copy, Clone, Debug)]
enum Shape {
    List,
    Integer,
    Text,
}

impl Shape {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::List => value.is_sequence(),
            Shape::Integer => value.as_i64().is_some(),
            Shape::Text => value.is_string(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::List => "a list",
            Shape::Integer => "an integer",
            Shape::Text => "a string",
        }
    }
}

const EXPECTED: [(&str, Shape); 4] = [
    ("countries", Shape::List),
    ("persons", Shape::List),
    ("year", Shape::Integer),
    ("output", Shape::Text),
];

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() => "an integer",
        Value::Number(n) if n.is_u64() => "an out-of-range integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn text_field(entry: &Mapping, field: &str, key: &str) -> Result<String> {
    match entry.get(field) {
        None => Err(VacationError::config(key, format!("missing `{}`", field))),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(VacationError::config(key, format!("`{}` is empty", field))),
        Some(v) => Err(VacationError::config(
            key,
            format!("`{}` must be a string, found {}", field, describe(v)),
        )),
    }
}

fn parse_countries(values: &[Value]) -> Result<Vec<Country>> {
    let mut seen: IndexSet<CountryCode> = IndexSet::new();
    let mut countries = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let key = format!("countries[{}]", i);
        let entry = value.as_mapping().ok_or_else(|| {
            VacationError::config(&key, format!("expected a mapping, found {}", describe(value)))
        })?;
        let country = Country::new(
            &text_field(entry, "code", &key)?,
            &text_field(entry, "display", &key)?,
        );
        if !seen.insert(country.code) {
            return Err(VacationError::config(
                &key,
                format!("duplicate country code '{}'", country.code),
            ));
        }
        countries.push(country);
    }
    Ok(countries)
}

fn parse_persons(values: &[Value]) -> Result<Vec<String>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(VacationError::config(
                format!("persons[{}]", i),
                format!("expected a string, found {}", describe(other)),
            )),
        })
        .collect()
}

impl Config {
    /// Parse and validate a configuration document.
    pub fn parse(text: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(text)
            .map_err(|e| VacationError::config("<document>", e.to_string()))?;
        Config::try_from(document)
    }

    /// Read, parse and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading configuration from '{}'", path.display());
        let text = fs::read_to_string(path).map_err(|source| VacationError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&text)
    }
}

impl TryFrom<Value> for Config {
    type Error = VacationError;

    fn try_from(document: Value) -> Result<Self> {
        let root = document.as_mapping().ok_or_else(|| {
            VacationError::config(
                "<document>",
                format!("expected a mapping at the top level, found {}", describe(&document)),
            )
        })?;

        for (key, shape) in EXPECTED.iter() {
            match root.get(*key) {
                None => return Err(VacationError::config(*key, "missing")),
                Some(v) if !shape.matches(v) => {
                    return Err(VacationError::config(
                        *key,
                        format!("expected {}, found {}", shape.name(), describe(v)),
                    ))
                }
                Some(_) => {}
            }
        }

        // Shapes are checked above, the fallbacks are unreachable.
        let empty: Vec<Value> = Vec::new();
        let countries = parse_countries(document["countries"].as_sequence().unwrap_or(&empty))?;
        let persons = parse_persons(document["persons"].as_sequence().unwrap_or(&empty))?;
        let year = Year::try_new(document["year"].as_i64().unwrap_or_default())?;
        let output = PathBuf::from(document["output"].as_str().unwrap_or_default());
        if output.as_os_str().is_empty() {
            return Err(VacationError::config("output", "is empty"));
        }

        Ok(Config {
            countries,
            persons,
            year,
            output,
        })
    }
}
