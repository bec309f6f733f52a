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

use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, VacationError};
use crate::grid::MonthGrid;
use crate::writer::TabularWriter;

/// Writes grids as a JSON object mapping each sheet name to its [`MonthGrid`], in the order
/// supplied.
#[derive(Clone, Debug, Default)]
pub struct JsonWriter {}

impl JsonWriter {
    pub fn new() -> Self {
        Self {}
    }
}

impl TabularWriter for JsonWriter {
    fn write(&self, destination: &Path, sheets: &mut dyn Iterator<Item = MonthGrid>) -> Result<usize> {
        let document: IndexMap<String, MonthGrid> = sheets.map(|g| (g.sheet_name(), g)).collect();
        let file = File::create(destination).map_err(|e| VacationError::write(destination, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, &document)
            .map_err(|e| VacationError::write(destination, e))?;
        out.flush().map_err(|e| VacationError::write(destination, e))?;
        Ok(document.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{assemble, Country, Year};
    use crate::grid::project_all;
    use std::collections::HashMap;

    #[test]
    fn test_sheets_in_supplied_order() {
        let countries = vec![Country::new("us", "United States")];
        let calendar = assemble(Year::try_new(2023).unwrap(), &countries, &HashMap::new());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacation.json");
        let n = JsonWriter::new()
            .write(&path, &mut project_all(&calendar, &countries, &[]))
            .unwrap();
        assert_eq!(n, 12);

        let text = std::fs::read_to_string(&path).unwrap();
        let document: IndexMap<String, MonthGrid> = serde_json::from_str(&text).unwrap();
        let names: Vec<&str> = document.keys().map(|k| k.as_str()).collect();
        assert_eq!(names[0], "2023-01");
        assert_eq!(names[11], "2023-12");
        assert_eq!(document["2023-02"].num_rows(), 28);
    }
}
