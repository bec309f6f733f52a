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

use log::debug;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::error::{Result, VacationError};
use crate::grid::{MonthGrid, StyleTag};
use crate::writer::{ExportOptions, HeaderStyle, TabularWriter};

/// Writes grids to an Excel workbook, one worksheet per month.
#[derive(Clone, Debug, Default)]
pub struct XlsxWriter {
    options: ExportOptions,
}

struct Formats {
    header: Option<Format>,
    taken: Format,
    weekend: Format,
}

impl XlsxWriter {
    pub fn new(options: ExportOptions) -> Self {
        XlsxWriter { options }
    }

    fn formats(&self) -> Formats {
        Formats {
            header: match self.options.header_style {
                HeaderStyle::Plain => None,
                HeaderStyle::Bold => Some(Format::new().set_bold()),
            },
            taken: Format::new().set_background_color(self.options.color(StyleTag::Holiday)),
            weekend: Format::new().set_background_color(self.options.color(StyleTag::Weekend)),
        }
    }

    fn write_sheet(
        &self,
        sheet: &mut Worksheet,
        grid: &MonthGrid,
        formats: &Formats,
    ) -> Result<(), XlsxError> {
        sheet.set_name(grid.sheet_name())?;
        for (i, column) in grid.columns.iter().enumerate() {
            let col = u16::try_from(i).map_err(|_| XlsxError::RowColumnLimitError)?;
            sheet.set_column_width(col, self.options.column_width)?;
            match &formats.header {
                Some(f) => sheet.write_string_with_format(0, col, &column.header, f)?,
                None => sheet.write_string(0, col, &column.header)?,
            };
            for (j, cell) in column.cells.iter().enumerate() {
                let row = u32::try_from(j + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
                let text = cell.text();
                match cell.style {
                    Some(StyleTag::Holiday) => {
                        sheet.write_string_with_format(row, col, text, &formats.taken)?;
                    }
                    Some(StyleTag::Weekend) => {
                        sheet.write_string_with_format(row, col, text, &formats.weekend)?;
                    }
                    None if text.is_empty() => {}
                    None => {
                        sheet.write_string(row, col, text)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl TabularWriter for XlsxWriter {
    fn write(&self, destination: &Path, sheets: &mut dyn Iterator<Item = MonthGrid>) -> Result<usize> {
        let formats = self.formats();
        let mut workbook = Workbook::new();
        let mut count: usize = 0;
        for grid in sheets {
            debug!("writing sheet {} ({} rows)", grid.sheet_name(), grid.num_rows());
            let sheet = workbook.add_worksheet();
            self.write_sheet(sheet, &grid, &formats)
                .map_err(|e| VacationError::write(destination, format!("sheet {}: {}", grid.sheet_name(), e)))?;
            count += 1;
        }
        workbook
            .save(destination)
            .map_err(|e| VacationError::write(destination, e))?;
        Ok(count)
    }
}
