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

//! Render month grids to an output document.
//!
//! A [`TabularWriter`] receives the grids in chronological order and writes one sheet per
//! grid, named after its month key. Rendering choices, such as the column width, the header
//! style and the background colour of each [`StyleTag`](crate::grid::StyleTag), are passed
//! explicitly through [`ExportOptions`].

mod json;
mod xlsx;

use std::path::Path;

use crate::error::Result;
use crate::grid::{MonthGrid, StyleTag};

pub use crate::writer::{json::JsonWriter, xlsx::XlsxWriter};

/// A sink for month grids.
pub trait TabularWriter {
    /// Write every grid of `sheets`, in order, to `destination`.
    ///
    /// Returns the number of sheets written. Any failure to create or write the destination
    /// is reported as [`VacationError::WriteFailed`](crate::error::VacationError::WriteFailed).
    fn write(&self, destination: &Path, sheets: &mut dyn Iterator<Item = MonthGrid>) -> Result<usize>;
}

/// Style of the header row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Header cells are written without any formatting.
    #[default]
    Plain,
    Bold,
}

/// Rendering settings shared by all sheets of a document.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    /// Width applied to every column.
    pub column_width: f64,
    pub header_style: HeaderStyle,
    /// Background colour of holiday cells, as `0xRRGGBB`.
    pub taken_color: u32,
    /// Background colour of weekend cells, as `0xRRGGBB`.
    pub weekend_color: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            column_width: 15.0,
            header_style: HeaderStyle::Plain,
            taken_color: 0xA6A6A6,
            weekend_color: 0xD9D9D9,
        }
    }
}

impl ExportOptions {
    /// Background colour for a style tag.
    pub fn color(&self, tag: StyleTag) -> u32 {
        match tag {
            StyleTag::Holiday => self.taken_color,
            StyleTag::Weekend => self.weekend_color,
        }
    }
}

/// Choose a writer from the extension of `destination`: `.json` documents are written by a
/// [`JsonWriter`], anything else by an [`XlsxWriter`].
pub fn writer_for(destination: &Path, options: ExportOptions) -> Box<dyn TabularWriter> {
    let is_json = destination
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(XlsxWriter::new(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_distinct() {
        let options = ExportOptions::default();
        assert_ne!(options.color(StyleTag::Holiday), options.color(StyleTag::Weekend));
    }
}
