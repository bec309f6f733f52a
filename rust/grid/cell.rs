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

use serde::{Deserialize, Serialize};

use crate::calendar::MonthDay;

/// The semantic state of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellMarker {
    /// The country observes a public holiday.
    Taken,
    /// The date is a Saturday or Sunday.
    Weekend,
    /// Nothing to mark.
    Free,
}

impl CellMarker {
    /// Short text written into the cell.
    pub fn text(&self) -> &'static str {
        match self {
            CellMarker::Taken => "H",
            CellMarker::Weekend => "W",
            CellMarker::Free => "",
        }
    }

    /// The style applied to a cell in this state. Free cells are unstyled.
    pub fn style(&self) -> Option<StyleTag> {
        match self {
            CellMarker::Taken => Some(StyleTag::Holiday),
            CellMarker::Weekend => Some(StyleTag::Weekend),
            CellMarker::Free => None,
        }
    }
}

/// Visual style of a cell, resolved to a background colour by the writer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    Holiday,
    Weekend,
}

/// Content of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    /// Literal day key of the `Date` column.
    Date(MonthDay),
    Marker(CellMarker),
}

/// A grid cell: its content and the style tag attached to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub style: Option<StyleTag>,
}

impl Cell {
    /// A `Date` column cell, never styled.
    pub fn date(day: MonthDay) -> Self {
        Cell {
            value: CellValue::Date(day),
            style: None,
        }
    }

    /// A marker cell styled according to [`CellMarker::style`].
    pub fn marker(marker: CellMarker) -> Self {
        Cell {
            value: CellValue::Marker(marker),
            style: marker.style(),
        }
    }

    /// Text written into the cell.
    pub fn text(&self) -> String {
        match &self.value {
            CellValue::Date(d) => d.to_string(),
            CellValue::Marker(m) => m.text().to_string(),
        }
    }

    /// The marker of the cell, `None` for a date cell.
    pub fn as_marker(&self) -> Option<CellMarker> {
        match self.value {
            CellValue::Marker(m) => Some(m),
            CellValue::Date(_) => None,
        }
    }
}
