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

//! Project a [`YearCalendar`](crate::calendar::YearCalendar) into one [`MonthGrid`] per month.
//!
//! A grid has a fixed column layout: `Date`, one column per configured country (headed by its
//! display label), `Weekend`, then one blank column per person. Each cell carries a
//! [`CellMarker`] and the [`StyleTag`] derived from it, which a
//! [`TabularWriter`](crate::writer::TabularWriter) renders as a background colour.

mod cell;
mod project;

pub use crate::grid::{
    cell::{Cell, CellMarker, CellValue, StyleTag},
    project::{project, project_all, Column, ColumnKind, MonthGrid, DATE_HEADER, WEEKEND_HEADER},
};
