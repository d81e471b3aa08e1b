//! Workbook ingestion for the Vacation Alert Engine.
//!
//! The upload is a sectioned CSV workbook: a UTF-8 text file in which each
//! sheet starts with a `[sheet_name]` marker line followed by a CSV header
//! row and data rows. This module splits the workbook into sheets and parses
//! the two required sheets into typed records, converting the dynamic
//! column lookups of the source data into checked field access. All parse
//! failures abort the whole call; there is no row-level skip-and-continue.

mod tables;
mod workbook;

pub use tables::{CLIENTS_SHEET, VACATIONS_SHEET, parse_clients, parse_vacations};
pub use workbook::{Sheet, Workbook, parse_workbook};
