//! Typed extraction of the clients and vacations tables.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AlertError, AlertResult};
use crate::models::{ClientRecord, VacationRecord};

use super::workbook::Sheet;

/// The required name of the clients sheet.
pub const CLIENTS_SHEET: &str = "clients";

/// The required name of the vacations sheet.
pub const VACATIONS_SHEET: &str = "vacations";

/// Parses the clients sheet into typed records.
///
/// Requires the columns `client_id` and `name`. A missing column or an
/// unparseable id fails the whole call.
pub fn parse_clients(sheet: &Sheet) -> AlertResult<Vec<ClientRecord>> {
    let id_idx = sheet.column_index("client_id")?;
    let name_idx = sheet.column_index("name")?;

    sheet
        .rows()
        .iter()
        .map(|row| {
            Ok(ClientRecord {
                client_id: parse_integer(sheet, "client_id", sheet.cell(row, id_idx))?,
                name: sheet.cell(row, name_idx).to_string(),
            })
        })
        .collect()
}

/// Parses the vacations sheet into typed records.
///
/// Requires the columns `client_id`, `entitlement_days`, `days_taken` and
/// `due_by_date`. Day counts are parsed but not range-checked; negative
/// values pass through. Any unparseable cell fails the whole call.
pub fn parse_vacations(sheet: &Sheet) -> AlertResult<Vec<VacationRecord>> {
    let id_idx = sheet.column_index("client_id")?;
    let entitlement_idx = sheet.column_index("entitlement_days")?;
    let taken_idx = sheet.column_index("days_taken")?;
    let due_idx = sheet.column_index("due_by_date")?;

    sheet
        .rows()
        .iter()
        .map(|row| {
            Ok(VacationRecord {
                client_id: parse_integer(sheet, "client_id", sheet.cell(row, id_idx))?,
                entitlement_days: parse_integer(
                    sheet,
                    "entitlement_days",
                    sheet.cell(row, entitlement_idx),
                )?,
                days_taken: parse_integer(sheet, "days_taken", sheet.cell(row, taken_idx))?,
                due_by_date: parse_date(sheet, "due_by_date", sheet.cell(row, due_idx))?,
            })
        })
        .collect()
}

fn parse_integer(sheet: &Sheet, column: &str, value: &str) -> AlertResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AlertError::InvalidNumber {
            sheet: sheet.name().to_string(),
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Parses a due date cell.
///
/// Accepts an ISO calendar date (`YYYY-MM-DD`) or an ISO datetime, in which
/// case the time part is discarded; the source data carried both shapes.
fn parse_date(sheet: &Sheet, column: &str, value: &str) -> AlertResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.date());
    }

    Err(AlertError::InvalidDate {
        sheet: sheet.name().to_string(),
        column: column.to_string(),
        value: value.to_string(),
    })
}
