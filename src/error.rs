//! Error types for the Vacation Alert Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing a workbook and
//! analyzing vacation entitlements.

use thiserror::Error;

/// The main error type for the Vacation Alert Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use vacation_alert_engine::error::AlertError;
///
/// let error = AlertError::SheetNotFound {
///     name: "clients".to_string(),
/// };
/// assert_eq!(error.to_string(), "Worksheet not found: clients");
/// ```
#[derive(Debug, Error)]
pub enum AlertError {
    /// The uploaded workbook could not be split into sheets.
    #[error("Failed to parse workbook: {message}")]
    WorkbookParse {
        /// A description of the parse error.
        message: String,
    },

    /// A required worksheet was absent from the workbook.
    #[error("Worksheet not found: {name}")]
    SheetNotFound {
        /// The name of the missing worksheet.
        name: String,
    },

    /// A required column was absent from a worksheet header.
    #[error("Missing column '{column}' in sheet '{sheet}'")]
    MissingColumn {
        /// The worksheet the column was expected in.
        sheet: String,
        /// The name of the missing column.
        column: String,
    },

    /// A cell that must hold an integer could not be parsed as one.
    #[error("Invalid number in sheet '{sheet}', column '{column}': '{value}'")]
    InvalidNumber {
        /// The worksheet containing the cell.
        sheet: String,
        /// The column containing the cell.
        column: String,
        /// The offending cell value.
        value: String,
    },

    /// A cell that must hold a calendar date could not be parsed as one.
    #[error("Invalid date in sheet '{sheet}', column '{column}': '{value}'")]
    InvalidDate {
        /// The worksheet containing the cell.
        sheet: String,
        /// The column containing the cell.
        column: String,
        /// The offending cell value.
        value: String,
    },

    /// The requested alert window size was outside the accepted range.
    #[error("Alert window must be between 0 and {max} days, got {days}")]
    InvalidWindow {
        /// The rejected window size in days.
        days: i64,
        /// The largest accepted window size in days.
        max: i64,
    },
}

/// A type alias for Results that return AlertError.
pub type AlertResult<T> = Result<T, AlertError>;
