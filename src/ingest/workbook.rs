//! Workbook splitting and sheet access.

use crate::error::{AlertError, AlertResult};

/// One worksheet: a header row plus data rows, all cells as trimmed strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Returns the sheet name as written in its `[marker]` line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Resolves a required column name to its index.
    ///
    /// Fails with [`AlertError::MissingColumn`] when the header row does not
    /// contain the column.
    pub fn column_index(&self, column: &str) -> AlertResult<usize> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| AlertError::MissingColumn {
                sheet: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Returns the cell at `(row, column_index)`, or an empty string when
    /// the row is shorter than the header.
    pub fn cell<'a>(&'a self, row: &'a [String], column_index: usize) -> &'a str {
        row.get(column_index).map(String::as_str).unwrap_or("")
    }
}

/// A parsed workbook: an ordered collection of named sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Looks up a sheet by name.
    ///
    /// Fails with [`AlertError::SheetNotFound`] when the workbook has no
    /// sheet with that name.
    pub fn sheet(&self, name: &str) -> AlertResult<&Sheet> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .ok_or_else(|| AlertError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the names of all sheets in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }
}

/// Splits a sectioned CSV workbook into its sheets.
///
/// A sheet starts at a line of the form `[name]` and runs until the next
/// marker or the end of input. The section body is parsed as CSV with
/// whitespace trimmed around every cell. Blank lines outside sections are
/// ignored; any other content before the first marker, a duplicate sheet
/// name, or malformed CSV (for example a ragged row) fails the whole call.
pub fn parse_workbook(input: &str) -> AlertResult<Workbook> {
    let mut sheets: Vec<Sheet> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in input.lines() {
        if let Some(name) = sheet_marker(line) {
            if let Some((done_name, body)) = current.take() {
                sheets.push(parse_sheet(done_name, &body)?);
            }
            if sheets.iter().any(|sheet| sheet.name == name) {
                return Err(AlertError::WorkbookParse {
                    message: format!("duplicate sheet '{}'", name),
                });
            }
            current = Some((name.to_string(), String::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push_str(line);
            body.push('\n');
        } else if !line.trim().is_empty() {
            return Err(AlertError::WorkbookParse {
                message: "unexpected content before first sheet marker".to_string(),
            });
        }
    }

    if let Some((done_name, body)) = current.take() {
        sheets.push(parse_sheet(done_name, &body)?);
    }

    Ok(Workbook { sheets })
}

/// Returns the sheet name when `line` is a `[name]` marker line.
fn sheet_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let name = trimmed.strip_prefix('[')?.strip_suffix(']')?.trim();
    if name.is_empty() { None } else { Some(name) }
}

/// Parses one sheet body as CSV with a header row.
fn parse_sheet(name: String, body: &str) -> AlertResult<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| workbook_error(&name, &err))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| workbook_error(&name, &err))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Sheet {
        name,
        headers,
        rows,
    })
}

fn workbook_error(sheet: &str, err: &csv::Error) -> AlertError {
    AlertError::WorkbookParse {
        message: format!("sheet '{}': {}", sheet, err),
    }
}
