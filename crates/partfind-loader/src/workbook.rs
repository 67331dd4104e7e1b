//! Reads the description column out of a spreadsheet.

use calamine::{open_workbook_auto, Data, Reader};
use partfind_core::{Error, Result, SourceConfig};
use std::path::Path;
use tracing::{debug, info};

/// Loads one column of one sheet as an ordered list of entries.
#[derive(Debug, Clone)]
pub struct WorkbookLoader {
    source: SourceConfig,
}

impl WorkbookLoader {
    /// Create a loader for the given source.
    pub fn new(source: SourceConfig) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    pub fn path(&self) -> &Path {
        &self.source.path
    }

    /// Read the configured column. Empty and error cells are skipped.
    pub fn load(&self) -> Result<Vec<String>> {
        let SourceConfig {
            path,
            sheet,
            column,
        } = &self.source;
        info!("Loading '{}' / '{}' from {}", sheet, column, path.display());

        if !path.is_file() {
            return Err(Error::Source(format!(
                "workbook not found: {}",
                path.display()
            )));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| Error::Source(format!("failed to open {}: {e}", path.display())))?;

        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(Error::MissingSheet(sheet.clone()));
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| Error::Source(format!("failed to read sheet '{sheet}': {e}")))?;

        let entries = column_entries(range.rows(), sheet, column)?;
        info!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }
}

/// Find `column` in the header row and collect the non-empty cells below it.
fn column_entries<'a>(
    mut rows: impl Iterator<Item = &'a [Data]>,
    sheet: &str,
    column: &str,
) -> Result<Vec<String>> {
    let missing = || Error::MissingColumn {
        sheet: sheet.to_string(),
        column: column.to_string(),
    };

    let header = rows.next().ok_or_else(missing)?;
    let index = header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == column.trim()))
        .ok_or_else(missing)?;
    debug!("Column '{}' found at index {}", column, index);

    Ok(rows
        .filter_map(|row| row.get(index).and_then(cell_text))
        .collect())
}

/// Display text of a cell, `None` for cells that count as missing.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        other => Some(other.to_string()),
    }
}

/// Spreadsheets store every number as a float; whole numbers print bare.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
