// Excel roster import (xlsx, xls, xlsb, ods) via calamine
//
// One-way conversion: the first worksheet is flattened into raw cell rows
// for ingestion. Formatting, formulas, and extra sheets are ignored.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use roster_engine::Cell;

use crate::error::IoError;

/// Load the first worksheet into raw cell rows. Rows with no non-blank
/// cell are dropped.
pub fn load(path: &Path) -> Result<Vec<Vec<Cell>>, IoError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| IoError::Workbook(format!("failed to open {}: {e}", path.display())))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IoError::Workbook("workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IoError::Workbook(format!("failed to read sheet '{sheet_name}': {e}")))?;

    let mut rows = Vec::new();
    for row in range.rows() {
        let cells: Vec<Cell> = row.iter().map(cell_from_data).collect();
        if cells.iter().any(|c| !c.is_blank()) {
            rows.push(cells);
        }
    }

    Ok(rows)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Blank,
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                Cell::Blank
            } else {
                Cell::Text(t.to_string())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        // Date cells carry the raw serial; roster sheets never sort on it.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_mapping() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Blank);
        assert_eq!(
            cell_from_data(&Data::String("  ".into())),
            Cell::Blank
        );
        assert_eq!(
            cell_from_data(&Data::String("田中".into())),
            Cell::Text("田中".into())
        );
        assert_eq!(cell_from_data(&Data::Float(2.0)), Cell::Number(2.0));
        assert_eq!(cell_from_data(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(
            cell_from_data(&Data::Bool(true)),
            Cell::Text("TRUE".into())
        );
    }

    #[test]
    fn missing_file_is_a_workbook_error() {
        let err = load(Path::new("/nonexistent/roster.xlsx")).unwrap_err();
        assert!(matches!(err, IoError::Workbook(_)));
    }
}
