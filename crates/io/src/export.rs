// Normalized roster export: No / 名前 / 読み / 人数 / チェック

use std::path::Path;

use roster_engine::Record;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::IoError;

const HEADER: [&str; 5] = ["No", "名前", "読み", "人数", "チェック"];

/// Write the roster as CSV, one row per record plus a header. The No
/// column is 1-based and sequential; チェック is left blank for handwritten
/// marks.
pub fn write_csv(records: &[Record], path: &Path) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IoError::Io(e.to_string()))?;

    writer
        .write_record(HEADER)
        .map_err(|e| IoError::Csv(e.to_string()))?;

    for (index, record) in records.iter().enumerate() {
        writer
            .write_record([
                (index + 1).to_string(),
                record.display_name.clone(),
                record.reading.clone(),
                record.count.to_string(),
                String::new(),
            ])
            .map_err(|e| IoError::Csv(e.to_string()))?;
    }

    writer.flush().map_err(|e| IoError::Io(e.to_string()))?;
    Ok(())
}

/// Write the roster as an XLSX workbook with a single 名簿 sheet and a bold
/// header row.
pub fn write_xlsx(records: &[Record], path: &Path) -> Result<(), IoError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name("名簿")
        .map_err(|e| IoError::Xlsx(e.to_string()))?;

    let bold = Format::new().set_bold();
    for (col, label) in HEADER.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *label, &bold)
            .map_err(|e| IoError::Xlsx(e.to_string()))?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet
            .write(row, 0, (index + 1) as u32)
            .and_then(|s| s.write(row, 1, record.display_name.as_str()))
            .and_then(|s| s.write(row, 2, record.reading.as_str()))
            .and_then(|s| s.write(row, 3, record.count))
            .map_err(|e| IoError::Xlsx(e.to_string()))?;
    }

    workbook
        .save(path)
        .map_err(|e| IoError::Xlsx(e.to_string()))?;
    Ok(())
}
