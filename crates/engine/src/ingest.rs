//! Row ingestion: header detection, serial-column sampling, bulk record
//! creation.

use crate::classify::classify_row;
use crate::collate::sort_records;
use crate::model::{Cell, Record};

/// Header labels recognized in the first cell of row 0.
const HEADER_LABELS_FIRST: [&str; 7] = ["名前", "Name", "参加者名", "氏名", "No", "No.", "ID"];

/// Header labels recognized in the second cell of row 0.
const HEADER_LABELS_SECOND: [&str; 4] = ["名前", "Name", "氏名", "氏名(漢字)"];

/// Rows sampled for serial-column detection.
const SAMPLE_LIMIT: usize = 10;

/// Turn raw cell rows into a sorted record list. Never fails: ambiguous
/// rows degrade to placeholder fields and land in the fallback bucket for
/// manual correction.
pub fn ingest(rows: &[Vec<Cell>]) -> Vec<Record> {
    if rows.is_empty() {
        return Vec::new();
    }

    let start = if has_header(rows) { 1 } else { 0 };
    let data = &rows[start..];
    let name_col = detect_name_column(data);

    let mut records: Vec<Record> = data
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let fields = classify_row(row, name_col);
            Record {
                // Deterministic within the ingested list: re-ingesting the
                // same file addresses the same records. Split ids carry a
                // uniqueness suffix instead.
                id: format!("row-{index}"),
                original_name: fields.original_name,
                display_name: fields.display_name,
                reading: fields.reading,
                count: fields.count,
                is_reference: false,
            }
        })
        .collect();

    sort_records(&mut records);
    records
}

/// Literal allow-list comparison against known header labels, not a
/// heuristic score.
fn has_header(rows: &[Vec<Cell>]) -> bool {
    let Some(first) = rows.first() else {
        return false;
    };
    let cell_text = |i: usize| -> String {
        first
            .get(i)
            .map(|c| c.display().trim().to_string())
            .unwrap_or_default()
    };

    let c0 = cell_text(0);
    let c1 = cell_text(1);
    HEADER_LABELS_FIRST.contains(&c0.as_str()) || HEADER_LABELS_SECOND.contains(&c1.as_str())
}

/// Sample the first data rows: a numeric first cell next to a non-numeric
/// second cell marks a serial/ID column. A strict majority shifts the name
/// column to 1. Rows with fewer than 2 cells carry no signal and are left
/// out of the sample.
fn detect_name_column(rows: &[Vec<Cell>]) -> usize {
    let mut serial_like = 0usize;
    let mut sampled = 0usize;

    for row in rows.iter().take(SAMPLE_LIMIT) {
        if row.len() < 2 {
            continue;
        }
        if cell_is_numeric(&row[0]) && cell_is_nonnumeric_text(&row[1]) {
            serial_like += 1;
        }
        sampled += 1;
    }

    if sampled > 0 && serial_like * 2 > sampled {
        1
    } else {
        0
    }
}

fn cell_is_numeric(cell: &Cell) -> bool {
    match cell {
        Cell::Number(_) => true,
        Cell::Text(s) => {
            let t = s.trim();
            !t.is_empty() && t.chars().all(|c| c.is_ascii_digit())
        }
        Cell::Blank => false,
    }
}

fn cell_is_nonnumeric_text(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => {
            let t = s.trim();
            !(!t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        }
        _ => false,
    }
}
