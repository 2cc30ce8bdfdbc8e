//! Cell-level field classification.
//!
//! Reservation sheets are inconsistent, so the scan is greedy first-match
//! rather than best-match: a deterministic, explainable rule beats a
//! statistical one for output that is proofread before printing.

use crate::model::Cell;

/// Placeholder shown when a row has no usable name cell.
pub const UNKNOWN_NAME: &str = "不明";

/// Honorific suffixes stripped from the trailing edge of a name.
const HONORIFICS: [&str; 5] = ["様", "殿", "先生", "さん", "君"];

/// Cells scanned after the name column.
const SCAN_WINDOW: usize = 4;

/// Digit runs longer than this are numeric codes, not headcounts.
const MAX_COUNT_DIGITS: usize = 4;

/// Fields extracted from one raw row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    pub original_name: String,
    pub display_name: String,
    pub reading: String,
    pub count: u32,
}

/// Classify a raw row into name/reading/count. The caller has already
/// resolved `name_col` (0 or 1) via the ingestion sampling pass.
pub fn classify_row(row: &[Cell], name_col: usize) -> ClassifiedRow {
    let raw = row
        .get(name_col)
        .map(|c| c.display())
        .unwrap_or_default();
    let original_name = {
        let t = raw.trim();
        if t.is_empty() { UNKNOWN_NAME.to_string() } else { t.to_string() }
    };
    let display_name = clean_name(&original_name);

    let mut reading: Option<String> = None;
    let mut count: Option<u32> = None;

    let scan_end = row.len().min(name_col + 1 + SCAN_WINDOW);
    for cell in &row[(name_col + 1).min(row.len())..scan_end] {
        let value = cell.display();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if count.is_none() {
            if let Some(n) = parse_count(value) {
                count = Some(n);
                continue;
            }
        }

        if reading.is_none() && is_kana(value) {
            reading = Some(value.to_string());
        }
    }

    // No reading found: the cleaned name doubles as the sort key, which is
    // the signal that the record is still unsorted.
    let reading = reading.unwrap_or_else(|| display_name.clone());

    ClassifiedRow {
        original_name,
        display_name,
        reading,
        count: count.unwrap_or(1),
    }
}

/// Strip one trailing honorific (only when preceded by a space, to avoid
/// corrupting names that contain those characters internally), then drop
/// the remaining ASCII/ideographic spaces.
fn clean_name(name: &str) -> String {
    let stripped = strip_honorific(name);
    let collapsed: String = stripped
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{3000}')
        .collect();
    if collapsed.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        collapsed
    }
}

fn strip_honorific(name: &str) -> &str {
    for honorific in HONORIFICS {
        if let Some(rest) = name.strip_suffix(honorific) {
            let trimmed = rest.trim_end_matches([' ', '\u{3000}']);
            if trimmed.len() < rest.len() {
                return trimmed;
            }
        }
    }
    name
}

/// "2名", "３", "10人" → headcount. Full-width digits are folded first;
/// the digit run must be short and the only other content a 名/人 suffix.
fn parse_count(value: &str) -> Option<u32> {
    let folded: String = value.chars().map(fold_fullwidth_digit).collect();

    let digits: String = folded.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || digits.len() > MAX_COUNT_DIGITS {
        return None;
    }

    let suffix = &folded[digits.len()..];
    if !(suffix.is_empty() || suffix == "名" || suffix == "人") {
        return None;
    }

    Some(digits.parse().unwrap_or(1))
}

fn fold_fullwidth_digit(c: char) -> char {
    if ('\u{FF10}'..='\u{FF19}').contains(&c) {
        char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
    } else {
        c
    }
}

/// Entirely Hiragana/Katakana plus whitespace.
fn is_kana(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            ('\u{3040}'..='\u{309F}').contains(&c)
                || ('\u{30A0}'..='\u{30FF}').contains(&c)
                || c.is_whitespace()
        })
}
