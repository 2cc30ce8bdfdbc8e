//! Reading comparator.
//!
//! The visible list is always kept sorted by reading; sort order is a
//! derived property, recomputed after every edit, never stored.

use std::cmp::Ordering;

use crate::model::Record;
use crate::phonetic::katakana_to_hiragana;

/// Per-character fold for comparison: Katakana to Hiragana, ASCII lower to
/// upper. Within the folded Hiragana block code-point order is gojūon
/// order, so phonetically adjacent kana sort adjacently even when the raw
/// strings mix scripts.
fn fold_char(c: char) -> char {
    let c = katakana_to_hiragana(c);
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

/// Total order over readings, ascending.
pub fn compare_readings(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

/// Sort records ascending by reading. Stable: records with identical
/// readings keep their relative order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| compare_readings(&a.reading, &b.reading));
}
