//! Edit-time reconciliation.
//!
//! One pure reducer over the record list. Rules are evaluated in strict
//! precedence order: no-op guard, ghost-reference split, count-split,
//! plain update. Whatever fired, the list is re-sorted before it is
//! returned; sort order is derived from the reading field, never stored.

use crate::collate::sort_records;
use crate::model::{fresh_id, Record, RecordUpdate};

/// Apply a partial edit to the record addressed by `target_id`.
///
/// Unknown ids and no-change updates return the list untouched: no resort,
/// no new ids. Splits allocate a fresh id for the new branch and keep the
/// old id on exactly one of the resulting records.
pub fn reconcile(records: Vec<Record>, target_id: &str, update: &RecordUpdate) -> Vec<Record> {
    let Some(pos) = records.iter().position(|r| r.id == target_id) else {
        return records;
    };
    let target = &records[pos];

    if is_noop(target, update) {
        return records;
    }

    let new_reading = update
        .reading
        .as_deref()
        .unwrap_or(target.reading.as_str());
    let reading_changed = new_reading != target.reading;

    // Ghost-reference split: resolving the reading of a still-unsorted
    // record keeps the original in the fallback bucket as a frozen
    // reference (so reception can find the kanji form) and adds a new
    // record that sorts into its phonetic section.
    let unsorted = target.reading == target.display_name && !target.is_reference;
    if reading_changed && unsorted {
        let mut sorted_entry = target.clone();
        apply(&mut sorted_entry, update);
        sorted_entry.id = fresh_id("sorted", &target.id);
        sorted_entry.is_reference = false;

        let mut reference = target.clone();
        reference.is_reference = true;
        // The reading update is deliberately not applied: the reference
        // stays in place. A simultaneous rename is carried over so both
        // copies show the same name.
        if let Some(name) = &update.display_name {
            reference.display_name = name.clone();
        }

        let mut next = records;
        next.remove(pos);
        next.push(reference);
        next.push(sorted_entry);
        sort_records(&mut next);
        return next;
    }

    // Count-split: a reading correction applies to only part of the group.
    // The addressed record moves with the new count; the remainder stays
    // behind under the pre-edit name and reading.
    let new_count = update.count.map(clamp_count).unwrap_or(target.count);
    if reading_changed && new_count < target.count {
        let remainder = target.count - new_count;

        let mut remainder_entry = target.clone();
        remainder_entry.id = fresh_id("split", &target.id);
        remainder_entry.count = remainder;

        let mut next = records;
        apply(&mut next[pos], update);
        next[pos].count = new_count;
        next.push(remainder_entry);
        sort_records(&mut next);
        return next;
    }

    // Plain update. Reference records always land here: rules 2 and 3
    // exclude them by construction, and a reading manually reset to equal
    // the display name does not by itself resurrect reference behavior.
    let mut next = records;
    apply(&mut next[pos], update);
    sort_records(&mut next);
    next
}

/// Remove a record by id (duplicate cleanup). Unknown ids are a no-op.
pub fn remove(records: Vec<Record>, target_id: &str) -> Vec<Record> {
    records.into_iter().filter(|r| r.id != target_id).collect()
}

/// Field-by-field identity comparison against the current values, not a
/// shallow equality of the whole record.
fn is_noop(target: &Record, update: &RecordUpdate) -> bool {
    update
        .display_name
        .as_ref()
        .map_or(true, |v| *v == target.display_name)
        && update
            .reading
            .as_ref()
            .map_or(true, |v| *v == target.reading)
        && update
            .count
            .map_or(true, |v| clamp_count(v) == target.count)
}

fn apply(record: &mut Record, update: &RecordUpdate) {
    if let Some(name) = &update.display_name {
        record.display_name = name.clone();
    }
    if let Some(reading) = &update.reading {
        record.reading = reading.clone();
    }
    if let Some(count) = update.count {
        record.count = clamp_count(count);
    }
}

/// Counts stay >= 1; a zero from the edit surface is clamped rather than
/// rejected.
fn clamp_count(count: u32) -> u32 {
    count.max(1)
}
