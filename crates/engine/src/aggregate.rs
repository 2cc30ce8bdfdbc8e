//! Roster aggregates: totals and duplicate-name groups.

use crate::model::{DuplicateGroup, Record, RosterStats};

/// Group and attendee totals. Reference records never contribute.
pub fn stats(records: &[Record]) -> RosterStats {
    let mut groups = 0usize;
    let mut attendees = 0u32;
    for record in records.iter().filter(|r| !r.is_reference) {
        groups += 1;
        attendees += record.count;
    }
    RosterStats { groups, attendees }
}

/// Active records sharing a display name, in first-seen order. Groups with
/// a single member are not reported. Reference records are excluded
/// entirely: a reference and its sorted sibling share a name by
/// construction and are not an accidental duplicate.
pub fn find_duplicates(records: &[Record]) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for record in records.iter().filter(|r| !r.is_reference) {
        match groups
            .iter_mut()
            .find(|g| g.display_name == record.display_name)
        {
            Some(group) => {
                group.total_count += record.count;
                group.members.push(record.clone());
            }
            None => groups.push(DuplicateGroup {
                display_name: record.display_name.clone(),
                total_count: record.count,
                members: vec![record.clone()],
            }),
        }
    }

    groups.retain(|g| g.members.len() > 1);
    groups
}
