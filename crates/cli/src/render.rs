// Plain-text check-in sheet rendering

use roster_engine::{bucket, stats, Record};

use crate::config::SheetConfig;

/// Render the grouped check-in sheet. A section header is emitted whenever
/// the bucket label changes over the sorted list, mirroring how the list
/// is printed: records are already in reading order, so each bucket forms
/// one contiguous run.
pub fn sheet(records: &[Record], config: &SheetConfig, show_ids: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}  {}\n", config.title, config.date_line()));
    out.push_str(&config.subtitle);
    out.push('\n');
    out.push_str(&"=".repeat(40));
    out.push('\n');

    let mut last_header = String::new();
    for record in records {
        let header = bucket(&record.reading);
        if header != last_header {
            out.push_str(&format!("\n【{header}】\n"));
            last_header = header;
        }

        let mut line = format!("  ☐  {}", record.display_name);
        if config.show_reading && record.reading != record.display_name {
            line.push_str(&format!(" ({})", record.reading));
        }
        line.push_str(&format!("  {}名", record.count));
        if show_ids {
            line.push_str(&format!("  [{}]", record.id));
        }
        out.push_str(&line);
        out.push('\n');
    }

    if config.walk_in_slots > 0 {
        out.push_str("\n【当日受付】\n");
        for _ in 0..config.walk_in_slots {
            out.push_str("  ☐  ____________________  　名\n");
        }
    }

    let totals = stats(records);
    out.push('\n');
    out.push_str(&"=".repeat(40));
    out.push_str(&format!(
        "\n登録グループ数: {}組 / 参加者合計: {}名\n",
        totals.groups, totals.attendees
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, reading: &str, count: u32, is_reference: bool) -> Record {
        Record {
            id: id.to_string(),
            original_name: name.to_string(),
            display_name: name.to_string(),
            reading: reading.to_string(),
            count,
            is_reference,
        }
    }

    fn test_config() -> SheetConfig {
        SheetConfig {
            date: Some("2026年8月7日".to_string()),
            walk_in_slots: 2,
            ..Default::default()
        }
    }

    #[test]
    fn section_header_per_bucket_run() {
        let records = vec![
            record("a", "青木", "あおき", 1, false),
            record("b", "伊藤", "いとう", 1, false),
            record("c", "田中", "たなか", 2, false),
        ];
        let out = sheet(&records, &test_config(), false);

        assert_eq!(out.matches("【あ】").count(), 1);
        assert_eq!(out.matches("【い】").count(), 1);
        assert_eq!(out.matches("【た】").count(), 1);

        let a = out.find("【あ】").unwrap();
        let i = out.find("【い】").unwrap();
        let t = out.find("【た】").unwrap();
        assert!(a < i && i < t);
    }

    #[test]
    fn adjacent_same_bucket_records_share_one_header() {
        let records = vec![
            record("a", "田中", "たなか", 1, false),
            record("b", "田辺", "たなべ", 1, false),
        ];
        let out = sheet(&records, &test_config(), false);
        assert_eq!(out.matches("【た】").count(), 1);
    }

    #[test]
    fn reading_shown_only_when_it_differs() {
        let records = vec![
            record("a", "田中", "たなか", 1, false),
            record("b", "山本", "山本", 1, false),
        ];
        let out = sheet(&records, &test_config(), false);
        assert!(out.contains("田中 (たなか)"));
        assert!(out.contains("  ☐  山本  1名"));
        assert!(!out.contains("山本 (山本)"));
    }

    #[test]
    fn footer_excludes_references() {
        let records = vec![
            record("a", "田中", "田中", 3, true),
            record("b", "田中", "たなか", 3, false),
        ];
        let out = sheet(&records, &test_config(), false);
        assert!(out.contains("登録グループ数: 1組 / 参加者合計: 3名"));
    }

    #[test]
    fn walk_in_slots_are_appended() {
        let records = vec![record("a", "田中", "たなか", 1, false)];
        let out = sheet(&records, &test_config(), false);
        assert!(out.contains("【当日受付】"));
        assert_eq!(out.matches("____________________").count(), 2);

        let mut config = test_config();
        config.walk_in_slots = 0;
        let out = sheet(&records, &config, false);
        assert!(!out.contains("【当日受付】"));
    }

    #[test]
    fn ids_shown_on_request() {
        let records = vec![record("row-0-abc", "田中", "たなか", 1, false)];
        let out = sheet(&records, &test_config(), true);
        assert!(out.contains("[row-0-abc]"));
    }
}
