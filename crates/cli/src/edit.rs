// --edit flag parsing: 'ID field=value[,field=value...]'

use roster_engine::RecordUpdate;

/// Parse one edit spec into a target id and a partial update. Fields not
/// named in the spec stay `None`, meaning "no change".
pub fn parse_edit(spec: &str) -> Result<(String, RecordUpdate), String> {
    let (id, fields) = spec
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected 'ID field=value[,...]', got '{spec}'"))?;

    let mut update = RecordUpdate::default();
    for part in fields.split(',') {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| format!("expected field=value, got '{part}'"))?;
        let value = value.trim();
        match key.trim() {
            "name" => update.display_name = Some(value.to_string()),
            "reading" => update.reading = Some(value.to_string()),
            "count" => {
                let count = value
                    .parse()
                    .map_err(|_| format!("count must be a number, got '{value}'"))?;
                update.count = Some(count);
            }
            other => {
                return Err(format!(
                    "unknown field '{other}' (expected name, reading, count)"
                ))
            }
        }
    }

    Ok((id.to_string(), update))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field() {
        let (id, update) = parse_edit("row-0-abc reading=たなか").unwrap();
        assert_eq!(id, "row-0-abc");
        assert_eq!(update.reading.as_deref(), Some("たなか"));
        assert!(update.display_name.is_none());
        assert!(update.count.is_none());
    }

    #[test]
    fn multiple_fields() {
        let (_, update) = parse_edit("row-1-x reading=すずき,count=2,name=鈴木").unwrap();
        assert_eq!(update.reading.as_deref(), Some("すずき"));
        assert_eq!(update.count, Some(2));
        assert_eq!(update.display_name.as_deref(), Some("鈴木"));
    }

    #[test]
    fn missing_fields_part_is_an_error() {
        assert!(parse_edit("row-0-abc").is_err());
    }

    #[test]
    fn bad_count_is_an_error() {
        assert!(parse_edit("row-0-abc count=two").is_err());
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert!(parse_edit("row-0-abc kana=たなか").is_err());
    }
}
