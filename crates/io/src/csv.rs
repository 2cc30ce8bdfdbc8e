// CSV/TSV roster import

use std::path::Path;

use roster_engine::Cell;

use crate::error::IoError;

/// Load a delimited text file into raw cell rows. Rows with no non-blank
/// cell are dropped.
pub fn load(path: &Path) -> Result<Vec<Vec<Cell>>, IoError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    parse_str(&content, delimiter)
}

/// Read file bytes and decode. UTF-8 first; on invalid sequences fall back
/// to Shift_JIS, the common encoding for Japanese reservation exports.
pub fn read_file_as_utf8(path: &Path) -> Result<String, IoError> {
    let bytes = std::fs::read(path).map_err(|e| IoError::Io(e.to_string()))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Detect the most likely field delimiter by checking consistency across
/// the first few lines. The candidate with the most consistent field count
/// (>1 field) wins; ties break toward more columns.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b','];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        let target = match counts.first() {
            Some(&c) if c > 1 => c,
            _ => continue,
        };
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

fn parse_str(content: &str, delimiter: u8) -> Result<Vec<Vec<Cell>>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IoError::Csv(e.to_string()))?;
        let row: Vec<Cell> = record.iter().map(Cell::from_input).collect();
        if row.iter().any(|c| !c.is_blank()) {
            rows.push(row);
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_basic_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        fs::write(&path, "田中 花子,たなか はなこ,2名\n佐藤 健,さとう けん,1\n").unwrap();

        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Cell::Text("田中 花子".into()));
        assert_eq!(rows[1][2], Cell::Number(1.0));
    }

    #[test]
    fn blank_rows_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        fs::write(&path, "田中,たなか\n,\n\n佐藤,さとう\n").unwrap();

        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn shift_jis_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sjis.csv");
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode("田中 花子,たなか,2名\n");
        fs::write(&path, encoded).unwrap();

        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], Cell::Text("田中 花子".into()));
        assert_eq!(rows[0][1], Cell::Text("たなか".into()));
    }

    #[test]
    fn tab_delimiter_is_sniffed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.tsv");
        fs::write(&path, "田中\tたなか\t2名\n佐藤\tさとう\t1名\n").unwrap();

        let rows = load(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][1], Cell::Text("たなか".into()));
    }

    #[test]
    fn semicolon_delimiter_is_sniffed() {
        assert_eq!(sniff_delimiter("a;b;c\nd;e;f\n"), b';');
        assert_eq!(sniff_delimiter("a,b,c\nd,e,f\n"), b',');
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/roster.csv")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
