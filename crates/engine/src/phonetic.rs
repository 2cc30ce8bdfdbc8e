//! Phonetic index bucketing.
//!
//! `bucket` maps a reading to the section label it is printed under: a
//! plain hiragana row, a Latin letter, the digit bucket, or the fallback.
//! The same function decides which records count as "unsorted" leftovers
//! for manual correction, so it must stay total and deterministic.

/// Fallback label for readings with no phonetic index.
pub const OTHER_BUCKET: &str = "その他";

/// Label for readings that start with an ASCII digit.
pub const DIGIT_BUCKET: &str = "0-9";

/// Label for the kana iteration marks ゝ/ゞ, which belong to no row.
const REPEAT_MARK_BUCKET: &str = "くりかえし";

/// Fold one Katakana code point (U+30A1..=U+30F6) to its Hiragana
/// equivalent; everything else passes through.
pub(crate) fn katakana_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Voiced/semi-voiced marks and small kana fold to the plain base kana, so
/// dakuten, handakuten and yōon forms group under the unvoiced row
/// (が under か, ぱ under は, small ゃ under や). Rows with no such
/// variants (な/ま/ら...) fall through to the plain-hiragana path.
fn base_kana(c: char) -> Option<&'static str> {
    let base = match c {
        'ぁ' => "あ",
        'ぃ' => "い",
        'ぅ' => "う",
        'ぇ' => "え",
        'ぉ' => "お",
        'か' | 'が' => "か",
        'き' | 'ぎ' => "き",
        'く' | 'ぐ' => "く",
        'け' | 'げ' => "け",
        'こ' | 'ご' => "こ",
        'さ' | 'ざ' => "さ",
        'し' | 'じ' => "し",
        'す' | 'ず' => "す",
        'せ' | 'ぜ' => "せ",
        'そ' | 'ぞ' => "そ",
        'た' | 'だ' => "た",
        'ち' | 'ぢ' => "ち",
        'っ' | 'つ' | 'づ' => "つ",
        'て' | 'で' => "て",
        'と' | 'ど' => "と",
        'は' | 'ば' | 'ぱ' => "は",
        'ひ' | 'び' | 'ぴ' => "ひ",
        'ふ' | 'ぶ' | 'ぷ' => "ふ",
        'へ' | 'べ' | 'ぺ' => "へ",
        'ほ' | 'ぼ' | 'ぽ' => "ほ",
        'ゃ' | 'や' => "や",
        'ゅ' | 'ゆ' => "ゆ",
        'ょ' | 'よ' => "よ",
        'ゎ' | 'わ' => "わ",
        'ゐ' => "い",
        'ゑ' => "え",
        'を' => "を",
        'ん' => "ん",
        'ゔ' => "う",
        'ゝ' | 'ゞ' => REPEAT_MARK_BUCKET,
        _ => return None,
    };
    Some(base)
}

/// Section label for a reading.
///
/// Looks at the first non-space character only. Pure and total: malformed
/// input lands in [`OTHER_BUCKET`], never an error.
pub fn bucket(reading: &str) -> String {
    let Some(first) = reading.trim().chars().next() else {
        return OTHER_BUCKET.to_string();
    };

    let c = katakana_to_hiragana(first);

    if let Some(base) = base_kana(c) {
        return base.to_string();
    }

    // Plain hiragana not covered by the fold table is its own label.
    if ('\u{3041}'..='\u{3096}').contains(&c) {
        return c.to_string();
    }

    // Per-letter grouping, not one A-Z bucket.
    if c.is_ascii_alphabetic() {
        return c.to_ascii_uppercase().to_string();
    }

    if c.is_ascii_digit() {
        return DIGIT_BUCKET.to_string();
    }

    OTHER_BUCKET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_other() {
        assert_eq!(bucket(""), OTHER_BUCKET);
        assert_eq!(bucket("   "), OTHER_BUCKET);
        assert_eq!(bucket("　"), OTHER_BUCKET);
    }

    #[test]
    fn katakana_folds_to_hiragana_row() {
        assert_eq!(bucket("タナカ"), "た");
        assert_eq!(bucket("ガ"), bucket("か"));
    }

    #[test]
    fn voiced_and_small_kana_fold_to_base_row() {
        assert_eq!(bucket("が"), "か");
        assert_eq!(bucket("ぱ"), "は");
        assert_eq!(bucket("ぴょ"), "ひ");
        assert_eq!(bucket("ゃまだ"), "や");
        assert_eq!(bucket("ゔぁいおりん"), "う");
    }

    #[test]
    fn plain_rows_pass_through() {
        assert_eq!(bucket("なかむら"), "な");
        assert_eq!(bucket("まつもと"), "ま");
        assert_eq!(bucket("わたなべ"), "わ");
    }

    #[test]
    fn iteration_marks_get_literal_label() {
        assert_eq!(bucket("ゝ"), "くりかえし");
        assert_eq!(bucket("ゞ"), "くりかえし");
    }

    #[test]
    fn latin_groups_per_letter() {
        assert_eq!(bucket("abc"), "A");
        assert_eq!(bucket("Brown"), "B");
    }

    #[test]
    fn digits_share_one_bucket() {
        assert_eq!(bucket("3abc"), DIGIT_BUCKET);
        assert_eq!(bucket("007"), DIGIT_BUCKET);
    }

    #[test]
    fn kanji_is_other() {
        assert_eq!(bucket("田中花子"), OTHER_BUCKET);
    }

    #[test]
    fn leading_spaces_are_skipped() {
        assert_eq!(bucket("  たなか"), "た");
    }
}
