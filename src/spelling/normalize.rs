//! Text normalization shared by vocabulary building and query handling.
//!
//! Normalization lowercases, decomposes to NFD, drops combining marks and
//! folds the handful of Latin letters that have no canonical decomposition.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a word: lowercase plus diacritic folding.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());

    for ch in text.trim().to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        match fold_letter(ch) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(ch),
        }
    }

    folded
}

/// Letters that survive NFD but still have a plain Latin base form.
fn fold_letter(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ł' => "l",
        'þ' => "th",
        'ı' => "i",
        _ => return None,
    };
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_accents() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("CAFÉ"), "cafe");
        assert_eq!(normalize("ação"), "acao");
        assert_eq!(normalize("Über"), "uber");
    }

    #[test]
    fn test_decomposed_input() {
        assert_eq!(normalize("cafe\u{0301}"), "cafe");
    }

    #[test]
    fn test_non_decomposing_letters() {
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize("Łódź"), "lodz");
        assert_eq!(normalize("Øre"), "ore");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  word\r"), "word");
        assert_eq!(normalize(""), "");
    }
}
