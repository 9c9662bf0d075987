//! Normalizer + Tokenizer — the first two stages of keyword extraction.

/// A single lower-cased alphanumeric word.
pub type Token = String;

/// Lower-cases `text` and replaces every character outside `[a-z0-9]` and whitespace
/// with a single space.
///
/// Non-ASCII letters are treated as separators, so binary or foreign-script input
/// degrades into short ASCII fragments instead of failing.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Splits normalized text on whitespace runs. Empty and whitespace-only input yields
/// an empty sequence.
pub fn tokenize(normalized: &str) -> Vec<Token> {
    normalized.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_ascii() {
        assert_eq!(normalize("Rust AND Python"), "rust and python");
    }

    #[test]
    fn test_normalize_replaces_punctuation_with_space() {
        assert_eq!(normalize("C++/Go, (SQL)!"), "c   go   sql  ");
    }

    #[test]
    fn test_normalize_keeps_digits_and_whitespace() {
        assert_eq!(normalize("5+ years\tAWS\n2024"), "5  years\taws\n2024");
    }

    #[test]
    fn test_normalize_non_ascii_letters_become_separators() {
        assert_eq!(normalize("café"), "caf ");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let out = normalize("Ünïcødé — ✓ 100% «quoted» \u{0}\u{7f} CI/CD");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace()));
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(
            tokenize("rust   python\n\tdocker "),
            vec!["rust", "python", "docker"]
        );
    }

    #[test]
    fn test_tokenize_whitespace_only_is_empty() {
        assert!(tokenize("   \n\t  ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order() {
        assert_eq!(tokenize("b a c a"), vec!["b", "a", "c", "a"]);
    }
}
