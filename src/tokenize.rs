use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// Letters, numerics and `_` only; combining marks and other connector
// punctuation separate words.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Splits `text` into lowercase runs of word characters (letters, digits, `_`).
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Drops repeated tokens, keeping each one at its first position.
pub fn unique_words<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if seen.insert(token.to_string()) {
            words.push(token.to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        assert_eq!(
            tokenize("Lorem ipsum, dolor-sit\tamet.\n"),
            vec!["lorem", "ipsum", "dolor", "sit", "amet"]
        );
    }

    #[test]
    fn keeps_digits_and_underscores_inside_words() {
        assert_eq!(tokenize("a_b c3 (42)"), vec!["a_b", "c3", "42"]);
    }

    #[test]
    fn folds_non_ascii_letters() {
        assert_eq!(tokenize("Ærum ÉLIT"), vec!["ærum", "élit"]);
    }

    #[test]
    fn connector_punctuation_and_marks_split_words() {
        assert_eq!(
            tokenize("cafe\u{301} a\u{203f}b x\u{b2}"),
            vec!["cafe", "a", "b", "x\u{b2}"]
        );
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        assert!(tokenize("!!! ... ???").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn unique_words_preserves_first_occurrence() {
        let tokens = tokenize("b a b c a");
        assert_eq!(unique_words(&tokens), vec!["b", "a", "c"]);
    }
}
