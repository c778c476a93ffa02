// Word tokenizer.
//
// Splits raw text on word boundaries the way a Treebank-style tokenizer does.
// Text is first split on Unicode whitespace. Within each piece, words keep
// internal hyphens, periods, apostrophes and underscores ("well-known",
// "3.14", "snake_case"), abbreviations keep their final period ("e.g.",
// "u.s."), and clitics are split off their host ("don't" -> "do" + "n't").
// Every other punctuation character becomes its own token.
// Tokens are lowercased and any token that is exactly one ASCII punctuation
// character is dropped. Multi-character punctuation tokens ("...", "--")
// survive.

use std::sync::LazyLock;

use regex_lite::Regex;

/// The ASCII punctuation set used for token filtering.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Suffixes split off the end of a word, longest first.
const CLITICS: &[&str] = &[
    "n't", "n’t", "'ll", "’ll", "'re", "’re", "'ve", "’ve", "'s", "’s", "'m", "’m", "'d", "’d",
];

// A "word character" is an underscore or anything that is neither whitespace
// nor ASCII punctuation. Words may contain single apostrophes, hyphens or
// periods between word characters.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let word = r##"[^\s!"#$%&'()*+,\-./:;<=>?@\[\\\]^`{|}~’]"##;
    let pattern = format!(r"{word}+(?:['’.\-]{word}+)*|\.\.\.|--|\S");
    Regex::new(&pattern).expect("token pattern is valid")
});

/// Tokenize `text` into lowercased word tokens with single punctuation
/// characters removed.
///
/// Deterministic: the same input always produces the same sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    raw_tokens(text)
        .into_iter()
        .filter(|token| !is_punctuation_token(token))
        .map(|token| token.to_lowercase())
        .collect()
}

/// Split `text` into word and punctuation tokens without filtering or case
/// folding.
pub fn raw_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    // `\s` in the pattern is ASCII-only, so Unicode whitespace is split here.
    for piece in text.split_whitespace() {
        let mut at = 0;
        while let Some(m) = TOKEN_PATTERN.find_at(piece, at) {
            let mut end = m.end();
            let rest = &piece[end..];
            if is_abbreviation(m.as_str()) && rest.starts_with('.') && !rest.starts_with("..") {
                end += 1;
            }
            at = end;

            let (host, clitic) = split_clitic(&piece[m.start()..end]);
            tokens.push(host);
            if let Some(clitic) = clitic {
                tokens.push(clitic);
            }
        }
    }
    tokens
}

/// True when `token` is exactly one ASCII punctuation character.
pub fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION.contains(c),
        _ => false,
    }
}

/// Single characters joined by periods, as in "e.g" or "U.S".
fn is_abbreviation(word: &str) -> bool {
    word.contains('.') && word.split('.').all(|part| part.chars().count() == 1)
}

fn split_clitic(word: &str) -> (&str, Option<&str>) {
    let lower = word.to_lowercase();
    for clitic in CLITICS {
        // Byte lengths match between `word` and `lower` for these ASCII/’
        // suffixes, so the split index is valid in both.
        if lower.len() == word.len() && lower.ends_with(clitic) && word.len() > clitic.len() {
            let at = word.len() - clitic.len();
            if word.is_char_boundary(at) {
                return (&word[..at], Some(&word[at..]));
            }
        }
    }
    (word, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_punctuation() {
        let tokens = tokenize("The Cat sat, on the mat.");
        assert_eq!(tokens, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_splits_contractions() {
        assert_eq!(tokenize("Don't stop"), vec!["do", "n't", "stop"]);
        assert_eq!(tokenize("the cat's toy"), vec!["the", "cat", "'s", "toy"]);
        assert_eq!(tokenize("we'll see"), vec!["we", "'ll", "see"]);
    }

    #[test]
    fn test_keeps_internal_hyphens_and_decimals() {
        assert_eq!(tokenize("a well-known 3.14 value"), vec!["a", "well-known", "3.14", "value"]);
    }

    #[test]
    fn test_keeps_multi_character_punctuation() {
        assert_eq!(tokenize("wait... what -- now"), vec!["wait", "...", "what", "--", "now"]);
    }

    #[test]
    fn test_quotes_and_brackets_removed() {
        assert_eq!(tokenize("\"hello\" (world)!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Café Über naïve"), vec!["café", "über", "naïve"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
        assert!(tokenize("?!.,").is_empty());
    }

    #[test]
    fn test_splits_on_unicode_whitespace() {
        assert_eq!(tokenize("the\u{00A0}cat sat"), vec!["the", "cat", "sat"]);
        assert_eq!(tokenize("one\u{2003}two\u{3000}three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_keeps_underscores_and_abbreviations() {
        assert_eq!(
            tokenize("use snake_case, e.g. here"),
            vec!["use", "snake_case", "e.g.", "here"]
        );
        assert_eq!(tokenize("the U.S. team"), vec!["the", "u.s.", "team"]);
    }

    #[test]
    fn test_sentence_final_period_still_split() {
        assert_eq!(raw_tokens("the end."), vec!["the", "end", "."]);
        assert_eq!(raw_tokens("pi is 3.14."), vec!["pi", "is", "3.14", "."]);
        assert_eq!(raw_tokens("e.g..."), vec!["e.g", "..."]);
    }

    #[test]
    fn test_is_punctuation_token() {
        assert!(is_punctuation_token("."));
        assert!(is_punctuation_token("~"));
        assert!(!is_punctuation_token("..."));
        assert!(!is_punctuation_token("a"));
        assert!(!is_punctuation_token(""));
        assert!(!is_punctuation_token("’"));
    }
}
