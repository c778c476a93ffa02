// Output formatting: terminal display of analysis reports.

pub mod terminal;

/// Render strings as a bracketed, quoted list: `['the cat', 'mat']`.
pub fn format_phrase_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref().replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Format a score with enough precision to compare runs.
pub fn format_score(score: f64) -> String {
    format!("{score:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phrase_list() {
        assert_eq!(format_phrase_list(&["the cat", "mat"]), "['the cat', 'mat']");
        assert_eq!(format_phrase_list::<&str>(&[]), "[]");
    }

    #[test]
    fn test_format_phrase_list_escapes_quotes() {
        assert_eq!(format_phrase_list(&["'s"]), "['\\'s']");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "0.000000");
        assert_eq!(format_score(-0.693147180559945), "-0.693147");
    }
}
