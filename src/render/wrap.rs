//! Greedy word wrapping for badge text.

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Words are accumulated greedily and never broken: a single word longer
/// than the limit becomes its own over-long line. Whitespace collapses per
/// `split_whitespace`, so leading/trailing runs disappear and the wrapped
/// lines joined with single spaces equal the normalized input.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    wrap_by(text, |candidate| candidate.chars().count() <= max_chars)
}

/// Greedy accumulation over whitespace-separated words.
///
/// `fits` judges a candidate line (current line + space + next word); on
/// rejection the current line is flushed and the word starts the next one.
/// A backend that measures rendered text can pass a pixel-width predicate
/// here instead of the character-count one used by [`wrap`].
pub fn wrap_by<F>(text: &str, fits: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut lines = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        if cur.is_empty() {
            cur.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", cur, word);
        if fits(&candidate) {
            cur = candidate;
        } else {
            lines.push(cur);
            cur = word.to_string();
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_known_quote_into_two_lines() {
        let lines = wrap(
            "Quality is never an accident; it is always the result of intelligent effort.",
            60,
        );
        assert_eq!(
            lines,
            vec![
                "Quality is never an accident; it is always the result of",
                "intelligent effort.",
            ]
        );
        assert!(lines[0].chars().count() <= 60);
    }

    #[test]
    fn no_line_exceeds_the_limit() {
        let text = "A pipeline is not done until it tells you when things break.";
        for line in wrap(text, 20) {
            assert!(line.chars().count() <= 20, "line too long: {:?}", line);
        }
    }

    #[test]
    fn joined_lines_equal_normalized_input() {
        let text = "  Observability   turns unknown\tfailures into known stories.  ";
        let lines = wrap(text, 18);
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(lines.join(" "), normalized);
    }

    #[test]
    fn overlong_word_is_left_unsplit() {
        let lines = wrap("ok supercalifragilisticexpialidocious ok", 10);
        assert_eq!(
            lines,
            vec!["ok", "supercalifragilisticexpialidocious", "ok"]
        );
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap("", 60).is_empty());
        assert!(wrap("   \t\n ", 60).is_empty());
    }

    #[test]
    fn wrap_by_accepts_a_custom_predicate() {
        // A crude stand-in for a measured-width test: every word is 8px wide.
        let lines = wrap_by("one two three four", |candidate| {
            candidate.split_whitespace().count() * 8 <= 16
        });
        assert_eq!(lines, vec!["one two", "three four"]);
    }
}
