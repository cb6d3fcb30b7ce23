//! Helper functions for the rendered pages
//!
//! Date formatting, HTML fragments and reading-time estimates shared by the
//! server views and the CLI.

mod date;
mod html;

pub use date::*;
pub use html::*;

/// Count words in markdown or HTML text
///
/// Runs of ASCII alphanumerics count as one word; each CJK ideograph counts
/// on its own.
pub fn count_words(text: &str) -> usize {
    let text = strip_html(text);
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if ('\u{4E00}'..='\u{9FFF}').contains(&c) {
            count += 1;
            in_word = false;
        } else {
            in_word = false;
        }
    }

    count
}

/// Estimated reading time in whole minutes, never less than one
pub fn reading_time(text: &str, words_per_minute: usize) -> usize {
    let words = count_words(text);
    words.div_ceil(words_per_minute.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello, world! 2024"), 3);
        assert_eq!(count_words("<p>one <b>two</b></p>"), 2);
        assert_eq!(count_words("中文"), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time("", 200), 1);
        let text = "word ".repeat(401);
        assert_eq!(reading_time(&text, 200), 3);
        assert_eq!(reading_time("a b", 0), 2);
    }
}
