use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Greedily wraps `text` into lines of at most `max_chars` characters.
///
/// Words are separated by any run of whitespace, and newlines count as whitespace:
/// the text is re-flowed, so explicit paragraph breaks are not kept. Words are never
/// split; a word longer than `max_chars` is emitted on a line of its own. Empty or
/// blank text produces no lines. A `max_chars` of zero is treated as one, putting
/// every word on its own line.
///
/// The returned iterator is lazy and can be cloned to restart wrapping from the
/// current position.
pub fn wrap(text: &str, max_chars: usize) -> WrappedLines<'_> {
    WrappedLines {
        words: text.split_whitespace().peekable(),
        max_chars: max_chars.max(1),
    }
}

/// Lines produced by [wrap]
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    words: Peekable<SplitWhitespace<'a>>,
    max_chars: usize,
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.words.next()?;
        let mut line = String::from(first);
        let mut len = first.chars().count();

        while let Some(word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.max_chars {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }

        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str, width: usize) -> Vec<String> {
        wrap(text, width).collect()
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        assert!(lines("", 10).is_empty());
        assert!(lines("  \n\t  ", 10).is_empty());
    }

    #[test]
    fn wraps_greedily_on_word_boundaries() {
        assert_eq!(
            lines("the quick brown fox jumps over the lazy dog", 10),
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn line_may_fill_the_width_exactly() {
        assert_eq!(lines("abcd efgh ij", 9), vec!["abcd efgh", "ij"]);
    }

    #[test]
    fn newlines_and_runs_of_whitespace_collapse() {
        assert_eq!(
            lines("first paragraph\n\nsecond   paragraph", 100),
            vec!["first paragraph second paragraph"]
        );
    }

    #[test]
    fn over_long_words_get_their_own_line() {
        assert_eq!(
            lines("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn zero_width_puts_each_word_on_a_line() {
        assert_eq!(lines("a b c", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // each word is 4 characters but 8 bytes
        assert_eq!(lines("éééé ëëëë", 9), vec!["éééé ëëëë"]);
    }

    #[test]
    fn words_survive_in_order_and_lines_respect_width() {
        let text = lipsum::lipsum(300);
        for width in [1, 7, 20, 90] {
            let wrapped = lines(&text, width);
            let rejoined = wrapped.join(" ");
            let expected: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), expected);

            for line in wrapped.iter() {
                let fits = line.chars().count() <= width;
                let single_word = !line.contains(' ');
                assert!(fits || single_word, "{line:?} exceeds {width}");
            }
        }
    }

    #[test]
    fn clones_restart_from_the_same_place() {
        let mut lines = wrap("one two three four", 7);
        assert_eq!(lines.next().as_deref(), Some("one two"));
        let rest: Vec<String> = lines.clone().collect();
        assert_eq!(rest, vec!["three", "four"]);
        assert_eq!(lines.collect::<Vec<_>>(), rest);
    }
}
