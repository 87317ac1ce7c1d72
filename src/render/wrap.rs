use unicode_width::UnicodeWidthStr;

/// Word-wrap `text` to `width` columns, indenting every row by `margin`
///
/// Existing line breaks are kept. A word wider than the available space is
/// left on its own row rather than split. A `width` of 0 disables wrapping.
pub fn wrap(text: &str, margin: usize, width: usize) -> Vec<String> {
    let width = if width == 0 { usize::MAX } else { width };
    let indent = " ".repeat(margin);
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;

        for word in line.split_whitespace() {
            let word_width = word.width();

            if row.is_empty() {
                row.push_str(&indent);
                row.push_str(word);
                row_width = margin + word_width;
            } else if row_width + 1 + word_width < width {
                row.push(' ');
                row.push_str(word);
                row_width += 1 + word_width;
            } else {
                rows.push(std::mem::take(&mut row));
                row.push_str(&indent);
                row.push_str(word);
                row_width = margin + word_width;
            }
        }

        rows.push(if row.is_empty() { indent.clone() } else { row });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_indented_row() {
        assert_eq!(wrap("hello world", 3, 80), vec!["   hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        let rows = wrap("one two three four", 2, 13);
        assert_eq!(rows, vec!["  one two", "  three four"]);
        assert!(rows.iter().all(|r| r.width() < 13));
    }

    #[test]
    fn test_keeps_explicit_line_breaks() {
        assert_eq!(wrap("first\nsecond", 1, 80), vec![" first", " second"]);
    }

    #[test]
    fn test_long_word_gets_its_own_row() {
        assert_eq!(
            wrap("a supercalifragilistic b", 0, 10),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_zero_width_disables_wrapping() {
        assert_eq!(wrap("a b c", 0, 0), vec!["a b c"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        // Each CJK character is two columns wide
        let rows = wrap("漢字 漢字", 0, 8);
        assert_eq!(rows, vec!["漢字", "漢字"]);
    }
}
