//! Message formatting.
//!
//! [`format`] turns an identity label and one line of text into the block
//! that is appended to the transcript. The label is emphasised, the whole
//! message is word-wrapped, and continuation lines are indented by
//! [`INDENT`] so wrapped text hangs under the first line.
//!
//! Wrapping is greedy first-fit over space-separated words. No line is wider
//! than the viewport unless it holds a single word that is itself wider: such
//! a word is never split. A continuation word that fits the viewport but not
//! the wrap width takes its line with a shortened indent.

use textwrap::{WordSeparator, core::Fragment, core::Word, wrap_algorithms::wrap_first_fit};

/// Left indent applied to continuation lines.
pub const INDENT: usize = 4;

/// Run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text content.
    pub text: String,
    /// Rendered emphasised (the identity label).
    pub emphasis: bool,
}

/// One display line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    segments: Vec<Segment>,
}

impl StyledLine {
    /// Segments in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| textwrap::core::display_width(&s.text)).sum()
    }

    /// Text without styling.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn indented(self, indent: usize) -> Self {
        let mut line = Self::default();
        line.push(&" ".repeat(indent), false);
        for segment in self.segments {
            line.push(&segment.text, segment.emphasis);
        }
        line
    }

    fn push(&mut self, text: &str, emphasis: bool) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.emphasis == emphasis => last.text.push_str(text),
            _ => self.segments.push(Segment { text: text.to_owned(), emphasis }),
        }
    }
}

/// Formatted message: one or more lines, terminated by a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBlock {
    lines: Vec<StyledLine>,
}

impl FormattedBlock {
    /// Lines of the block. Never empty.
    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    /// Plain text with every line terminated by `\n`.
    pub fn to_plain_text(&self) -> String {
        self.lines.iter().map(|line| line.plain() + "\n").collect()
    }
}

/// Word with a style attached, so wrapping can keep track of which words
/// belong to the label.
#[derive(Debug)]
struct StyledWord<'a> {
    word: Word<'a>,
    emphasis: bool,
}

impl Fragment for StyledWord<'_> {
    fn width(&self) -> f64 {
        self.word.width()
    }

    fn whitespace_width(&self) -> f64 {
        self.word.whitespace_width()
    }

    fn penalty_width(&self) -> f64 {
        self.word.penalty_width()
    }
}

/// Format a message for a viewport `width` columns wide.
///
/// A `width` of zero is treated as one. When the viewport is too narrow for
/// the full indent, the indent shrinks so that at least one column is left
/// for text.
pub fn format(identity: &str, text: &str, width: usize) -> FormattedBlock {
    let width = width.max(1);
    let indent = INDENT.min(width - 1);
    let wrap_width = width - indent;

    let separator = WordSeparator::AsciiSpace;
    let words: Vec<StyledWord<'_>> = separator
        .find_words(identity)
        .map(|word| StyledWord { word, emphasis: true })
        .chain(separator.find_words(text).map(|word| StyledWord { word, emphasis: false }))
        .collect();

    let wrapped = wrap_first_fit(&words, &[wrap_width as f64]);

    let mut lines: Vec<StyledLine> = wrapped
        .iter()
        .enumerate()
        .map(|(idx, fragments)| {
            let mut line = StyledLine::default();
            let last = fragments.len().saturating_sub(1);
            for (pos, styled) in fragments.iter().enumerate() {
                line.push(styled.word.word, styled.emphasis);
                if pos < last {
                    line.push(styled.word.whitespace, styled.emphasis);
                }
            }
            if idx == 0 {
                return line;
            }
            // Only a lone word can exceed the wrap width; give it the room.
            let pad = indent.min(width.saturating_sub(line.width()));
            line.indented(pad)
        })
        .collect();

    if lines.is_empty() {
        lines.push(StyledLine::default());
    }

    FormattedBlock { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_lines(block: &FormattedBlock) -> Vec<String> {
        block.lines().iter().map(StyledLine::plain).collect()
    }

    #[test]
    fn short_message_fits_one_line() {
        let block = format("Alice: ", "hello", 80);
        assert_eq!(block.to_plain_text(), "Alice: hello\n");
    }

    #[test]
    fn label_is_emphasised() {
        let block = format("Alice: ", "hello", 80);
        let segments = block.lines()[0].segments();
        assert_eq!(segments, &[
            Segment { text: "Alice: ".into(), emphasis: true },
            Segment { text: "hello".into(), emphasis: false },
        ]);
    }

    #[test]
    fn no_label_means_no_emphasis() {
        let block = format("", "plain text", 80);
        assert!(block.lines()[0].segments().iter().all(|s| !s.emphasis));
    }

    #[test]
    fn continuation_lines_are_indented() {
        // wrap width 10 - 4 = 6
        let block = format("", "aaa bbb ccc", 10);
        assert_eq!(plain_lines(&block), vec!["aaa", "    bbb", "    ccc"]);
    }

    #[test]
    fn wraps_label_and_text_together() {
        // wrap width 14 - 4 = 10
        let block = format("Bob: ", "one two three", 14);
        assert_eq!(plain_lines(&block), vec!["Bob: one", "    two three"]);
    }

    #[test]
    fn empty_message_is_a_single_blank_line() {
        let block = format("", "", 40);
        assert_eq!(block.lines().len(), 1);
        assert_eq!(block.to_plain_text(), "\n");
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        let block = format("", "a b", 0);
        assert_eq!(plain_lines(&block), vec!["a", "b"]);
    }

    #[test]
    fn long_label_degrades_to_word_per_line() {
        let block = format("Maximilian-Alexander: ", "hi there", 8);
        // "there" fits 8 columns but not the wrap width of 4
        assert_eq!(plain_lines(&block), vec!["Maximilian-Alexander:", "    hi", "   there"]);
        assert!(block.lines()[0].segments()[0].emphasis);
    }

    #[test]
    fn indent_shrinks_for_word_that_fits_width() {
        let block = format("", "a abcdefgh", 10);
        assert_eq!(plain_lines(&block), vec!["a", "  abcdefgh"]);
        assert!(block.lines().iter().all(|line| line.width() <= 10));
    }

    #[test]
    fn word_wider_than_width_overflows_unindented() {
        let block = format("", "a abcdefghijkl", 10);
        assert_eq!(plain_lines(&block), vec!["a", "abcdefghijkl"]);
    }

    #[test]
    fn inner_spacing_is_preserved() {
        let block = format("", "a   b", 80);
        assert_eq!(block.to_plain_text(), "a   b\n");
    }
}
