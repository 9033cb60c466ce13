/// The ordered line sequence of one Gaussian log file.
///
/// Immutable once loaded. Every extractor takes `&LogDocument` and performs
/// its own linear pass over the lines; nothing is cached between calls, so
/// two extractions on the same document never observe partial state from
/// each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDocument {
    lines: Vec<String>,
}

impl LogDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Lines paired with 1-based line numbers, in file order.
    pub fn numbered_lines(&self) -> impl DoubleEndedIterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }

    /// The final line of the document, if any.
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
