//! Line bookkeeping for Python source text.

/// Source text with precomputed line starts, used to map parser byte offsets
/// back to line numbers.
#[derive(Debug)]
pub struct SourceText<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            text,
            lines: text.lines().collect(),
            line_starts,
        }
    }

    /// All source lines, without their terminators
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Zero-based line index containing the byte `offset`
    pub fn line_index(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Zero-based column of the byte `offset`, counted in characters
    pub fn column(&self, offset: usize) -> usize {
        let start = self.line_starts[self.line_index(offset)];
        let end = offset.min(self.text.len());
        self.text
            .get(start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0)
    }
}
