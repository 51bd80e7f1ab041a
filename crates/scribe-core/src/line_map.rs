use crate::model::Point;

/// Byte offset → (line, column) lookup for a fixed text.
/// Columns count `char`s, not bytes.
pub struct LineMap {
    line_starts: Vec<usize>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { line_starts }
    }

    pub fn offset_to_point(&self, text: &str, offset: usize) -> Point {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start = self.line_starts[line];
        let end = offset.min(text.len());
        let col = text
            .get(line_start..end)
            .map(|segment| segment.chars().count())
            .unwrap_or(0);

        Point {
            line: line as u32,
            col: col as u32,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
