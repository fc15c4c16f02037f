//! Line and column lookup for byte offsets.
//!
//! The tokenizer builds one [`LineOffsetTable`] per source so every token's
//! position is a binary search. Emitters use the same table to print the
//! offending source line.

/// Start offset of every line in one source.
///
/// # Example
///
/// ```
/// use qc_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "float x;\nvoid() main;";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 9), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `line_starts[n]` is where line `n + 1` begins; never empty.
    line_starts: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let newlines = source
            .bytes()
            .enumerate()
            .filter(|&(_, byte)| byte == b'\n')
            .map(|(at, _)| u32::try_from(at + 1).unwrap_or(u32::MAX));
        LineOffsetTable {
            line_starts: std::iter::once(0).chain(newlines).collect(),
        }
    }

    /// 1-based line containing `offset`. A newline belongs to the line it ends.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let after = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(after.max(1)).unwrap_or(u32::MAX)
    }

    /// 1-based `(line, column)`; the column counts characters.
    ///
    /// Offsets past the end of `source` clamp to its last position.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let width = match source.get(start..end) {
            Some(prefix) => prefix.chars().count(),
            None => end.saturating_sub(start),
        };
        (line, u32::try_from(width + 1).unwrap_or(u32::MAX))
    }

    /// Byte offset where a 1-based line begins.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.line_starts.get(index).copied()
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = match self.line_start_offset(line + 1) {
            Some(next) => next as usize,
            None => source.len(),
        };
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
