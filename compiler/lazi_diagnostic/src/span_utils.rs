//! Line and column lookup for byte offsets.
//!
//! # Example
//!
//! ```
//! use lazi_diagnostic::span_utils::LineOffsetTable;
//!
//! let source = "1+\n(2";
//! let table = LineOffsetTable::build(source);
//!
//! assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
//! assert_eq!(table.offset_to_line_col(source, 4), (2, 2));
//! ```

/// Pre-computed line offset table for O(log L) line lookup.
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .filter_map(|(i, _)| u32::try_from(i + 1).ok()),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx + 1).unwrap_or(u32::MAX)
    }

    /// Byte range of the 1-based `line`, excluding its newline.
    pub fn line_range(&self, source: &str, line: u32) -> std::ops::Range<usize> {
        let idx = (line as usize).saturating_sub(1);
        let start = self.offsets.get(idx).map_or(source.len(), |&o| o as usize);
        let end = self
            .offsets
            .get(idx + 1)
            .map_or(source.len(), |&o| (o as usize).saturating_sub(1));
        start.min(source.len())..end.max(start).min(source.len())
    }

    /// 1-based (line, column) for `offset`.
    ///
    /// The column counts characters, not bytes, from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let range = self.line_range(source, line);
        let offset = (offset as usize).clamp(range.start, source.len());
        let col_chars = source
            .get(range.start..offset)
            .map_or(offset - range.start, |text| text.chars().count());
        (line, u32::try_from(col_chars + 1).unwrap_or(u32::MAX))
    }
}
